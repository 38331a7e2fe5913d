use axum::{
    extract::{
        multipart::MultipartRejection, rejection::QueryRejection, FromRequest, Multipart, Query,
        Request, State,
    },
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        event::{EventDto, FeatureEventDto},
    },
    server::{
        error::AppError,
        model::event::{EventEdit, EventFilter, NewEvent},
        service::event::EventService,
        state::AppState,
        util::{
            form::MultipartForm,
            parse::{parse_event_date, parse_flag, parse_id, parse_limit},
        },
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize, Default)]
pub struct EventListQuery {
    pub featured: Option<String>,
    pub upcoming: Option<String>,
    pub limit: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct EventIdQuery {
    pub id: Option<String>,
}

/// Multipart body accepted when creating or editing an event.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct EventForm {
    title: String,
    /// RFC 3339 timestamp, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DD`
    date: String,
    description: String,
    location: String,
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<Vec<u8>>,
}

const MISSING_EVENT_ID: &str = "Missing event ID";
const EVENT_NOT_FOUND: &str = "Event not found";

/// List events.
///
/// # Arguments
/// - `featured` - `true` keeps only the featured event
/// - `upcoming` - `true` keeps events dated now or later, oldest first
/// - `limit` - Caps the number of events when greater than zero
///
/// # Returns
/// - `200 OK` - Events, newest first unless `upcoming` is set
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("featured" = Option<String>, Query, description = "`true` to return only the featured event"),
        ("upcoming" = Option<String>, Query, description = "`true` to return only events dated now or later"),
        ("limit" = Option<u64>, Query, description = "Maximum number of events (0 means no limit)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    query: Result<Query<EventListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;

    let filter = EventFilter {
        featured: parse_flag(params.featured.as_deref()),
        upcoming: parse_flag(params.upcoming.as_deref()),
        limit: parse_limit(params.limit.as_deref()),
        now: Utc::now(),
    };

    let events = EventService::new(&state.db, state.storage.as_ref())
        .list(filter)
        .await?;

    let dtos: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an event.
///
/// Title, date, description and location are required. An `image` file part becomes the
/// event banner. New events are never featured.
///
/// # Returns
/// - `201 Created` - The stored event
/// - `400 Bad Request` - Missing field, unparseable date or malformed form
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body(content = EventForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut form = MultipartForm::read(multipart?).await?;

    let (Some(title), Some(date), Some(description), Some(location)) = (
        form.text("title"),
        form.text("date"),
        form.text("description"),
        form.text("location"),
    ) else {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    };

    let new_event = NewEvent {
        title,
        date: parse_event_date(&date)?,
        description,
        location,
        image: form.take_file("image"),
    };

    let event = EventService::new(&state.db, state.storage.as_ref())
        .create(new_event)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Update an event.
///
/// A JSON body `{"isFeatured": bool}` sets the featured flag; featuring an event
/// unfeatures every other event. Any other body is read as a multipart form where each
/// present field replaces the stored value and an `image` part replaces the banner.
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Missing ID, missing `isFeatured`, bad date or malformed body
/// - `404 Not Found` - No event with this ID
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    put,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Query, description = "Event ID")
    ),
    request_body(
        content(
            (FeatureEventDto = "application/json"),
            (EventForm = "multipart/form-data")
        )
    ),
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Missing event ID or invalid body", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    query: Result<Query<EventIdQuery>, QueryRejection>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let id = parse_id(params.id.as_deref(), MISSING_EVENT_ID, EVENT_NOT_FOUND)?;

    let service = EventService::new(&state.db, state.storage.as_ref());

    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));

    let event = if is_json {
        let Json(payload) = Json::<FeatureEventDto>::from_request(request, &state).await?;
        let is_featured = payload
            .is_featured
            .ok_or_else(|| AppError::BadRequest("Missing isFeatured".to_string()))?;

        service.set_featured(id, is_featured).await?
    } else {
        let multipart = Multipart::from_request(request, &state).await?;
        let mut form = MultipartForm::read(multipart).await?;

        let date = match form.text("date") {
            Some(date) => Some(parse_event_date(&date)?),
            None => None,
        };

        let edit = EventEdit {
            title: form.text("title"),
            description: form.text("description"),
            date,
            location: form.text("location"),
            image: form.take_file("image"),
        };

        service.update(id, edit).await?
    };

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event and its banner file.
///
/// # Returns
/// - `200 OK` - `{"ok": true}`
/// - `400 Bad Request` - Missing ID
/// - `404 Not Found` - No event with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Query, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted event", body = OkDto),
        (status = 400, description = "Missing event ID", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    query: Result<Query<EventIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let id = parse_id(params.id.as_deref(), MISSING_EVENT_ID, EVENT_NOT_FOUND)?;

    EventService::new(&state.db, state.storage.as_ref())
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(OkDto { ok: true })))
}
