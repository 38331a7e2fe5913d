use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        news::{DeleteNewsDto, NewsDto},
    },
    server::{
        error::AppError,
        model::news::{NewNews, NewsEdit},
        service::news::NewsService,
        state::AppState,
        util::{form::MultipartForm, parse::parse_id},
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// Multipart body accepted when publishing or editing a news item.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct NewsForm {
    /// Required when editing
    id: Option<i32>,
    title: String,
    /// Markdown
    content: String,
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<Vec<u8>>,
}

/// List news, newest first.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved news", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db, state.storage.as_ref())
        .list()
        .await?;

    let dtos: Vec<NewsDto> = news.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Publish a news item dated now.
///
/// # Returns
/// - `201 Created` - The stored news item
/// - `400 Bad Request` - Title or content missing
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body(content = NewsForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created news item", body = NewsDto),
        (status = 400, description = "Title and content are required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut form = MultipartForm::read(multipart?).await?;

    let (Some(title), Some(content)) = (form.text("title"), form.text("content")) else {
        return Err(AppError::BadRequest(
            "Title and content are required".to_string(),
        ));
    };

    let news = NewsService::new(&state.db, state.storage.as_ref())
        .create(NewNews {
            title,
            content,
            image: form.take_file("image"),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

/// Edit a news item.
///
/// The ID travels in the form. Present fields replace the stored values and an `image`
/// part replaces the banner.
///
/// # Returns
/// - `200 OK` - The updated news item
/// - `400 Bad Request` - ID missing
/// - `404 Not Found` - No news item with this ID
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    put,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body(content = NewsForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated news item", body = NewsDto),
        (status = 400, description = "ID is required", body = ErrorDto),
        (status = 404, description = "News item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut form = MultipartForm::read(multipart?).await?;

    let id = parse_id(
        form.text("id").as_deref(),
        "ID is required",
        "News item not found",
    )?;

    let edit = NewsEdit {
        title: form.text("title"),
        content: form.text("content"),
        image: form.take_file("image"),
    };

    let news = NewsService::new(&state.db, state.storage.as_ref())
        .update(id, edit)
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

/// Delete a news item and its banner file.
///
/// # Returns
/// - `200 OK` - `{"ok": true}`
/// - `400 Bad Request` - ID missing or body not JSON
/// - `404 Not Found` - No news item with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = DeleteNewsDto,
    responses(
        (status = 200, description = "Successfully deleted news item", body = OkDto),
        (status = 400, description = "ID required", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    payload: Result<Json<DeleteNewsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let id = payload
        .id
        .ok_or_else(|| AppError::BadRequest("ID required".to_string()))?;

    NewsService::new(&state.db, state.storage.as_ref())
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(OkDto { ok: true })))
}
