use axum::{
    extract::{multipart::MultipartRejection, rejection::QueryRejection, Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        gallery::GalleryImageDto,
    },
    server::{
        error::AppError,
        model::gallery::NewGalleryImage,
        service::gallery::GalleryService,
        state::AppState,
        util::{form::MultipartForm, parse::parse_id},
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

#[derive(Deserialize, Default)]
pub struct GalleryIdQuery {
    pub id: Option<String>,
}

/// Multipart body accepted when uploading a gallery image.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct GalleryForm {
    caption: Option<String>,
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// List gallery images, most recent first.
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved gallery", body = Vec<GalleryImageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let images = GalleryService::new(&state.db, state.storage.as_ref())
        .list()
        .await?;

    let dtos: Vec<GalleryImageDto> = images.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Upload a gallery image.
///
/// # Returns
/// - `201 Created` - The stored image
/// - `400 Bad Request` - No image file in the form
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    request_body(content = GalleryForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully uploaded image", body = GalleryImageDto),
        (status = 400, description = "Image file is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gallery_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut form = MultipartForm::read(multipart?).await?;

    let image = form
        .take_file("image")
        .ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;

    let created = GalleryService::new(&state.db, state.storage.as_ref())
        .create(NewGalleryImage {
            caption: form.text("caption"),
            image,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Delete a gallery image and its file.
///
/// # Returns
/// - `200 OK` - `{"ok": true}`
/// - `400 Bad Request` - ID missing
/// - `404 Not Found` - No image with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Query, description = "Gallery image ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted image", body = OkDto),
        (status = 400, description = "ID required", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    query: Result<Query<GalleryIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let id = parse_id(params.id.as_deref(), "ID required", "Image not found")?;

    GalleryService::new(&state.db, state.storage.as_ref())
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(OkDto { ok: true })))
}
