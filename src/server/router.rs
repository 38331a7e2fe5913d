use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        contact::ContactDto,
        event::{EventDto, FeatureEventDto},
        gallery::GalleryImageDto,
        news::{DeleteNewsDto, NewsDto},
    },
    server::{
        controller::{
            contact::{self, get_contact},
            event::{self, create_event, delete_event, get_events, update_event},
            gallery::{self, create_gallery_image, delete_gallery_image, get_gallery},
            news::{self, create_news, delete_news, get_news, update_news},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Koseli API", description = "Community events, news and gallery"),
    paths(
        event::get_events,
        event::create_event,
        event::update_event,
        event::delete_event,
        news::get_news,
        news::create_news,
        news::update_news,
        news::delete_news,
        gallery::get_gallery,
        gallery::create_gallery_image,
        gallery::delete_gallery_image,
        contact::get_contact,
    ),
    components(schemas(
        ErrorDto,
        OkDto,
        EventDto,
        FeatureEventDto,
        event::EventForm,
        NewsDto,
        DeleteNewsDto,
        news::NewsForm,
        GalleryImageDto,
        gallery::GalleryForm,
        ContactDto,
    ))
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// `upload_max_bytes` caps the request body of the routes that accept image uploads.
/// Every other route keeps axum's default limit.
pub fn router(upload_max_bytes: usize) -> Router<AppState> {
    let uploads = |routes: MethodRouter<AppState>| {
        routes.layer(DefaultBodyLimit::max(upload_max_bytes))
    };

    Router::new()
        .route(
            "/api/events",
            get(get_events)
                .delete(delete_event)
                .merge(uploads(post(create_event).put(update_event))),
        )
        .route(
            "/api/news",
            get(get_news)
                .delete(delete_news)
                .merge(uploads(post(create_news).put(update_news))),
        )
        .route(
            "/api/gallery",
            get(get_gallery)
                .delete(delete_gallery_image)
                .merge(uploads(post(create_gallery_image))),
        )
        .route("/api/contact", get(get_contact))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
}
