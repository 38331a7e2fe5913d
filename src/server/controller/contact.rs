use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::contact::ContactDto, server::state::AppState};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Contact details shown on the contact page.
///
/// Values come from configuration; unset details are `null`.
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = CONTACT_TAG,
    responses(
        (status = 200, description = "Contact details", body = ContactDto)
    ),
)]
pub async fn get_contact(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.contact.as_ref().clone()))
}
