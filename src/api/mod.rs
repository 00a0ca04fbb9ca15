//! REST API module.
//!
//! Every content type gets the same list / new / open / save / delete routes;
//! composite editors add a few operation endpoints on top.

mod campaigns;
mod dashboard;
mod entities;
mod media;
mod rich_menus;
mod settings;

pub use campaigns::*;
pub use dashboard::*;
pub use entities::*;
pub use media::*;
pub use rich_menus::*;
pub use settings::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::editor::DraftAction;
use crate::errors::AppError;
use crate::models::Entity;
use crate::AppState;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Register the list / new / open / save / delete routes of one content type.
pub fn entity_routes<T: Entity>(router: Router<AppState>, base: &str) -> Router<AppState> {
    router
        .route(base, get(list_entities::<T>).post(create_entity::<T>))
        .route(&format!("{}/new", base), get(new_entity::<T>))
        .route(
            &format!("{}/{{id}}", base),
            get(open_entity::<T>)
                .put(save_entity::<T>)
                .delete(delete_entity::<T>),
        )
}

/// Register `POST {base}/edit`, which runs `A` against a client copy of `T`.
pub fn edit_route<T, A>(router: Router<AppState>, base: &str) -> Router<AppState>
where
    T: Entity,
    A: DraftAction<T>,
{
    router.route(&format!("{}/edit", base), post(edit_entity::<T, A>))
}
