use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::modules::users::use_cases::get_current_user_id::get_current_user_id;
use crate::modules::users::use_cases::get_display_name::get_display_name;
use crate::modules::users::use_cases::set_display_name::{SetDisplayName, set_display_name};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::UserId;
use crate::shell::http::invalid_body;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/me/id", get(handle_get_current_user_id))
        .route(
            "/users/me/display-name",
            get(handle_get_display_name).put(handle_set_display_name),
        )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserIdResponse {
    pub user_id: Option<UserId>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNameBody {
    pub display_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDisplayNameBody {
    pub display_name: String,
}

pub async fn handle_get_current_user_id(caller: Caller) -> Json<CurrentUserIdResponse> {
    Json(CurrentUserIdResponse {
        user_id: get_current_user_id(&caller),
    })
}

pub async fn handle_get_display_name(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<DisplayNameBody>, ApplicationError> {
    let display_name = get_display_name(state.store.as_ref(), &caller).await?;
    Ok(Json(DisplayNameBody { display_name }))
}

pub async fn handle_set_display_name(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<SetDisplayNameBody>, JsonRejection>,
) -> Result<StatusCode, ApplicationError> {
    let Json(body) = body.map_err(invalid_body)?;
    let command = SetDisplayName {
        display_name: body.display_name,
    };
    set_display_name(state.store.as_ref(), &caller, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
