use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::rooms::core::views::{
    MemberView, PendingJoinRequestView, RoomJoinRequestView, RoomView,
};
use crate::modules::rooms::use_cases::cancel_join_request::cancel_join_request;
use crate::modules::rooms::use_cases::create_room::{CreateRoom, create_room};
use crate::modules::rooms::use_cases::get_current_room::get_current_room;
use crate::modules::rooms::use_cases::get_pending_join_request::get_pending_join_request;
use crate::modules::rooms::use_cases::get_room_join_requests::get_room_join_requests;
use crate::modules::rooms::use_cases::get_room_members::get_room_members;
use crate::modules::rooms::use_cases::join_room::{JoinRoom, join_room};
use crate::modules::rooms::use_cases::request_join_room::{RequestJoinRoom, request_join_room};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shell::http::invalid_body;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", post(handle_create_room))
        .route("/rooms/current", get(handle_get_current_room))
        .route("/rooms/current/members", get(handle_get_room_members))
        .route(
            "/rooms/current/join-requests",
            get(handle_get_room_join_requests),
        )
        .route("/rooms/join", post(handle_join_room))
        .route("/rooms/join-requests", post(handle_request_join_room))
        .route(
            "/rooms/join-requests/pending",
            get(handle_get_pending_join_request).delete(handle_cancel_join_request),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomBody {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteCodeBody {
    pub invite_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomNameResponse {
    pub room_name: String,
}

pub async fn handle_get_current_room(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Option<RoomView>>, ApplicationError> {
    Ok(Json(get_current_room(state.store.as_ref(), &caller).await?))
}

pub async fn handle_create_room(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<CreateRoomBody>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomView>), ApplicationError> {
    let Json(body) = body.map_err(invalid_body)?;
    let command = CreateRoom {
        name: body.name,
        requested_at: Utc::now().timestamp_millis(),
    };
    let room = create_room(state.store.as_ref(), &caller, command).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn handle_join_room(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<InviteCodeBody>, JsonRejection>,
) -> Result<Json<RoomNameResponse>, ApplicationError> {
    let Json(body) = body.map_err(invalid_body)?;
    let command = JoinRoom {
        invite_code: body.invite_code,
        requested_at: Utc::now().timestamp_millis(),
    };
    let room_name = join_room(state.store.as_ref(), &caller, command).await?;
    Ok(Json(RoomNameResponse { room_name }))
}

pub async fn handle_get_room_members(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<MemberView>>, ApplicationError> {
    Ok(Json(get_room_members(state.store.as_ref(), &caller).await?))
}

pub async fn handle_request_join_room(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<InviteCodeBody>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomNameResponse>), ApplicationError> {
    let Json(body) = body.map_err(invalid_body)?;
    let command = RequestJoinRoom {
        invite_code: body.invite_code,
        requested_at: Utc::now().timestamp_millis(),
    };
    let room_name = request_join_room(state.store.as_ref(), &caller, command).await?;
    Ok((StatusCode::CREATED, Json(RoomNameResponse { room_name })))
}

pub async fn handle_get_pending_join_request(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Option<PendingJoinRequestView>>, ApplicationError> {
    Ok(Json(
        get_pending_join_request(state.store.as_ref(), &caller).await?,
    ))
}

pub async fn handle_cancel_join_request(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<StatusCode, ApplicationError> {
    cancel_join_request(state.store.as_ref(), &caller).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_get_room_join_requests(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<RoomJoinRequestView>>, ApplicationError> {
    Ok(Json(
        get_room_join_requests(state.store.as_ref(), &caller).await?,
    ))
}
