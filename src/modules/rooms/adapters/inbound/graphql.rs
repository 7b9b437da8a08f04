use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

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
use crate::shell::graphql::caller;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Room")]
pub struct GqlRoom {
    pub id: ID,
    pub name: String,
    pub invite_code: String,
    pub created_by: ID,
    pub created_at: i64,
}

impl From<RoomView> for GqlRoom {
    fn from(v: RoomView) -> Self {
        Self {
            id: ID(v.id.to_string()),
            name: v.name,
            invite_code: v.invite_code,
            created_by: ID(v.created_by.to_string()),
            created_at: v.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Member")]
pub struct GqlMember {
    pub user_id: ID,
    pub display_name: Option<String>,
    pub role: String,
    pub joined_at: i64,
}

impl From<MemberView> for GqlMember {
    fn from(v: MemberView) -> Self {
        Self {
            user_id: ID(v.user_id.to_string()),
            display_name: v.display_name,
            role: v.role.as_str().to_string(),
            joined_at: v.joined_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "PendingJoinRequest")]
pub struct GqlPendingJoinRequest {
    pub id: ID,
    pub room_id: ID,
    pub room_name: String,
    pub status: String,
    pub created_at: i64,
}

impl From<PendingJoinRequestView> for GqlPendingJoinRequest {
    fn from(v: PendingJoinRequestView) -> Self {
        Self {
            id: ID(v.id.to_string()),
            room_id: ID(v.room_id.to_string()),
            room_name: v.room_name,
            status: v.status.as_str().to_string(),
            created_at: v.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "RoomJoinRequest")]
pub struct GqlRoomJoinRequest {
    pub id: ID,
    pub user_id: ID,
    pub display_name: Option<String>,
    pub created_at: i64,
}

impl From<RoomJoinRequestView> for GqlRoomJoinRequest {
    fn from(v: RoomJoinRequestView) -> Self {
        Self {
            id: ID(v.id.to_string()),
            user_id: ID(v.user_id.to_string()),
            display_name: v.display_name,
            created_at: v.created_at,
        }
    }
}

#[derive(Default)]
pub struct RoomsQuery;

#[Object]
impl RoomsQuery {
    async fn get_current_room(&self, context: &Context<'_>) -> GqlResult<Option<GqlRoom>> {
        let state = context.data_unchecked::<AppState>();
        let room = get_current_room(state.store.as_ref(), &caller(context)).await?;
        Ok(room.map(Into::into))
    }

    async fn get_room_members(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMember>> {
        let state = context.data_unchecked::<AppState>();
        let members = get_room_members(state.store.as_ref(), &caller(context)).await?;
        Ok(members.into_iter().map(Into::into).collect())
    }

    async fn get_pending_join_request(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Option<GqlPendingJoinRequest>> {
        let state = context.data_unchecked::<AppState>();
        let pending = get_pending_join_request(state.store.as_ref(), &caller(context)).await?;
        Ok(pending.map(Into::into))
    }

    async fn get_room_join_requests(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Vec<GqlRoomJoinRequest>> {
        let state = context.data_unchecked::<AppState>();
        let requests = get_room_join_requests(state.store.as_ref(), &caller(context)).await?;
        Ok(requests.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct RoomsMutation;

#[Object]
impl RoomsMutation {
    async fn create_room(&self, context: &Context<'_>, name: String) -> GqlResult<GqlRoom> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateRoom {
            name,
            requested_at: Utc::now().timestamp_millis(),
        };
        let room = create_room(state.store.as_ref(), &caller(context), command).await?;
        Ok(room.into())
    }

    /// Returns the name of the joined room.
    async fn join_room(&self, context: &Context<'_>, invite_code: String) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = JoinRoom {
            invite_code,
            requested_at: Utc::now().timestamp_millis(),
        };
        Ok(join_room(state.store.as_ref(), &caller(context), command).await?)
    }

    /// Returns the name of the room asked to join.
    async fn request_join_room(
        &self,
        context: &Context<'_>,
        invite_code: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = RequestJoinRoom {
            invite_code,
            requested_at: Utc::now().timestamp_millis(),
        };
        Ok(request_join_room(state.store.as_ref(), &caller(context), command).await?)
    }

    async fn cancel_join_request(&self, context: &Context<'_>) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        cancel_join_request(state.store.as_ref(), &caller(context)).await?;
        Ok(true)
    }
}
