use tracing::{debug, info};

use crate::modules::rooms::core::invite_code::generate_invite_code;
use crate::modules::rooms::core::views::RoomView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::{Role, RoomId, RoomMemberId};
use crate::shared::infrastructure::table_store::{RoomMemberRow, RoomRow, TableStore};

#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub name: String,
    pub requested_at: i64,
}

/// Creates a room with a fresh invite code and makes the caller its admin.
pub async fn create_room(
    store: &dyn TableStore,
    caller: &Caller,
    command: CreateRoom,
) -> Result<RoomView, ApplicationError> {
    let user_id = caller.require()?;
    let invite_code = generate_invite_code();

    let mut tx = store.begin().await?;
    if tx.find_membership_by_user(user_id).await?.is_some() {
        debug!(%user_id, "create room rejected: already in a room");
        return Err(ApplicationError::AlreadyInRoom);
    }

    let room = RoomRow {
        id: RoomId::generate(),
        name: command.name,
        invite_code,
        created_by: user_id.clone(),
        created_at: command.requested_at,
    };
    tx.insert_room(room.clone()).await?;
    tx.insert_member(RoomMemberRow {
        id: RoomMemberId::generate(),
        room_id: room.id.clone(),
        user_id: user_id.clone(),
        role: Role::Admin,
        joined_at: command.requested_at,
    })
    .await?;
    tx.commit().await?;

    info!(room_id = %room.id, %user_id, "room created");
    Ok(room.into())
}
