use tracing::{debug, info};

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::{Role, RoomMemberId};
use crate::shared::infrastructure::table_store::{RoomMemberRow, TableStore};

#[derive(Debug, Clone)]
pub struct JoinRoom {
    pub invite_code: String,
    pub requested_at: i64,
}

/// Joins the room holding the invite code as a plain member and returns the room name.
///
/// A pending join request of the caller is removed in the same transaction.
pub async fn join_room(
    store: &dyn TableStore,
    caller: &Caller,
    command: JoinRoom,
) -> Result<String, ApplicationError> {
    let user_id = caller.require()?;

    let mut tx = store.begin().await?;
    if tx.find_membership_by_user(user_id).await?.is_some() {
        debug!(%user_id, "join room rejected: already in a room");
        return Err(ApplicationError::AlreadyInRoom);
    }
    let Some(room) = tx.find_room_by_invite_code(&command.invite_code).await? else {
        debug!(%user_id, "join room rejected: unknown invite code");
        return Err(ApplicationError::InvalidInviteCode);
    };

    tx.insert_member(RoomMemberRow {
        id: RoomMemberId::generate(),
        room_id: room.id.clone(),
        user_id: user_id.clone(),
        role: Role::Member,
        joined_at: command.requested_at,
    })
    .await?;
    if let Some(pending) = tx.find_pending_request_by_user(user_id).await? {
        tx.delete_join_request(&pending.id).await?;
    }
    tx.commit().await?;

    info!(room_id = %room.id, %user_id, "room joined");
    Ok(room.name)
}
