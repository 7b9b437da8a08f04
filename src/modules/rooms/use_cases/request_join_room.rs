use tracing::{debug, info};

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::{JoinRequestId, JoinRequestStatus};
use crate::shared::infrastructure::table_store::{JoinRequestRow, TableStore};

#[derive(Debug, Clone)]
pub struct RequestJoinRoom {
    pub invite_code: String,
    pub requested_at: i64,
}

/// Files a pending request to join the room holding the invite code and returns the room name.
pub async fn request_join_room(
    store: &dyn TableStore,
    caller: &Caller,
    command: RequestJoinRoom,
) -> Result<String, ApplicationError> {
    let user_id = caller.require()?;

    let mut tx = store.begin().await?;
    if tx.find_membership_by_user(user_id).await?.is_some() {
        debug!(%user_id, "join request rejected: already in a room");
        return Err(ApplicationError::AlreadyInRoom);
    }
    if tx.find_pending_request_by_user(user_id).await?.is_some() {
        debug!(%user_id, "join request rejected: already pending");
        return Err(ApplicationError::AlreadyPendingRequest);
    }
    let Some(room) = tx.find_room_by_invite_code(&command.invite_code).await? else {
        debug!(%user_id, "join request rejected: unknown invite code");
        return Err(ApplicationError::InvalidInviteCode);
    };

    let request = JoinRequestRow {
        id: JoinRequestId::generate(),
        room_id: room.id.clone(),
        user_id: user_id.clone(),
        status: JoinRequestStatus::Pending,
        created_at: command.requested_at,
    };
    let request_id = request.id.clone();
    tx.insert_join_request(request).await?;
    tx.commit().await?;

    info!(%request_id, room_id = %room.id, %user_id, "join request filed");
    Ok(room.name)
}
