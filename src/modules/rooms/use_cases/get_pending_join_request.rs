use crate::modules::rooms::core::views::PendingJoinRequestView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::infrastructure::table_store::{StoreError, TableStore};

pub async fn get_pending_join_request(
    store: &dyn TableStore,
    caller: &Caller,
) -> Result<Option<PendingJoinRequestView>, ApplicationError> {
    let Some(user_id) = caller.user_id() else {
        return Ok(None);
    };
    let mut tx = store.begin().await?;
    let Some(request) = tx.find_pending_request_by_user(user_id).await? else {
        return Ok(None);
    };
    let room = tx
        .get_room(&request.room_id)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            table: "rooms",
            id: request.room_id.to_string(),
        })?;
    Ok(Some(PendingJoinRequestView {
        id: request.id,
        room_id: request.room_id,
        room_name: room.name,
        status: request.status,
        created_at: request.created_at,
    }))
}
