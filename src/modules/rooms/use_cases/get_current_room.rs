use crate::modules::rooms::core::views::RoomView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::infrastructure::table_store::TableStore;

pub async fn get_current_room(
    store: &dyn TableStore,
    caller: &Caller,
) -> Result<Option<RoomView>, ApplicationError> {
    let Some(user_id) = caller.user_id() else {
        return Ok(None);
    };
    let mut tx = store.begin().await?;
    let Some(membership) = tx.find_membership_by_user(user_id).await? else {
        return Ok(None);
    };
    let room = tx.get_room(&membership.room_id).await?;
    Ok(room.map(RoomView::from))
}
