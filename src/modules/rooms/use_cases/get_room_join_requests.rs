use crate::modules::rooms::core::views::RoomJoinRequestView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::{JoinRequestStatus, Role};
use crate::shared::infrastructure::table_store::TableStore;

/// Pending requests for the caller's room. Only admins see them; everyone else gets nothing.
pub async fn get_room_join_requests(
    store: &dyn TableStore,
    caller: &Caller,
) -> Result<Vec<RoomJoinRequestView>, ApplicationError> {
    let Some(user_id) = caller.user_id() else {
        return Ok(Vec::new());
    };
    let mut tx = store.begin().await?;
    let Some(membership) = tx.find_membership_by_user(user_id).await? else {
        return Ok(Vec::new());
    };
    if membership.role != Role::Admin {
        return Ok(Vec::new());
    }

    let mut rows = tx
        .list_requests_by_room_and_status(&membership.room_id, JoinRequestStatus::Pending)
        .await?;
    rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

    let mut requests = Vec::with_capacity(rows.len());
    for row in rows {
        let display_name = tx
            .get_user(&row.user_id)
            .await?
            .and_then(|user| user.display_name);
        requests.push(RoomJoinRequestView {
            id: row.id,
            user_id: row.user_id,
            display_name,
            created_at: row.created_at,
        });
    }
    Ok(requests)
}
