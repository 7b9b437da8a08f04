use crate::modules::rooms::core::views::MemberView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::infrastructure::table_store::TableStore;

/// Members of the caller's room, ordered by join time.
pub async fn get_room_members(
    store: &dyn TableStore,
    caller: &Caller,
) -> Result<Vec<MemberView>, ApplicationError> {
    let Some(user_id) = caller.user_id() else {
        return Ok(Vec::new());
    };
    let mut tx = store.begin().await?;
    let Some(membership) = tx.find_membership_by_user(user_id).await? else {
        return Ok(Vec::new());
    };

    let mut rows = tx.list_members_by_room(&membership.room_id).await?;
    rows.sort_by(|a, b| a.joined_at.cmp(&b.joined_at).then_with(|| a.id.cmp(&b.id)));

    let mut members = Vec::with_capacity(rows.len());
    for row in rows {
        let display_name = tx
            .get_user(&row.user_id)
            .await?
            .and_then(|user| user.display_name);
        members.push(MemberView {
            user_id: row.user_id,
            display_name,
            role: row.role,
            joined_at: row.joined_at,
        });
    }
    Ok(members)
}
