use crate::modules::expenses::core::views::{ExpenseView, PayerView};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::infrastructure::table_store::TableStore;

/// Expenses of the caller's room, newest date first, enriched with the payer's display name
/// and the caller's own share.
pub async fn get_expenses(
    store: &dyn TableStore,
    caller: &Caller,
) -> Result<Vec<ExpenseView>, ApplicationError> {
    let Some(user_id) = caller.user_id() else {
        return Ok(Vec::new());
    };
    let mut tx = store.begin().await?;
    let Some(membership) = tx.find_membership_by_user(user_id).await? else {
        return Ok(Vec::new());
    };

    let mut rows = tx.list_expenses_by_room(&membership.room_id).await?;
    rows.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    });

    let mut expenses = Vec::with_capacity(rows.len());
    for row in rows {
        let payer_name = tx
            .get_user(&row.paid_by)
            .await?
            .and_then(|user| user.display_name);
        let my_share = tx
            .find_split(&row.id, user_id)
            .await?
            .map(|split| split.amount);
        expenses.push(ExpenseView {
            id: row.id,
            amount: row.amount,
            date: row.date,
            description: row.description,
            paid_by: PayerView {
                user_id: row.paid_by,
                display_name: payer_name,
            },
            my_share,
            created_at: row.created_at,
        });
    }
    Ok(expenses)
}
