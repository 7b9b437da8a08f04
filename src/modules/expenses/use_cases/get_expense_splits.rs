use crate::modules::expenses::core::views::SplitView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::ExpenseId;
use crate::shared::infrastructure::table_store::TableStore;

/// Splits of one expense in the caller's room. Unknown expenses and expenses of other rooms
/// yield nothing.
pub async fn get_expense_splits(
    store: &dyn TableStore,
    caller: &Caller,
    expense_id: &ExpenseId,
) -> Result<Vec<SplitView>, ApplicationError> {
    let Some(user_id) = caller.user_id() else {
        return Ok(Vec::new());
    };
    let mut tx = store.begin().await?;
    let Some(membership) = tx.find_membership_by_user(user_id).await? else {
        return Ok(Vec::new());
    };
    let Some(expense) = tx.get_expense(expense_id).await? else {
        return Ok(Vec::new());
    };
    if expense.room_id != membership.room_id {
        return Ok(Vec::new());
    }

    let rows = tx.list_splits_by_expense(&expense.id).await?;
    let mut splits = Vec::with_capacity(rows.len());
    for row in rows {
        let display_name = tx
            .get_user(&row.user_id)
            .await?
            .and_then(|user| user.display_name);
        splits.push(SplitView {
            user_id: row.user_id,
            display_name,
            amount: row.amount,
        });
    }
    Ok(splits)
}
