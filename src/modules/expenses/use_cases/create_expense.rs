use chrono::NaiveDate;
use tracing::{debug, info};

use crate::modules::expenses::core::split::{SplitShare, split_equally};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::{ExpenseId, ExpenseSplitId, UserId};
use crate::shared::infrastructure::table_store::{ExpenseRow, ExpenseSplitRow, TableStore};

/// How the expense is divided between members.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitInput {
    Explicit(Vec<SplitShare>),
    EquallyAmong(Vec<UserId>),
}

impl SplitInput {
    /// Inbound adapters accept both fields as optional; at most one may be present.
    /// With neither, the expense gets no splits.
    pub fn from_parts(
        splits: Option<Vec<SplitShare>>,
        split_equally_among: Option<Vec<UserId>>,
    ) -> Result<Self, ApplicationError> {
        match (splits, split_equally_among) {
            (Some(_), Some(_)) => Err(ApplicationError::InvalidArgument(
                "provide either splits or splitEquallyAmong, not both".into(),
            )),
            (None, Some(user_ids)) => Ok(Self::EquallyAmong(user_ids)),
            (splits, None) => Ok(Self::Explicit(splits.unwrap_or_default())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateExpense {
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub splits: SplitInput,
    pub requested_at: i64,
}

/// Records an expense paid by the caller in the caller's room.
///
/// Splits are stored as given. They are not required to sum to the amount, to name members,
/// or to be present at all.
pub async fn create_expense(
    store: &dyn TableStore,
    caller: &Caller,
    command: CreateExpense,
) -> Result<ExpenseId, ApplicationError> {
    let user_id = caller.require()?;

    let mut tx = store.begin().await?;
    let Some(membership) = tx.find_membership_by_user(user_id).await? else {
        debug!(%user_id, "create expense rejected: not a room member");
        return Err(ApplicationError::NotARoomMember);
    };

    let shares = match command.splits {
        SplitInput::Explicit(shares) => shares,
        SplitInput::EquallyAmong(user_ids) => split_equally(command.amount, &user_ids),
    };

    let expense_id = ExpenseId::generate();
    tx.insert_expense(ExpenseRow {
        id: expense_id.clone(),
        room_id: membership.room_id.clone(),
        paid_by: user_id.clone(),
        amount: command.amount,
        date: command.date,
        description: command.description,
        created_at: command.requested_at,
    })
    .await?;
    let split_count = shares.len();
    for share in shares {
        tx.insert_split(ExpenseSplitRow {
            id: ExpenseSplitId::generate(),
            expense_id: expense_id.clone(),
            user_id: share.user_id,
            amount: share.amount,
        })
        .await?;
    }
    tx.commit().await?;

    info!(
        %expense_id,
        room_id = %membership.room_id,
        paid_by = %user_id,
        splits = split_count,
        "expense created"
    );
    Ok(expense_id)
}
