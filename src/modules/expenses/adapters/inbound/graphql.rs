use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::{NaiveDate, Utc};

use crate::modules::expenses::core::split::SplitShare;
use crate::modules::expenses::core::views::{ExpenseView, SplitView};
use crate::modules::expenses::use_cases::create_expense::{
    CreateExpense, SplitInput, create_expense,
};
use crate::modules::expenses::use_cases::get_expense_splits::get_expense_splits;
use crate::modules::expenses::use_cases::get_expenses::get_expenses;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{ExpenseId, UserId};
use crate::shell::graphql::caller;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Payer")]
pub struct GqlPayer {
    pub user_id: ID,
    pub display_name: Option<String>,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Expense")]
pub struct GqlExpense {
    pub id: ID,
    pub amount: f64,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub description: String,
    pub paid_by: GqlPayer,
    pub my_share: Option<f64>,
    pub created_at: i64,
}

impl From<ExpenseView> for GqlExpense {
    fn from(v: ExpenseView) -> Self {
        Self {
            id: ID(v.id.to_string()),
            amount: v.amount,
            date: v.date.to_string(),
            description: v.description,
            paid_by: GqlPayer {
                user_id: ID(v.paid_by.user_id.to_string()),
                display_name: v.paid_by.display_name,
            },
            my_share: v.my_share,
            created_at: v.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Split")]
pub struct GqlSplit {
    pub user_id: ID,
    pub display_name: Option<String>,
    pub amount: f64,
}

impl From<SplitView> for GqlSplit {
    fn from(v: SplitView) -> Self {
        Self {
            user_id: ID(v.user_id.to_string()),
            display_name: v.display_name,
            amount: v.amount,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "SplitInput")]
pub struct GqlSplitInput {
    pub user_id: ID,
    pub amount: f64,
}

#[derive(Default)]
pub struct ExpensesQuery;

#[Object]
impl ExpensesQuery {
    async fn get_expenses(&self, context: &Context<'_>) -> GqlResult<Vec<GqlExpense>> {
        let state = context.data_unchecked::<AppState>();
        let expenses = get_expenses(state.store.as_ref(), &caller(context)).await?;
        Ok(expenses.into_iter().map(Into::into).collect())
    }

    async fn get_expense_splits(
        &self,
        context: &Context<'_>,
        expense_id: ID,
    ) -> GqlResult<Vec<GqlSplit>> {
        let state = context.data_unchecked::<AppState>();
        let expense_id = ExpenseId::new(expense_id.0);
        let splits = get_expense_splits(state.store.as_ref(), &caller(context), &expense_id).await?;
        Ok(splits.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct ExpensesMutation;

#[Object]
impl ExpensesMutation {
    /// Give either `splits` or `splitEquallyAmong`, not both.
    async fn create_expense(
        &self,
        context: &Context<'_>,
        amount: f64,
        date: String,
        description: String,
        splits: Option<Vec<GqlSplitInput>>,
        split_equally_among: Option<Vec<ID>>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let date = date.parse::<NaiveDate>().map_err(|e| {
            ApplicationError::InvalidArgument(format!("date must be YYYY-MM-DD: {e}"))
        })?;
        let splits = splits.map(|splits| {
            splits
                .into_iter()
                .map(|split| SplitShare {
                    user_id: UserId::new(split.user_id.0),
                    amount: split.amount,
                })
                .collect()
        });
        let split_equally_among = split_equally_among
            .map(|user_ids| user_ids.into_iter().map(|id| UserId::new(id.0)).collect());

        let command = CreateExpense {
            amount,
            date,
            description,
            splits: SplitInput::from_parts(splits, split_equally_among)?,
            requested_at: Utc::now().timestamp_millis(),
        };
        let expense_id = create_expense(state.store.as_ref(), &caller(context), command).await?;
        Ok(ID(expense_id.to_string()))
    }
}
