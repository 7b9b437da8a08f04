use chrono::NaiveDate;
use serde::Serialize;

use crate::shared::core::primitives::{ExpenseId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayerView {
    pub user_id: UserId,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseView {
    pub id: ExpenseId,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub paid_by: PayerView,
    /// The caller's split amount, if the caller has a split on this expense.
    pub my_share: Option<f64>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitView {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub amount: f64,
}
