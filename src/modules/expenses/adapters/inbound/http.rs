use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::expenses::core::split::SplitShare;
use crate::modules::expenses::core::views::{ExpenseView, SplitView};
use crate::modules::expenses::use_cases::create_expense::{
    CreateExpense, SplitInput, create_expense,
};
use crate::modules::expenses::use_cases::get_expense_splits::get_expense_splits;
use crate::modules::expenses::use_cases::get_expenses::get_expenses;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::{ExpenseId, UserId};
use crate::shell::http::invalid_body;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/expenses",
            get(handle_get_expenses).post(handle_create_expense),
        )
        .route(
            "/expenses/{expense_id}/splits",
            get(handle_get_expense_splits),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitBody {
    pub user_id: UserId,
    pub amount: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseBody {
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub splits: Option<Vec<SplitBody>>,
    pub split_equally_among: Option<Vec<UserId>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseResponse {
    pub expense_id: ExpenseId,
}

pub async fn handle_create_expense(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<CreateExpenseBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateExpenseResponse>), ApplicationError> {
    let Json(body) = body.map_err(invalid_body)?;
    let splits = body.splits.map(|splits| {
        splits
            .into_iter()
            .map(|split| SplitShare {
                user_id: split.user_id,
                amount: split.amount,
            })
            .collect()
    });
    let command = CreateExpense {
        amount: body.amount,
        date: body.date,
        description: body.description,
        splits: SplitInput::from_parts(splits, body.split_equally_among)?,
        requested_at: Utc::now().timestamp_millis(),
    };
    let expense_id = create_expense(state.store.as_ref(), &caller, command).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateExpenseResponse { expense_id }),
    ))
}

pub async fn handle_get_expenses(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<ExpenseView>>, ApplicationError> {
    Ok(Json(get_expenses(state.store.as_ref(), &caller).await?))
}

pub async fn handle_get_expense_splits(
    State(state): State<AppState>,
    caller: Caller,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Json<Vec<SplitView>>, ApplicationError> {
    Ok(Json(
        get_expense_splits(state.store.as_ref(), &caller, &expense_id).await?,
    ))
}
