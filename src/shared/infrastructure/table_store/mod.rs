// Ports for the shared table store.
//
// Purpose
// - Describe the five tables and their secondary indexes as traits, so handlers never depend on
//   a concrete database.
//
// Responsibilities
// - Every read is an index point or prefix lookup. There is no scan method.
// - All work happens inside a StoreTransaction. Writes become visible on commit; a transaction
//   dropped without commit leaves the store untouched.
//
// Testing guidance
// - Use the in memory adapter. It can be toggled offline to exercise backend failures.

use crate::shared::core::primitives::{
    ExpenseId, ExpenseSplitId, JoinRequestId, JoinRequestStatus, Role, RoomId, RoomMemberId,
    UserId,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{table} row {id} not found")]
    NotFound { table: &'static str, id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRow {
    pub id: RoomId,
    pub name: String,
    pub invite_code: String,
    pub created_by: UserId,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomMemberRow {
    pub id: RoomMemberId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub role: Role,
    pub joined_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub room_id: RoomId,
    pub paid_by: UserId,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSplitRow {
    pub id: ExpenseSplitId,
    pub expense_id: ExpenseId,
    pub user_id: UserId,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequestRow {
    pub id: JoinRequestId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub status: JoinRequestStatus,
    pub created_at: i64,
}

#[async_trait]
pub trait TableStore: Send + Sync {
    /// Opens a transaction. Transactions are serializable with respect to each other.
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>, StoreError>;
}

#[async_trait]
pub trait StoreTransaction: Send {
    async fn get_user(&mut self, id: &UserId) -> Result<Option<UserRow>, StoreError>;
    async fn upsert_user_display_name(
        &mut self,
        id: &UserId,
        display_name: String,
    ) -> Result<(), StoreError>;

    async fn get_room(&mut self, id: &RoomId) -> Result<Option<RoomRow>, StoreError>;
    /// Earliest-created room holding the code, if any.
    async fn find_room_by_invite_code(
        &mut self,
        invite_code: &str,
    ) -> Result<Option<RoomRow>, StoreError>;
    async fn insert_room(&mut self, row: RoomRow) -> Result<(), StoreError>;

    async fn find_membership_by_user(
        &mut self,
        user_id: &UserId,
    ) -> Result<Option<RoomMemberRow>, StoreError>;
    async fn list_members_by_room(
        &mut self,
        room_id: &RoomId,
    ) -> Result<Vec<RoomMemberRow>, StoreError>;
    async fn insert_member(&mut self, row: RoomMemberRow) -> Result<(), StoreError>;

    async fn get_expense(&mut self, id: &ExpenseId) -> Result<Option<ExpenseRow>, StoreError>;
    async fn list_expenses_by_room(
        &mut self,
        room_id: &RoomId,
    ) -> Result<Vec<ExpenseRow>, StoreError>;
    async fn insert_expense(&mut self, row: ExpenseRow) -> Result<(), StoreError>;

    async fn insert_split(&mut self, row: ExpenseSplitRow) -> Result<(), StoreError>;
    async fn find_split(
        &mut self,
        expense_id: &ExpenseId,
        user_id: &UserId,
    ) -> Result<Option<ExpenseSplitRow>, StoreError>;
    async fn list_splits_by_expense(
        &mut self,
        expense_id: &ExpenseId,
    ) -> Result<Vec<ExpenseSplitRow>, StoreError>;

    async fn find_pending_request_by_user(
        &mut self,
        user_id: &UserId,
    ) -> Result<Option<JoinRequestRow>, StoreError>;
    async fn list_requests_by_room_and_status(
        &mut self,
        room_id: &RoomId,
        status: JoinRequestStatus,
    ) -> Result<Vec<JoinRequestRow>, StoreError>;
    async fn insert_join_request(&mut self, row: JoinRequestRow) -> Result<(), StoreError>;
    async fn delete_join_request(&mut self, id: &JoinRequestId) -> Result<(), StoreError>;

    async fn commit(&mut self) -> Result<(), StoreError>;
}

pub mod in_memory;
