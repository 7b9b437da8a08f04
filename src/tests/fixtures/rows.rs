// Row builders with canonical values for store-level tests.

use crate::shared::core::primitives::{
    ExpenseId, ExpenseSplitId, JoinRequestId, JoinRequestStatus, Role, RoomId, RoomMemberId,
    UserId,
};
use crate::shared::infrastructure::table_store::{
    ExpenseSplitRow, JoinRequestRow, RoomMemberRow, RoomRow,
};

pub const FIXED_NOW: i64 = 1_700_000_000_000;

pub fn room_row(name: &str, invite_code: &str, created_by: &str) -> RoomRow {
    RoomRow {
        id: RoomId::generate(),
        name: name.to_string(),
        invite_code: invite_code.to_string(),
        created_by: UserId::new(created_by),
        created_at: FIXED_NOW,
    }
}

pub fn member_row(room_id: &RoomId, user_id: &str, role: Role) -> RoomMemberRow {
    RoomMemberRow {
        id: RoomMemberId::generate(),
        room_id: room_id.clone(),
        user_id: UserId::new(user_id),
        role,
        joined_at: FIXED_NOW,
    }
}

pub fn split_row(expense_id: &ExpenseId, user_id: &str, amount: f64) -> ExpenseSplitRow {
    ExpenseSplitRow {
        id: ExpenseSplitId::generate(),
        expense_id: expense_id.clone(),
        user_id: UserId::new(user_id),
        amount,
    }
}

pub fn pending_request_row(room_id: &RoomId, user_id: &str) -> JoinRequestRow {
    JoinRequestRow {
        id: JoinRequestId::generate(),
        room_id: room_id.clone(),
        user_id: UserId::new(user_id),
        status: JoinRequestStatus::Pending,
        created_at: FIXED_NOW,
    }
}
