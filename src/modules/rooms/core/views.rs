use serde::Serialize;

use crate::shared::core::primitives::{JoinRequestId, JoinRequestStatus, Role, RoomId, UserId};
use crate::shared::infrastructure::table_store::RoomRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub id: RoomId,
    pub name: String,
    pub invite_code: String,
    pub created_by: UserId,
    pub created_at: i64,
}

impl From<RoomRow> for RoomView {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            invite_code: row.invite_code,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberView {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub role: Role,
    pub joined_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingJoinRequestView {
    pub id: JoinRequestId,
    pub room_id: RoomId,
    pub room_name: String,
    pub status: JoinRequestStatus,
    pub created_at: i64,
}

/// A pending request as an admin sees it from inside the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomJoinRequestView {
    pub id: JoinRequestId,
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub created_at: i64,
}
