// Seeds committed state straight into a store, bypassing the handlers.

use crate::shared::core::primitives::{Role, RoomId, UserId};
use crate::shared::infrastructure::table_store::{RoomRow, TableStore};
use crate::tests::fixtures::rows::{member_row, pending_request_row, room_row};

/// Inserts a room with a known invite code and its admin membership.
pub async fn seed_room(
    store: &dyn TableStore,
    name: &str,
    invite_code: &str,
    admin: &str,
) -> RoomRow {
    let room = room_row(name, invite_code, admin);
    let mut tx = store.begin().await.unwrap();
    tx.insert_room(room.clone()).await.unwrap();
    tx.insert_member(member_row(&room.id, admin, Role::Admin))
        .await
        .unwrap();
    tx.commit().await.unwrap();
    room
}

pub async fn seed_member(store: &dyn TableStore, room_id: &RoomId, user_id: &str) {
    let mut tx = store.begin().await.unwrap();
    tx.insert_member(member_row(room_id, user_id, Role::Member))
        .await
        .unwrap();
    tx.commit().await.unwrap();
}

pub async fn seed_pending_request(store: &dyn TableStore, room_id: &RoomId, user_id: &str) {
    let mut tx = store.begin().await.unwrap();
    tx.insert_join_request(pending_request_row(room_id, user_id))
        .await
        .unwrap();
    tx.commit().await.unwrap();
}

pub async fn seed_display_name(store: &dyn TableStore, user_id: &str, display_name: &str) {
    let mut tx = store.begin().await.unwrap();
    tx.upsert_user_display_name(&UserId::new(user_id), display_name.to_string())
        .await
        .unwrap();
    tx.commit().await.unwrap();
}
