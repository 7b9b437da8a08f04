// In memory implementation of the TableStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep every table in a map keyed by its id, plus one map per secondary index.
// - Serialize transactions: begin takes an owned lock on the tables and holds it until the
//   transaction is dropped.
// - Stage writes on a copy of the tables, made on the first write, and swap it in on commit.

use crate::shared::core::primitives::{
    ExpenseId, ExpenseSplitId, JoinRequestId, JoinRequestStatus, RoomId, RoomMemberId, UserId,
};
use crate::shared::infrastructure::table_store::{
    ExpenseRow, ExpenseSplitRow, JoinRequestRow, RoomMemberRow, RoomRow, StoreError,
    StoreTransaction, TableStore, UserRow,
};
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Clone)]
struct MultiIndex<K, V> {
    entries: HashMap<K, BTreeSet<V>>,
}

impl<K, V> Default for MultiIndex<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: Ord> MultiIndex<K, V> {
    fn insert(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().insert(value);
    }

    fn remove(&mut self, key: &K, value: &V) {
        if let Some(values) = self.entries.get_mut(key) {
            values.remove(value);
            if values.is_empty() {
                self.entries.remove(key);
            }
        }
    }

    fn first<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).and_then(BTreeSet::first)
    }

    fn all<Q>(&self, key: &Q) -> impl Iterator<Item = &V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).into_iter().flatten()
    }
}

fn collect_rows<'a, K, R>(ids: impl Iterator<Item = &'a K>, table: &HashMap<K, R>) -> Vec<R>
where
    K: Eq + Hash + 'a,
    R: Clone,
{
    ids.filter_map(|id| table.get(id)).cloned().collect()
}

#[derive(Debug, Clone, Default)]
struct Tables {
    users: HashMap<UserId, UserRow>,
    rooms: HashMap<RoomId, RoomRow>,
    rooms_by_invite_code: MultiIndex<String, RoomId>,
    members: HashMap<RoomMemberId, RoomMemberRow>,
    members_by_user: MultiIndex<UserId, RoomMemberId>,
    members_by_room: MultiIndex<RoomId, RoomMemberId>,
    expenses: HashMap<ExpenseId, ExpenseRow>,
    expenses_by_room: MultiIndex<RoomId, ExpenseId>,
    splits: HashMap<ExpenseSplitId, ExpenseSplitRow>,
    splits_by_expense: MultiIndex<ExpenseId, ExpenseSplitId>,
    splits_by_expense_user: MultiIndex<(ExpenseId, UserId), ExpenseSplitId>,
    join_requests: HashMap<JoinRequestId, JoinRequestRow>,
    join_requests_by_user: MultiIndex<UserId, JoinRequestId>,
    join_requests_by_room_status: MultiIndex<(RoomId, JoinRequestStatus), JoinRequestId>,
}

#[derive(Default)]
pub struct InMemoryTableStore {
    tables: Arc<Mutex<Tables>>,
    is_offline: bool,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl TableStore for InMemoryTableStore {
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Table store offline".into()));
        }
        let committed = self.tables.clone().lock_owned().await;
        Ok(Box::new(InMemoryTransaction {
            committed,
            staged: None,
        }))
    }
}

pub struct InMemoryTransaction {
    committed: OwnedMutexGuard<Tables>,
    staged: Option<Tables>,
}

impl InMemoryTransaction {
    fn read(&self) -> &Tables {
        self.staged.as_ref().unwrap_or(&*self.committed)
    }

    fn write(&mut self) -> &mut Tables {
        let committed = &self.committed;
        self.staged.get_or_insert_with(|| Tables::clone(committed))
    }
}

#[async_trait::async_trait]
impl StoreTransaction for InMemoryTransaction {
    async fn get_user(&mut self, id: &UserId) -> Result<Option<UserRow>, StoreError> {
        Ok(self.read().users.get(id).cloned())
    }

    async fn upsert_user_display_name(
        &mut self,
        id: &UserId,
        display_name: String,
    ) -> Result<(), StoreError> {
        let row = self
            .write()
            .users
            .entry(id.clone())
            .or_insert_with(|| UserRow {
                id: id.clone(),
                display_name: None,
            });
        row.display_name = Some(display_name);
        Ok(())
    }

    async fn get_room(&mut self, id: &RoomId) -> Result<Option<RoomRow>, StoreError> {
        Ok(self.read().rooms.get(id).cloned())
    }

    async fn find_room_by_invite_code(
        &mut self,
        invite_code: &str,
    ) -> Result<Option<RoomRow>, StoreError> {
        let tables = self.read();
        Ok(tables
            .rooms_by_invite_code
            .first(invite_code)
            .and_then(|id| tables.rooms.get(id))
            .cloned())
    }

    async fn insert_room(&mut self, row: RoomRow) -> Result<(), StoreError> {
        let tables = self.write();
        tables
            .rooms_by_invite_code
            .insert(row.invite_code.clone(), row.id.clone());
        tables.rooms.insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_membership_by_user(
        &mut self,
        user_id: &UserId,
    ) -> Result<Option<RoomMemberRow>, StoreError> {
        let tables = self.read();
        Ok(tables
            .members_by_user
            .first(user_id)
            .and_then(|id| tables.members.get(id))
            .cloned())
    }

    async fn list_members_by_room(
        &mut self,
        room_id: &RoomId,
    ) -> Result<Vec<RoomMemberRow>, StoreError> {
        let tables = self.read();
        Ok(collect_rows(tables.members_by_room.all(room_id), &tables.members))
    }

    async fn insert_member(&mut self, row: RoomMemberRow) -> Result<(), StoreError> {
        let tables = self.write();
        tables
            .members_by_user
            .insert(row.user_id.clone(), row.id.clone());
        tables
            .members_by_room
            .insert(row.room_id.clone(), row.id.clone());
        tables.members.insert(row.id.clone(), row);
        Ok(())
    }

    async fn get_expense(&mut self, id: &ExpenseId) -> Result<Option<ExpenseRow>, StoreError> {
        Ok(self.read().expenses.get(id).cloned())
    }

    async fn list_expenses_by_room(
        &mut self,
        room_id: &RoomId,
    ) -> Result<Vec<ExpenseRow>, StoreError> {
        let tables = self.read();
        Ok(collect_rows(tables.expenses_by_room.all(room_id), &tables.expenses))
    }

    async fn insert_expense(&mut self, row: ExpenseRow) -> Result<(), StoreError> {
        let tables = self.write();
        tables
            .expenses_by_room
            .insert(row.room_id.clone(), row.id.clone());
        tables.expenses.insert(row.id.clone(), row);
        Ok(())
    }

    async fn insert_split(&mut self, row: ExpenseSplitRow) -> Result<(), StoreError> {
        let tables = self.write();
        tables
            .splits_by_expense
            .insert(row.expense_id.clone(), row.id.clone());
        tables.splits_by_expense_user.insert(
            (row.expense_id.clone(), row.user_id.clone()),
            row.id.clone(),
        );
        tables.splits.insert(row.id.clone(), row);
        Ok(())
    }

    async fn find_split(
        &mut self,
        expense_id: &ExpenseId,
        user_id: &UserId,
    ) -> Result<Option<ExpenseSplitRow>, StoreError> {
        let tables = self.read();
        let key = (expense_id.clone(), user_id.clone());
        Ok(tables
            .splits_by_expense_user
            .first(&key)
            .and_then(|id| tables.splits.get(id))
            .cloned())
    }

    async fn list_splits_by_expense(
        &mut self,
        expense_id: &ExpenseId,
    ) -> Result<Vec<ExpenseSplitRow>, StoreError> {
        let tables = self.read();
        Ok(collect_rows(tables.splits_by_expense.all(expense_id), &tables.splits))
    }

    async fn find_pending_request_by_user(
        &mut self,
        user_id: &UserId,
    ) -> Result<Option<JoinRequestRow>, StoreError> {
        let tables = self.read();
        Ok(tables
            .join_requests_by_user
            .all(user_id)
            .filter_map(|id| tables.join_requests.get(id))
            .find(|row| row.status == JoinRequestStatus::Pending)
            .cloned())
    }

    async fn list_requests_by_room_and_status(
        &mut self,
        room_id: &RoomId,
        status: JoinRequestStatus,
    ) -> Result<Vec<JoinRequestRow>, StoreError> {
        let tables = self.read();
        let key = (room_id.clone(), status);
        Ok(collect_rows(
            tables.join_requests_by_room_status.all(&key),
            &tables.join_requests,
        ))
    }

    async fn insert_join_request(&mut self, row: JoinRequestRow) -> Result<(), StoreError> {
        let tables = self.write();
        tables
            .join_requests_by_user
            .insert(row.user_id.clone(), row.id.clone());
        tables
            .join_requests_by_room_status
            .insert((row.room_id.clone(), row.status), row.id.clone());
        tables.join_requests.insert(row.id.clone(), row);
        Ok(())
    }

    async fn delete_join_request(&mut self, id: &JoinRequestId) -> Result<(), StoreError> {
        let tables = self.write();
        let row = tables
            .join_requests
            .remove(id)
            .ok_or_else(|| StoreError::NotFound {
                table: "join_requests",
                id: id.to_string(),
            })?;
        tables.join_requests_by_user.remove(&row.user_id, &row.id);
        tables
            .join_requests_by_room_status
            .remove(&(row.room_id, row.status), &row.id);
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        if let Some(staged) = self.staged.take() {
            *self.committed = staged;
        }
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_table_store_tests {
    use super::*;
    use crate::shared::core::primitives::Role;
    use crate::tests::fixtures::rows::{member_row, pending_request_row, room_row, split_row};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryTableStore {
        InMemoryTableStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_make_committed_writes_visible_to_later_transactions(
        store: InMemoryTableStore,
    ) {
        let room = room_row("Flat 42", "FLAT42", "user-alice");
        {
            let mut tx = store.begin().await.unwrap();
            tx.insert_room(room.clone()).await.unwrap();
            tx.commit().await.unwrap();
        }
        let mut tx = store.begin().await.unwrap();
        assert_eq!(tx.get_room(&room.id).await.unwrap(), Some(room));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_discard_writes_of_a_dropped_transaction(store: InMemoryTableStore) {
        let room = room_row("Flat 42", "FLAT42", "user-alice");
        {
            let mut tx = store.begin().await.unwrap();
            tx.insert_room(room.clone()).await.unwrap();
            tx.insert_member(member_row(&room.id, "user-alice", Role::Admin))
                .await
                .unwrap();
        }
        let mut tx = store.begin().await.unwrap();
        assert_eq!(tx.get_room(&room.id).await.unwrap(), None);
        assert_eq!(
            tx.find_membership_by_user(&UserId::new("user-alice"))
                .await
                .unwrap(),
            None
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_its_own_uncommitted_writes(store: InMemoryTableStore) {
        let room = room_row("Flat 42", "FLAT42", "user-alice");
        let mut tx = store.begin().await.unwrap();
        tx.insert_room(room.clone()).await.unwrap();
        assert_eq!(
            tx.find_room_by_invite_code("FLAT42").await.unwrap(),
            Some(room)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_earliest_room_when_invite_codes_collide(
        store: InMemoryTableStore,
    ) {
        let first = room_row("First", "SAME01", "user-alice");
        let second = room_row("Second", "SAME01", "user-bob");
        let mut tx = store.begin().await.unwrap();
        tx.insert_room(second).await.unwrap();
        tx.insert_room(first).await.unwrap();
        let found = tx.find_room_by_invite_code("SAME01").await.unwrap().unwrap();
        assert_eq!(found.name, "First");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_upsert_display_names(store: InMemoryTableStore) {
        let user_id = UserId::new("user-alice");
        let mut tx = store.begin().await.unwrap();
        assert_eq!(tx.get_user(&user_id).await.unwrap(), None);
        tx.upsert_user_display_name(&user_id, "Alice".into())
            .await
            .unwrap();
        tx.upsert_user_display_name(&user_id, "Ali".into())
            .await
            .unwrap();
        let user = tx.get_user(&user_id).await.unwrap().unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Ali"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_members_of_one_room_only(store: InMemoryTableStore) {
        let flat = room_row("Flat 42", "FLAT42", "user-alice");
        let villa = room_row("Villa 7", "VILLA7", "user-charlie");
        let mut tx = store.begin().await.unwrap();
        tx.insert_member(member_row(&flat.id, "user-alice", Role::Admin))
            .await
            .unwrap();
        tx.insert_member(member_row(&flat.id, "user-bob", Role::Member))
            .await
            .unwrap();
        tx.insert_member(member_row(&villa.id, "user-charlie", Role::Admin))
            .await
            .unwrap();
        let members = tx.list_members_by_room(&flat.id).await.unwrap();
        let users: Vec<&str> = members.iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(users, vec!["user-alice", "user-bob"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_find_splits_by_expense_and_user(store: InMemoryTableStore) {
        let expense_id = ExpenseId::generate();
        let mut tx = store.begin().await.unwrap();
        tx.insert_split(split_row(&expense_id, "user-alice", 200.0))
            .await
            .unwrap();
        tx.insert_split(split_row(&expense_id, "user-bob", 400.0))
            .await
            .unwrap();
        let bob = tx
            .find_split(&expense_id, &UserId::new("user-bob"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bob.amount, 400.0);
        assert_eq!(tx.list_splits_by_expense(&expense_id).await.unwrap().len(), 2);
        assert_eq!(
            tx.find_split(&expense_id, &UserId::new("user-carol"))
                .await
                .unwrap(),
            None
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_drop_deleted_join_requests_from_every_index(store: InMemoryTableStore) {
        let room = room_row("Flat 42", "FLAT42", "user-alice");
        let request = pending_request_row(&room.id, "user-charlie");
        let mut tx = store.begin().await.unwrap();
        tx.insert_join_request(request.clone()).await.unwrap();
        assert_eq!(
            tx.list_requests_by_room_and_status(&room.id, JoinRequestStatus::Pending)
                .await
                .unwrap(),
            vec![request.clone()]
        );
        tx.delete_join_request(&request.id).await.unwrap();
        assert_eq!(
            tx.find_pending_request_by_user(&request.user_id)
                .await
                .unwrap(),
            None
        );
        assert!(
            tx.list_requests_by_room_and_status(&room.id, JoinRequestStatus::Pending)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_delete_an_unknown_join_request(store: InMemoryTableStore) {
        let mut tx = store.begin().await.unwrap();
        let result = tx.delete_join_request(&JoinRequestId::new("jr-missing")).await;
        assert!(matches!(
            result,
            Err(StoreError::NotFound {
                table: "join_requests",
                ..
            })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_begin_if_the_store_is_offline(mut store: InMemoryTableStore) {
        store.toggle_offline();
        let result = store.begin().await;
        assert!(result.is_err());
        assert!(
            result
                .err()
                .unwrap()
                .to_string()
                .contains("Table store offline")
        );
    }
}
