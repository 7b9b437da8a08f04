use crate::modules::expenses::core::split::SplitShare;
use crate::modules::expenses::use_cases::create_expense::{
    CreateExpense, SplitInput, create_expense,
};
use crate::modules::expenses::use_cases::get_expense_splits::get_expense_splits;
use crate::modules::expenses::use_cases::get_expenses::get_expenses;
use crate::modules::rooms::use_cases::create_room::{CreateRoom, create_room};
use crate::modules::rooms::use_cases::get_current_room::get_current_room;
use crate::modules::rooms::use_cases::get_room_members::get_room_members;
use crate::modules::rooms::use_cases::join_room::{JoinRoom, join_room};
use crate::modules::users::use_cases::get_current_user_id::get_current_user_id;
use crate::modules::users::use_cases::set_display_name::{SetDisplayName, set_display_name};
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::Role;
use crate::shared::infrastructure::table_store::in_memory::InMemoryTableStore;
use crate::tests::fixtures::rows::FIXED_NOW;
use chrono::NaiveDate;

#[tokio::test]
async fn alice_and_bob_share_the_rent_of_flat_42() {
    let store = InMemoryTableStore::new();
    let alice = Caller::user("user-alice");
    let bob = Caller::user("user-bob");

    for (caller, name) in [(&alice, "Alice"), (&bob, "Bob")] {
        set_display_name(
            &store,
            caller,
            SetDisplayName {
                display_name: name.to_string(),
            },
        )
        .await
        .unwrap();
    }

    let room = create_room(
        &store,
        &alice,
        CreateRoom {
            name: "Flat 42".to_string(),
            requested_at: FIXED_NOW,
        },
    )
    .await
    .unwrap();

    let room_name = join_room(
        &store,
        &bob,
        JoinRoom {
            invite_code: room.invite_code.clone(),
            requested_at: FIXED_NOW + 1,
        },
    )
    .await
    .unwrap();
    assert_eq!(room_name, "Flat 42");
    assert_eq!(
        get_current_room(&store, &bob).await.unwrap(),
        Some(room.clone())
    );

    let members = get_room_members(&store, &alice).await.unwrap();
    let summary: Vec<(Option<&str>, Role)> = members
        .iter()
        .map(|member| (member.display_name.as_deref(), member.role))
        .collect();
    assert_eq!(
        summary,
        vec![(Some("Alice"), Role::Admin), (Some("Bob"), Role::Member)]
    );

    let alice_id = get_current_user_id(&alice).unwrap();
    let bob_id = get_current_user_id(&bob).unwrap();
    let expense_id = create_expense(
        &store,
        &alice,
        CreateExpense {
            amount: 600.0,
            date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            description: "Dinner".to_string(),
            splits: SplitInput::Explicit(vec![
                SplitShare {
                    user_id: alice_id,
                    amount: 200.0,
                },
                SplitShare {
                    user_id: bob_id,
                    amount: 400.0,
                },
            ]),
            requested_at: FIXED_NOW + 2,
        },
    )
    .await
    .unwrap();

    let as_alice = get_expenses(&store, &alice).await.unwrap();
    assert_eq!(as_alice.len(), 1);
    assert_eq!(as_alice[0].id, expense_id);
    assert_eq!(as_alice[0].my_share, Some(200.0));
    assert_eq!(as_alice[0].paid_by.display_name.as_deref(), Some("Alice"));

    let as_bob = get_expenses(&store, &bob).await.unwrap();
    assert_eq!(as_bob[0].my_share, Some(400.0));

    let mut amounts: Vec<f64> = get_expense_splits(&store, &bob, &expense_id)
        .await
        .unwrap()
        .iter()
        .map(|split| split.amount)
        .collect();
    amounts.sort_by(f64::total_cmp);
    assert_eq!(amounts, vec![200.0, 400.0]);
}

#[tokio::test]
async fn a_payer_outside_the_split_sees_no_share() {
    let store = InMemoryTableStore::new();
    let alice = Caller::user("user-alice");
    let bob = Caller::user("user-bob");

    let room = create_room(
        &store,
        &alice,
        CreateRoom {
            name: "Flat 42".to_string(),
            requested_at: FIXED_NOW,
        },
    )
    .await
    .unwrap();
    join_room(
        &store,
        &bob,
        JoinRoom {
            invite_code: room.invite_code,
            requested_at: FIXED_NOW,
        },
    )
    .await
    .unwrap();

    create_expense(
        &store,
        &alice,
        CreateExpense {
            amount: 200.0,
            date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            description: "Bob only split".to_string(),
            splits: SplitInput::EquallyAmong(vec![get_current_user_id(&bob).unwrap()]),
            requested_at: FIXED_NOW,
        },
    )
    .await
    .unwrap();

    assert_eq!(get_expenses(&store, &alice).await.unwrap()[0].my_share, None);
    assert_eq!(
        get_expenses(&store, &bob).await.unwrap()[0].my_share,
        Some(200.0)
    );
}
