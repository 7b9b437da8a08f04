use crate::modules::rooms::use_cases::cancel_join_request::cancel_join_request;
use crate::modules::rooms::use_cases::create_room::{CreateRoom, create_room};
use crate::modules::rooms::use_cases::get_pending_join_request::get_pending_join_request;
use crate::modules::rooms::use_cases::get_room_join_requests::get_room_join_requests;
use crate::modules::rooms::use_cases::join_room::{JoinRoom, join_room};
use crate::modules::rooms::use_cases::request_join_room::{RequestJoinRoom, request_join_room};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Caller;
use crate::shared::core::primitives::JoinRequestStatus;
use crate::shared::infrastructure::table_store::in_memory::InMemoryTableStore;
use crate::tests::fixtures::rows::FIXED_NOW;

#[tokio::test]
async fn charlie_requests_to_join_villa_7_and_changes_his_mind() {
    let store = InMemoryTableStore::new();
    let alice = Caller::user("user-alice");
    let charlie = Caller::user("user-charlie");

    let villa = create_room(
        &store,
        &alice,
        CreateRoom {
            name: "Villa 7".to_string(),
            requested_at: FIXED_NOW,
        },
    )
    .await
    .unwrap();

    let room_name = request_join_room(
        &store,
        &charlie,
        RequestJoinRoom {
            invite_code: villa.invite_code.clone(),
            requested_at: FIXED_NOW + 1,
        },
    )
    .await
    .unwrap();
    assert_eq!(room_name, "Villa 7");

    let pending = get_pending_join_request(&store, &charlie)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(pending.room_name, "Villa 7");
    assert_eq!(pending.status, JoinRequestStatus::Pending);

    let seen_by_admin = get_room_join_requests(&store, &alice).await.unwrap();
    assert_eq!(seen_by_admin.len(), 1);
    assert_eq!(seen_by_admin[0].id, pending.id);

    let again = request_join_room(
        &store,
        &charlie,
        RequestJoinRoom {
            invite_code: villa.invite_code.clone(),
            requested_at: FIXED_NOW + 2,
        },
    )
    .await;
    assert!(matches!(again, Err(ApplicationError::AlreadyPendingRequest)));

    cancel_join_request(&store, &charlie).await.unwrap();
    assert_eq!(get_pending_join_request(&store, &charlie).await.unwrap(), None);
    assert!(get_room_join_requests(&store, &alice).await.unwrap().is_empty());
}

#[tokio::test]
async fn joining_directly_settles_a_pending_request() {
    let store = InMemoryTableStore::new();
    let alice = Caller::user("user-alice");
    let charlie = Caller::user("user-charlie");

    let villa = create_room(
        &store,
        &alice,
        CreateRoom {
            name: "Villa 7".to_string(),
            requested_at: FIXED_NOW,
        },
    )
    .await
    .unwrap();
    request_join_room(
        &store,
        &charlie,
        RequestJoinRoom {
            invite_code: villa.invite_code.clone(),
            requested_at: FIXED_NOW,
        },
    )
    .await
    .unwrap();

    join_room(
        &store,
        &charlie,
        JoinRoom {
            invite_code: villa.invite_code.clone(),
            requested_at: FIXED_NOW,
        },
    )
    .await
    .unwrap();

    assert!(get_room_join_requests(&store, &alice).await.unwrap().is_empty());
    let request_again = request_join_room(
        &store,
        &charlie,
        RequestJoinRoom {
            invite_code: villa.invite_code,
            requested_at: FIXED_NOW,
        },
    )
    .await;
    assert!(matches!(request_again, Err(ApplicationError::AlreadyInRoom)));
    assert!(matches!(
        cancel_join_request(&store, &charlie).await,
        Err(ApplicationError::NoPendingRequest)
    ));
}
