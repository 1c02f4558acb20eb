use super::*;

#[tokio::test]
async fn test_reserve_creates_empty_order() {
    let (store, _) = loaded_store(&["T1", "T2"]).await;

    let outcome = store.dispatch(TableAction::reserve("T1"));

    assert!(outcome.is_applied());
    let state = store.snapshot();
    let order = state.order("T1").unwrap();
    assert_eq!(order.table_name, "T1");
    assert!(order.choices.is_empty());
    assert!(state.order("T2").is_none());
}

#[tokio::test]
async fn test_reserve_unknown_table_is_rejected() {
    let (store, _) = loaded_store(&["T1"]).await;
    let before = store.snapshot();

    let outcome = store.dispatch(TableAction::reserve("T9"));

    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::UnknownTable {
            table_name: "T9".to_string()
        })
    );
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn test_reserve_twice_resets_choices() {
    let (store, _) = loaded_store(&["T1"]).await;
    store.dispatch(TableAction::reserve("T1"));
    store.dispatch(TableAction::add_choice("T1", "soup"));

    let outcome = store.dispatch(TableAction::reserve("T1"));

    assert!(outcome.is_applied());
    assert!(store.snapshot().order("T1").unwrap().choices.is_empty());
}

#[tokio::test]
async fn test_choices_keep_dispatch_order_and_duplicates() {
    let (store, _) = loaded_store(&["T1"]).await;
    store.dispatch(TableAction::reserve("T1"));

    for choice in ["soup", "salad", "soup"] {
        assert!(store.dispatch(TableAction::add_choice("T1", choice)).is_applied());
    }

    assert_eq!(
        store.snapshot().order("T1").unwrap().choices,
        vec!["soup", "salad", "soup"]
    );
}

#[tokio::test]
async fn test_remove_choice_drops_first_occurrence_only() {
    let (store, _) = loaded_store(&["T1"]).await;
    store.dispatch(TableAction::reserve("T1"));
    for choice in ["soup", "salad", "soup"] {
        store.dispatch(TableAction::add_choice("T1", choice));
    }

    let outcome = store.dispatch(TableAction::remove_choice("T1", "soup"));

    assert!(outcome.is_applied());
    assert_eq!(
        store.snapshot().order("T1").unwrap().choices,
        vec!["salad", "soup"]
    );
}

#[tokio::test]
async fn test_choice_actions_without_order_are_noops() {
    let (store, _) = loaded_store(&["T1"]).await;
    let before = store.snapshot();

    let add = store.dispatch(TableAction::add_choice("T1", "soup"));
    let remove = store.dispatch(TableAction::remove_choice("T1", "soup"));

    assert!(matches!(add.rejection(), Some(Rejection::NoActiveOrder { .. })));
    assert!(matches!(remove.rejection(), Some(Rejection::NoActiveOrder { .. })));
    let after = store.snapshot();
    assert_eq!(after, before);
    assert!(Arc::ptr_eq(after.orders_handle(), before.orders_handle()));
}

#[tokio::test]
async fn test_remove_absent_choice_is_noop() {
    let (store, _) = loaded_store(&["T1"]).await;
    store.dispatch(TableAction::reserve("T1"));
    store.dispatch(TableAction::add_choice("T1", "soup"));
    let before = store.snapshot();

    let outcome = store.dispatch(TableAction::remove_choice("T1", "bread"));

    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::ChoiceNotFound {
            table_name: "T1".to_string(),
            choice: "bread".to_string(),
        })
    );
    assert!(Arc::ptr_eq(
        store.snapshot().orders_handle(),
        before.orders_handle()
    ));
}

#[tokio::test]
async fn test_cancel_removes_order_and_cancel_again_is_noop() {
    let (store, _) = loaded_store(&["T1"]).await;
    store.dispatch(TableAction::reserve("T1"));
    store.dispatch(TableAction::add_choice("T1", "soup"));

    assert!(store.dispatch(TableAction::cancel("T1")).is_applied());
    assert!(store.snapshot().order("T1").is_none());
    assert!(store.snapshot().orders().is_empty());

    let again = store.dispatch(TableAction::cancel("T1"));
    assert!(matches!(again.rejection(), Some(Rejection::NotReserved { .. })));
}

#[tokio::test]
async fn test_unaffected_orders_are_shared() {
    let (store, _) = loaded_store(&["T1", "T2"]).await;
    store.dispatch(TableAction::reserve("T1"));
    store.dispatch(TableAction::reserve("T2"));
    let before = store.snapshot();

    store.dispatch(TableAction::add_choice("T2", "tea"));

    let after = store.snapshot();
    assert!(Arc::ptr_eq(
        before.order("T1").unwrap(),
        after.order("T1").unwrap()
    ));
    assert!(!Arc::ptr_eq(
        before.order("T2").unwrap(),
        after.order("T2").unwrap()
    ));
    assert!(Arc::ptr_eq(after.tables_handle(), before.tables_handle()));
    // Earlier snapshot is immutable
    assert!(before.order("T2").unwrap().choices.is_empty());
}

#[tokio::test]
async fn test_events_follow_dispatch_outcomes() {
    let (store, _) = loaded_store(&["T1"]).await;
    let mut events = store.subscribe_events();

    store.dispatch(TableAction::reserve("T1"));
    store.dispatch(TableAction::cancel("T2"));

    assert_eq!(
        next_event(&mut events).await,
        StoreEvent::ActionApplied {
            kind: TableActionKind::ReserveTable,
            table_name: Some("T1".to_string()),
        }
    );
    assert_eq!(
        next_event(&mut events).await,
        StoreEvent::ActionRejected {
            kind: TableActionKind::CancelReservation,
            rejection: Rejection::NotReserved {
                table_name: "T2".to_string()
            },
        }
    );
}

#[tokio::test]
async fn test_rejected_action_does_not_wake_state_subscribers() {
    let (store, _) = loaded_store(&["T1"]).await;
    let mut rx = store.subscribe_state();

    store.dispatch(TableAction::add_choice("T1", "soup"));
    assert!(!rx.has_changed().unwrap());

    store.dispatch(TableAction::reserve("T1"));
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().order("T1").is_some());
}

#[tokio::test]
async fn test_clones_share_state() {
    let (store, _) = loaded_store(&["T1"]).await;
    let other = store.clone();

    other.dispatch(TableAction::reserve("T1"));

    assert!(store.snapshot().order("T1").is_some());
}

#[tokio::test]
async fn test_concurrent_dispatch_is_serialized() {
    let (store, _) = loaded_store(&["T1"]).await;
    store.dispatch(TableAction::reserve("T1"));

    let mut tasks = Vec::new();
    for i in 0..50 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store.dispatch(TableAction::add_choice("T1", format!("dish-{}", i)))
        }));
    }
    for task in tasks {
        assert!(task.await.unwrap().is_applied());
    }

    assert_eq!(store.snapshot().order("T1").unwrap().choices.len(), 50);
}

#[test]
fn test_store_requires_runtime() {
    let directory = ScriptedDirectory::new(Vec::new());
    let err = TablesStore::new(directory).unwrap_err();
    assert!(matches!(err, StoreError::NoRuntime));
}
