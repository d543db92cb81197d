//! Integration tests for mounted workflows
//!
//! Drives workflow stores through the public library API the way the wizard
//! screen and the replay command do.

use std::sync::Arc;

use chrono::Duration;
use optic_desk::notifications::{Notifier, ToastLevel, ToastQueue};
use optic_desk::wizard::{
    DispatchError, NavigationError, ProductKind, ServerDraft, WorkflowCursor, WorkflowKind,
    WorkflowStore,
};
use optic_desk::workflows::{
    self, EntityRef, Grn, GrnField, Offer, OfferField, Order, OrderField, ProductLine,
    StockTransferIn,
};
use serde_json::json;

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn recording_notifier() -> (Notifier, Arc<ToastQueue>) {
    let queue = Arc::new(ToastQueue::new(10, Duration::minutes(5)));
    (Notifier::disabled().with_sink(queue.clone()), queue)
}

fn at(step: u32, sub_step: u32) -> WorkflowCursor {
    WorkflowCursor { step, sub_step }
}

// ─── Navigation ──────────────────────────────────────────────────────────────

#[test]
fn test_order_jump_sub_step_and_back() {
    let mut store = WorkflowStore::<Order>::mount();

    store.go_to_step(3).unwrap();
    store.go_to_sub_step(2).unwrap();
    assert_eq!(store.cursor(), at(3, 2));

    store.prev_step().unwrap();
    assert_eq!(store.cursor(), at(2, 1));
}

#[test]
fn test_order_walks_every_step() {
    let mut store = WorkflowStore::<Order>::mount();
    let mut visited = vec![store.current_step()];
    while store.next_step().is_ok() {
        visited.push(store.current_step());
    }
    assert_eq!(visited, (1..=7).collect::<Vec<_>>());
    assert_eq!(
        store.next_step(),
        Err(NavigationError::AtLastStep { total: 7 })
    );
}

#[test]
fn test_sub_step_limit_per_step() {
    let mut store = WorkflowStore::<Order>::mount();

    // single-panel steps only have sub-step 1
    assert!(store.next_sub_step().is_err());

    store.go_to_step(3).unwrap();
    for _ in 0..5 {
        store.next_sub_step().unwrap();
    }
    assert_eq!(store.cursor(), at(3, 6));
    assert!(matches!(
        store.next_sub_step(),
        Err(NavigationError::AtLastSubStep { step: 3, limit: 6 })
    ));
    assert_eq!(store.cursor(), at(3, 6));
}

// ─── Draft bag ───────────────────────────────────────────────────────────────

#[test]
fn test_last_write_wins_and_other_fields_survive() {
    let mut store = WorkflowStore::<Order>::mount();
    store.set(OrderField::Customer(EntityRef::new(1, "Asha")));
    store.set(OrderField::Prescription(77));
    store.set(OrderField::Customer(EntityRef::new(2, "Ravi")));

    let draft = store.draft();
    assert_eq!(draft.customer, Some(EntityRef::new(2, "Ravi")));
    assert_eq!(draft.prescription_id, Some(77));
}

#[test]
fn test_server_draft_mirror_is_kept_across_steps() {
    let mut store = WorkflowStore::<Grn>::mount();
    store.set(GrnField::Vendor(EntityRef::new(9, "Lens Works")));
    store.set(GrnField::ServerDraft(
        ServerDraft::new(501, "GRN-501", json!({"lines": 0})).with_status("draft"),
    ));

    store.go_to_step(4).unwrap();
    let draft = store.draft();
    assert_eq!(draft.server_draft.as_ref().map(|d| d.id), Some(501));

    let summary = store.snapshot();
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["draft"]["server_draft"]["number"], "GRN-501");
}

#[test]
fn test_offer_discount_is_stored_as_given() {
    let mut store = WorkflowStore::<Offer>::mount();
    store.set(OfferField::DiscountPercent(150));
    assert_eq!(store.draft().discount_percent, Some(150));
}

// ─── Product dispatch ────────────────────────────────────────────────────────

#[test]
fn test_product_dispatch_order() {
    let (notifier, toasts) = recording_notifier();
    let mut store = WorkflowStore::<Order>::mount();
    store.go_to_step(3).unwrap();

    let cursor = store.select_product(4, &notifier).unwrap();
    assert_eq!(cursor, at(3, 2));
    assert_eq!(store.selection().map(|s| s.label.as_str()), Some("Accessories"));

    store.select_product(2, &notifier).unwrap();
    assert_eq!(store.cursor(), at(3, 5));
    assert!(toasts.is_empty());
}

#[test]
fn test_product_off_product_step_keeps_cursor() {
    let (notifier, toasts) = recording_notifier();
    let mut store = WorkflowStore::<Order>::mount();

    let err = store.select_product(4, &notifier).unwrap_err();
    assert_eq!(
        err,
        DispatchError::NotOnProductStep {
            step: 1,
            product_step: 3
        }
    );
    assert_eq!(store.cursor(), WorkflowCursor::START);
    assert!(store.selection().is_none());
    assert_eq!(toasts.len(), 1);
}

#[test]
fn test_unknown_product_toasts_once_and_keeps_state() {
    let (notifier, toasts) = recording_notifier();
    let mut store = WorkflowStore::<Order>::mount();
    store.go_to_step(3).unwrap();
    store.select_product(1, &notifier).unwrap();
    let before = store.cursor();

    let err = store.select_product(99, &notifier).unwrap_err();
    assert_eq!(err, DispatchError::UnknownProduct(99));
    assert_eq!(store.cursor(), before);
    assert_eq!(store.selection().map(|s| s.value), Some(1));

    let shown = toasts.snapshot();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].level, ToastLevel::Error);
    assert_eq!(shown[0].message, "Invalid product type 99");
}

#[test]
fn test_unsupported_product_toasts() {
    let (notifier, toasts) = recording_notifier();
    let mut store = WorkflowStore::<Order>::mount();
    store.go_to_step(3).unwrap();

    let err = store
        .select_product(ProductKind::Bulk.code(), &notifier)
        .unwrap_err();
    assert!(matches!(err, DispatchError::Unsupported { .. }));
    assert_eq!(store.cursor(), at(3, 1));
    assert_eq!(toasts.len(), 1);
}

#[test]
fn test_workflow_without_product_step_refuses_dispatch() {
    let (notifier, toasts) = recording_notifier();
    let mut store = WorkflowStore::<StockTransferIn>::mount();

    let err = store.select_product(1, &notifier).unwrap_err();
    assert_eq!(err, DispatchError::NoProductStep(WorkflowKind::StockTransferIn));
    assert_eq!(toasts.len(), 1);
}

#[test]
fn test_every_supported_product_opens_its_panel() {
    let notifier = Notifier::disabled();
    for kind in WorkflowKind::all() {
        let description = workflows::describe(*kind);
        let Some(product_step) = description.steps.iter().find(|s| s.product_step) else {
            continue;
        };
        for (product, sub_step) in &description.products {
            let mut handle = workflows::mount(*kind);
            handle.go_to_step(product_step.number).unwrap();
            let cursor = handle.select_product(product.code(), &notifier).unwrap();
            assert_eq!(cursor, at(product_step.number, *sub_step), "{kind} {product}");
        }
    }
}

// ─── Remount ─────────────────────────────────────────────────────────────────

#[test]
fn test_remount_discards_everything() {
    let notifier = Notifier::disabled();
    let mut store = WorkflowStore::<Order>::mount();
    let first_id = store.instance_id();

    store.set(OrderField::Lines(vec![ProductLine::new(
        3,
        ProductKind::FrameSunglass,
        "Aviator 54",
        1,
    )]));
    store.go_to_step(3).unwrap();
    store.select_product(1, &notifier).unwrap();
    store.remount();

    assert_ne!(store.instance_id(), first_id);
    assert_eq!(store.cursor(), WorkflowCursor::START);
    assert!(store.draft().lines.is_empty());
    assert!(store.selection().is_none());
}

#[test]
fn test_two_mounts_do_not_share_state() {
    let mut first = WorkflowStore::<Order>::mount();
    let second = WorkflowStore::<Order>::mount();

    first.go_to_step(4).unwrap();
    first.set(OrderField::Prescription(5));

    assert_eq!(second.cursor(), WorkflowCursor::START);
    assert!(second.draft().prescription_id.is_none());
    assert_ne!(first.instance_id(), second.instance_id());
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

#[test]
fn test_snapshot_json_through_handle() {
    let mut handle = workflows::mount(WorkflowKind::StockTransferOut);
    handle.go_to_step(2).unwrap();
    handle.next_sub_step().unwrap();

    let value = handle.snapshot_json().unwrap();
    assert_eq!(value["workflow"], "stock-transfer-out");
    assert_eq!(value["cursor"], json!({"step": 2, "sub_step": 2}));
    assert_eq!(value["total_steps"], 4);
    assert_eq!(value["step_title"], "Products");
    assert!(value["selection"].is_null());
}
