use std::sync::{Arc, Mutex};

use bedrock_forms::core::config::FormConfig;
use bedrock_forms::errors::FormError;
use bedrock_forms::forms::{Button, Custom, Input, Menu, Modal};
use bedrock_forms::session::{CancelReason, FormResponse, PendingForms};

type Clicks = Vec<String>;

fn menu(closes: &Arc<Mutex<Vec<bool>>>) -> Menu<Clicks> {
    let log = Arc::clone(closes);
    Menu::new("Shop", "Buy something")
        .with_button(Button::new("Sword").on_submit(|c: &mut Clicks| c.push("sword".into())))
        .on_submit(move |closed| log.lock().unwrap().push(closed))
}

fn config(max_pending_forms: usize, max_response_bytes: usize) -> FormConfig {
    FormConfig {
        max_pending_forms,
        max_response_bytes,
    }
}

#[test]
fn send_serializes_and_assigns_ids() {
    let closes = Arc::default();
    let mut pending = PendingForms::<Clicks>::default();

    let first = pending.send(menu(&closes)).unwrap();
    let second = pending.send(menu(&closes)).unwrap();

    assert_ne!(first.form_id, second.form_id);
    assert_eq!(pending.len(), 2);
    assert!(pending.is_pending(first.form_id));

    let rendered: serde_json::Value = serde_json::from_str(&first.form_data).unwrap();
    assert_eq!(rendered["type"], "form");
    assert_eq!(rendered["buttons"][0]["text"], "Sword");
}

#[test]
fn respond_routes_to_form_and_removes_it() {
    let closes = Arc::default();
    let mut pending = PendingForms::<Clicks>::default();
    let request = pending.send(menu(&closes)).unwrap();

    let mut clicks = Clicks::new();
    pending
        .respond(FormResponse::submitted(request.form_id, "0"), &mut clicks)
        .unwrap();

    assert_eq!(clicks, vec!["sword"]);
    assert_eq!(*closes.lock().unwrap(), vec![false]);
    assert!(pending.is_empty());

    let err = pending
        .respond(FormResponse::submitted(request.form_id, "0"), &mut clicks)
        .unwrap_err();
    assert!(matches!(err, FormError::UnknownForm(id) if id == request.form_id));
}

#[test]
fn cancel_reasons_close_the_form() {
    let closes = Arc::default();
    let mut pending = PendingForms::<Clicks>::default();
    let busy = pending.send(menu(&closes)).unwrap();
    let closed = pending.send(menu(&closes)).unwrap();

    let mut clicks = Clicks::new();
    pending
        .respond(FormResponse::cancelled(busy.form_id, CancelReason::UserBusy), &mut clicks)
        .unwrap();
    pending
        .respond(FormResponse::cancelled(closed.form_id, CancelReason::UserClosed), &mut clicks)
        .unwrap();

    assert!(clicks.is_empty());
    assert_eq!(*closes.lock().unwrap(), vec![true, true]);
}

#[test]
fn missing_or_null_data_closes_the_form() {
    let closes = Arc::default();
    let mut pending = PendingForms::<Clicks>::default();
    let a = pending.send(menu(&closes)).unwrap();
    let b = pending.send(menu(&closes)).unwrap();

    let mut clicks = Clicks::new();
    let missing = FormResponse {
        form_id: a.form_id,
        ..Default::default()
    };
    pending.respond(missing, &mut clicks).unwrap();
    pending
        .respond(FormResponse::submitted(b.form_id, "null\n"), &mut clicks)
        .unwrap();

    assert_eq!(*closes.lock().unwrap(), vec![true, true]);
}

#[test]
fn pending_limit_is_enforced() {
    let closes = Arc::default();
    let mut pending = PendingForms::<Clicks>::new(config(1, 1024));
    pending.send(menu(&closes)).unwrap();

    let err = pending.send(menu(&closes)).unwrap_err();
    assert!(matches!(err, FormError::TooManyPendingForms(1)));
    assert_eq!(pending.len(), 1);
}

#[test]
fn oversized_response_is_rejected_and_dropped() {
    let closes = Arc::default();
    let mut pending = PendingForms::<Clicks>::new(config(4, 4));
    let request = pending.send(menu(&closes)).unwrap();

    let mut clicks = Clicks::new();
    let err = pending
        .respond(FormResponse::submitted(request.form_id, "00000"), &mut clicks)
        .unwrap_err();

    assert!(matches!(err, FormError::ResponseTooLarge { size: 5, limit: 4 }));
    assert!(clicks.is_empty());
    assert!(!pending.is_pending(request.form_id));
}

#[test]
fn rejected_response_still_clears_the_form() {
    let closes = Arc::default();
    let mut pending = PendingForms::<Clicks>::default();
    let request = pending.send(menu(&closes)).unwrap();

    let mut clicks = Clicks::new();
    assert!(pending
        .respond(FormResponse::submitted(request.form_id, "3"), &mut clicks)
        .is_err());
    assert!(pending.is_empty());
    assert!(closes.lock().unwrap().is_empty());
}

#[test]
fn unrenderable_form_is_not_kept() {
    let mut pending: PendingForms<Clicks> = PendingForms::default();
    let err = pending.send(Custom::new("Empty")).unwrap_err();
    assert!(matches!(err, FormError::Marshal(_)));
    assert!(pending.is_empty());
}

#[test]
fn close_all_closes_every_kind_of_form() {
    let closes: Arc<Mutex<Vec<bool>>> = Arc::default();
    let modal_log = Arc::clone(&closes);
    let custom_log = Arc::clone(&closes);

    let mut pending = PendingForms::<Clicks>::default();
    pending.send(menu(&closes)).unwrap();
    pending
        .send(
            Modal::new("Sure?", "", Button::new("Yes"), Button::new("No"))
                .on_submit(move |closed| modal_log.lock().unwrap().push(closed)),
        )
        .unwrap();
    pending
        .send(
            Custom::new("Name")
                .with_element(Input::new("Name"))
                .on_submit(move |closed| custom_log.lock().unwrap().push(closed)),
        )
        .unwrap();

    let mut clicks = Clicks::new();
    pending.close_all(&mut clicks).unwrap();

    assert!(pending.is_empty());
    assert_eq!(*closes.lock().unwrap(), vec![true, true, true]);
}
