use std::sync::{Arc, Mutex};

use bedrock_forms::errors::FormError;
use bedrock_forms::forms::{Button, Form, Modal};
use serde_json::json;

fn confirm(log: &Arc<Mutex<Vec<String>>>) -> Modal<Vec<&'static str>> {
    let form_log = Arc::clone(log);
    Modal::new(
        "Confirm",
        "Reset your plot?",
        Button::new("Yes").on_submit(|answers: &mut Vec<&'static str>| answers.push("yes")),
        Button::new("No")
            .with_image("textures/ui/cancel")
            .on_submit(|answers: &mut Vec<&'static str>| answers.push("no")),
    )
    .on_submit(move |closed| form_log.lock().unwrap().push(format!("closed={closed}")))
}

#[test]
fn modal_json_shape_has_button_texts_only() {
    let log = Arc::default();
    let value = confirm(&log).to_json().unwrap();
    assert_eq!(
        value,
        json!({
            "type": "modal",
            "title": "Confirm",
            "content": "Reset your plot?",
            "button1": "Yes",
            "button2": "No"
        })
    );
}

#[test]
fn true_selects_first_button() {
    let log = Arc::default();
    let mut modal = confirm(&log);
    let mut answers = Vec::new();

    modal.submit_json(Some(b"true"), &mut answers).unwrap();
    modal.submit_json(Some(b"false\n"), &mut answers).unwrap();

    assert_eq!(answers, vec!["yes", "no"]);
    assert_eq!(*log.lock().unwrap(), vec!["closed=false", "closed=false"]);
}

#[test]
fn closed_modal_presses_nothing() {
    let log = Arc::default();
    let mut modal = confirm(&log);
    let mut answers = Vec::new();

    modal.submit_json(None, &mut answers).unwrap();

    assert!(answers.is_empty());
    assert_eq!(*log.lock().unwrap(), vec!["closed=true"]);
}

#[test]
fn non_bool_response_is_rejected() {
    let log = Arc::default();
    let mut modal = confirm(&log);
    let mut answers = Vec::new();

    let err = modal.submit_json(Some(b"1"), &mut answers).unwrap_err();
    assert!(matches!(err, FormError::Parse(ref msg) if msg.contains("modal response as bool")));
    assert!(answers.is_empty());
    assert!(log.lock().unwrap().is_empty());
}
