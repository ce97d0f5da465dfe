use serde_json::{Value, json};
use tracing::debug;

use super::button::Button;
use super::response::decode_response;
use super::{CloseCallback, Form, notify};
use crate::errors::FormError;

/// A body of text with two buttons at the end, typically yes and no.
///
/// Unlike menu buttons, modal buttons are rendered without images.
pub struct Modal<Ctx = ()> {
    pub title: String,
    pub content: String,
    /// The top button.
    pub button1: Button<Ctx>,
    /// The bottom button.
    pub button2: Button<Ctx>,
    pub submit: Option<CloseCallback>,
}

impl<Ctx> Modal<Ctx> {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        button1: Button<Ctx>,
        button2: Button<Ctx>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            button1,
            button2,
            submit: None,
        }
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(bool) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }
}

impl<Ctx> Form<Ctx> for Modal<Ctx> {
    fn to_json(&self) -> Result<Value, FormError> {
        Ok(json!({
            "type": "modal",
            "title": self.title,
            "content": self.content,
            "button1": self.button1.text,
            "button2": self.button2.text,
        }))
    }

    fn submit_json(&mut self, data: Option<&[u8]>, ctx: &mut Ctx) -> Result<(), FormError> {
        let Some(first) = decode_response::<bool>(data, "modal response as bool")? else {
            debug!("Modal '{}' closed", self.title);
            notify(&mut self.submit, true);
            return Ok(());
        };
        let button = if first {
            &mut self.button1
        } else {
            &mut self.button2
        };
        button.press(ctx);
        notify(&mut self.submit, false);
        Ok(())
    }
}
