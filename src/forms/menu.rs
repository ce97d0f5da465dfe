use serde_json::{Value, json};
use tracing::debug;

use super::button::Button;
use super::response::decode_response;
use super::{CloseCallback, Form, marshal, notify};
use crate::errors::FormError;

/// A title and body with a list of buttons below it. Buttons may carry images.
pub struct Menu<Ctx = ()> {
    pub title: String,
    /// Displayed underneath the title, before the buttons.
    pub content: String,
    pub buttons: Vec<Button<Ctx>>,
    /// Called when the form is closed or a button is clicked, after that button's
    /// callback.
    pub submit: Option<CloseCallback>,
}

impl<Ctx> Default for Menu<Ctx> {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            buttons: Vec::new(),
            submit: None,
        }
    }
}

impl<Ctx> Menu<Ctx> {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Append a button to the bottom of the form.
    pub fn button(&mut self, button: Button<Ctx>) -> &mut Self {
        self.buttons.push(button);
        self
    }

    #[must_use]
    pub fn with_button(mut self, button: Button<Ctx>) -> Self {
        self.buttons.push(button);
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(bool) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }
}

impl<Ctx> Form<Ctx> for Menu<Ctx> {
    fn to_json(&self) -> Result<Value, FormError> {
        Ok(json!({
            "type": "form",
            "title": self.title,
            "content": self.content,
            "buttons": marshal(&self.buttons)?,
        }))
    }

    fn submit_json(&mut self, data: Option<&[u8]>, ctx: &mut Ctx) -> Result<(), FormError> {
        let Some(index) = decode_response::<u64>(data, "button index as int")? else {
            debug!("Menu '{}' closed", self.title);
            notify(&mut self.submit, true);
            return Ok(());
        };
        let count = self.buttons.len();
        let button = usize::try_from(index)
            .ok()
            .and_then(|i| self.buttons.get_mut(i))
            .ok_or_else(|| {
                FormError::Parse(format!(
                    "button index points to inexistent button: {} (only {} buttons present)",
                    index, count
                ))
            })?;
        button.press(ctx);
        notify(&mut self.submit, false);
        Ok(())
    }
}
