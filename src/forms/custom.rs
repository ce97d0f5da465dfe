use serde_json::{Value, json};
use tracing::debug;

use super::element::{Element, Submitted};
use super::response::decode_response;
use super::{CloseCallback, Form, marshal, notify};
use crate::errors::FormError;

/// A form with fields the client fills out.
#[derive(Default)]
pub struct Custom {
    /// Displayed at the very top of the form.
    pub title: String,
    /// At least one element is needed for the client to render the form.
    pub elements: Vec<Element>,
    /// Called when the form is closed or submitted, after every element's callback.
    pub submit: Option<CloseCallback>,
}

impl Custom {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Append an element to the bottom of the form.
    pub fn element(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(bool) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }
}

impl<Ctx> Form<Ctx> for Custom {
    fn to_json(&self) -> Result<Value, FormError> {
        if self.elements.is_empty() {
            return Err(FormError::Marshal(
                "custom form requires at least one element".to_string(),
            ));
        }
        Ok(json!({
            "type": "custom_form",
            "title": self.title,
            "content": marshal(&self.elements)?,
        }))
    }

    fn submit_json(&mut self, data: Option<&[u8]>, _ctx: &mut Ctx) -> Result<(), FormError> {
        let Some(values) = decode_response::<Vec<Value>>(data, "custom form response as array")?
        else {
            debug!("Custom form '{}' closed", self.title);
            notify(&mut self.submit, true);
            return Ok(());
        };
        if values.len() != self.elements.len() {
            return Err(FormError::Parse(format!(
                "form JSON data array has {} values, expected {}",
                values.len(),
                self.elements.len()
            )));
        }

        // Nothing is dispatched unless every value is valid.
        let submitted = self
            .elements
            .iter()
            .zip(&values)
            .map(|(element, value)| element.validate(value))
            .collect::<Result<Vec<Submitted>, FormError>>()?;

        for (element, value) in self.elements.iter_mut().zip(submitted) {
            element.dispatch(value);
        }
        notify(&mut self.submit, false);
        Ok(())
    }
}
