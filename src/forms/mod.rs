//! Form payloads sent to the client and the decoding of the client's answers.

pub mod button;
pub mod custom;
pub mod element;
pub mod menu;
pub mod modal;
pub mod response;

use serde::Serialize;
use serde_json::Value;

use crate::errors::FormError;

pub use button::Button;
pub use custom::Custom;
pub use element::{Dropdown, Element, Input, Label, Slider, StepSlider, Toggle};
pub use menu::Menu;
pub use modal::Modal;

pub type CloseCallback = Box<dyn FnMut(bool) + Send>;

/// A form that can be shown to a client.
///
/// `Ctx` is whatever the caller hands to button callbacks, typically the player and
/// world transaction the response arrived on.
pub trait Form<Ctx> {
    /// The JSON the client renders.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Marshal` when the form cannot be rendered as it stands.
    fn to_json(&self) -> Result<Value, FormError>;

    /// Handle the client's answer. `None` means the form was closed.
    ///
    /// # Errors
    ///
    /// Returns an error when the response does not match the form.
    fn submit_json(&mut self, data: Option<&[u8]>, ctx: &mut Ctx) -> Result<(), FormError>;
}

/// Serialize part of a form, reporting failures as `FormError::Marshal`.
pub(crate) fn marshal<T: Serialize + ?Sized>(value: &T) -> Result<Value, FormError> {
    serde_json::to_value(value).map_err(|e| FormError::Marshal(e.to_string()))
}

pub(crate) fn notify(callback: &mut Option<CloseCallback>, closed: bool) {
    if let Some(callback) = callback.as_mut() {
        callback(closed);
    }
}
