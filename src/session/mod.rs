//! Bookkeeping for forms that were sent to a client and are waiting for an answer.
//!
//! The transport hands each outgoing [`FormRequest`] to the client and feeds the
//! client's [`FormResponse`] back through [`PendingForms::respond`], which routes it
//! to the form by ID.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::config::FormConfig;
use crate::errors::FormError;
use crate::forms::Form;

/// A serialized form ready to be sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRequest {
    pub form_id: u32,
    pub form_data: String,
}

/// Why the client answered without any data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    UserClosed,
    /// The client was showing another screen and never displayed the form.
    UserBusy,
}

/// The client's answer to a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponse {
    pub form_id: u32,
    pub response_data: Option<Vec<u8>>,
    pub cancel_reason: Option<CancelReason>,
}

impl FormResponse {
    pub fn submitted(form_id: u32, data: impl Into<Vec<u8>>) -> Self {
        Self {
            form_id,
            response_data: Some(data.into()),
            cancel_reason: None,
        }
    }

    pub fn cancelled(form_id: u32, reason: CancelReason) -> Self {
        Self {
            form_id,
            response_data: None,
            cancel_reason: Some(reason),
        }
    }
}

type BoxedForm<Ctx> = Box<dyn Form<Ctx> + Send>;

/// Forms sent to one client that have not been answered yet.
pub struct PendingForms<Ctx = ()> {
    config: FormConfig,
    next_id: u32,
    forms: BTreeMap<u32, BoxedForm<Ctx>>,
}

impl<Ctx> PendingForms<Ctx> {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            next_id: 0,
            forms: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self, form_id: u32) -> bool {
        self.forms.contains_key(&form_id)
    }

    /// Serialize `form`, assign it an ID and keep it until the client answers.
    ///
    /// # Errors
    ///
    /// Fails when the form cannot be serialized or when too many forms are pending.
    pub fn send<F>(&mut self, form: F) -> Result<FormRequest, FormError>
    where
        F: Form<Ctx> + Send + 'static,
    {
        if self.forms.len() >= self.config.max_pending_forms {
            warn!(
                "Refusing to send form: {} forms already pending",
                self.forms.len()
            );
            return Err(FormError::TooManyPendingForms(self.config.max_pending_forms));
        }
        let form_data = serde_json::to_string(&form.to_json()?)
            .map_err(|e| FormError::Marshal(e.to_string()))?;

        let form_id = self.allocate_id();
        self.forms.insert(form_id, Box::new(form));
        debug!(form_id, bytes = form_data.len(), "Form sent");
        Ok(FormRequest { form_id, form_data })
    }

    /// Route the client's answer to the form it belongs to. The form is no longer
    /// pending afterwards, even when its response is rejected.
    ///
    /// # Errors
    ///
    /// Fails for unknown form IDs, oversized payloads and responses the form rejects.
    pub fn respond(&mut self, response: FormResponse, ctx: &mut Ctx) -> Result<(), FormError> {
        let form_id = response.form_id;
        let mut form = self
            .forms
            .remove(&form_id)
            .ok_or(FormError::UnknownForm(form_id))?;

        if let Some(reason) = response.cancel_reason {
            info!(form_id, ?reason, "Form cancelled by client");
            return form.submit_json(None, ctx);
        }
        let data = response.response_data.as_deref();
        let size = data.map_or(0, <[u8]>::len);
        if size > self.config.max_response_bytes {
            warn!(form_id, size, "Form response too large");
            return Err(FormError::ResponseTooLarge {
                size,
                limit: self.config.max_response_bytes,
            });
        }
        if data.is_none() {
            info!(form_id, "Form closed");
        }
        form.submit_json(data, ctx).inspect_err(|e| {
            warn!(form_id, "Rejected form response: {}", e);
        })
    }

    /// Close every pending form, e.g. when the client disconnects.
    ///
    /// # Errors
    ///
    /// Every form is closed regardless; the first error encountered is returned.
    pub fn close_all(&mut self, ctx: &mut Ctx) -> Result<(), FormError> {
        let mut first_err = None;
        for (form_id, mut form) in std::mem::take(&mut self.forms) {
            if let Err(e) = form.submit_json(None, ctx) {
                warn!(form_id, "Failed to close form: {}", e);
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn allocate_id(&mut self) -> u32 {
        // The pending limit keeps the map far smaller than the ID space.
        loop {
            let id = self.next_id;
            self.next_id = self.next_id.wrapping_add(1);
            if !self.forms.contains_key(&id) {
                return id;
            }
        }
    }
}

impl<Ctx> Default for PendingForms<Ctx> {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
