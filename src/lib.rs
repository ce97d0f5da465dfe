//! Forms for Minecraft Bedrock clients: custom forms, menus and modals.
//!
//! Each form serializes to the JSON the client renders and decodes the client's
//! answer back into typed callbacks.
//!
//! # Architecture
//!
//! - `forms` holds the form types, their elements and the response decoding
//! - `session` keeps forms that were sent until the client answers them
//! - `core::config` reads the limits applied to pending forms and responses
//!
//! # Validation
//!
//! Every response value is checked against its element, whether or not a callback
//! is registered. A custom form dispatches nothing unless all of its values pass:
//! one bad value rejects the whole response and no element callback runs. Code
//! that relied on element callbacks firing one by one until the first bad value
//! sees no partial submissions here.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use bedrock_forms::forms::{Button, Menu};
//! use bedrock_forms::session::{FormResponse, PendingForms};
//!
//! let picked = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&picked);
//!
//! let menu = Menu::new("Warps", "Where to?")
//!     .with_button(Button::new("Spawn").on_submit(|visits: &mut u32| *visits += 1))
//!     .with_button(Button::new("Arena").with_image("textures/items/diamond_sword"))
//!     .on_submit(move |closed| log.lock().unwrap().push(closed));
//!
//! let mut pending = PendingForms::default();
//! let request = pending.send(menu).unwrap();
//! assert!(request.form_data.contains("\"type\":\"form\""));
//!
//! let mut visits = 0;
//! pending
//!     .respond(FormResponse::submitted(request.form_id, "0"), &mut visits)
//!     .unwrap();
//! assert_eq!(visits, 1);
//! assert_eq!(*picked.lock().unwrap(), vec![false]);
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod forms;
pub mod session;

pub use errors::FormError;
pub use forms::Form;
pub use session::PendingForms;

/// Configure structured logging with JSON output.
///
/// # Example
///
/// ```
/// bedrock_forms::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // A subscriber may already be installed by the embedding server.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
