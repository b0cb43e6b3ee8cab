//! Configuration submitter for the padmote driver.
//!
//! Wraps the HTTP exchange with the driver's local `/config` endpoint: a
//! front-end hands over diagram markup and an action, this crate resolves
//! the button, posts the configuration record, classifies how the exchange
//! settled, and reports through a [`Notify`] surface.

mod notify;
mod submit;

pub use notify::{LogNotifier, Notify};
pub use submit::{Client, DEFAULT_ENDPOINT, platform_advisory};

pub use reqwest::Url;
