//! The padmote driver turns a gamepad into a desktop macro device: each
//! button can be bound to a key press, typed text, a shell command, a
//! custom handler registered driver-side, or the volume control. Bindings
//! reach the driver as small JSON configuration records posted to its local
//! configuration endpoint.
//!
//! This crate provides types for those configuration records and for
//! classifying the driver's responses.
//!
//! # Crate Purpose
//! This crate is the wire-format layer shared by every padmote front-end;
//! it performs no I/O of its own.

mod device;
mod error;
mod layout;
pub mod markup;
mod record;
mod response;

pub use error::Error;

#[doc(inline)]
pub use device::DeviceClass;

#[doc(inline)]
pub use record::{
    Action, ActionType, ConfigRecord, CustomFunction, KeyPress, RunCommand, TypeText,
};

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use response::{Notification, Severity, Status, TransportOutcome};
