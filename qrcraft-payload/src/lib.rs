//! QR payload encoding for QRCraft.
//!
//! This crate defines the pure core of the generator:
//! - The supported content types (URL, text, email, SMS, phone, WiFi,
//!   contact card, PDF link, app link)
//! - The per-type field sets entered by the user
//! - The encoder that turns a (content type, field set) pair into the exact
//!   text payload embedded in the QR code
//!
//! Rendering the payload into an actual image is handled elsewhere; nothing
//! here performs I/O.

mod content_type;
mod encode;
mod fields;

pub use content_type::{ContentType, WifiSecurity};
pub use encode::{encode, FALLBACK_PAYLOAD, FALLBACK_TEXT, FALLBACK_URL};
pub use fields::FieldSet;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing payload types from text.
///
/// Encoding itself is total and never fails; these only arise when turning
/// user-facing strings (CLI args, config values) into typed variants.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown content type: {0}")]
    UnknownContentType(String),

    #[error("unknown wifi security type: {0}")]
    UnknownWifiSecurity(String),
}
