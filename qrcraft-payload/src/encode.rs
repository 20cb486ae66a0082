//! The payload encoder.
//!
//! Maps a (content type, field set) pair to the exact text embedded in the
//! QR code. The mapping is pure, deterministic and total: any string input
//! is accepted, including empty strings, unicode and reserved URI
//! characters, and a string always comes back.

use crate::{ContentType, FieldSet, WifiSecurity};

/// Link payload used when the link field is empty.
pub const FALLBACK_URL: &str = "https://your-website.com";

/// Text payload used when the text body is empty.
pub const FALLBACK_TEXT: &str = "Your text here";

/// Payload used when the content type and field set shapes do not
/// correspond.
pub const FALLBACK_PAYLOAD: &str = "https://example.com";

/// Encodes a field set into the QR payload string for a content type.
///
/// One deterministic rule per type:
/// - link types pass the link through, or fall back to [`FALLBACK_URL`]
/// - text passes the body through, or falls back to [`FALLBACK_TEXT`]
/// - email/sms/phone produce `mailto:`/`sms:`/`tel:` URIs with
///   percent-encoded query components
/// - wifi produces a `WIFI:T:...;S:...;P:...;;` config string
/// - contact produces a vCard 3.0 block
///
/// If the field set's shape does not match the content type, the encoder
/// returns [`FALLBACK_PAYLOAD`] rather than failing.
///
/// Known limitation, preserved for compatibility with existing codes: the
/// WIFI and vCard formats reserve `;`, `:`, `\` and newlines, but
/// user-supplied values are embedded unescaped.
#[must_use]
pub fn encode(content_type: ContentType, fields: &FieldSet) -> String {
    match (content_type, fields) {
        (ty, FieldSet::Link { link }) if ty.is_link() => link_payload(link),
        (ContentType::Text, FieldSet::Text { body }) => text_payload(body),
        (ContentType::Email, FieldSet::Email { to, subject, body }) => {
            mailto_uri(to, subject, body)
        }
        (ContentType::Sms, FieldSet::Sms { phone, message }) => sms_uri(phone, message),
        (ContentType::Phone, FieldSet::Phone { number }) => tel_uri(number),
        (
            ContentType::Wifi,
            FieldSet::Wifi {
                ssid,
                password,
                security,
            },
        ) => wifi_config(ssid, password, *security),
        (
            ContentType::Contact,
            FieldSet::Contact {
                name,
                phone,
                email,
                organization,
            },
        ) => vcard(name, phone, email, organization),
        _ => FALLBACK_PAYLOAD.to_string(),
    }
}

fn link_payload(link: &str) -> String {
    if link.is_empty() {
        FALLBACK_URL.to_string()
    } else {
        link.to_string()
    }
}

fn text_payload(body: &str) -> String {
    if body.is_empty() {
        FALLBACK_TEXT.to_string()
    } else {
        body.to_string()
    }
}

fn mailto_uri(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

fn sms_uri(phone: &str, message: &str) -> String {
    format!("sms:{phone}?body={}", urlencoding::encode(message))
}

fn tel_uri(number: &str) -> String {
    format!("tel:{number}")
}

// Field order (T, S, P) and the trailing double semicolon are mandatory.
fn wifi_config(ssid: &str, password: &str, security: WifiSecurity) -> String {
    format!("WIFI:T:{security};S:{ssid};P:{password};;")
}

fn vcard(name: &str, phone: &str, email: &str, organization: &str) -> String {
    format!(
        "BEGIN:VCARD\nVERSION:3.0\nFN:{name}\nTEL:{phone}\nEMAIL:{email}\nORG:{organization}\nEND:VCARD"
    )
}
