//! Per-type field sets.
//!
//! A `FieldSet` holds the user-entered values for one content type. All
//! fields are plain strings defaulting to empty; empty is always a valid
//! input to the encoder, never an error.

use crate::{ContentType, WifiSecurity};
use serde::{Deserialize, Serialize};

/// The typed field values behind a QR code, one variant per field shape.
///
/// `Url`, `Pdf`, `App` and `Multi` content types all share the `Link`
/// variant; everything else has a shape of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldSet {
    /// A bare link (url/pdf/app/multi).
    Link {
        #[serde(default)]
        link: String,
    },

    /// Free-form text.
    Text {
        #[serde(default)]
        body: String,
    },

    /// An email draft.
    Email {
        #[serde(default)]
        to: String,
        #[serde(default)]
        subject: String,
        #[serde(default)]
        body: String,
    },

    /// A prefilled SMS.
    Sms {
        #[serde(default)]
        phone: String,
        #[serde(default)]
        message: String,
    },

    /// A phone number to dial.
    Phone {
        #[serde(default)]
        number: String,
    },

    /// WiFi network credentials.
    Wifi {
        #[serde(default)]
        ssid: String,
        #[serde(default)]
        password: String,
        #[serde(default)]
        security: WifiSecurity,
    },

    /// A vCard contact.
    Contact {
        #[serde(default)]
        name: String,
        #[serde(default)]
        phone: String,
        #[serde(default)]
        email: String,
        #[serde(default)]
        organization: String,
    },
}

impl FieldSet {
    /// Returns the empty field set for a content type, reproducing the UI's
    /// reset-on-tab-switch behavior: link types start from their preset
    /// link (empty for `Url`/`Multi`, an example link for `Pdf`/`App`),
    /// everything else starts fully blank.
    #[must_use]
    pub fn default_for(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Url | ContentType::Pdf | ContentType::App | ContentType::Multi => {
                Self::Link {
                    link: content_type.preset_link().to_string(),
                }
            }
            ContentType::Text => Self::Text {
                body: String::new(),
            },
            ContentType::Email => Self::Email {
                to: String::new(),
                subject: String::new(),
                body: String::new(),
            },
            ContentType::Sms => Self::Sms {
                phone: String::new(),
                message: String::new(),
            },
            ContentType::Phone => Self::Phone {
                number: String::new(),
            },
            ContentType::Wifi => Self::Wifi {
                ssid: String::new(),
                password: String::new(),
                security: WifiSecurity::default(),
            },
            ContentType::Contact => Self::Contact {
                name: String::new(),
                phone: String::new(),
                email: String::new(),
                organization: String::new(),
            },
        }
    }

    /// Returns true if this field set's shape corresponds to the given
    /// content type.
    #[must_use]
    pub fn matches(&self, content_type: ContentType) -> bool {
        match self {
            Self::Link { .. } => content_type.is_link(),
            Self::Text { .. } => content_type == ContentType::Text,
            Self::Email { .. } => content_type == ContentType::Email,
            Self::Sms { .. } => content_type == ContentType::Sms,
            Self::Phone { .. } => content_type == ContentType::Phone,
            Self::Wifi { .. } => content_type == ContentType::Wifi,
            Self::Contact { .. } => content_type == ContentType::Contact,
        }
    }
}
