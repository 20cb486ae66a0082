//! Content type and WiFi security enumerations.
//!
//! A `ContentType` is the semantic category a QR code encodes. Several
//! variants (`Pdf`, `App`, `Multi`) exist only for labeling purposes and
//! encode exactly like `Url`.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of data a QR code encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A website link.
    Url,
    /// A link to a hosted PDF file. Encodes like `Url`.
    Pdf,
    /// Free-form plain text.
    Text,
    /// An email draft (`mailto:` URI).
    Email,
    /// A prefilled SMS (`sms:` URI).
    Sms,
    /// A phone number (`tel:` URI).
    Phone,
    /// WiFi network credentials (`WIFI:` config string).
    Wifi,
    /// A contact card (vCard 3.0).
    Contact,
    /// An app store link. Encodes like `Url`.
    App,
    /// A multi-purpose link. Encodes like `Url`.
    Multi,
}

impl ContentType {
    /// Every content type, in UI tab order.
    pub const ALL: &'static [ContentType] = &[
        Self::Url,
        Self::Pdf,
        Self::Text,
        Self::Email,
        Self::Sms,
        Self::Phone,
        Self::Wifi,
        Self::Contact,
        Self::App,
        Self::Multi,
    ];

    /// Returns the lowercase slug used in CLI args, file names and serde.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Phone => "phone",
            Self::Wifi => "wifi",
            Self::Contact => "contact",
            Self::App => "app",
            Self::Multi => "multi",
        }
    }

    /// Returns true if this type encodes a bare link (`Url`, `Pdf`, `App`,
    /// `Multi` all share the link payload rule).
    #[must_use]
    pub const fn is_link(&self) -> bool {
        matches!(self, Self::Url | Self::Pdf | Self::App | Self::Multi)
    }

    /// The link value preselected when the user switches to this type.
    ///
    /// `Pdf` and `App` start with an example link so the preview shows a
    /// plausible code; every other link type starts empty.
    #[must_use]
    pub const fn preset_link(&self) -> &'static str {
        match self {
            Self::Pdf => "https://example.com/file.pdf",
            Self::App => "https://apps.apple.com/app-id",
            _ => "",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(Self::Url),
            "pdf" => Ok(Self::Pdf),
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "phone" => Ok(Self::Phone),
            "wifi" => Ok(Self::Wifi),
            "contact" => Ok(Self::Contact),
            "app" => Ok(Self::App),
            "multi" => Ok(Self::Multi),
            other => Err(Error::UnknownContentType(other.to_string())),
        }
    }
}

/// WiFi network security mode, as written into the `WIFI:T:...` field.
///
/// The wire forms are fixed by the format recognized by mobile camera apps:
/// `WPA`, `WEP`, or `nopass` (exact case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WifiSecurity {
    /// WPA/WPA2 personal.
    #[serde(rename = "WPA")]
    Wpa,
    /// Legacy WEP.
    #[serde(rename = "WEP")]
    Wep,
    /// Open network, no encryption.
    #[serde(rename = "nopass")]
    Nopass,
}

impl WifiSecurity {
    /// Returns the exact token embedded in the WIFI config string.
    #[must_use]
    pub const fn wire_form(&self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::Nopass => "nopass",
        }
    }
}

impl Default for WifiSecurity {
    fn default() -> Self {
        Self::Wpa
    }
}

impl fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_form())
    }
}

impl FromStr for WifiSecurity {
    type Err = Error;

    /// Case-insensitive for CLI ergonomics; the wire form stays exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wpa" | "wpa2" => Ok(Self::Wpa),
            "wep" => Ok(Self::Wep),
            "nopass" | "none" | "open" => Ok(Self::Nopass),
            other => Err(Error::UnknownWifiSecurity(other.to_string())),
        }
    }
}
