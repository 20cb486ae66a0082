//! Argument types and request mapping for the QRCraft CLI.
//!
//! Kept in a library crate so integration tests can exercise the
//! subcommand-to-field-set mapping without spawning the binary.

use clap::{Parser, Subcommand};
use qrcraft_payload::{ContentType, FieldSet, WifiSecurity};
use qrcraft_render::RenderOptions;
use std::path::PathBuf;

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "qrcraft")]
#[command(about = "Generate custom QR codes via a remote rendering service")]
pub struct Args {
    #[command(subcommand)]
    pub content: ContentCommand,

    /// QR module color as hex (leading # optional)
    #[arg(long, global = true, default_value = "#000000")]
    pub color: String,

    /// Background color as hex (leading # optional)
    #[arg(long, global = true, default_value = "#ffffff")]
    pub bgcolor: String,

    /// Image width/height in pixels
    #[arg(long, global = true, default_value = "400")]
    pub size: u32,

    /// Quiet-zone margin in pixels
    #[arg(long, global = true, default_value = "20")]
    pub margin: u32,

    /// Output file path (defaults to qrcode-<type>.png)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Print the encoded payload and image URL instead of downloading
    #[arg(long, global = true)]
    pub payload_only: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Args {
    /// Builds the rendering options from the color/size flags.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            foreground: self.color.clone(),
            background: self.bgcolor.clone(),
            size_px: self.size,
            margin_px: self.margin,
        }
    }
}

/// One subcommand per QR content type.
#[derive(Subcommand, Debug)]
pub enum ContentCommand {
    /// Link to a website
    Url {
        /// Website URL
        #[arg(long, default_value = "")]
        link: String,
    },

    /// Link to a hosted PDF file
    Pdf {
        /// Link to the PDF
        #[arg(long, default_value = "")]
        link: String,
    },

    /// Free-form plain text
    Text {
        /// The text to encode
        #[arg(long, default_value = "")]
        body: String,
    },

    /// Prefilled email draft
    Email {
        /// Recipient address
        #[arg(long, default_value = "")]
        to: String,
        /// Subject line
        #[arg(long, default_value = "")]
        subject: String,
        /// Message body
        #[arg(long, default_value = "")]
        body: String,
    },

    /// Prefilled SMS
    Sms {
        /// Destination phone number
        #[arg(long, default_value = "")]
        phone: String,
        /// Message text
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Phone number to dial
    Phone {
        /// Phone number
        #[arg(long, default_value = "")]
        number: String,
    },

    /// WiFi network credentials
    Wifi {
        /// Network name
        #[arg(long, default_value = "")]
        ssid: String,
        /// Network password
        #[arg(long, default_value = "")]
        password: String,
        /// Security mode: wpa, wep or nopass
        #[arg(long, default_value = "WPA")]
        security: WifiSecurity,
    },

    /// Contact card (vCard 3.0)
    Contact {
        /// Full name
        #[arg(long, default_value = "")]
        name: String,
        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,
        /// Email address
        #[arg(long, default_value = "")]
        email: String,
        /// Organization
        #[arg(long, default_value = "")]
        organization: String,
    },

    /// App store link
    App {
        /// Store link
        #[arg(long, default_value = "")]
        link: String,
    },

    /// Multi-purpose link
    Multi {
        /// The link
        #[arg(long, default_value = "")]
        link: String,
    },
}

impl ContentCommand {
    /// Returns the content type this subcommand selects.
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Url { .. } => ContentType::Url,
            Self::Pdf { .. } => ContentType::Pdf,
            Self::Text { .. } => ContentType::Text,
            Self::Email { .. } => ContentType::Email,
            Self::Sms { .. } => ContentType::Sms,
            Self::Phone { .. } => ContentType::Phone,
            Self::Wifi { .. } => ContentType::Wifi,
            Self::Contact { .. } => ContentType::Contact,
            Self::App { .. } => ContentType::App,
            Self::Multi { .. } => ContentType::Multi,
        }
    }

    /// Converts the parsed subcommand into an encoder request.
    #[must_use]
    pub fn into_request(self) -> (ContentType, FieldSet) {
        let content_type = self.content_type();
        let fields = match self {
            Self::Url { link } | Self::Pdf { link } | Self::App { link } | Self::Multi { link } => {
                FieldSet::Link { link }
            }
            Self::Text { body } => FieldSet::Text { body },
            Self::Email { to, subject, body } => FieldSet::Email { to, subject, body },
            Self::Sms { phone, message } => FieldSet::Sms { phone, message },
            Self::Phone { number } => FieldSet::Phone { number },
            Self::Wifi {
                ssid,
                password,
                security,
            } => FieldSet::Wifi {
                ssid,
                password,
                security,
            },
            Self::Contact {
                name,
                phone,
                email,
                organization,
            } => FieldSet::Contact {
                name,
                phone,
                email,
                organization,
            },
        };
        (content_type, fields)
    }
}
