//! Remote QR image rendering client for QRCraft.
//!
//! The actual QR encoding is delegated to an external image service
//! (`api.qrserver.com` by default): this crate assembles the rendering URL
//! for a payload, fetches the resulting PNG bytes, and saves them to disk.
//! At most one download is in flight at a time; a concurrent request fails
//! fast instead of piling up.

mod error;
mod options;
mod renderer;
mod url;

pub use error::{RenderError, RenderResult};
pub use options::{RenderConfig, RenderOptions};
pub use renderer::QrRenderer;
pub use url::{build_image_url, png_file_name};
