//! Rendering configuration and per-image options.

use serde::{Deserialize, Serialize};

/// Configuration for the rendering client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Base URL of the rendering service (e.g. `https://api.qrserver.com`).
    /// Overridable so tests can point at a local mock server.
    pub api_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.qrserver.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Visual options for a single rendered image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Foreground (module) color as a hex string; a leading `#` is allowed
    /// and stripped before the request.
    pub foreground: String,
    /// Background color, same format as `foreground`.
    pub background: String,
    /// Output image width and height in pixels (images are square).
    pub size_px: u32,
    /// Quiet-zone margin in pixels.
    pub margin_px: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
            size_px: 400,
            margin_px: 20,
        }
    }
}
