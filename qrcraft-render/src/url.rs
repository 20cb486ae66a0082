//! Pure URL assembly for the rendering service.

use crate::options::RenderOptions;
use qrcraft_payload::ContentType;

/// Builds the rendering-service URL for a payload.
///
/// Query shape (fixed by the service's API):
/// `{base}/v1/create-qr-code/?size={s}x{s}&data={payload}&color={fg}&bgcolor={bg}&margin={m}`
///
/// The payload is percent-encoded; colors have any leading `#` stripped and
/// are passed through otherwise.
#[must_use]
pub fn build_image_url(api_base_url: &str, options: &RenderOptions, payload: &str) -> String {
    let base = api_base_url.trim_end_matches('/');
    let size = options.size_px;
    format!(
        "{base}/v1/create-qr-code/?size={size}x{size}&data={}&color={}&bgcolor={}&margin={}",
        urlencoding::encode(payload),
        strip_hash(&options.foreground),
        strip_hash(&options.background),
        options.margin_px,
    )
}

/// Default file name for a saved QR image: `qrcode-<content-type>.png`.
#[must_use]
pub fn png_file_name(content_type: ContentType) -> String {
    format!("qrcode-{content_type}.png")
}

fn strip_hash(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_hash_only_removes_leading() {
        assert_eq!(strip_hash("#ff0000"), "ff0000");
        assert_eq!(strip_hash("ff0000"), "ff0000");
        assert_eq!(strip_hash("ff#00"), "ff#00");
    }
}
