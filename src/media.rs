//! Uploaded image handling.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Fallback MIME type for uploads without a usable content type.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Encode raw bytes as a `data:` URL for image fields.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_data_url() {
        assert_eq!(
            to_data_url("image/png", &[0x89, b'P', b'N', b'G']),
            "data:image/png;base64,iVBORw=="
        );
    }

    #[test]
    fn test_missing_mime_falls_back() {
        assert_eq!(
            to_data_url(" ", b""),
            "data:application/octet-stream;base64,"
        );
    }
}
