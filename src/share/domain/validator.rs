use crate::core::platform::{PlatformError, PlatformResult};

// Trims the caller supplied ISBN and rejects blank values before any external
// call. Any other string is forwarded to lookup as-is; no format or checksum
// validation happens here.
pub(crate) fn normalize(raw: &str) -> PlatformResult<String> {
    let isbn = raw.trim();
    if isbn.is_empty() {
        return Err(PlatformError::validation("blank isbn", Some("blank-isbn".to_string())));
    }
    Ok(isbn.to_string())
}
