
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Lead collection endpoint. Set `LEAD_SUBMIT_URL` at build time to post leads
/// for real; a relative path is resolved against the backend URL. Unset means
/// the mock spreadsheet sink.
pub fn lead_submit_url() -> Option<String> {
    resolve_submit_url(option_env!("LEAD_SUBMIT_URL"))
}

fn resolve_submit_url(raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|url| !url.is_empty())?;
    if raw.starts_with('/') {
        Some(format!("{}{}", get_backend_url(), raw))
    } else {
        Some(raw.to_string())
    }
}

pub const LOADING_SCREEN_MS: u32 = 1500;
pub const OTP_SENT_DELAY_MS: u32 = 1000;
pub const MOCK_SUBMIT_DELAY_MS: u32 = 2000;
pub const TOAST_AUTO_CLOSE_MS: u32 = 5000;

// Demo code, shown to the user in the digit entry hint.
pub const MOCK_OTP: &str = "123456";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_submit_url_means_mock() {
        assert_eq!(resolve_submit_url(None), None);
        assert_eq!(resolve_submit_url(Some("  ")), None);
    }

    #[test]
    fn relative_submit_url_uses_backend() {
        assert_eq!(
            resolve_submit_url(Some("/submit-to-sheets")),
            Some(format!("{}/submit-to-sheets", get_backend_url()))
        );
        assert_eq!(
            resolve_submit_url(Some("https://example.com/leads")),
            Some("https://example.com/leads".to_string())
        );
    }
}
