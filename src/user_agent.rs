//! User-Agent string sent with download requests.

/// Default User-Agent for download requests (identifies the tool and version).
#[must_use]
pub(crate) fn default_download_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("grabfile/{version}")
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_download_ua_contains_crate_version() {
        let download_ua = default_download_user_agent();
        assert_eq!(
            env!("CARGO_PKG_VERSION"),
            download_ua
                .strip_prefix("grabfile/")
                .expect("download UA has version"),
            "download UA must contain crate version"
        );
    }
}
