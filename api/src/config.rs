//! Compile-time configuration for the REST backend.

/// Base URL every endpoint path is joined onto.
///
/// Overridden at build time with the `LIFEDROP_API_URL` environment
/// variable; the default matches the local development server.
pub const API_BASE_URL: &str = match option_env!("LIFEDROP_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        // Endpoint paths all start with '/', so the base must not end with one.
        assert!(!API_BASE_URL.ends_with('/'));
    }
}
