//! Request headers for the notes API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// JSON content type only; used by the unauthenticated endpoints.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// JSON content type plus `Authorization: <token>`.
///
/// The token is sent raw, without a `Bearer` prefix. With no token the
/// Authorization header is simply left out; protected views are already behind
/// the route guard, so nothing is validated here.
pub fn auth_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = json_headers();
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return headers;
    };
    match HeaderValue::from_str(token) {
        Ok(mut value) => {
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Err(_) => {
            tracing::warn!("Session token is not a valid header value; sending request without it");
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_sent_raw() {
        let headers = auth_headers(Some("abc.def.ghi"));
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTHORIZATION], "abc.def.ghi");
    }

    #[test]
    fn test_missing_token_leaves_header_out() {
        let headers = auth_headers(None);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());

        assert!(auth_headers(Some("")).get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_unencodable_token_is_dropped() {
        let headers = auth_headers(Some("line\nbreak"));
        assert!(headers.get(AUTHORIZATION).is_none());
    }
}
