//! Permissive CORS handling.
//!
//! The classify endpoint is meant for unrestricted cross-origin browser
//! access: every response carries `Access-Control-Allow-Origin: *`, and
//! preflight OPTIONS requests are answered directly with the wildcard
//! method/header grants, before any routing happens.

use bytes::Bytes;
use http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
};
use http::{Response, StatusCode};
use http_body_util::Full;

/// Preflight cache duration advertised to browsers, in seconds.
const MAX_AGE_SECS: u32 = 3600;

const WILDCARD: HeaderValue = HeaderValue::from_static("*");

/// Adds the permissive CORS headers to a response.
pub fn apply<B>(response: &mut Response<B>) {
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
}

/// Builds the response to a preflight OPTIONS request.
///
/// All origins, methods, and headers are allowed, so the preflight never
/// inspects the request; it always grants.
#[must_use]
pub fn preflight_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::NO_CONTENT;

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, WILDCARD);
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, WILDCARD);
    if let Ok(max_age) = HeaderValue::from_str(&MAX_AGE_SECS.to_string()) {
        headers.insert(ACCESS_CONTROL_MAX_AGE, max_age);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_wildcard_origin() {
        let mut response = Response::new(Full::new(Bytes::new()));
        apply(&mut response);

        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[test]
    fn test_preflight_is_no_content() {
        let response = preflight_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_preflight_grants_everything() {
        let response = preflight_response();
        let headers = response.headers();

        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "*");
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "*");
        assert_eq!(headers.get(ACCESS_CONTROL_MAX_AGE).unwrap(), "3600");
    }
}
