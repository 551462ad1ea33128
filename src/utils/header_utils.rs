use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, Request};
use axum::http::HeaderMap;

/// Extract the client IP address for logging
///
/// Checks, in order, the first entry of `X-Forwarded-For`, `X-Real-IP`, and
/// the peer address recorded by `into_make_service_with_connect_info`.
///
/// # Examples
///
/// ```
/// use axum::{body::Body, extract::Request};
/// use kitten_tts_server::utils::header_utils::extract_client_ip;
///
/// let req = Request::builder()
///     .header("x-real-ip", "10.0.0.7")
///     .body(Body::empty())
///     .unwrap();
/// assert_eq!(extract_client_ip(&req), Some("10.0.0.7".parse().unwrap()));
/// ```
pub fn extract_client_ip(req: &Request) -> Option<IpAddr> {
    ip_from_headers(req.headers()).or_else(|| {
        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
    })
}

fn ip_from_headers(headers: &HeaderMap) -> Option<IpAddr> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(ip) = forwarded
            .split(',')
            .next()
            .and_then(|first| first.trim().parse().ok())
        {
            return Some(ip);
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with(headers: &[(&str, &str)]) -> Request {
        let mut builder = Request::builder();
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_forwarded_for_takes_first_entry() {
        let req = request_with(&[("x-forwarded-for", "203.0.113.9, 10.0.0.1")]);
        assert_eq!(extract_client_ip(&req), Some("203.0.113.9".parse().unwrap()));
    }

    #[test]
    fn test_forwarded_for_preferred_over_real_ip() {
        let req = request_with(&[("x-forwarded-for", "203.0.113.9"), ("x-real-ip", "10.0.0.7")]);
        assert_eq!(extract_client_ip(&req), Some("203.0.113.9".parse().unwrap()));
    }

    #[test]
    fn test_invalid_forwarded_for_falls_back() {
        let req = request_with(&[("x-forwarded-for", "garbage"), ("x-real-ip", "::1")]);
        assert_eq!(extract_client_ip(&req), Some("::1".parse().unwrap()));
    }

    #[test]
    fn test_connect_info_fallback() {
        let mut req = request_with(&[]);
        let addr: SocketAddr = "192.168.1.20:51000".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(extract_client_ip(&req), Some(addr.ip()));
    }

    #[test]
    fn test_no_source() {
        assert_eq!(extract_client_ip(&request_with(&[])), None);
    }
}
