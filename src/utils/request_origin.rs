//! Request provenance helpers: public base URL and client address.

use axum::http::{HeaderMap, header};
use std::net::SocketAddr;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_REAL_IP: &str = "x-real-ip";

/// Host used when a request carries no `Host` header at all.
const FALLBACK_HOST: &str = "localhost";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Returns the base URL that short codes are appended to.
///
/// A configured `public_base_url` always wins. Otherwise the base is
/// `http://{Host}/`; with `behind_proxy` set, `X-Forwarded-Proto` and
/// `X-Forwarded-Host` take precedence over the scheme and `Host`.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com:8080".parse().unwrap());
///
/// assert_eq!(base_url(None, &headers, false), "http://s.example.com:8080/");
/// ```
pub fn base_url(public_base_url: Option<&str>, headers: &HeaderMap, behind_proxy: bool) -> String {
    if let Some(configured) = public_base_url {
        return format!("{}/", configured.trim_end_matches('/'));
    }

    let forwarded = |name| {
        if behind_proxy {
            header_str(headers, name).and_then(|v| v.split(',').next()).map(str::trim)
        } else {
            None
        }
    };

    let scheme = forwarded(X_FORWARDED_PROTO).unwrap_or("http");
    let host = forwarded(X_FORWARDED_HOST)
        .or_else(|| header_str(headers, header::HOST.as_str()))
        .unwrap_or(FALLBACK_HOST);

    format!("{scheme}://{host}/")
}

/// Returns the client address recorded as link provenance.
///
/// With `behind_proxy` set, the first `X-Forwarded-For` entry (or `X-Real-IP`) is
/// trusted; otherwise the socket peer address is used.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>, behind_proxy: bool) -> Option<String> {
    if behind_proxy {
        let forwarded = header_str(headers, X_FORWARDED_FOR)
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| header_str(headers, X_REAL_IP));

        if let Some(ip) = forwarded {
            return Some(ip.to_string());
        }
    }

    peer.map(|addr| addr.ip().to_string())
}

/// Returns the `User-Agent` header, or an empty string when absent.
pub fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
