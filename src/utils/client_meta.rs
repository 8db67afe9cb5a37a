//! Request metadata captured for click analytics.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use std::convert::Infallible;
use std::net::SocketAddr;

/// Client metadata recorded with every click.
///
/// Each field is an empty string when the request does not carry it.
///
/// # IP Resolution
///
/// 1. First entry of `X-Forwarded-For`, if present and non-empty
/// 2. Peer socket address (requires `into_make_service_with_connect_info`)
/// 3. Empty string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientMeta {
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: String,
}

impl ClientMeta {
    /// Builds metadata from request headers and an optional peer address.
    pub fn from_parts(headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        let forwarded = header_str(headers, "x-forwarded-for")
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let ip_address = if forwarded.is_empty() {
            peer.map(|addr| addr.ip().to_string()).unwrap_or_default()
        } else {
            forwarded
        };

        Self {
            ip_address,
            user_agent: header_str(headers, header::USER_AGENT.as_str()).to_string(),
            referrer: header_str(headers, header::REFERER.as_str()).to_string(),
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self::from_parts(&parts.headers, peer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("192.168.1.10:54321".parse().unwrap())
    }

    #[test]
    fn test_forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"),
        );

        let meta = ClientMeta::from_parts(&headers, peer());
        assert_eq!(meta.ip_address, "203.0.113.7");
    }

    #[test]
    fn test_falls_back_to_peer_address() {
        let meta = ClientMeta::from_parts(&HeaderMap::new(), peer());
        assert_eq!(meta.ip_address, "192.168.1.10");
    }

    #[test]
    fn test_missing_everything_is_empty() {
        let meta = ClientMeta::from_parts(&HeaderMap::new(), None);
        assert_eq!(meta, ClientMeta::default());
    }

    #[test]
    fn test_user_agent_and_referer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        headers.insert(header::REFERER, HeaderValue::from_static("https://google.com"));

        let meta = ClientMeta::from_parts(&headers, None);
        assert_eq!(meta.user_agent, "Mozilla/5.0");
        assert_eq!(meta.referrer, "https://google.com");
        assert!(meta.ip_address.is_empty());
    }
}
