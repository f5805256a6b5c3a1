//! Failure classifier
//!
//! Maps a dispatch error to one of four classes that decide recovery. The
//! checks are ordered and the first match wins: unauthorized, then TLS, then
//! generic network, then unhandled. TLS is probed before network because a
//! certificate failure also reports as a connect error.

use crate::utils::errors::DomovoyError;

/// Failure classes recognized by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// HTTP 401: the session is no longer valid
    Unauthorized,
    /// Certificate or TLS handshake failure
    Tls,
    /// Connection refused, DNS failure, timeout, or other transport failure
    Network,
    /// Everything else; re-raised to the caller untouched
    Unhandled,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Unauthorized => "unauthorized",
            FailureKind::Tls => "tls",
            FailureKind::Network => "network",
            FailureKind::Unhandled => "unhandled",
        }
    }

    /// Whether this class routes to the offline responder
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(
            self,
            FailureKind::Unauthorized | FailureKind::Tls | FailureKind::Network
        )
    }
}

/// Classify a dispatch error
pub fn classify(error: &DomovoyError) -> FailureKind {
    match error {
        DomovoyError::Unauthorized => FailureKind::Unauthorized,
        DomovoyError::Server { status: 401, .. } => FailureKind::Unauthorized,
        DomovoyError::Http(e) => {
            if is_tls_failure(e) {
                FailureKind::Tls
            } else if e.is_connect() || e.is_timeout() {
                FailureKind::Network
            } else {
                FailureKind::Unhandled
            }
        }
        _ => FailureKind::Unhandled,
    }
}

/// reqwest wraps TLS failures inside connect errors; walk the source chain
/// and look for certificate language.
fn is_tls_failure(error: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(err) = source {
        let text = err.to_string().to_lowercase();
        if text.contains("certificate")
            || text.contains("tls")
            || text.contains("ssl")
            || text.contains("handshake")
        {
            return true;
        }
        source = err.source();
    }
    false
}
