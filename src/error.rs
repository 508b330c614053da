// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.

use reqwest::StatusCode;

/// Errors returned by the gateway and the services built on it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No response was received (connect failure, timeout, broken body).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response that was not absorbed by token recovery.
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Access token refresh failed. The session has already been cleared.
    #[error("Session recovery failed: {0}")]
    AuthRecovery(#[from] AuthRecoveryError),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(#[from] crate::session::StoreError),

    /// Input rejected before any request was made.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A polled job did not finish in time.
    #[error("Timed out: {0}")]
    Timeout(String),
}

/// Why a token refresh could not recover the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthRecoveryError {
    #[error("no refresh token stored")]
    MissingRefreshToken,

    #[error("refresh request failed: {0}")]
    Network(String),

    #[error("refresh rejected with HTTP {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("refresh response invalid: {0}")]
    InvalidResponse(String),

    /// Another request already gave up on this session.
    #[error("session was invalidated by a concurrent request")]
    SessionInvalidated,
}

impl ClientError {
    /// HTTP status of the failure, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::AuthRecovery(AuthRecoveryError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Whether the caller must log in again before retrying.
    pub fn requires_login(&self) -> bool {
        match self {
            ClientError::AuthRecovery(_) => true,
            ClientError::Http { status, .. } => *status == StatusCode::UNAUTHORIZED,
            _ => false,
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
