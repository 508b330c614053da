// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated request gateway.
//!
//! Every call goes through [`Gateway::send`], which:
//! - Attaches `Authorization: Bearer <token>` when an access token is stored
//! - On a 401 for the initial attempt, refreshes the access token once and
//!   retries the request once with the new token
//! - On refresh failure, clears the session and emits
//!   [`AuthEvent::SessionInvalidated`]
//!
//! Refreshes are serialized: concurrent 401s produce a single refresh call
//! and the waiters reuse its token.

pub mod request;

pub use request::{ApiRequest, ApiResponse, Attempt, MultipartFile, RequestBody};

use crate::config::Config;
use crate::error::{AuthRecoveryError, ClientError, Result};
use crate::models::{RefreshRequest, RefreshResponse};
use crate::session::Session;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

/// Path of the token refresh endpoint, relative to the API root.
pub const REFRESH_PATH: &str = "/auth/refresh";

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Emitted when the gateway gives up on the stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SessionInvalidated { reason: AuthRecoveryError },
}

/// HTTP gateway to the portal API with token injection and refresh recovery.
#[derive(Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    /// Held for the duration of a refresh attempt.
    refresh_lock: Arc<Mutex<()>>,
    events: broadcast::Sender<AuthEvent>,
}

impl Gateway {
    /// Create a gateway for `config.api_v1_url()` over the given session.
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ClientError::from_transport)?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            http,
            base_url: config.api_v1_url(),
            session,
            refresh_lock: Arc::new(Mutex::new(())),
            events,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Subscribe to session invalidation events.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    /// Send a request, recovering once from an expired access token.
    ///
    /// Returns the 2xx response, or:
    /// - `ClientError::Network` if no response arrived
    /// - `ClientError::Http` for any other non-2xx, including a 401 on the retry
    /// - `ClientError::AuthRecovery` if the refresh failed (session cleared)
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut attempt = Attempt::Initial;
        let mut token = self.current_token();

        loop {
            let response = self.dispatch(request, token.as_deref(), attempt).await?;

            match (response.status(), attempt) {
                (StatusCode::UNAUTHORIZED, Attempt::Initial) if request.auth_recovery() => {
                    tracing::info!(
                        method = %request.method(),
                        path = request.path(),
                        "Request unauthorized, attempting token refresh"
                    );
                    token = Some(self.recover(token.as_deref()).await?);
                    attempt = Attempt::Retry;
                }
                _ => return response.error_for_status(),
            }
        }
    }

    /// Send a request and decode its JSON body.
    pub async fn send_json<T: for<'de> Deserialize<'de>>(&self, request: &ApiRequest) -> Result<T> {
        self.send(request).await?.json()
    }

    /// Stored access token. A store failure reads as "no token".
    fn current_token(&self) -> Option<String> {
        match self.session.access_token() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read access token, sending unauthenticated");
                None
            }
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue one HTTP call and buffer its response, whatever the status.
    async fn dispatch(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
        attempt: Attempt,
    ) -> Result<ApiResponse> {
        let mut builder = self
            .http
            .request(request.method().clone(), self.url(request.path()))
            .headers(request.headers().clone());

        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body() {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(pairs) => builder.form(pairs),
            RequestBody::Multipart(file) => {
                let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime_type)
                    .map_err(|e| ClientError::Validation(format!("Invalid MIME type: {}", e)))?;
                builder.multipart(reqwest::multipart::Form::new().part(file.field.clone(), part))
            }
        };

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(
                method = %request.method(),
                path = request.path(),
                error = %e,
                "Request failed"
            );
            ClientError::from_transport(e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(ClientError::from_transport)?
            .to_vec();

        tracing::debug!(
            method = %request.method(),
            path = request.path(),
            status = status.as_u16(),
            attempt = attempt.as_str(),
            authenticated = token.is_some(),
            "Request completed"
        );

        Ok(ApiResponse::new(status, headers, body))
    }

    /// Obtain a usable access token after `failed_token` was rejected.
    ///
    /// Runs under the refresh lock. If another caller already replaced or
    /// cleared the token while we waited, its outcome is reused.
    async fn recover(&self, failed_token: Option<&str>) -> Result<String> {
        let _guard = self.refresh_lock.lock().await;

        match (self.current_token(), failed_token) {
            (Some(current), failed) if failed != Some(current.as_str()) => {
                tracing::debug!("Access token already refreshed by a concurrent request");
                return Ok(current);
            }
            (None, Some(_)) => {
                tracing::debug!("Session already invalidated by a concurrent request");
                return Err(AuthRecoveryError::SessionInvalidated.into());
            }
            _ => {}
        }

        match self.refresh_access_token().await {
            Ok(access_token) => {
                if let Err(e) = self.session.set_access_token(&access_token) {
                    tracing::warn!(error = %e, "Failed to persist refreshed access token");
                }
                tracing::info!("Access token refreshed");
                Ok(access_token)
            }
            Err(reason) => {
                self.invalidate(reason.clone());
                Err(reason.into())
            }
        }
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// The call is sent without an `Authorization` header and is never
    /// itself subject to recovery.
    async fn refresh_access_token(&self) -> std::result::Result<String, AuthRecoveryError> {
        let refresh_token = match self.session.refresh_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::info!("No refresh token stored, cannot refresh");
                return Err(AuthRecoveryError::MissingRefreshToken);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read refresh token");
                return Err(AuthRecoveryError::MissingRefreshToken);
            }
        };

        let response = self
            .http
            .post(self.url(REFRESH_PATH))
            .json(&RefreshRequest {
                refresh_token: &refresh_token,
            })
            .send()
            .await
            .map_err(|e| AuthRecoveryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Token refresh rejected");
            return Err(AuthRecoveryError::Rejected { status, body });
        }

        let refreshed: RefreshResponse = response
            .json()
            .await
            .map_err(|e| AuthRecoveryError::InvalidResponse(e.to_string()))?;

        if refreshed.access_token.is_empty() {
            return Err(AuthRecoveryError::InvalidResponse(
                "empty access_token".to_string(),
            ));
        }

        Ok(refreshed.access_token)
    }

    /// Clear the session and notify subscribers.
    fn invalidate(&self, reason: AuthRecoveryError) {
        tracing::warn!(reason = %reason, "Token refresh failed, clearing session");

        if let Err(e) = self.session.clear() {
            tracing::error!(error = %e, "Failed to clear session");
        }

        // No subscribers is fine
        let _ = self.events.send(AuthEvent::SessionInvalidated { reason });
    }
}
