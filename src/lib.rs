// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Portal client: typed access to the energy calculation portal API
//!
//! This crate provides the authenticated HTTP gateway (bearer injection,
//! one-shot token refresh, session invalidation) and the auth, files,
//! calculations, configurations and users services built on it.

pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod models;
pub mod navigation;
pub mod services;
pub mod session;

use config::Config;
use gateway::Gateway;
use services::{
    AuthService, CalculationsService, ConfigurationsService, FilesService, UsersService,
};
use session::Session;

/// Shared client state. Every service goes through the same gateway.
#[derive(Clone)]
pub struct PortalClient {
    pub config: Config,
    pub gateway: Gateway,
    pub auth: AuthService,
    pub files: FilesService,
    pub calculations: CalculationsService,
    pub configurations: ConfigurationsService,
    pub users: UsersService,
}

impl PortalClient {
    pub fn new(config: Config, session: Session) -> error::Result<Self> {
        let gateway = Gateway::new(&config, session)?;
        Ok(Self {
            auth: AuthService::new(gateway.clone()),
            files: FilesService::new(gateway.clone()),
            calculations: CalculationsService::new(gateway.clone()),
            configurations: ConfigurationsService::new(gateway.clone()),
            users: UsersService::new(gateway.clone()),
            gateway,
            config,
        })
    }
}
