// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saved configurations. At most one per user is the default.

use crate::error::{ClientError, Result};
use crate::gateway::{ApiRequest, Gateway};
use crate::models::{
    ConfigurationCreate, ConfigurationList, ConfigurationRecord, ConfigurationUpdate,
};
use super::path_segment;

#[derive(Clone)]
pub struct ConfigurationsService {
    gateway: Gateway,
}

impl ConfigurationsService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn create_configuration(
        &self,
        create: &ConfigurationCreate,
    ) -> Result<ConfigurationRecord> {
        create.validate()?;

        let record: ConfigurationRecord = self
            .gateway
            .send_json(&ApiRequest::post("/configurations/").json(create)?)
            .await?;
        tracing::info!(configuration_id = %record.id, name = %record.name, "Configuration created");
        Ok(record)
    }

    pub async fn get_configurations(&self) -> Result<ConfigurationList> {
        self.gateway
            .send_json(&ApiRequest::get("/configurations/"))
            .await
    }

    pub async fn get_configuration(&self, config_id: &str) -> Result<ConfigurationRecord> {
        let path = format!("/configurations/{}", path_segment(config_id)?);
        self.gateway.send_json(&ApiRequest::get(path)).await
    }

    /// The user's default configuration; 404 when none is set.
    pub async fn get_default_configuration(&self) -> Result<ConfigurationRecord> {
        self.gateway
            .send_json(&ApiRequest::get("/configurations/default"))
            .await
    }

    pub async fn update_configuration(
        &self,
        config_id: &str,
        update: &ConfigurationUpdate,
    ) -> Result<ConfigurationRecord> {
        if update.is_empty() {
            return Err(ClientError::Validation("Nothing to update".to_string()));
        }
        update.validate()?;

        let path = format!("/configurations/{}", path_segment(config_id)?);
        self.gateway
            .send_json(&ApiRequest::put(path).json(update)?)
            .await
    }

    pub async fn delete_configuration(&self, config_id: &str) -> Result<()> {
        let path = format!("/configurations/{}", path_segment(config_id)?);
        self.gateway.send(&ApiRequest::delete(path)).await?;
        tracing::info!(configuration_id = config_id, "Configuration deleted");
        Ok(())
    }

    /// Make this the default configuration, unsetting the previous one.
    pub async fn set_as_default(&self, config_id: &str) -> Result<ConfigurationRecord> {
        let path = format!("/configurations/{}/set-default", path_segment(config_id)?);
        self.gateway.send_json(&ApiRequest::post(path)).await
    }
}
