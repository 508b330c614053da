// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saved calculation configurations.

use super::calculation::validate_name;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Engine parameter sections, same shape as a calculation's `input_params`
    pub config_data: Value,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationList {
    pub total: u64,
    pub configurations: Vec<ConfigurationRecord>,
}

/// Payload for `POST /configurations/`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub config_data: Value,
    pub is_default: bool,
}

/// Payload for `PUT /configurations/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigurationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl ConfigurationCreate {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_config_data(&self.config_data)
    }
}

impl ConfigurationUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.config_data.is_none()
            && self.is_default.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(data) = &self.config_data {
            validate_config_data(data)?;
        }
        Ok(())
    }
}

fn validate_config_data(data: &Value) -> Result<()> {
    if data.is_object() {
        Ok(())
    } else {
        Err(ClientError::Validation(
            "config_data must be a JSON object".to_string(),
        ))
    }
}
