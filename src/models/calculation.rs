// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calculation job models.
//!
//! Input parameters and result tables are produced by the optimization
//! engine and are kept as raw JSON.

use crate::constants::CalculationStatus;
use crate::error::{ClientError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Date format of the `filter-by-date` endpoint.
const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calculation metadata as returned by `POST /calculations/` and the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Calculation ID (UUID string)
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: CalculationStatus,
    /// Engine parameters; empty in lightweight listings
    #[serde(default)]
    pub input_params: Value,
    #[serde(default)]
    pub file_ids: Option<Vec<String>>,
    pub created_at: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub execution_time_seconds: Option<f64>,
    #[serde(default)]
    pub battery_cycles: Option<f64>,
    #[serde(default)]
    pub battery_cycles_year: Option<f64>,
}

/// Listing response for `GET /calculations/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationList {
    pub total: u64,
    pub calculations: Vec<CalculationRecord>,
}

/// Full calculation with its results (`GET /calculations/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResults {
    pub id: String,
    pub name: String,
    pub status: CalculationStatus,
    #[serde(default)]
    pub results: Option<Value>,
    #[serde(default)]
    pub cost_table: Option<Value>,
    #[serde(default)]
    pub energy_balance: Option<Value>,
    #[serde(default)]
    pub financial_balance: Option<Value>,
    #[serde(default)]
    pub charts_data: Option<Value>,
    #[serde(default)]
    pub cost_table_year: Option<Value>,
    #[serde(default)]
    pub energy_balance_year: Option<Value>,
    #[serde(default)]
    pub financial_balance_year: Option<Value>,
    #[serde(default)]
    pub battery_cycles_year: Option<f64>,
    #[serde(default)]
    pub input_metadata: Option<Value>,
    #[serde(default)]
    pub input_params: Option<Value>,
    #[serde(default)]
    pub execution_time_seconds: Option<f64>,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// One engine log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationLogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationLogs {
    pub calculation_id: String,
    pub total_logs: u64,
    pub logs: Vec<CalculationLogEntry>,
}

/// Acknowledgement of `cancel` and `recalculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationAction {
    pub message: String,
    pub calculation_id: String,
    #[serde(default)]
    pub status: Option<CalculationStatus>,
}

/// Payload for `POST /calculations/`.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// Engine sections (`Optimalizace`, `Baterie`, `FVE`, `Ceny`, `Pmax`)
    pub input_params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
}

impl CalculationCreate {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if !self.input_params.is_object() {
            return Err(ClientError::Validation(
                "input_params must be a JSON object".to_string(),
            ));
        }
        Ok(())
    }
}

/// Date range for `POST /calculations/{id}/filter-by-date` (YYYY-MM-DD).
#[derive(Debug, Clone, Serialize)]
pub struct DateFilterRequest {
    pub date_from: String,
    pub date_to: String,
}

impl DateFilterRequest {
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self {
            date_from: date_from.format(FILTER_DATE_FORMAT).to_string(),
            date_to: date_to.format(FILTER_DATE_FORMAT).to_string(),
        }
    }

    /// Both dates must parse and the range must not be reversed.
    pub fn validate(&self) -> Result<()> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s, FILTER_DATE_FORMAT)
                .map_err(|_| ClientError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
        };
        let from = parse(&self.date_from)?;
        let to = parse(&self.date_to)?;
        if from > to {
            return Err(ClientError::Validation(format!(
                "date_from {} is after date_to {}",
                self.date_from, self.date_to
            )));
        }
        Ok(())
    }
}

/// Results recomputed for a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredResults {
    pub calculation_id: String,
    pub date_from: String,
    pub date_to: String,
    #[serde(default)]
    pub cost_table: Option<Value>,
    #[serde(default)]
    pub energy_balance: Option<Value>,
    #[serde(default)]
    pub financial_balance: Option<Value>,
    #[serde(default)]
    pub results: Option<Value>,
}

/// Names of calculations and configurations: 1-255 characters, not blank.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.chars().count() > 255 {
        return Err(ClientError::Validation(
            "Name must be 1-255 characters".to_string(),
        ));
    }
    Ok(())
}
