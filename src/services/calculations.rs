// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calculation jobs: create, inspect, cancel, rerun, export.
//!
//! Jobs run asynchronously on the server. [`CalculationsService::wait_for_completion`]
//! polls a job until it reaches a terminal status.

use crate::constants::CalculationStatus;
use crate::error::{ClientError, Result};
use crate::gateway::{ApiRequest, Gateway};
use crate::models::{
    CalculationAction, CalculationCreate, CalculationList, CalculationLogs, CalculationRecord,
    CalculationResults, DateFilterRequest, FilteredResults,
};
use super::path_segment;
use std::time::Duration;
use tokio::time::Instant;

/// Filters for `GET /calculations/`.
#[derive(Debug, Clone, Default)]
pub struct CalculationQuery {
    pub status: Option<CalculationStatus>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// Metadata only, without parameters and file IDs
    pub lightweight: bool,
}

/// Calculations API service.
#[derive(Clone)]
pub struct CalculationsService {
    gateway: Gateway,
}

impl CalculationsService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Submit a new calculation. The server queues it as `pending`.
    pub async fn create_calculation(&self, create: &CalculationCreate) -> Result<CalculationRecord> {
        create.validate()?;

        let record: CalculationRecord = self
            .gateway
            .send_json(&ApiRequest::post("/calculations/").json(create)?)
            .await?;
        tracing::info!(calculation_id = %record.id, name = %record.name, "Calculation created");
        Ok(record)
    }

    pub async fn get_calculations(&self, query: &CalculationQuery) -> Result<CalculationList> {
        let mut request = ApiRequest::get("/calculations/");
        if let Some(status) = query.status {
            request = request.query("status", status);
        }
        if let Some(skip) = query.skip {
            request = request.query("skip", skip);
        }
        if let Some(limit) = query.limit {
            request = request.query("limit", limit);
        }
        if query.lightweight {
            request = request.query("lightweight", true);
        }
        self.gateway.send_json(&request).await
    }

    pub async fn get_calculation(&self, calc_id: &str) -> Result<CalculationResults> {
        let path = format!("/calculations/{}", path_segment(calc_id)?);
        self.gateway.send_json(&ApiRequest::get(path)).await
    }

    pub async fn get_calculation_results(&self, calc_id: &str) -> Result<CalculationResults> {
        let path = format!("/calculations/{}/results", path_segment(calc_id)?);
        self.gateway.send_json(&ApiRequest::get(path)).await
    }

    pub async fn get_calculation_logs(&self, calc_id: &str) -> Result<CalculationLogs> {
        let path = format!("/calculations/{}/logs", path_segment(calc_id)?);
        self.gateway.send_json(&ApiRequest::get(path)).await
    }

    /// Mark a pending or running calculation as cancelled.
    pub async fn cancel_calculation(&self, calc_id: &str) -> Result<CalculationAction> {
        let path = format!("/calculations/{}/cancel", path_segment(calc_id)?);
        let action: CalculationAction = self.gateway.send_json(&ApiRequest::post(path)).await?;
        tracing::info!(calculation_id = calc_id, "Calculation cancelled");
        Ok(action)
    }

    /// Rerun a calculation with its stored parameters. Old results are discarded.
    pub async fn recalculate(&self, calc_id: &str) -> Result<CalculationAction> {
        let path = format!("/calculations/{}/recalculate", path_segment(calc_id)?);
        let action: CalculationAction = self.gateway.send_json(&ApiRequest::post(path)).await?;
        tracing::info!(calculation_id = calc_id, "Calculation restarted");
        Ok(action)
    }

    pub async fn delete_calculation(&self, calc_id: &str) -> Result<()> {
        let path = format!("/calculations/{}", path_segment(calc_id)?);
        self.gateway.send(&ApiRequest::delete(path)).await?;
        tracing::info!(calculation_id = calc_id, "Calculation deleted");
        Ok(())
    }

    /// Export results in `format` (the server default is `csv`); returns the raw file.
    pub async fn export_results(&self, calc_id: &str, format: &str) -> Result<Vec<u8>> {
        let path = format!("/calculations/{}/export", path_segment(calc_id)?);
        let response = self
            .gateway
            .send(&ApiRequest::get(path).query("format", format))
            .await?;
        Ok(response.into_bytes())
    }

    /// Recompute the result tables for a date range of a completed calculation.
    pub async fn filter_by_date_range(
        &self,
        calc_id: &str,
        range: &DateFilterRequest,
    ) -> Result<FilteredResults> {
        range.validate()?;
        let path = format!("/calculations/{}/filter-by-date", path_segment(calc_id)?);
        self.gateway
            .send_json(&ApiRequest::post(path).json(range)?)
            .await
    }

    /// Poll every `interval` until the calculation is completed, failed or
    /// cancelled, or `timeout` elapses.
    pub async fn wait_for_completion(
        &self,
        calc_id: &str,
        interval: Duration,
        timeout: Duration,
    ) -> Result<CalculationResults> {
        let deadline = Instant::now() + timeout;
        loop {
            let calculation = self.get_calculation(calc_id).await?;
            if calculation.status.is_terminal() {
                tracing::info!(
                    calculation_id = calc_id,
                    status = %calculation.status,
                    "Calculation finished"
                );
                return Ok(calculation);
            }
            if Instant::now() + interval > deadline {
                return Err(ClientError::Timeout(format!(
                    "Calculation {} still {} after {:?}",
                    calc_id, calculation.status, timeout
                )));
            }
            tracing::debug!(calculation_id = calc_id, status = %calculation.status, "Waiting");
            tokio::time::sleep(interval).await;
        }
    }
}
