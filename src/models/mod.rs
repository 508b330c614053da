// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models exchanged with the portal API.

pub mod auth;
pub mod calculation;
pub mod configuration;
pub mod file;
pub mod user;

pub use auth::{LoginResponse, RefreshRequest, RefreshResponse};
pub use calculation::{
    CalculationAction, CalculationCreate, CalculationList, CalculationLogEntry, CalculationLogs,
    CalculationRecord, CalculationResults, DateFilterRequest, FilteredResults,
};
pub use configuration::{
    ConfigurationCreate, ConfigurationList, ConfigurationRecord, ConfigurationUpdate,
};
pub use file::{FileList, FileRecord};
pub use user::{RegisterRequest, UserList, UserRecord, UserUpdate};
