// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared constants: storage keys, enumerations understood by the API, limits.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key names as constants.
pub mod keys {
    pub const TOKEN: &str = "auth_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USER: &str = "user_data";
}

/// Largest file the upload endpoint accepts (100 MiB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Display format for dates (`dd.MM.yyyy`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";
/// Display format for timestamps (`dd.MM.yyyy HH:mm`).
pub const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Spreadsheet formats accepted by `/files/upload`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Csv,
    Xls,
    Xlsx,
}

impl FileType {
    pub const ALL: [FileType; 3] = [FileType::Csv, FileType::Xls, FileType::Xlsx];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Csv => "csv",
            FileType::Xls => "xls",
            FileType::Xlsx => "xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            FileType::Csv => "text/csv",
            FileType::Xls => "application/vnd.ms-excel",
            FileType::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Detect the type from a file name's extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported file type: {}", s))
    }
}

/// Lifecycle of a calculation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl CalculationStatus {
    pub const ALL: [CalculationStatus; 5] = [
        CalculationStatus::Pending,
        CalculationStatus::Running,
        CalculationStatus::Completed,
        CalculationStatus::Failed,
        CalculationStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationStatus::Pending => "pending",
            CalculationStatus::Running => "running",
            CalculationStatus::Completed => "completed",
            CalculationStatus::Failed => "failed",
            CalculationStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the calculation can still be cancelled.
    pub fn is_active(&self) -> bool {
        matches!(self, CalculationStatus::Pending | CalculationStatus::Running)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CalculationStatus::Completed | CalculationStatus::Failed | CalculationStatus::Cancelled
        )
    }
}

impl fmt::Display for CalculationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CalculationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown calculation status: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

/// Format a timestamp for display.
pub fn format_datetime(ts: &NaiveDateTime) -> String {
    ts.format(DATETIME_FORMAT).to_string()
}

/// Format the date part of a timestamp for display.
pub fn format_date(ts: &NaiveDateTime) -> String {
    ts.format(DATE_FORMAT).to_string()
}
