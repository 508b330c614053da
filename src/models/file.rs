// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Uploaded file metadata.

use serde::{Deserialize, Serialize};

/// File metadata as returned by the `/files` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File ID (UUID string)
    pub id: String,
    pub file_type: String,
    pub original_filename: String,
    pub stored_filename: String,
    /// Size in bytes
    pub file_size: u64,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    /// First date covered by the data (YYYY-MM-DD)
    #[serde(default)]
    pub date_from: Option<String>,
    /// Last date covered by the data (YYYY-MM-DD)
    #[serde(default)]
    pub date_to: Option<String>,
    #[serde(default)]
    pub rows_count: Option<u64>,
    #[serde(default)]
    pub checksum: Option<String>,
    pub created_at: String,
}

/// Listing response for `GET /files/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileList {
    pub total: u64,
    pub files: Vec<FileRecord>,
}
