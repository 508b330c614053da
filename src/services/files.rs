// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File upload and management service.
//!
//! Uploads are checked locally against the same acceptance rules the upload
//! form enforces (spreadsheet extension, non-empty, at most
//! [`MAX_FILE_SIZE`]) before any bytes are sent.

use crate::constants::{FileType, MAX_FILE_SIZE};
use crate::error::{ClientError, Result};
use crate::gateway::{ApiRequest, Gateway, MultipartFile};
use crate::models::{FileList, FileRecord};
use super::path_segment;
use std::path::Path;

/// A file selected for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::Validation(format!("Not a file path: {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::Validation(format!("Cannot read {}: {}", path.display(), e)))?;
        Ok(Self { file_name, bytes })
    }

    /// Check the file against the upload rules; returns its detected format.
    pub fn validate(&self) -> Result<FileType> {
        let format = FileType::from_file_name(&self.file_name).ok_or_else(|| {
            ClientError::Validation(format!(
                "{}: unsupported format (expected CSV, XLS or XLSX)",
                self.file_name
            ))
        })?;
        if self.bytes.is_empty() {
            return Err(ClientError::Validation(format!(
                "{}: file is empty",
                self.file_name
            )));
        }
        if self.bytes.len() as u64 > MAX_FILE_SIZE {
            return Err(ClientError::Validation(format!(
                "{}: file is larger than {} MB",
                self.file_name,
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }
        Ok(format)
    }
}

/// Filters for `GET /files/`.
#[derive(Debug, Clone, Default)]
pub struct FileQuery {
    pub file_type: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

/// Outcome of one file in a batch upload.
#[derive(Debug)]
pub struct UploadOutcome {
    pub file_name: String,
    pub result: Result<FileRecord>,
}

/// Files API service.
#[derive(Clone)]
pub struct FilesService {
    gateway: Gateway,
}

impl FilesService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Upload one file as multipart field `file`.
    pub async fn upload_file(&self, file: &UploadFile, file_type: FileType) -> Result<FileRecord> {
        let format = file.validate()?;

        let request = ApiRequest::post("/files/upload")
            .query("file_type", file_type)
            .multipart(MultipartFile {
                field: "file".to_string(),
                file_name: file.file_name.clone(),
                mime_type: format.mime_type().to_string(),
                bytes: file.bytes.clone(),
            });

        let record: FileRecord = self.gateway.send_json(&request).await?;
        tracing::info!(
            file_id = %record.id,
            file_name = %file.file_name,
            size = record.file_size,
            "File uploaded"
        );
        Ok(record)
    }

    /// Upload files one after another. A failure does not stop the batch.
    pub async fn upload_files(&self, files: &[UploadFile], file_type: FileType) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            let result = self.upload_file(file, file_type).await;
            if let Err(e) = &result {
                tracing::warn!(file_name = %file.file_name, error = %e, "Upload failed");
            }
            outcomes.push(UploadOutcome {
                file_name: file.file_name.clone(),
                result,
            });
        }
        outcomes
    }

    pub async fn get_files(&self, query: &FileQuery) -> Result<FileList> {
        let mut request = ApiRequest::get("/files/");
        if let Some(file_type) = &query.file_type {
            request = request.query("file_type", file_type);
        }
        if let Some(skip) = query.skip {
            request = request.query("skip", skip);
        }
        if let Some(limit) = query.limit {
            request = request.query("limit", limit);
        }
        self.gateway.send_json(&request).await
    }

    pub async fn get_file(&self, file_id: &str) -> Result<FileRecord> {
        let path = format!("/files/{}", path_segment(file_id)?);
        self.gateway.send_json(&ApiRequest::get(path)).await
    }

    pub async fn delete_file(&self, file_id: &str) -> Result<()> {
        let path = format!("/files/{}", path_segment(file_id)?);
        self.gateway.send(&ApiRequest::delete(path)).await?;
        tracing::info!(file_id, "File deleted");
        Ok(())
    }

    /// Download the raw file contents.
    pub async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        let path = format!("/files/{}/download", path_segment(file_id)?);
        let response = self.gateway.send(&ApiRequest::get(path)).await?;
        Ok(response.into_bytes())
    }
}
