//! Image upload client: one multipart POST to the configured hosting
//! endpoint, answering the hosted URL. Any non-success response or
//! transport error is terminal for the calling action; there are no
//! retries.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::{JournalError, Result};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: UploadData,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    image: UploadImage,
}

#[derive(Debug, Deserialize)]
struct UploadImage {
    url: String,
}

pub struct Uploader {
    client: reqwest::blocking::Client,
    endpoint: String,
    key: String,
}

impl Uploader {
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| JournalError::Upload(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            key: key.into(),
        })
    }

    /// Upload one image file, returning its hosted URL.
    pub fn upload(&self, path: &Path) -> Result<String> {
        let form = reqwest::blocking::multipart::Form::new()
            .file("image", path)
            .map_err(JournalError::Io)?;

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.key.as_str())])
            .multipart(form)
            .send()
            .map_err(|e| JournalError::Upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JournalError::Upload(format!(
                "{} from {}",
                status, self.endpoint
            )));
        }

        let body: UploadResponse = response
            .json()
            .map_err(|e| JournalError::Upload(format!("unexpected response shape: {}", e)))?;
        Ok(body.data.image.url)
    }
}
