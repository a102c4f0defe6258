//! OCR upstream client.
//!
//! The recognition service accepts a base64 receipt image and answers with a
//! structured document whose fields are all optional. The engine sits behind
//! a trait so handlers stay independent of the concrete upstream and tests
//! can substitute a canned implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::constants::OCR_API_VERSION;

/// Errors from the OCR upstream call
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("OCR request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("OCR service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Structured fields extracted from a receipt image.
///
/// Every field is optional; the upstream omits anything it could not read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiptFields {
    #[serde(rename = "ShopName")]
    pub shop_name: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Option<String>,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: Option<String>,
}

/// Wire shape of a recognition response
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(rename = "Data")]
    data: Option<ReceiptFields>,
}

/// Receipt recognition capability
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize_receipt(&self, image_b64: &str) -> Result<ReceiptFields, OcrError>;
}

/// HTTP client for the hosted OCR service
pub struct HttpOcrClient {
    client: reqwest::Client,
    endpoint: String,
    access_key_id: String,
    access_key_secret: String,
}

impl HttpOcrClient {
    /// Build a client from configuration; the connection pool is reused for
    /// the process lifetime
    pub fn new(config: &Config) -> Result<Self, OcrError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.ocr_endpoint.trim_end_matches('/').to_string(),
            access_key_id: config.access_key_id.clone(),
            access_key_secret: config.access_key_secret.clone(),
        })
    }
}

#[async_trait]
impl OcrEngine for HttpOcrClient {
    async fn recognize_receipt(&self, image_b64: &str) -> Result<ReceiptFields, OcrError> {
        let body = serde_json::json!({
            "Action": "RecognizeReceipt",
            "ImageBase64": image_b64,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.access_key_id, Some(&self.access_key_secret))
            .header("x-acs-version", OCR_API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Status { status, body });
        }

        let parsed: RecognizeResponse = response.json().await?;

        // A recognition that found nothing comes back without a Data object
        Ok(parsed.data.unwrap_or_default())
    }
}
