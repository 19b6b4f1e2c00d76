use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AckResponse, DailyTotals, MealAnalysis, StreakResponse, UploadResponse};

/// Error surfaced by any backend call.
///
/// The two variants cover the two ways a call can go wrong: the server
/// processed the request and reported failure, or the request never produced
/// a usable body. Callers render both through `Display`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with `success: false` and a message.
    #[error("{0}")]
    Backend(String),
    /// The request could not be completed: connection refused, bad status,
    /// interrupted body.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered, but the body did not match the contract.
    #[error("malformed server response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// A photo queued for analysis, with the optional context fields the server
/// accepts alongside the image itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPhoto {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub food_name: Option<String>,
    pub food_quantity: Option<String>,
}

impl MealPhoto {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        MealPhoto {
            file_name: file_name.into(),
            bytes,
            food_name: None,
            food_quantity: None,
        }
    }
}

/// Successful analysis payload: the per-meal estimate plus the refreshed
/// daily totals when the server includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub meal: MealAnalysis,
    pub daily_total: Option<DailyTotals>,
}

/// Async client for the nutrition backend.
///
/// One method per endpoint, no retries, no client-side timeout. A request
/// either resolves or the caller gives up with the process.
#[derive(Debug, Clone)]
pub struct NutritionApi {
    base_url: String,
    client: reqwest::Client,
}

impl NutritionApi {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("platelog/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(NutritionApi {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a meal photo for analysis.
    ///
    /// The image travels as the multipart field `image`; name and quantity
    /// ride along as plain form fields when set.
    pub async fn upload_meal_photo(&self, photo: MealPhoto) -> Result<AnalysisOutcome, ApiError> {
        let url = self.endpoint("/upload");
        debug!(url = %url, file = %photo.file_name, "uploading meal photo");

        let mut form = reqwest::multipart::Form::new().part(
            "image",
            reqwest::multipart::Part::bytes(photo.bytes).file_name(photo.file_name),
        );
        if let Some(name) = photo.food_name.filter(|s| !s.is_empty()) {
            form = form.text("food_name", name);
        }
        if let Some(quantity) = photo.food_quantity.filter(|s| !s.is_empty()) {
            form = form.text("food_quantity", quantity);
        }

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(format!("server returned {status}")));
        }

        let body: UploadResponse = response.json().await?;
        if !body.success {
            return Err(ApiError::Backend(
                body.error.unwrap_or_else(|| "unknown server error".to_string()),
            ));
        }
        let meal = body
            .data
            .ok_or_else(|| ApiError::Decode("missing meal data on a successful upload".to_string()))?;
        Ok(AnalysisOutcome {
            meal,
            daily_total: body.daily_total,
        })
    }

    /// Fetch today's running totals and the streak counter.
    pub async fn daily_stats(&self) -> Result<DailyTotals, ApiError> {
        let url = self.endpoint("/daily-stats");
        debug!(url = %url, "fetching daily stats");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(format!("server returned {status}")));
        }
        Ok(response.json::<DailyTotals>().await?)
    }

    /// Tell the server every goal was met; returns the new streak count.
    pub async fn advance_streak(&self) -> Result<u32, ApiError> {
        let url = self.endpoint("/update-streak");
        debug!(url = %url, "advancing streak");

        let response = self.client.post(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(format!("server returned {status}")));
        }
        Ok(response.json::<StreakResponse>().await?.streak)
    }

    /// Zero out today's totals on the server.
    pub async fn reset_day(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/reset-daily");
        debug!(url = %url, "resetting daily totals");

        let response = self.client.post(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(format!("server returned {status}")));
        }
        let ack: AckResponse = response.json().await?;
        if !ack.success {
            return Err(ApiError::Backend("server declined to reset the day".to_string()));
        }
        Ok(())
    }
}
