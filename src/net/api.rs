//! HTTP client for the remote video/analysis API.
//!
//! The client is a plain value built from [`AppConfig`](crate::config::AppConfig)
//! and provided via context, so components never reach for a global fetch
//! or an ambient base URL. URL building is pure and unit-tested; the
//! requests themselves go through `gloo-net` and only run in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint returns `Result<_, ApiError>`. What callers do with a
//! failure differs by direction: list loads swallow it (log + diagnostics
//! record, keep the previous data on screen), writes surface it to the
//! user. That policy lives in the page, not here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::Request;

use super::types::{Marker, NewMarker, NewVideo, Video};

/// Failure modes of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Http { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Client for the remote API, bound to one base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn videos_url(&self) -> String {
        format!("{}/api/videos", self.base_url)
    }

    fn analysis_url(&self) -> String {
        format!("{}/api/analysis", self.base_url)
    }

    fn markers_url(&self, video_id: &str) -> String {
        format!("{}?video_id={video_id}", self.analysis_url())
    }

    /// Fetch the full video collection, in server order.
    pub async fn fetch_videos(&self) -> Result<Vec<Video>, ApiError> {
        let response = Request::get(&self.videos_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
            });
        }
        response
            .json::<Vec<Video>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create a video. The created record is not consumed; callers reload
    /// the collection instead.
    pub async fn create_video(&self, video: &NewVideo) -> Result<(), ApiError> {
        let response = Request::post(&self.videos_url())
            .json(video)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
            });
        }
        Ok(())
    }

    /// Fetch the markers recorded for one video, in server order.
    pub async fn fetch_markers(&self, video_id: &str) -> Result<Vec<Marker>, ApiError> {
        let response = Request::get(&self.markers_url(video_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
            });
        }
        response
            .json::<Vec<Marker>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create a marker. Callers reload the marker list on success.
    pub async fn create_marker(&self, marker: &NewMarker) -> Result<(), ApiError> {
        let response = Request::post(&self.analysis_url())
            .json(marker)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
            });
        }
        Ok(())
    }
}
