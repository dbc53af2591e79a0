use serde::{Deserialize, Serialize};
use crate::models::domain::{MentorProfile, Recommendation};

/// Response for the recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Response for the caller's own mentor profile
///
/// Unlike recommendation payloads this is the full record, bio included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorProfileResponse {
    pub success: bool,
    pub data: MentorProfile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
