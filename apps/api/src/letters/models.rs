use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inbound payload for `POST /generate`. Request-scoped; discarded after
/// handling — nothing holds a reference to it past the response.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterRequest {
    pub job_description: String,
    pub job_title: String,
    pub company_name: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume_text: String,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
    #[serde(default)]
    pub custom_message: String,
}

fn default_experience_level() -> String {
    "mid".to_string()
}

/// The response envelope: generated letter plus retrieval metadata.
/// Immutable once assembled; cached as JSON under `cover_letter:<id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverLetterResponse {
    pub id: String,
    pub cover_letter: String,
    pub created_at: DateTime<Utc>,
    pub metadata: LetterMetadata,
}

/// Denormalized copy of the job/applicant fields for cheap retrieval display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LetterMetadata {
    pub job_title: String,
    pub company_name: String,
    pub applicant_name: String,
}
