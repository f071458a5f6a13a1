//! Axum route handlers for cover letter generation and retrieval.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::cache::LETTER_TTL;
use crate::errors::AppError;
use crate::letters::models::{CoverLetterRequest, CoverLetterResponse, LetterMetadata};
use crate::letters::prompts::build_prompt;
use crate::state::AppState;

/// Rejects requests whose required fields are present but blank.
/// Structurally malformed bodies never reach here — the `Json` extractor
/// rejects those with a 4xx before the handler runs.
fn validate(request: &CoverLetterRequest) -> Result<(), AppError> {
    let required = [
        ("job_description", &request.job_description),
        ("job_title", &request.job_title),
        ("company_name", &request.company_name),
        ("applicant_name", &request.applicant_name),
        ("applicant_email", &request.applicant_email),
        ("resume_text", &request.resume_text),
    ];

    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{name} cannot be empty")));
        }
    }

    Ok(())
}

/// POST /generate
///
/// Validate → build prompt → call the LLM → assemble the envelope → respond.
/// The cache write runs on a detached task so a slow or failing cache never
/// delays or fails a response that already has its letter.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    validate(&request)?;

    let id = Uuid::new_v4().to_string();
    let prompt = build_prompt(&request);

    let cover_letter = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    let letter = CoverLetterResponse {
        id: id.clone(),
        cover_letter,
        created_at: Utc::now(),
        metadata: LetterMetadata {
            job_title: request.job_title.clone(),
            company_name: request.company_name.clone(),
            applicant_name: request.applicant_name.clone(),
        },
    };

    // Best-effort persistence, decoupled from the response path
    let cache = Arc::clone(&state.cache);
    let cached = letter.clone();
    tokio::spawn(async move {
        if let Err(e) = cache.put(&cached.id, &cached, LETTER_TTL).await {
            error!("Failed to cache cover letter {}: {e}", cached.id);
        }
    });

    info!("Generated cover letter {id} for {}", request.company_name);

    Ok(Json(letter))
}

/// GET /cover-letter/:id
///
/// Returns the cached letter for an id, 404 if it was never stored or has
/// expired, 500 if the stored payload no longer deserializes.
pub async fn handle_get_letter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let letter = state
        .cache
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cover letter not found".to_string()))?;

    Ok(Json(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CoverLetterRequest {
        CoverLetterRequest {
            job_description: "Build backend services.".to_string(),
            job_title: "Backend Engineer".to_string(),
            company_name: "Acme".to_string(),
            applicant_name: "Jane Doe".to_string(),
            applicant_email: "jane@x.com".to_string(),
            resume_text: "5 years of Rust.".to_string(),
            experience_level: "mid".to_string(),
            custom_message: String::new(),
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn test_blank_required_field_fails_validation() {
        let mut request = valid_request();
        request.company_name = "   ".to_string();
        let err = validate(&request).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_custom_message_passes_validation() {
        // custom_message is optional; blank is the default, not an error
        assert!(validate(&valid_request()).is_ok());
    }
}
