//! Axum route handlers for the Compatibility API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::compatibility::documents::{detect_kind, extract_text};
use crate::errors::AppError;
use crate::matching::{Language, MatchResult, PhraseStyle};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub cv_text: String,
    pub job_text: String,
    #[serde(default)]
    pub style: PhraseStyle,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub request_id: Uuid,
    pub result: MatchResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores pasted CV text against pasted job description text.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    validate_inputs(&request.cv_text, &request.job_text, state.config.min_input_chars)?;
    Ok(Json(run_scoring(
        &state,
        &request.cv_text,
        &request.job_text,
        request.style,
    )))
}

/// POST /api/v1/match/upload
///
/// Multipart variant. `cv` and `job` may each be a text field or a PDF file,
/// sent exactly once; optional `style` ("keyword" | "sentence") and
/// `language` ("en" | "hu").
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut cv_text: Option<String> = None;
    let mut job_text: Option<String> = None;
    let mut style_name: Option<String> = None;
    let mut language_code: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "cv" | "job" => {
                let slot = if name == "cv" { &mut cv_text } else { &mut job_text };
                if slot.is_some() {
                    return Err(AppError::Validation(format!(
                        "Field '{name}' must appear only once"
                    )));
                }
                let kind = detect_kind(field.content_type(), field.file_name());
                let bytes = field.bytes().await?;
                *slot = Some(extract_text(bytes, kind).await?);
            }
            "style" => style_name = Some(field.text().await?),
            "language" => language_code = Some(field.text().await?),
            other => debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    let cv_text = cv_text.ok_or_else(|| AppError::Validation("Missing 'cv' field".to_string()))?;
    let job_text =
        job_text.ok_or_else(|| AppError::Validation("Missing 'job' field".to_string()))?;
    let style = parse_style(style_name.as_deref(), language_code.as_deref())?;

    validate_inputs(&cv_text, &job_text, state.config.min_input_chars)?;
    Ok(Json(run_scoring(&state, &cv_text, &job_text, style)))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn run_scoring(state: &AppState, cv_text: &str, job_text: &str, style: PhraseStyle) -> MatchResponse {
    let request_id = Uuid::new_v4();
    let result = state.scorer.score(cv_text, job_text, style);

    info!(
        %request_id,
        score = result.score,
        strengths = result.strengths.len(),
        gaps = result.gaps.len(),
        "Compatibility scored"
    );

    MatchResponse { request_id, result }
}

/// Usability threshold applied before the engine runs. The engine would
/// happily score shorter text; this mirrors the dashboard's "paste more" rule.
fn validate_inputs(cv_text: &str, job_text: &str, min_chars: usize) -> Result<(), AppError> {
    for (field, text) in [("cv_text", cv_text), ("job_text", job_text)] {
        let len = text.trim().chars().count();
        if len < min_chars {
            return Err(AppError::Validation(format!(
                "{field} must contain at least {min_chars} characters (got {len})"
            )));
        }
    }
    Ok(())
}

fn parse_style(style: Option<&str>, language: Option<&str>) -> Result<PhraseStyle, AppError> {
    let language = match language.map(|l| l.trim().to_ascii_lowercase()) {
        None => Language::English,
        Some(code) if code == "en" => Language::English,
        Some(code) if code == "hu" => Language::Hungarian,
        Some(code) => {
            return Err(AppError::Validation(format!(
                "Unsupported language '{code}' (expected 'en' or 'hu')"
            )))
        }
    };

    match style.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("keyword") => Ok(PhraseStyle::Keyword),
        Some("sentence") => Ok(PhraseStyle::Sentence(language)),
        Some(other) => Err(AppError::Validation(format!(
            "Unsupported style '{other}' (expected 'keyword' or 'sentence')"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_inputs_threshold() {
        assert!(validate_inputs("short", &"x".repeat(60), 50).is_err());
        assert!(validate_inputs(&"x".repeat(60), "   short   ", 50).is_err());
        assert!(validate_inputs(&"x".repeat(50), &"y".repeat(50), 50).is_ok());
    }

    #[test]
    fn test_validate_inputs_counts_chars_not_bytes() {
        // 50 two-byte chars
        assert!(validate_inputs(&"ő".repeat(50), &"é".repeat(50), 50).is_ok());
    }

    #[test]
    fn test_validate_inputs_disabled_with_zero() {
        assert!(validate_inputs("", "", 0).is_ok());
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(parse_style(None, None).unwrap(), PhraseStyle::Keyword);
        assert_eq!(
            parse_style(Some("sentence"), Some("HU")).unwrap(),
            PhraseStyle::Sentence(Language::Hungarian)
        );
        assert_eq!(
            parse_style(Some("Sentence"), None).unwrap(),
            PhraseStyle::Sentence(Language::English)
        );
        assert!(parse_style(Some("poem"), None).is_err());
        assert!(parse_style(None, Some("de")).is_err());
    }

    #[test]
    fn test_match_request_style_defaults_to_keyword() {
        let request: MatchRequest =
            serde_json::from_str(r#"{"cv_text":"a","job_text":"b"}"#).unwrap();
        assert_eq!(request.style, PhraseStyle::Keyword);
    }
}
