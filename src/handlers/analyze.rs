//! The diary analysis pipeline: validate → summarize → build prompt →
//! resolve credential → completion call → respond.
//!
//! Mounted with `any()` so the handler owns method dispatch, including the
//! CORS preflight. Every request terminates in exactly one of: preflight-ok,
//! 200 with an analysis, a 4xx rejection, or a 500.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::dto::{AnalysisResponse, DiaryRequest};
use crate::error::{AppError, AppResult};
use crate::services::{completion, prompt, secrets, summary};
use crate::AppState;

pub async fn analyze_diary(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Json<DiaryRequest>, JsonRejection>,
) -> AppResult<Response> {
    if method == Method::OPTIONS {
        return Ok(preflight());
    }
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    match auth_header.strip_prefix("Bearer ") {
        Some(token) => {
            // Only the first few characters ever reach the logs.
            let prefix: String = token.chars().take(10).collect();
            tracing::info!(token_prefix = %prefix, "Received bearer token");
        }
        // A present-but-malformed header is logged, not rejected.
        None => tracing::warn!("Authorization header is not in Bearer format"),
    }

    let Json(req) = body.map_err(|_| AppError::BadRequest("no JSON data provided".into()))?;

    if req.diary.is_empty() || req.user_id.is_empty() {
        tracing::error!(
            has_diary = !req.diary.is_empty(),
            has_user_id = !req.user_id.is_empty(),
            "Request missing diary content or user id"
        );
        return Err(AppError::BadRequest("missing diary content or user id".into()));
    }

    tracing::info!(user_id = %req.user_id, "Received diary analysis request");

    // Resolved fresh per request so a rotated key doesn't strand a
    // long-lived instance.
    let api_key = secrets::resolve_api_key(&state.config)
        .await
        .ok_or_else(|| AppError::Config("unable to obtain the OpenAI API key".into()))?;

    let digest = summary::summarize_previous(&req.previous_diaries);
    let emotion = summary::Emotion::from_mood(&req.mood);
    let user_prompt = prompt::build_prompt(&req.diary, &digest, emotion, &req.tags);

    tracing::info!(prompt_len = user_prompt.len(), "Calling OpenAI chat completion");

    let analysis = completion::generate_analysis(&state.config, &api_key, &user_prompt).await?;

    tracing::info!(
        user_id = %req.user_id,
        analysis_len = analysis.len(),
        "Generated diary analysis"
    );

    Ok((
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(AnalysisResponse { analysis }),
    )
        .into_response())
}

fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type,Authorization"),
            (header::ACCESS_CONTROL_MAX_AGE, "3600"),
        ],
    )
        .into_response()
}
