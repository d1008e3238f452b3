//! API request handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, error};

use crate::api::types::{
    CompareRequest, CompareResponse, ErrorResponse, GenerateRequest, StatusResponse,
};
use crate::content::{ContentGenerator, Format, Level, Question};
use crate::score;
use crate::tts::TtsEngine;

/// Shared application state for all handlers.
pub struct AppState {
    pub content: ContentGenerator,
    pub tts: TtsEngine,
}

/// `GET /api/status` — liveness and readiness summary.
pub async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = StatusResponse {
        status: "ready".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        generator_ready: state.content.is_ready(),
    };
    (StatusCode::OK, Json(response))
}

/// `POST /api/compareAnswer` — grade a submitted answer against a reference.
pub async fn compare_answer(Json(request): Json<CompareRequest>) -> impl IntoResponse {
    // Missing or empty fields are rejected before the scorer runs.
    let (Some(user_answer), Some(correct_answer)) = (
        request.user_answer.filter(|s| !s.is_empty()),
        request.correct_answer.filter(|s| !s.is_empty()),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing required fields")),
        )
            .into_response();
    };

    let accuracy = score::accuracy(&user_answer, &correct_answer);
    let diff = if accuracy == 100 {
        None
    } else {
        score::word_diff(&user_answer, &correct_answer)
    };

    debug!(accuracy, "answer compared");

    (StatusCode::OK, Json(CompareResponse { accuracy, diff })).into_response()
}

/// `POST /api/generateQuestions` — words or sentences, no audio.
pub async fn generate_questions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse {
    // Only WORD and SENTENCE are valid on this route.
    let format = match request.format.as_deref().and_then(Format::parse) {
        Some(f @ (Format::Word | Format::Sentence)) => f,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid format")),
            )
                .into_response();
        }
    };
    let Some(level) = request.level.as_deref().and_then(Level::parse) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid level")),
        )
            .into_response();
    };

    match state.content.generate(format, level).await {
        Ok(texts) => {
            let questions: Vec<Question> = texts
                .into_iter()
                .map(|text| Question {
                    id: None,
                    text,
                    audio_url: None,
                    difficulty: level,
                    format,
                })
                .collect();
            (StatusCode::OK, Json(questions)).into_response()
        }
        Err(e) => {
            error!(?format, ?level, error = %e, "question generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal server error")),
            )
                .into_response()
        }
    }
}

/// `POST /api/generateQuestionsWithAudio` — letters, words, or sentences
/// with synthesized audio data URLs. Generation failures fall back to
/// static content so the client always gets a batch.
pub async fn generate_questions_with_audio(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse {
    let Some(format) = request.format.as_deref().and_then(Format::parse) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid format")),
        )
            .into_response();
    };
    let Some(level) = request.level.as_deref().and_then(Level::parse) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid level")),
        )
            .into_response();
    };

    let texts = state.content.generate_or_fallback(format, level).await;

    let mut questions = Vec::with_capacity(texts.len());
    for text in texts {
        let audio_url = state.tts.synthesize(&text).await;
        questions.push(Question {
            id: Some(uuid::Uuid::new_v4()),
            text,
            audio_url: Some(audio_url),
            difficulty: level,
            format,
        });
    }

    (StatusCode::OK, Json(questions)).into_response()
}
