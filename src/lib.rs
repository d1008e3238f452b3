//! `lingo-coach` — backend for a browser language-learning app.
//!
//! Serves a JSON API for "focus" and "pronunciation" training modes:
//! practice content (letters, words, sentences) generated via the Gemini
//! API, best-effort audio data URLs from an external synthesis command,
//! and fuzzy grading of submitted answers against a reference.
//!
//! # Routes
//!
//! - `POST /api/compareAnswer` — normalized Levenshtein-ratio grading
//! - `POST /api/generateQuestions` — word/sentence practice batches
//! - `POST /api/generateQuestionsWithAudio` — batches with audio data URLs
//! - `GET /api/status` — liveness/readiness
//!
//! # Architecture
//!
//! ```text
//! HTTP (axum) → handlers → score (normalize + Levenshtein ratio)
//!                        → content → Gemini generateContent
//!                        │         ↘ static fallback tables
//!                        → tts → external synthesis command
//! ```

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod score;
pub mod tts;

pub use config::Config;
pub use error::{CoachError, CoachResult};
