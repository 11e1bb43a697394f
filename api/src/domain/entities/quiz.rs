//! Quiz domain entity
//!
//! A single multiple-choice question attached to a video.

use serde::Serialize;

use super::VideoId;

/// Points granted for a correct answer unless a quiz says otherwise
pub const DEFAULT_QUIZ_POINTS: i32 = 10;

/// A quiz question; each video has at most one
#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub video_id: VideoId,
    pub question: String,
    pub correct_answer: String,
    pub wrong_answers: Vec<String>,
    pub points_awarded: i32,
}

impl Quiz {
    pub fn new(
        video_id: VideoId,
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        wrong_answers: Vec<String>,
    ) -> Self {
        Self {
            video_id,
            question: question.into(),
            correct_answer: correct_answer.into(),
            wrong_answers,
            points_awarded: DEFAULT_QUIZ_POINTS,
        }
    }
}
