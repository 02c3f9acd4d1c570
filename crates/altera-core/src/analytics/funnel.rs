//! Question-completion funnel.
//!
//! Screening is a sequence of written questions; the funnel shows how many
//! applicants made it through each one. An answer counts only when it is
//! present and non-blank after trimming, which mirrors how the Q&A flow
//! decides whether to advance.

use serde::{Deserialize, Serialize};

use crate::analytics::model::FunnelStage;

/// Completion state of one question for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStage {
    /// 1-based question number.
    pub question_index: usize,
    pub is_completed: bool,
}

/// Per-candidate question progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProgress {
    pub total_questions: usize,
    pub completed_questions: usize,
    pub question_stages: Vec<QuestionStage>,
}

fn is_answered(answers: &[Option<String>], index: usize) -> bool {
    answers
        .get(index)
        .and_then(|a| a.as_deref())
        .is_some_and(|a| !a.trim().is_empty())
}

/// Compute per-question completion for one candidate.
pub fn question_progress(questions: &[String], answers: &[Option<String>]) -> CandidateProgress {
    let mut stages = Vec::with_capacity(questions.len());
    let mut completed = 0;
    for index in 0..questions.len() {
        let done = is_answered(answers, index);
        if done {
            completed += 1;
        }
        stages.push(QuestionStage {
            question_index: index + 1,
            is_completed: done,
        });
    }
    CandidateProgress {
        total_questions: questions.len(),
        completed_questions: completed,
        question_stages: stages,
    }
}

/// A candidate is completed once every question has a non-blank answer.
pub fn is_completed(questions: &[String], answers: &[Option<String>]) -> bool {
    if answers.len() < questions.len() {
        return false;
    }
    (0..questions.len()).all(|index| is_answered(answers, index))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build the staged funnel from every candidate's progress. The first stage
/// is the resume upload (always 100%), followed by one stage per question
/// up to the longest questionnaire seen.
pub fn build_funnel(progresses: &[CandidateProgress]) -> Vec<FunnelStage> {
    let total = progresses.len();
    if total == 0 {
        return Vec::new();
    }

    let max_questions = progresses
        .iter()
        .map(|p| p.total_questions)
        .max()
        .unwrap_or(0);

    let mut funnel = vec![FunnelStage {
        stage: "Applied (Resume Upload)".to_string(),
        count: total as u64,
        percentage: 100.0,
    }];

    for question in 1..=max_questions {
        let completed = progresses
            .iter()
            .filter(|p| {
                p.question_stages
                    .iter()
                    .any(|s| s.question_index == question && s.is_completed)
            })
            .count();
        funnel.push(FunnelStage {
            stage: format!("Question {question} Completed"),
            count: completed as u64,
            percentage: round1(completed as f64 / total as f64 * 100.0),
        });
    }

    funnel
}
