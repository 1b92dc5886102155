use serde::Serialize;
use uuid::Uuid;

use crate::multimedia::application::submission_registry::SubmissionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionProgress {
    pub submission_id: Uuid,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionProgressError {
    #[error("Submission is not in flight")]
    NotInFlight,
}

pub trait SubmissionProgressUseCase: Send + Sync {
    fn execute(&self, submission_id: Uuid) -> Result<SubmissionProgress, SubmissionProgressError>;
}

impl SubmissionProgressUseCase for SubmissionRegistry {
    fn execute(&self, submission_id: Uuid) -> Result<SubmissionProgress, SubmissionProgressError> {
        self.progress(submission_id)
            .map(|percent| SubmissionProgress {
                submission_id,
                percent,
            })
            .ok_or(SubmissionProgressError::NotInFlight)
    }
}
