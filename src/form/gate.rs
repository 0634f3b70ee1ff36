use crate::form::state::{FieldErrors, FormValues};

pub const ACCEPTED_MESSAGE: &str = "Form is valid and submitted!";
pub const REJECTED_MESSAGE: &str = "Please fill in all required fields correctly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

impl SubmissionOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Accepted => ACCEPTED_MESSAGE,
            Self::Rejected => REJECTED_MESSAGE,
        }
    }
}

/// Accept only when no flag is raised and no trimmed value is empty.
pub fn evaluate(values: &FormValues, errors: &FieldErrors) -> SubmissionOutcome {
    let all_filled = values.iter().all(|(_, value)| !value.trim().is_empty());
    if !errors.any() && all_filled {
        SubmissionOutcome::Accepted
    } else {
        SubmissionOutcome::Rejected
    }
}
