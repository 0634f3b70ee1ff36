//! Registration form domain: fields, validation rules, state records and
//! the submission gate. Nothing in here knows about the terminal.

pub mod field;
pub mod gate;
pub mod state;
pub mod validator;

pub use field::{Field, InputKind, UnknownField, DEFAULT_COURSES, GENDER_OPTIONS};
pub use gate::{evaluate, SubmissionOutcome, ACCEPTED_MESSAGE, REJECTED_MESSAGE};
pub use state::{CancelPolicy, FieldErrors, FormModel, FormValues};
pub use validator::{
    error_hint, validate, validate_in_year, validate_named, DOB_FORMAT_HINT, MIN_AGE_YEARS,
};
