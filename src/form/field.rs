use std::fmt;
use std::str::FromStr;

/// One named input on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Address,
    Mobile,
    Email,
    Gender,
    Dob,
    Course,
}

/// How a field is edited on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Multiline,
    Date,
    Choice,
}

pub const GENDER_OPTIONS: [&str; 3] = ["female", "male", "other"];

pub const DEFAULT_COURSES: [&str; 4] = ["Biology", "Computer Science", "Commerce", "Humanities"];

impl Field {
    /// Fields in on-screen order.
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Address,
        Field::Mobile,
        Field::Email,
        Field::Gender,
        Field::Dob,
        Field::Course,
    ];

    /// Wire name used by the form (`firstName`, `dob`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Address => "address",
            Field::Mobile => "mobile",
            Field::Email => "email",
            Field::Gender => "gender",
            Field::Dob => "dob",
            Field::Course => "course",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Address => "Address",
            Field::Mobile => "Mobile",
            Field::Email => "Email",
            Field::Gender => "Gender",
            Field::Dob => "Date of Birth",
            Field::Course => "Course",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Field::Address => InputKind::Multiline,
            Field::Dob => InputKind::Date,
            Field::Gender | Field::Course => InputKind::Choice,
            _ => InputKind::Text,
        }
    }

    /// Inline hint shown while the field is flagged invalid.
    pub fn error_hint(self) -> &'static str {
        match self {
            Field::FirstName => "First Name contains double spaces",
            Field::LastName => "Last Name contains double spaces",
            Field::Address => "Address must be at least 10 characters",
            Field::Mobile => "Invalid Number! Must be a 10-digit number.",
            Field::Email => "Invalid email format",
            Field::Gender => "Please choose female, male or other",
            Field::Dob => "You must be at least 15 years old",
            Field::Course => "Course selection is required",
        }
    }

    /// Position in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
