use std::{fmt::Display, str::FromStr};

/// Message severity as reported by the inference library.
///
/// The discriminants are the library's raw ABI values, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Severity {
    InternalError = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Verbose = 4,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::InternalError,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Verbose,
    ];

    /// Converts a raw value received across the ABI boundary.
    ///
    /// Values the library may add in a newer version come back as `None`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::InternalError),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Verbose),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// The bit this severity occupies in a suppression mask.
    pub(crate) fn bit(self) -> u32 {
        1 << self.as_raw()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::InternalError => "internal_error",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Verbose => "verbose",
        }
    }
}

/// True iff `raw` names one of the five defined severities.
pub fn is_valid_severity(raw: i32) -> bool {
    Severity::from_raw(raw).is_some()
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity `{0}`")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "internal_error" | "internal-error" => Ok(Severity::InternalError),
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "verbose" => Ok(Severity::Verbose),
            _ => Err(ParseSeverityError(trimmed.to_owned())),
        }
    }
}
