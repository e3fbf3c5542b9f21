use crate::{
    logger::DEFAULT_LOGGER_NAME,
    severity::{ParseSeverityError, Severity},
};

/// Comma separated severities the default logger starts out suppressing.
pub const SUPPRESS_ENV_VAR: &str = "TRT_LOGGER_SUPPRESS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub name: String,
    pub suppressed: Vec<Severity>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_owned(),
            suppressed: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// Default configuration with suppressions read from [`SUPPRESS_ENV_VAR`].
    pub fn from_env() -> Result<Self, ParseSeverityError> {
        let suppressed = match std::env::var(SUPPRESS_ENV_VAR) {
            Ok(value) => parse_severity_list(&value)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            suppressed,
            ..Self::default()
        })
    }
}

/// Parses `"verbose, info"` style lists. Empty entries are skipped, duplicates kept once.
pub fn parse_severity_list(list: &str) -> Result<Vec<Severity>, ParseSeverityError> {
    let mut severities = Vec::new();
    for entry in list.split(',').filter(|entry| !entry.trim().is_empty()) {
        let severity = entry.parse()?;
        if !severities.contains(&severity) {
            severities.push(severity);
        }
    }
    Ok(severities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_default_name() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, "DefaultLogger");
        assert!(config.suppressed.is_empty());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_severity_list("verbose, INFO ,warn"),
            Ok(vec![Severity::Verbose, Severity::Info, Severity::Warning])
        );
    }

    #[test]
    fn test_parse_list_skips_empty_entries_and_duplicates() {
        assert_eq!(
            parse_severity_list(",info,, info ,"),
            Ok(vec![Severity::Info])
        );
        assert_eq!(parse_severity_list(""), Ok(vec![]));
        assert_eq!(parse_severity_list("  "), Ok(vec![]));
    }

    #[test]
    fn test_parse_list_rejects_unknown_entry() {
        assert_eq!(
            parse_severity_list("info,loud"),
            Err(ParseSeverityError("loud".to_owned()))
        );
    }
}
