use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NonPositiveLimit { actual: i64 },
    NegativeOffset { actual: i64 },
    ZeroTimeout,
    InvalidBaseUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NonPositiveLimit { actual } => {
                write!(f, "limit must be a positive integer, got {actual}")
            }
            Self::NegativeOffset { actual } => {
                write!(f, "offset must not be negative, got {actual}")
            }
            Self::ZeroTimeout => write!(f, "timeout must be greater than zero"),
            Self::InvalidBaseUrl { input } => write!(f, "invalid base url: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty {
            field: "account_sid",
        };
        assert_eq!(err.to_string(), "account_sid must not be empty");

        let err = ValidationError::NonPositiveLimit { actual: -5 };
        assert_eq!(err.to_string(), "limit must be a positive integer, got -5");

        let err = ValidationError::NegativeOffset { actual: -1 };
        assert_eq!(err.to_string(), "offset must not be negative, got -1");

        let err = ValidationError::ZeroTimeout;
        assert_eq!(err.to_string(), "timeout must be greater than zero");

        let err = ValidationError::InvalidBaseUrl {
            input: "not a url".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid base url: not a url");
    }
}
