use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0} must be a non-empty string")]
    EmptyString(&'static str),

    #[error("{0} must be a valid UUID")]
    InvalidUuid(&'static str),

    #[error("{value} must be a valid {expected}")]
    InvalidEnum {
        expected: &'static str,
        value: String,
    },

    #[error("{field} must be an array of {expected}")]
    InvalidArray {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{0} must be a non-empty array")]
    EmptyArray(&'static str),

    #[error("{0} must be a boolean")]
    InvalidBoolean(&'static str),

    #[error("{0} must be an integer")]
    InvalidInteger(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{0} must be an object")]
    NotAnObject(&'static str),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: {source}")]
    InvalidChild {
        field: &'static str,
        #[source]
        source: Box<ModelError>,
    },

    #[error("FQNs must be <= 63 characters, got {0}")]
    FqnTooLong(usize),

    #[error("invalid FQN: {0}")]
    InvalidFqn(String),
}

impl ModelError {
    pub fn child(field: &'static str, source: ModelError) -> Self {
        Self::InvalidChild {
            field,
            source: Box::new(source),
        }
    }
}
