use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Failed to parse form response: {0}")]
    Parse(String),

    #[error("value {value} is not allowed for {element} element")]
    InvalidValue { element: &'static str, value: String },

    #[error("{element} value {value} is out of range {min}-{max}")]
    OutOfRange {
        element: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("Failed to marshal form: {0}")]
    Marshal(String),

    #[error("no form with ID {0} currently opened")]
    UnknownForm(u32),

    #[error("too many pending forms (limit {0})")]
    TooManyPendingForms(usize),

    #[error("form response of {size} bytes exceeds limit of {limit} bytes")]
    ResponseTooLarge { size: usize, limit: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FormError {
    fn from(error: serde_json::Error) -> Self {
        FormError::Parse(error.to_string())
    }
}

impl FormError {
    pub(crate) fn invalid(element: &'static str, value: &serde_json::Value) -> Self {
        FormError::InvalidValue {
            element,
            value: value.to_string(),
        }
    }

    pub(crate) fn out_of_range(
        element: &'static str,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        FormError::OutOfRange {
            element,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
