use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfluenceError {
    /// A required column is absent from the input table header.
    #[error("Input error: missing required column '{0}'")]
    MissingColumn(String),

    /// A record field is present but unusable (unparsable, negative, non-finite).
    #[error("Input error: row {row}: {message}")]
    Input { row: usize, message: String },

    /// Normalisation constants or sampling parameters are invalid.
    #[error("Data error: {0}")]
    Data(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InfluenceError {
    /// True for the input-side failures (bad header or bad field value).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingColumn(_) | Self::Input { .. })
    }

    /// True for invalid normalisation or sampling parameters.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}

pub type Result<T> = std::result::Result<T, InfluenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(InfluenceError::MissingColumn("Country".into()).is_input_error());
        assert!(InfluenceError::Input { row: 3, message: "bad".into() }.is_input_error());
        assert!(InfluenceError::Data("max_capacity = 0".into()).is_data_error());
        assert!(!InfluenceError::Data("x".into()).is_input_error());
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = InfluenceError::MissingColumn("Capacity (kt H2/y)".into());
        assert_eq!(
            err.to_string(),
            "Input error: missing required column 'Capacity (kt H2/y)'"
        );

        let err = InfluenceError::Input { row: 7, message: "capacity is negative".into() };
        assert_eq!(err.to_string(), "Input error: row 7: capacity is negative");
    }
}
