use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityTypeError {
    /// Integer that is neither VBR (0) nor CBR (1)
    InvalidValue(i64),
    /// Text that names no quality type
    InvalidName(String),
}

impl fmt::Display for QualityTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityTypeError::InvalidValue(value) => write!(
                f,
                "Invalid quality type: {value} (expected 0 for VBR or 1 for CBR)"
            ),
            QualityTypeError::InvalidName(name) => write!(
                f,
                "Invalid quality type: {name:?} (expected VBR, CBR, 0 or 1)"
            ),
        }
    }
}

impl Error for QualityTypeError {}

pub type Result<T> = std::result::Result<T, QualityTypeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rejected_input() {
        let err = QualityTypeError::InvalidValue(2);
        assert_eq!(
            err.to_string(),
            "Invalid quality type: 2 (expected 0 for VBR or 1 for CBR)"
        );

        let err = QualityTypeError::InvalidName("abr".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid quality type: \"abr\" (expected VBR, CBR, 0 or 1)"
        );
    }

    #[test]
    fn boxes_as_std_error() {
        let boxed: Box<dyn Error> = Box::new(QualityTypeError::InvalidValue(-1));
        assert!(boxed.source().is_none());
        assert!(boxed.to_string().starts_with("Invalid quality type"));
    }
}
