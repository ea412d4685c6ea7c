use std::sync::PoisonError;

#[derive(Debug)]
pub enum GeneratorError {
    InvalidArgument(String),
    RandomSource(rand::Error),
    LockError,
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::InvalidArgument(msg) => {
                f.write_fmt(std::format_args!("Invalid argument: {}", msg))
            }
            Self::RandomSource(error) => {
                f.write_fmt(std::format_args!("Random source failed: {}", error))
            }
            Self::LockError => f.write_str("Failed to get mutex lock on generator"),
        };
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RandomSource(error) => Some(error),
            _ => None,
        }
    }
}

impl From<rand::Error> for GeneratorError {
    fn from(value: rand::Error) -> Self {
        Self::RandomSource(value)
    }
}

impl<T> From<PoisonError<T>> for GeneratorError {
    fn from(_value: PoisonError<T>) -> Self {
        Self::LockError
    }
}

impl GeneratorError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use super::GeneratorError;

    #[test]
    fn display_invalid_argument() {
        let error = GeneratorError::InvalidArgument("length -1 is negative".to_string());
        assert_eq!(error.to_string(), "Invalid argument: length -1 is negative");
        assert!(error.is_invalid_argument());
        assert!(error.source().is_none());
    }

    #[test]
    fn random_source_keeps_original() {
        let error: GeneratorError = rand::Error::new("entropy exhausted").into();
        assert!(!error.is_invalid_argument());
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "entropy exhausted");
    }
}
