use pwgen_lib::error::GeneratorError;

#[derive(Debug)]
pub enum CliError {
    Generator(GeneratorError),
    Output(String),
}

impl CliError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Generator(error) if error.is_invalid_argument())
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Generator(error) => f.write_fmt(std::format_args!("{}", error)),
            Self::Output(msg) => f.write_fmt(std::format_args!("Output error: {}", msg)),
        };
    }
}

impl std::error::Error for CliError {}

impl From<GeneratorError> for CliError {
    fn from(value: GeneratorError) -> Self {
        Self::Generator(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value.to_string())
    }
}
