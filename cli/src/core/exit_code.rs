use crate::core::error::PmresError;

/// Exit codes for the pmres CLI.
/// Code 2 is left to clap for usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Input file is not valid JSON
    ParseError = 3,
    /// File not found or IO error
    FileError = 4,
    /// Missing or unreadable interactive input
    InputError = 5,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&PmresError> for ExitCode {
    fn from(error: &PmresError) -> Self {
        match error {
            PmresError::Io(_) => ExitCode::FileError,
            PmresError::FileNotFound(_) => ExitCode::FileError,
            PmresError::InvalidJson { .. } => ExitCode::ParseError,
            PmresError::Input(_) => ExitCode::InputError,
            PmresError::Generic(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(pmres_error) = error.downcast_ref::<PmresError>() {
            ExitCode::from(pmres_error)
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else if error.downcast_ref::<serde_json::Error>().is_some() {
            ExitCode::ParseError
        } else {
            ExitCode::GeneralError
        }
    }
}
