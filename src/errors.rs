use std::fmt;
use std::path::PathBuf;

/// Rejection reasons for a candidate mobile number.
///
/// These are recovered locally: the message is shown to the user and
/// processing moves on to the next identifier in batch/interactive modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The input contains a character that is not a decimal digit.
    NonNumeric,
    /// The input has fewer than 10 digits.
    TooShort,
    /// The input has more than 15 digits.
    TooLong,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonNumeric => {
                write!(f, "Mobile number should contain only digits")
            }
            ValidationError::TooShort => write!(f, "Mobile number too short"),
            ValidationError::TooLong => write!(f, "Mobile number too long"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Fatal errors when reading an identifier list in file mode.
///
/// Unlike validation and transport failures these terminate the process
/// with a non-zero status.
#[derive(Debug)]
pub enum FileAccessError {
    NotFound(PathBuf),
    Read(PathBuf, std::io::Error),
}

impl fmt::Display for FileAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAccessError::NotFound(path) => {
                write!(f, "File not found: {}", path.display())
            }
            FileAccessError::Read(path, e) => {
                write!(f, "Error reading file {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for FileAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileAccessError::NotFound(_) => None,
            FileAccessError::Read(_, e) => Some(e),
        }
    }
}
