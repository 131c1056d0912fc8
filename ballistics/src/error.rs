use std::fmt;
use std::io;

/// Launch parameters typed on the terminal could not be used.
#[derive(Debug)]
pub enum InputError {
    /// Input ended before the value was read
    Missing(&'static str),
    NotANumber {
        field: &'static str,
        token: String,
    },
    OutOfRange {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Missing(field) => write!(f, "no value given for {field}"),
            InputError::NotANumber { field, token } => {
                write!(f, "{field}: '{token}' is not a number")
            }
            InputError::OutOfRange {
                field,
                value,
                reason,
            } => write!(f, "{field}: {value} {reason}"),
            InputError::Io(e) => write!(f, "reading input failed: {e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}
