use std::fmt;

pub type EndianResult<T> = Result<T, EndianError>;

/// Failure to interpret a textual byte-order name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndianError {
    Empty,
    UnknownName(String),
}

impl fmt::Display for EndianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndianError::Empty => write!(f, "byte order name is empty"),
            EndianError::UnknownName(name) => write!(
                f,
                "unknown byte order '{name}' (expected little, le, big, be or native)"
            ),
        }
    }
}

impl std::error::Error for EndianError {}
