use std::fmt;

/// Custom error types for the maze simulation
#[derive(Debug)]
pub enum SimError {
    /// IO operation failed
    IoError(std::io::Error),
    /// Invalid line format in map file
    InvalidLine(String),
    /// Invalid direction string
    InvalidDirection(String),
    /// Starting cell does not map to any graph node (fatal at init)
    NoNodeAtStart(i32, i32),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::IoError(err) => write!(f, "IO error: {}", err),
            SimError::InvalidLine(msg) => write!(f, "Invalid line: {}", msg),
            SimError::InvalidDirection(dir) => write!(f, "Invalid direction: {}", dir),
            SimError::NoNodeAtStart(x, y) => {
                write!(f, "no node found at starting cell ({}, {})", x, y)
            }
        }
    }
}

impl std::error::Error for SimError {}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
