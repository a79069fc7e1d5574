use thiserror::Error;

// Every variant is terminal: main converts it into a process abort. Only
// SizeMismatch carries a diagnostic the program is allowed to print.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum Fatal {
    #[error("clock outside the encodable range")]
    Clock,
    #[error("Size mismatch: expected {expected} but got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("rendered timestamp failed verification")]
    Malformed,
}
