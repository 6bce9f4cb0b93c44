//! Error types for setupcheck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupCheckError {
    #[error("Resolve error: {0}")]
    ResolveError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SetupCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert_into_crate_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SetupCheckError::from(io);
        assert!(matches!(err, SetupCheckError::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }
}
