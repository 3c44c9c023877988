//! Error type for the command-line front end.
//!
//! The conversion core never fails: malformed cells and degenerate fits are
//! reported through the data itself (`valid` flags, R² sentinels). Only the
//! binary's file/stdin/stdout handling produces an `AppError`.

/// Exit code for unreadable input, unwritable output, or bad arguments.
pub const EXIT_IO: u8 = 2;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Wrap an I/O failure with a short description of what was being done.
    pub fn io(context: impl std::fmt::Display, err: std::io::Error) -> Self {
        Self::new(EXIT_IO, format!("{context}: {err}"))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_keeps_context_and_exit_code() {
        let err = AppError::io(
            "Failed to open 'data.txt'",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.exit_code(), EXIT_IO);
        assert_eq!(err.to_string(), "Failed to open 'data.txt': no such file");
    }
}
