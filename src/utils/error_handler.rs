use crate::models::GenericResponse;

#[derive(Debug)]
pub enum AppError {
    BadRequestErr(String),
    NotFound(String),
    InvalidOtp(String),
    RateLimited { wait_secs: u64 },
    AnyError(anyhow::Error),
}

impl AppError {
    /// Seconds the caller must wait before retrying, present only for
    /// rate limited rejections
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited { wait_secs } => Some(*wait_secs),
            _ => None,
        }
    }

    /// Render the error as the generic failure payload handed back to
    /// the surrounding application
    pub fn response(&self) -> GenericResponse {
        let message = match self {
            Self::BadRequestErr(msg) => {
                tracing::debug!("Bad request: {}", msg);
                msg.to_owned()
            }
            Self::NotFound(msg) => {
                tracing::debug!("Not Found: {}", msg);
                msg.to_owned()
            }
            Self::InvalidOtp(msg) => {
                tracing::debug!("Invalid otp: {}", msg);
                msg.to_owned()
            }
            Self::RateLimited { wait_secs } => {
                let msg = format!("Please wait {wait_secs} seconds before requesting a new code");
                tracing::debug!("Rate limited: {}", msg);
                msg
            }
            Self::AnyError(err) => {
                let msg = format!("Something went wrong: {err}");
                tracing::debug!("{msg}");
                msg
            }
        };
        GenericResponse {
            success: false,
            message,
        }
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self::AnyError(err.into())
    }
}
