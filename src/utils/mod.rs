pub mod error_handler;
pub mod misc;
pub mod validation;

pub use error_handler::AppError;
pub use misc::*;
pub use validation::validate_otp;
pub use validation::validate_recipient;
