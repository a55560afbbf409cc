use serde::{Deserialize, Serialize};

pub mod otp;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenericResponse {
    pub success: bool,
    pub message: String,
}

pub use otp::*;
