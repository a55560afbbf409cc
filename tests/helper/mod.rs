pub mod helper;
pub mod otp;

pub use helper::get_service;
pub use helper::get_service_with_failing_mailer;
pub use helper::issue_req;
pub use helper::verify_req;
pub use helper::RecordingMailer;
pub use helper::TestService;

pub use otp::newest_code;
pub use otp::records_for;
pub use otp::seed_code;
pub use otp::seed_expired_code;
pub use otp::seed_used_code;
