pub const MONGO_MIN_POOL_SIZE: u32 = 5;
pub const MONGO_MAX_POOL_SIZE: u32 = 10;
pub const MONGO_CONN_TIMEOUT: u64 = 10;

pub const OTP_LENGTH: u32 = 4;
pub const OTP_VALIDITY_MINS: u64 = 5;
// resend windows are mentioned in seconds, each purpose carries its own
pub const REGISTRATION_RESEND_WINDOW_SECS: u64 = 2 * 60;
pub const PASSWORD_RESET_RESEND_WINDOW_SECS: u64 = 60;
// several valid codes may coexist for one recipient, so verification
// reads a bounded batch instead of a single row
pub const OTP_FETCH_LIMIT: i64 = 20;
pub const CLEANUP_JOB_INTERVAL: u64 = 24 * 60 * 60;

pub const DB_NAME: &str = "storefront";

pub const COLL_OTP: &str = "otps";

pub const MAIL_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STORE_NAME: &str = "our store";

pub const REGISTRATION_EMAIL_SUBJECT: &str = "Verify your email address";
pub const PASSWORD_RESET_EMAIL_SUBJECT: &str = "Reset your password";
pub const REGISTRATION_EMAIL_TEMPLATE: &str =
    "Hi, your {{store}} verification code is {{code}}. The code is valid for {{validity}} minutes.";
pub const PASSWORD_RESET_EMAIL_TEMPLATE: &str =
    "Hi, use code {{code}} to reset your {{store}} account password. The code is valid for {{validity}} minutes.";
