use validator::ValidationError;

/// Custom validator function to check the recipient email address
pub fn validate_recipient(recipient: &str) -> Result<(), ValidationError> {
    let recipient = recipient.trim();
    if recipient.is_empty() {
        let mut err = ValidationError::new("recipient");
        err.message = Some("Recipient email is required".into());
        return Err(err);
    }
    if !validator::validate_email(recipient) {
        let mut err = ValidationError::new("recipient");
        err.message = Some(
            format!("Recipient must be a valid email. Invalid recipient received: {recipient}")
                .into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Custom validator function to check the submitted otp characters
pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if !otp.chars().all(|ch| ch.is_ascii_digit()) {
        let mut err = ValidationError::new("otp");
        err.message = Some(format!("Otp must be all digits. Invalid otp received: {otp}").into());
        return Err(err);
    }

    Ok(())
}
