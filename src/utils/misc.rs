use rand::{thread_rng, Rng};
use regex::Regex;
use std::{
    collections::HashMap,
    time::{SystemTime, UNIX_EPOCH},
};

/// Get EPOCH timestamp in seconds
pub fn get_epoch_ts() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs(),
        Err(_) => panic!("SystemTime before UNIX EPOCH!"),
    }
}

/// Generate OTP of a given length
pub fn generate_otp(len: u32) -> String {
    let mut rng = thread_rng();
    (0..len)
        .map(|_| {
            let n = rng.gen_range(0..10);
            char::from_digit(n, 10).unwrap_or('0')
        })
        .collect()
}

/// Normalize a recipient address for lookup, addresses are matched case
/// insensitively
pub fn normalize_recipient(recipient: &str) -> String {
    recipient.trim().to_lowercase()
}

/// replace placeholder variables from the template text
/// placeholders are of patters {{variable}}
pub fn replace_placeholders(s: &str, options: HashMap<String, String>) -> anyhow::Result<String> {
    let re = Regex::new(r"\{\{(\w+)\}\}")?;
    let mut options = options;
    let mut replaced = String::from(s);
    for cap in re.captures_iter(s) {
        let var = &cap[1];
        if let Some(val) = options.get(var) {
            let find = &cap[0];
            let find = find.replace("{", r"\{");
            let find = find.replace("}", r"\}");
            if let Ok(re) = Regex::new(&find) {
                let rs = re.replace_all(&replaced, val);
                replaced = rs.to_string();
                options.remove(var);
            }
        }
    }

    Ok(replaced)
}
