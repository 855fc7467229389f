use crate::common::structs::custom_error::CustomError;
use rand::RngExt;

pub const MAX_FORM_BODY_SIZE: usize = 65_536;
pub const MIN_PEPPER_LENGTH: usize = 32;
pub const DEFAULT_PEPPER_ENTROPY_BYTES: usize = 32;
pub const MAX_USER_NAME_LENGTH: usize = 256;

pub fn generate_secure_pepper() -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..DEFAULT_PEPPER_ENTROPY_BYTES).map(|_| rng.random()).collect();
    use base64::prelude::*;
    BASE64_URL_SAFE_NO_PAD.encode(&bytes)
}

pub fn validate_pepper_strength(pepper: &str) -> bool {
    if pepper.chars().count() < MIN_PEPPER_LENGTH {
        return false;
    }
    let has_lower = pepper.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pepper.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pepper.chars().any(|c| c.is_ascii_digit());
    let has_special = pepper.chars().any(|c| !c.is_alphanumeric());
    let variety_count = [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&x| x)
        .count();
    variety_count >= 2
}

pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    let mut result = 0u8;
    for (x, y) in a_bytes.iter().zip(b_bytes.iter()) {
        result |= x ^ y;
    }
    result == 0
}

pub fn validate_file_path(path: &str) -> Result<(), CustomError> {
    if path.contains("..") {
        return Err(CustomError::new("Path traversal detected in file path"));
    }
    if path.contains('\0') {
        return Err(CustomError::new("Null byte detected in file path"));
    }
    Ok(())
}

pub fn validate_user_name(user_name: &str) -> Result<(), CustomError> {
    if user_name.len() > MAX_USER_NAME_LENGTH {
        return Err(CustomError::new(&format!(
            "User name exceeds maximum length of {} bytes",
            MAX_USER_NAME_LENGTH
        )));
    }
    if user_name.chars().any(|c| c.is_control()) {
        return Err(CustomError::new("Control characters detected in user name"));
    }
    Ok(())
}
