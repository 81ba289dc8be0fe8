//! Translation between secret-store identifiers and configuration keys.
//!
//! Secret stores do not allow `:` in secret names, so hierarchical keys are
//! stored with a `--` delimiter instead: `Jwt--SigningKey` holds the value of
//! `Jwt:SigningKey`.

/// Delimiter used by secret identifiers
pub const SECRET_DELIMITER: &str = "--";

/// Separator between levels of a hierarchical configuration key
pub const KEY_DELIMITER: &str = ":";

/// `Jwt--SigningKey` -> `Jwt:SigningKey`
pub fn secret_name_to_config_key(secret_name: &str) -> String {
    secret_name.replace(SECRET_DELIMITER, KEY_DELIMITER)
}

/// `Jwt:SigningKey` -> `Jwt--SigningKey`
pub fn config_key_to_secret_name(config_key: &str) -> String {
    config_key.replace(KEY_DELIMITER, SECRET_DELIMITER)
}
