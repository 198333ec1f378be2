//! Setting value validation.

use super::defaults::MAX_EVENT_QUEUE_CAPACITY;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "app_name" | "icon" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        "default_route" => {
            if !value.starts_with('/') {
                return Err("must be a path starting with '/'".into());
            }
        }
        "event_queue_capacity" => {
            let v: usize = value.parse().map_err(|_| "must be an integer")?;
            if !(1..=MAX_EVENT_QUEUE_CAPACITY).contains(&v) {
                return Err(format!("must be between 1 and {MAX_EVENT_QUEUE_CAPACITY}"));
            }
        }
        _ => return Err(format!("unknown setting: {key}")),
    }
    Ok(())
}
