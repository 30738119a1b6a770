use std::str::FromStr;
use std::time::Duration;

const TOO_LARGE: &str = "Duration is too large";

fn add_scaled(total_ms: u64, value: u64, unit_ms: u64) -> std::result::Result<u64, String> {
    value
        .checked_mul(unit_ms)
        .and_then(|ms| total_ms.checked_add(ms))
        .ok_or_else(|| TOO_LARGE.to_string())
}

/// A duration written as `10s`, `1m30s` or a bare number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_ms = 0u64;
        let mut number = String::new();
        let mut seen = false;
        let mut chars = s.trim().chars().peekable();

        while let Some(c) = chars.next() {
            if c.is_ascii_digit() {
                number.push(c);
                continue;
            }
            if c.is_whitespace() {
                continue;
            }
            if number.is_empty() {
                return Err(format!("Missing number before unit '{c}'"));
            }
            let value: u64 = number.parse().map_err(|_| TOO_LARGE.to_string())?;
            let unit_ms = match c {
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    1
                }
                's' => 1_000,
                'm' => 60_000,
                'h' => 3_600_000,
                _ => return Err(format!("Invalid duration unit: {c}")),
            };
            total_ms = add_scaled(total_ms, value, unit_ms)?;
            number.clear();
            seen = true;
        }

        if !number.is_empty() {
            let seconds: u64 = number.parse().map_err(|_| TOO_LARGE.to_string())?;
            total_ms = add_scaled(total_ms, seconds, 1_000)?;
            seen = true;
        }

        if !seen || total_ms == 0 {
            return Err("Duration must be a positive amount of time".to_string());
        }
        Ok(HumanDuration(Duration::from_millis(total_ms)))
    }
}
