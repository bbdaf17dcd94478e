use once_cell::sync::Lazy;
use regex::Regex;

// IANA 时区名只允许字母、数字和少量分隔符，如 Asia/Tokyo、Etc/GMT+9
static TIMEZONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_+/-]+$").expect("Invalid timezone regex"));

pub fn validate_timezone(timezone: &str) -> Result<(), &'static str> {
    if timezone.is_empty() || timezone.len() > 64 {
        return Err("Timezone length must be between 1 and 64 characters");
    }
    if !TIMEZONE_RE.is_match(timezone) {
        return Err("Timezone must contain only letters, numbers, underscores, plus, slash or hyphen");
    }
    Ok(())
}

pub fn validate_limit(limit: u64, max_limit: u64) -> Result<(), &'static str> {
    if limit == 0 {
        return Err("Limit must be greater than zero");
    }
    if limit > max_limit {
        return Err("Limit exceeds the maximum page size");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_timezone() {
        assert!(validate_timezone("Asia/Tokyo").is_ok());
        assert!(validate_timezone("Etc/GMT+9").is_ok());
        assert!(validate_timezone("America/Argentina/Buenos_Aires").is_ok());
        assert!(validate_timezone("").is_err());
        assert!(validate_timezone("Asia/Tokyo; DROP TABLE").is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(validate_limit(1, 100).is_ok());
        assert!(validate_limit(100, 100).is_ok());
        assert!(validate_limit(0, 100).is_err());
        assert!(validate_limit(101, 100).is_err());
    }
}
