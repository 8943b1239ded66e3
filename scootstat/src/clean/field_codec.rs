//! lenient readers for the numeric and flag columns of operator exports.
//! anything unreadable becomes None and is handled by the cleaning stages.

/// reads a decimal number, accepting a comma as decimal separator.
pub fn parse_f64(value: Option<&str>) -> Option<f64> {
    let value = value?.trim().trim_end_matches('%').trim();
    if value.is_empty() {
        return None;
    }
    value
        .parse::<f64>()
        .ok()
        .or_else(|| value.replace(',', ".").parse::<f64>().ok())
}

pub fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_lowercase().as_str() {
        "true" | "1" | "1.0" | "yes" | "y" | "si" | "sì" | "s" => Some(true),
        "false" | "0" | "0.0" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(Some("1.5")), Some(1.5));
        assert_eq!(parse_f64(Some("1,5")), Some(1.5));
        assert_eq!(parse_f64(Some(" 80% ")), Some(80.0));
        assert_eq!(parse_f64(Some("")), None);
        assert_eq!(parse_f64(Some("n/a")), None);
        assert_eq!(parse_f64(None), None);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool(Some("True")), Some(true));
        assert_eq!(parse_bool(Some("0")), Some(false));
        assert_eq!(parse_bool(Some("maybe")), None);
    }
}
