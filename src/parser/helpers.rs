//! Helper functions for IGC record parsing
//!
//! Fixed-width field decoders for the time and coordinate columns of
//! B (fix) records. All of them return `None` on malformed input instead
//! of panicking, so a single corrupt record can be skipped.

fn parse_digits(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Decode `HHMMSS` into seconds since midnight
pub fn parse_time_of_day(field: &str) -> Option<i64> {
    if field.len() != 6 {
        return None;
    }
    let hours = parse_digits(field.get(0..2)?)?;
    let minutes = parse_digits(field.get(2..4)?)?;
    let seconds = parse_digits(field.get(4..6)?)?;
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    Some(i64::from(hours * 3600 + minutes * 60 + seconds))
}

/// Decode `D..DMMmmmH` where the minutes carry three implied decimals
fn parse_coordinate(field: &str, degree_digits: usize, positive: char, negative: char) -> Option<f64> {
    if field.len() != degree_digits + 6 {
        return None;
    }
    let degrees = parse_digits(field.get(0..degree_digits)?)?;
    let minutes_thousandths = parse_digits(field.get(degree_digits..degree_digits + 5)?)?;
    let hemisphere = field.get(degree_digits + 5..)?.chars().next()?;

    let value = f64::from(degrees) + f64::from(minutes_thousandths) / 1000.0 / 60.0;
    match hemisphere {
        h if h == positive => Some(value),
        h if h == negative => Some(-value),
        _ => None,
    }
}

/// Decode an 8-character `DDMMmmmN` latitude into signed degrees
pub fn parse_latitude(field: &str) -> Option<f64> {
    parse_coordinate(field, 2, 'N', 'S').filter(|lat| lat.abs() <= 90.0)
}

/// Decode a 9-character `DDDMMmmmE` longitude into signed degrees
pub fn parse_longitude(field: &str) -> Option<f64> {
    parse_coordinate(field, 3, 'E', 'W').filter(|lon| lon.abs() <= 180.0)
}

/// Decode a 5-character altitude in metres; may carry a leading minus sign
pub fn parse_altitude(field: &str) -> Option<f64> {
    if field.len() != 5 {
        return None;
    }
    field.trim().parse::<i32>().ok().map(f64::from)
}

/// Expand a two-digit IGC year; loggers predating 1980 do not exist
pub fn expand_two_digit_year(year: i32) -> i32 {
    if year < 80 {
        2000 + year
    } else {
        1900 + year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("000000"), Some(0));
        assert_eq!(parse_time_of_day("103005"), Some(37805));
        assert_eq!(parse_time_of_day("235959"), Some(86399));
        assert_eq!(parse_time_of_day("246000"), None);
        assert_eq!(parse_time_of_day("10300"), None);
        assert_eq!(parse_time_of_day("10a005"), None);
    }

    #[test]
    fn test_parse_latitude() {
        // 45 degrees 53.123 minutes
        let lat = parse_latitude("4553123N").unwrap();
        assert!((lat - (45.0 + 53.123 / 60.0)).abs() < 1e-9);

        let lat = parse_latitude("3352000S").unwrap();
        assert!((lat + (33.0 + 52.0 / 60.0)).abs() < 1e-9);

        assert_eq!(parse_latitude("4553123X"), None);
        assert_eq!(parse_latitude("455312N"), None);
        assert_eq!(parse_latitude("9500000N"), None);
    }

    #[test]
    fn test_parse_longitude() {
        let lon = parse_longitude("00613456E").unwrap();
        assert!((lon - (6.0 + 13.456 / 60.0)).abs() < 1e-9);

        let lon = parse_longitude("07130500W").unwrap();
        assert!((lon + (71.0 + 30.5 / 60.0)).abs() < 1e-9);

        assert_eq!(parse_longitude("0061345E"), None);
    }

    #[test]
    fn test_parse_altitude() {
        assert_eq!(parse_altitude("01234"), Some(1234.0));
        assert_eq!(parse_altitude("-0012"), Some(-12.0));
        assert_eq!(parse_altitude("00000"), Some(0.0));
        assert_eq!(parse_altitude("12a45"), None);
        assert_eq!(parse_altitude("123"), None);
    }

    #[test]
    fn test_expand_two_digit_year() {
        assert_eq!(expand_two_digit_year(23), 2023);
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(99), 1999);
    }
}
