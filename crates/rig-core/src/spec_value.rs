//! # Specification Value Parser
//!
//! Extracts the leading numeric magnitude from a free-form specification
//! string such as `"4.5 GHz"`, `"1,000 W"` or `"500-2000 RPM"`.
//!
//! The scan starts after leading whitespace and accepts ASCII digits,
//! `,` thousands separators (dropped) and at most one `.` decimal point.
//! The first other character ends the run. Units, ranges and free text are
//! ignored. A string whose leading run holds no digit has no value.

/// Parse the leading number of `text`, or `None` when there is none.
///
/// ```
/// use rig_core::parse_leading_number;
///
/// assert_eq!(parse_leading_number("4.5 GHz"), Some(4.5));
/// assert_eq!(parse_leading_number("1,000 W"), Some(1000.0));
/// assert_eq!(parse_leading_number("500-2000 RPM"), Some(500.0));
/// assert_eq!(parse_leading_number("None"), None);
/// ```
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let mut run = String::new();
    let mut seen_digit = false;
    let mut seen_point = false;

    for ch in text.trim_start().chars() {
        match ch {
            '0'..='9' => {
                run.push(ch);
                seen_digit = true;
            }
            ',' => {}
            '.' if !seen_point => {
                run.push('.');
                seen_point = true;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    if run.ends_with('.') {
        run.pop();
    }
    if run.starts_with('.') {
        run.insert(0, '0');
    }
    run.parse::<f64>().ok().filter(|n| n.is_finite())
}
