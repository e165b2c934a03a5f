//! Number formatting for terminal output.

/// Format a signed count with thousands separators (`-1,234,567`)
pub fn format_count(value: i64) -> String {
    let digits = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Format a dollar amount rounded to whole dollars (`$146,395`)
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$-".to_string();
    }

    let rounded = value.round();
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Format a fraction as a percentage with one decimal (`0.25` -> `25.0%`)
pub fn format_rate(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Format a fractional user count, rounded to whole users
pub fn format_users(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format_count(value.round() as i64)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
