/// Thousands-separated count, e.g. `12,500`.
#[must_use]
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One decimal place, e.g. `4.9`.
#[must_use]
pub fn format_rating(rating: f32) -> String {
    format!("{rating:.1}")
}
