/// Group separator used by the `es-CR` locale (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';
pub const DECIMAL_SEPARATOR: char = ',';

const MAX_FRACTION_DIGITS: u32 = 3;
/// Spanish locales leave four-digit integers ungrouped.
const MIN_GROUPED_DIGITS: usize = 5;

/// Format like `Number.prototype.toLocaleString('es-CR')`: `6000`, `43 200`, `1 234,5`.
///
/// Non-finite input formats as `0`.
pub fn format_number(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    let scale = 10u128.pow(MAX_FRACTION_DIGITS);
    let scaled = (amount.abs() * scale as f64).round() as u128;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    if amount < 0.0 && scaled > 0 {
        out.push('-');
    }
    out.push_str(&group_digits(&integer.to_string()));

    if fraction > 0 {
        let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
        out.push(DECIMAL_SEPARATOR);
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

fn group_digits(digits: &str) -> String {
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// On-screen amount, e.g. `₡43 200`.
pub fn format_colones(amount: f64) -> String {
    format!("₡{}", format_number(amount))
}

/// Amount for generated documents: ISO code and plain spaces, e.g. `CRC 43 200`.
pub fn format_colones_document(amount: f64) -> String {
    format!("CRC {}", format_number(amount)).replace(GROUP_SEPARATOR, " ")
}
