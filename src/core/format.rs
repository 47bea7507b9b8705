use crate::domain::model::Money;

/// Renders `value` the pt-BR way: `.` groups thousands, `,` precedes the two
/// centavo digits. No rounding happens here.
pub fn format_currency(value: Money) -> String {
    let centavos = value.centavos();
    let magnitude = centavos.unsigned_abs();
    let digits = (magnitude / 100).to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if centavos < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push_str(&format!(",{:02}", magnitude % 100));
    out
}

/// Square meters as delivered, with a decimal comma. Not rounded.
pub fn format_area(area: f64) -> String {
    area.to_string().replace('.', ",")
}
