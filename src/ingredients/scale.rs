use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Serving count every recipe is written for.
pub const BASE_SERVINGS: u32 = 4;

static AMOUNT_AND_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9/.,]+)\s*(.*)").expect("amount pattern is valid")
});

/// Rescale a quantity token from [`BASE_SERVINGS`] to `servings`.
///
/// The unit part is kept verbatim. Tokens that cannot be read as a number or
/// a fraction are returned unchanged.
///
/// ```
/// use recipe_steps::scale_quantity;
///
/// assert_eq!(scale_quantity("200g", 8), "400g");
/// assert_eq!(scale_quantity("1 TL", 8), "2TL");
/// assert_eq!(scale_quantity("3", 1), "0.8");
/// assert_eq!(scale_quantity("etwas", 8), "etwas");
/// ```
pub fn scale_quantity(token: &str, servings: u32) -> String {
    let scale = f64::from(servings) / f64::from(BASE_SERVINGS);

    let Some(caps) = AMOUNT_AND_UNIT.captures(token) else {
        return token.to_string();
    };
    let (Some(amount), unit) = (caps.get(1), caps.get(2).map_or("", |m| m.as_str())) else {
        return token.to_string();
    };

    let Some(value) = parse_amount(amount.as_str()) else {
        debug!("Quantity {:?} is not numeric, leaving unscaled", token);
        return token.to_string();
    };

    let scaled = value * scale;
    if !scaled.is_finite() {
        return token.to_string();
    }
    format!("{}{}", format_amount(scaled), unit)
}

/// Reads "1/2", "1,5" or "200" as a number. Zero denominators are rejected.
fn parse_amount(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");

    if normalized.contains('/') {
        let mut parts = normalized.split('/');
        if let (Some(num), Some(den), None) = (parts.next(), parts.next(), parts.next()) {
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            return Some(num / den);
        }
    }

    normalized.parse().ok()
}

/// Format a scaled amount.
///
/// Whole numbers get no decimals, amounts below ten get one decimal and
/// everything else is rounded to an integer. Rounding is half-up.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else if value < 10.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.0}", value.round())
    }
}
