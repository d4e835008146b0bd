use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Unit alternations are ordered longest first so that "stunden" is not cut to "stunde".
const NUMBER: &str = r"([0-9]+(?:[.,][0-9]+)?)";
const HOUR_UNIT: &str = r"(?:stunden|stunde|std|h)";
const MINUTE_UNIT: &str = r"(?:minuten|minute|min)";
// An hour unit ends the word or runs straight into digits ("1h30"), never into letters.
const HOUR_END: &str = r"(?:\b|[0-9])";

static HOURS_AND_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"{NUMBER}\s*{HOUR_UNIT}(?:\.?\s*([0-9]+)\s*{MINUTE_UNIT}\b|{HOUR_END})"
    ))
});

static HOUR_RANGES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile(&format!(r"{NUMBER}\s*[–-]\s*{NUMBER}\s*{HOUR_UNIT}\b")),
        compile(&format!(r"{NUMBER}\s*bis\s*{NUMBER}\s*{HOUR_UNIT}\b")),
    ]
});

static SINGLE_HOUR: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"{NUMBER}\s*{HOUR_UNIT}{HOUR_END}")));

static MINUTE_RANGES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile(&format!(r"([0-9]+)\s*[–-]\s*([0-9]+)\s*{MINUTE_UNIT}\b")),
        compile(&format!(r"([0-9]+)\s*bis\s*([0-9]+)\s*{MINUTE_UNIT}\b")),
    ]
});

static SINGLE_MINUTE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"([0-9]+)\s*{MINUTE_UNIT}\b")));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("duration pattern is valid")
}

/// Extract a cook time in whole minutes from an instruction body.
///
/// Patterns are tried in a fixed priority order and the first one that yields
/// a positive duration wins:
///
/// 1. hours with optional trailing minutes (`1 Stunde 30 Minuten`, `1,5 h`)
/// 2. hour ranges with a dash or `bis` (lower bound)
/// 3. a single hour value
/// 4. minute ranges with a dash or `bis` (lower bound)
/// 5. a single minute value
///
/// ```
/// use recipe_steps::extract_duration_minutes;
///
/// assert_eq!(extract_duration_minutes("Backe 15-20 Minuten"), Some(15));
/// assert_eq!(extract_duration_minutes("1 Stunde 30 Minuten schmoren"), Some(90));
/// assert_eq!(extract_duration_minutes("Salzen und servieren"), None);
/// ```
pub fn extract_duration_minutes(body: &str) -> Option<u32> {
    let text = body.to_lowercase();

    let minutes = hours_with_minutes(&text)
        .or_else(|| hour_range(&text))
        .or_else(|| single_hour(&text))
        .or_else(|| minute_range(&text))
        .or_else(|| single_minute(&text));

    if minutes.is_none() {
        debug!("No duration phrase found in instruction");
    }
    minutes
}

fn hours_with_minutes(text: &str) -> Option<u32> {
    // The upper end of "1-2 h" belongs to the range pattern, not to this one.
    let caps = HOURS_AND_MINUTES.captures(text)?;
    if follows_range_connector(text, group_start(&caps)) {
        return None;
    }

    let hours = hours_to_minutes(caps.get(1)?.as_str())?;
    let extra = match caps.get(2) {
        Some(m) => m.as_str().parse::<u32>().ok()?,
        None => 0,
    };
    positive(hours.checked_add(extra)?)
}

fn hour_range(text: &str) -> Option<u32> {
    HOUR_RANGES.iter().find_map(|re| {
        let caps = re.captures(text)?;
        positive(hours_to_minutes(caps.get(1)?.as_str())?)
    })
}

fn single_hour(text: &str) -> Option<u32> {
    let caps = SINGLE_HOUR.captures(text)?;
    positive(hours_to_minutes(caps.get(1)?.as_str())?)
}

fn minute_range(text: &str) -> Option<u32> {
    MINUTE_RANGES.iter().find_map(|re| {
        let caps = re.captures(text)?;
        positive(caps.get(1)?.as_str().parse::<u32>().ok()?)
    })
}

fn single_minute(text: &str) -> Option<u32> {
    let caps = SINGLE_MINUTE.captures(text)?;
    positive(caps.get(1)?.as_str().parse::<u32>().ok()?)
}

/// Converts a decimal hour value (comma or dot) to rounded minutes.
fn hours_to_minutes(raw: &str) -> Option<u32> {
    let hours: f64 = raw.replace(',', ".").parse().ok()?;
    let minutes = (hours * 60.0).round();
    if minutes.is_finite() && minutes >= 0.0 && minutes <= f64::from(u32::MAX) {
        Some(minutes as u32)
    } else {
        None
    }
}

fn positive(minutes: u32) -> Option<u32> {
    (minutes > 0).then_some(minutes)
}

fn group_start(caps: &Captures<'_>) -> usize {
    caps.get(0).map(|m| m.start()).unwrap_or(0)
}

/// True when the text before `start` reads like `<number> -` or `<number> bis`.
fn follows_range_connector(text: &str, start: usize) -> bool {
    let before = text[..start].trim_end();
    let Some(rest) = before
        .strip_suffix('-')
        .or_else(|| before.strip_suffix('–'))
        .or_else(|| before.strip_suffix("bis"))
    else {
        return false;
    };
    rest.trim_end().ends_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_minutes() {
        assert_eq!(extract_duration_minutes("Lass es 15 Minuten ruhen"), Some(15));
        assert_eq!(extract_duration_minutes("10 min köcheln"), Some(10));
        assert_eq!(extract_duration_minutes("Noch 1 Minute rühren"), Some(1));
        assert_eq!(extract_duration_minutes("20min backen"), Some(20));
    }

    #[test]
    fn test_minute_range_uses_lower_bound() {
        assert_eq!(extract_duration_minutes("15-20 Minuten backen"), Some(15));
        assert_eq!(extract_duration_minutes("15 – 20 Minuten backen"), Some(15));
        assert_eq!(extract_duration_minutes("8 bis 10 Minuten garen"), Some(8));
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(extract_duration_minutes("1 Stunde 30 Minuten schmoren"), Some(90));
        assert_eq!(extract_duration_minutes("1h30min im Ofen"), Some(90));
        assert_eq!(extract_duration_minutes("1 Std. 15 Min. garen"), Some(75));
        assert_eq!(extract_duration_minutes("1h30 garen"), Some(60));
        assert_eq!(extract_duration_minutes("2h15 im Ofen"), Some(120));
    }

    #[test]
    fn test_single_hours() {
        assert_eq!(extract_duration_minutes("2 Stunden marinieren"), Some(120));
        assert_eq!(extract_duration_minutes("3 Std. kühlen"), Some(180));
        assert_eq!(extract_duration_minutes("4h gehen lassen"), Some(240));
    }

    #[test]
    fn test_decimal_hours() {
        assert_eq!(extract_duration_minutes("1,5 Stunden gehen lassen"), Some(90));
        assert_eq!(extract_duration_minutes("0.25 h ziehen lassen"), Some(15));
        assert_eq!(extract_duration_minutes("0,3 Std. ruhen"), Some(18));
    }

    #[test]
    fn test_hour_range_uses_lower_bound() {
        assert_eq!(extract_duration_minutes("1-2 Stunden ruhen lassen"), Some(60));
        assert_eq!(extract_duration_minutes("2 bis 3 Stunden kühlen"), Some(120));
    }

    #[test]
    fn test_leading_hour_range_wins_over_later_hours() {
        assert_eq!(
            extract_duration_minutes("2-3 Std. gehen lassen, dann 1 Stunde backen"),
            Some(120)
        );
        assert_eq!(
            extract_duration_minutes("1 bis 2 Stunden ruhen, danach 3 h kühlen"),
            Some(60)
        );
    }

    #[test]
    fn test_hours_win_over_minutes() {
        assert_eq!(
            extract_duration_minutes("5 Minuten rühren, dann 2 Stunden ruhen"),
            Some(120)
        );
    }

    #[test]
    fn test_unit_must_end_the_word() {
        assert_eq!(extract_duration_minutes("2 Hähnchenbrüste 6 Minuten braten"), Some(6));
        assert_eq!(extract_duration_minutes("3 Minzblätter zugeben"), None);
    }

    #[test]
    fn test_zero_is_not_a_duration() {
        assert_eq!(extract_duration_minutes("0 Minuten"), None);
        assert_eq!(extract_duration_minutes("0 h, dann 5 Minuten"), Some(5));
    }

    #[test]
    fn test_no_duration() {
        assert_eq!(extract_duration_minutes("Mit Salz abschmecken"), None);
        assert_eq!(extract_duration_minutes(""), None);
        assert_eq!(extract_duration_minutes("Auf 220°C vorheizen"), None);
    }

    #[test]
    fn test_huge_numbers_do_not_panic() {
        assert_eq!(extract_duration_minutes("99999999999999999999 Minuten"), None);
        assert_eq!(extract_duration_minutes("99999999999 Stunden"), None);
    }

    #[test]
    fn test_range_connector_detection() {
        assert!(follows_range_connector("1-2 h", 2));
        assert!(follows_range_connector("1 bis 2 h", 6));
        assert!(!follows_range_connector("nach 2 h", 5));
        assert!(!follows_range_connector("Teig - 2 h", 7));
    }
}
