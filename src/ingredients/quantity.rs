use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// Metric mass/volume, spoon measures and container words (German spellings and abbreviations).
const METRIC_UNITS: &str = "kilogramm|kg|gramm|g|mg|milliliter|ml|liter|l|dl|cl|\
    teelöffel|teeloeffel|tl|esslöffel|essloeffel|el|tassen|tasse|becher|\
    stück|stueck|stk|prisen|prise|bund|dosen|dose|paket|packung|gläser|glas";

const IMPERIAL_UNITS: &str = "cups|cup|tbsp|tsp|oz|lbs|lb|pounds|pound|ounces|ounce|\
    pieces|piece|pinch|bunch|cans|can|packages|package";

static NAME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^[0-9/.,\s-]+(?:(?:{METRIC_UNITS}|{IMPERIAL_UNITS})\b|st\.)?\s*"
    ))
});

static QUANTITY_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // "200g", "1 kg", "2 EL", "1 St."
        compile(&format!(
            r"(?i)^([0-9/.,\s-]+\s*(?:(?:{METRIC_UNITS})\b|st\.))"
        )),
        // "1/2 cup", "2 tbsp"
        compile(&format!(r"(?i)^([0-9/.,\s-]+\s*(?:{IMPERIAL_UNITS})\b)")),
        // bare leading number: "2 Eier", "1/2 Zitrone"
        compile(r"^([0-9/.,]+)(?:\s|$)"),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("ingredient pattern is valid")
}

/// Split an ingredient line into its name and optional quantity token.
///
/// Lines without a recognisable quantity ("Salz nach Geschmack") come back
/// unchanged as the name.
///
/// ```
/// use recipe_steps::parse_ingredient;
///
/// assert_eq!(
///     parse_ingredient("200g Mehl"),
///     ("Mehl".to_string(), Some("200g".to_string()))
/// );
/// assert_eq!(
///     parse_ingredient("Salz nach Geschmack"),
///     ("Salz nach Geschmack".to_string(), None)
/// );
/// ```
pub fn parse_ingredient(line: &str) -> (String, Option<String>) {
    match parse_ingredient_quantity(line) {
        Some(quantity) => (parse_ingredient_name(line), Some(quantity)),
        None => (line.to_string(), None),
    }
}

/// Ingredient name with any leading amount and unit removed.
///
/// A line that is only an amount ("3", "250 g") has an empty name.
pub fn parse_ingredient_name(line: &str) -> String {
    NAME_PREFIX.replace(line.trim(), "").trim().to_string()
}

/// Leading amount (with unit when present) of an ingredient line.
pub fn parse_ingredient_quantity(line: &str) -> Option<String> {
    let trimmed = line.trim();

    for pattern in QUANTITY_PATTERNS.iter() {
        let Some(m) = pattern.captures(trimmed).and_then(|caps| caps.get(1)) else {
            continue;
        };
        let quantity = m.as_str().trim();
        if quantity.chars().any(|c| c.is_ascii_digit()) {
            debug!("Parsed ingredient quantity: {}", quantity);
            return Some(quantity.to_string());
        }
    }

    debug!("No quantity match for ingredient: {}", line);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> (String, Option<String>) {
        parse_ingredient(line)
    }

    #[test]
    fn test_metric_units() {
        assert_eq!(parsed("200g Mehl"), ("Mehl".into(), Some("200g".into())));
        assert_eq!(parsed("1 kg Kartoffeln"), ("Kartoffeln".into(), Some("1 kg".into())));
        assert_eq!(parsed("500 ml Milch"), ("Milch".into(), Some("500 ml".into())));
        assert_eq!(parsed("1 Liter Brühe"), ("Brühe".into(), Some("1 Liter".into())));
    }

    #[test]
    fn test_spoon_and_container_units_ignore_case() {
        assert_eq!(parsed("1 TL Salz"), ("Salz".into(), Some("1 TL".into())));
        assert_eq!(parsed("2 EL Olivenöl"), ("Olivenöl".into(), Some("2 EL".into())));
        assert_eq!(parsed("1 Dose Tomaten"), ("Tomaten".into(), Some("1 Dose".into())));
        assert_eq!(parsed("2 Stück Zwiebeln"), ("Zwiebeln".into(), Some("2 Stück".into())));
        assert_eq!(parsed("3 St. Eier"), ("Eier".into(), Some("3 St.".into())));
        assert_eq!(parsed("1 PRISE Zucker"), ("Zucker".into(), Some("1 PRISE".into())));
    }

    #[test]
    fn test_imperial_units() {
        assert_eq!(parsed("1/2 cup milk"), ("milk".into(), Some("1/2 cup".into())));
        assert_eq!(parsed("2 tbsp butter"), ("butter".into(), Some("2 tbsp".into())));
    }

    #[test]
    fn test_bare_numbers() {
        assert_eq!(parsed("2 Eier"), ("Eier".into(), Some("2".into())));
        assert_eq!(parsed("1/2 Zitrone"), ("Zitrone".into(), Some("1/2".into())));
        assert_eq!(parsed("1,5 Paprika"), ("Paprika".into(), Some("1,5".into())));
    }

    #[test]
    fn test_unit_must_be_a_whole_word() {
        assert_eq!(parsed("2 gelbe Paprika"), ("gelbe Paprika".into(), Some("2".into())));
        assert_eq!(parsed("3 Tassenkuchen"), ("Tassenkuchen".into(), Some("3".into())));
    }

    #[test]
    fn test_no_quantity() {
        assert_eq!(parsed("Salz nach Geschmack"), ("Salz nach Geschmack".into(), None));
        assert_eq!(parsed("etwas Pfeffer"), ("etwas Pfeffer".into(), None));
        assert_eq!(parsed(""), ("".into(), None));
        assert_eq!(parsed("- / ,"), ("- / ,".into(), None));
    }

    #[test]
    fn test_amount_only_line_has_empty_name() {
        assert_eq!(parsed("3"), ("".into(), Some("3".into())));
        assert_eq!(parse_ingredient_name("  250 g  "), "");
        assert_eq!(parsed("250 g"), ("".into(), Some("250 g".into())));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parsed("  200 g Zucker "), ("Zucker".into(), Some("200 g".into())));
    }
}
