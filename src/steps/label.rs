use serde::{Deserialize, Serialize};

/// Timer category recognised from instruction keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCategory {
    Rest,
    Proof,
    Marinate,
    Bake,
    Simmer,
    Fry,
    Steep,
    Cool,
}

impl LabelCategory {
    /// Categories in match priority order.
    pub const ALL: [LabelCategory; 8] = [
        LabelCategory::Rest,
        LabelCategory::Proof,
        LabelCategory::Marinate,
        LabelCategory::Bake,
        LabelCategory::Simmer,
        LabelCategory::Fry,
        LabelCategory::Steep,
        LabelCategory::Cool,
    ];

    /// Stable key handed to localization layers.
    pub fn key(&self) -> &'static str {
        match self {
            LabelCategory::Rest => "rest",
            LabelCategory::Proof => "proof",
            LabelCategory::Marinate => "marinate",
            LabelCategory::Bake => "bake",
            LabelCategory::Simmer => "simmer",
            LabelCategory::Fry => "fry",
            LabelCategory::Steep => "steep",
            LabelCategory::Cool => "cool",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            LabelCategory::Rest => &["ruhen", "ruhephase"],
            LabelCategory::Proof => &["gehen lassen"],
            LabelCategory::Marinate => &["marinier"],
            LabelCategory::Bake => &["ofen", "back"],
            LabelCategory::Simmer => &["köchel", "simmer"],
            LabelCategory::Fry => &["brat", "anbrat"],
            LabelCategory::Steep => &["ziehen lassen", "ziehen"],
            LabelCategory::Cool => &["kühl", "kühlschrank", "abkühlen"],
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        let has = |subs: &[&str]| subs.iter().any(|s| lowered.contains(s));
        match self {
            // Plain "gehen" only counts when a dough is involved.
            LabelCategory::Proof => {
                has(self.keywords()) || (has(&["gehen"]) && has(&["teig", "hefe", "hefeteig"]))
            }
            _ => has(self.keywords()),
        }
    }

    /// First category whose keywords occur in `text`.
    pub fn detect(text: &str) -> Option<LabelCategory> {
        let lowered = text.to_lowercase();
        Self::ALL.into_iter().find(|c| c.matches(&lowered))
    }
}

/// Rendered names for the label categories and the step word.
///
/// Defaults are English; a localization layer can override them through the
/// `[labels]` table of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStrings {
    pub step: String,
    pub rest: String,
    pub proof: String,
    pub marinate: String,
    pub bake: String,
    pub simmer: String,
    pub fry: String,
    pub steep: String,
    pub cool: String,
}

impl Default for LabelStrings {
    fn default() -> Self {
        Self {
            step: "Step".to_string(),
            rest: "Rest".to_string(),
            proof: "Proof".to_string(),
            marinate: "Marinate".to_string(),
            bake: "Bake".to_string(),
            simmer: "Simmer".to_string(),
            fry: "Fry".to_string(),
            steep: "Steep".to_string(),
            cool: "Cool".to_string(),
        }
    }
}

impl LabelStrings {
    pub fn category_name(&self, category: LabelCategory) -> &str {
        match category {
            LabelCategory::Rest => &self.rest,
            LabelCategory::Proof => &self.proof,
            LabelCategory::Marinate => &self.marinate,
            LabelCategory::Bake => &self.bake,
            LabelCategory::Simmer => &self.simmer,
            LabelCategory::Fry => &self.fry,
            LabelCategory::Steep => &self.steep,
            LabelCategory::Cool => &self.cool,
        }
    }
}

/// Derive a timer label for a step using the default English strings.
///
/// `step_index` is 1-based. A non-blank explicit label (from the
/// `⟦label:...⟧` tag) is returned verbatim.
pub fn classify_label(body: &str, step_index: usize, explicit_label: Option<&str>) -> String {
    classify_label_with(body, step_index, explicit_label, &LabelStrings::default())
}

/// Same as [`classify_label`] with caller supplied display strings.
pub fn classify_label_with(
    body: &str,
    step_index: usize,
    explicit_label: Option<&str>,
    strings: &LabelStrings,
) -> String {
    if let Some(label) = explicit_label.filter(|l| !l.trim().is_empty()) {
        return label.to_string();
    }

    let suffix = format!("{} {}", strings.step, step_index);

    if let Some(category) = LabelCategory::detect(body) {
        return format!("{} – {}", strings.category_name(category), suffix);
    }

    let phrase = body.split_whitespace().take(4).collect::<Vec<_>>().join(" ");
    if phrase.is_empty() {
        return suffix;
    }
    format!("{} – {}", capitalize_first(&phrase), suffix)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
