use recipe_steps::{
    analyze_recipe, classify_label, extract_duration_minutes, split_instruction, Recipe, Settings,
};

#[test]
fn test_duration_phrases() {
    assert_eq!(extract_duration_minutes("Dann 15 Minuten köcheln."), Some(15));
    assert_eq!(extract_duration_minutes("Backe 15-20 Minuten"), Some(15));
    assert_eq!(extract_duration_minutes("Backe 15 – 20 Minuten"), Some(15));
    assert_eq!(extract_duration_minutes("10 bis 12 Minuten garen"), Some(10));
    assert_eq!(
        extract_duration_minutes("1 Stunde 30 Minuten schmoren lassen"),
        Some(90)
    );
    assert_eq!(extract_duration_minutes("2 Stunden marinieren"), Some(120));
    assert_eq!(extract_duration_minutes("1,5 Stunden ziehen lassen"), Some(90));
    assert_eq!(extract_duration_minutes("Mit Salz abschmecken."), None);
}

#[test]
fn test_hours_take_priority_over_minutes() {
    // Hour phrases win even when a minute phrase appears first
    assert_eq!(
        extract_duration_minutes("5 Min. kneten, dann 1 Stunde gehen lassen"),
        Some(60)
    );
}

#[test]
fn test_hour_range_uses_lower_bound() {
    assert_eq!(extract_duration_minutes("1-2 Stunden kühlen"), Some(60));
    assert_eq!(extract_duration_minutes("2 bis 3 Std. ruhen"), Some(120));
}

#[test]
fn test_label_tag_is_split_before_parsing() {
    let (label, body) = split_instruction("⟦label:Teig kneten⟧ Knete den Teig 5 Minuten");
    assert_eq!(label.as_deref(), Some("Teig kneten"));
    assert_eq!(body, "Knete den Teig 5 Minuten");
    assert_eq!(extract_duration_minutes(&body), Some(5));
}

#[test]
fn test_explicit_label_wins_over_classification() {
    let (label, body) = split_instruction("⟦label:Pizza⟧ Backe 20 Minuten im Ofen");
    assert_eq!(classify_label(&body, 3, label.as_deref()), "Pizza");
    assert_eq!(classify_label(&body, 3, None), "Bake – Step 3");
}

#[test]
fn test_recipe_from_json() {
    let recipe = Recipe::from_json(
        r#"{
            "title": "Rinderschmorbraten",
            "ingredients": ["1 kg Rinderbraten", "2 Zwiebeln", "500 ml Rotwein"],
            "instructions": [
                "Das Fleisch von allen Seiten scharf anbraten.",
                "⟦label:Schmoren⟧ Mit Rotwein ablöschen und 2 Stunden schmoren.",
                "Den Braten 10 Minuten ruhen lassen.",
                "Aufschneiden und servieren."
            ]
        }"#,
    )
    .unwrap();

    let steps = analyze_recipe(&recipe, &Settings::default());
    let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Fry – Step 1",
            "Schmoren",
            "Rest – Step 3",
            "Aufschneiden und servieren. – Step 4",
        ]
    );

    let durations: Vec<Option<u32>> = steps.iter().map(|s| s.duration_minutes).collect();
    assert_eq!(durations, vec![None, Some(120), Some(10), None]);

    let hints: Vec<bool> = steps.iter().map(|s| s.suggest_parallel_work).collect();
    assert_eq!(hints, vec![false, true, true, false]);
}

#[test]
fn test_localized_labels_from_config() {
    let settings = Settings::from_toml_str(
        r#"
        [labels]
        step = "Schritt"
        bake = "Backen"
        "#,
    )
    .unwrap();
    let recipe = Recipe {
        title: "Brot".to_string(),
        instructions: vec!["Im Ofen 40 Minuten backen.".to_string()],
        ..Recipe::default()
    };

    let steps = analyze_recipe(&recipe, &settings);
    assert_eq!(steps[0].label, "Backen – Schritt 1");
}
