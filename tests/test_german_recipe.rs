use std::sync::{Arc, Mutex};

use recipe_steps::{
    analyze_recipe, format_clock, CompletionSignal, Recipe, RunningTimer, Settings, TimerEngine,
    TimerState,
};

const PIZZA: &str = r#"
{
    "title": "Pizza Margherita",
    "ingredients": [
        "500 g Mehl",
        "1 Pck. Trockenhefe",
        "300 ml lauwarmes Wasser",
        "2 EL Olivenöl",
        "1 TL Salz",
        "200 g Mozzarella",
        "1 Dose Tomaten"
    ],
    "instructions": [
        "⟦label:Teig gehen lassen⟧ Mehl, Hefe, Wasser, Öl und Salz verkneten und den Teig 1 Stunde gehen lassen.",
        "Den Ofen auf 220°C vorheizen.",
        "Backe die Pizza 15-20 Minuten im Ofen bei 220°C.",
        "Mit frischem Basilikum servieren."
    ],
    "cooking_time": "1 Std. 30 Min.",
    "difficulty": "leicht",
    "tags": ["italienisch", "vegetarisch"],
    "nutrition": {"calories": 780, "protein_g": 28.5, "carbs_g": 102.0, "fat_g": 26.0}
}
"#;

#[derive(Clone, Default)]
struct CountingSignal {
    fired: Arc<Mutex<Vec<String>>>,
}

impl CompletionSignal for CountingSignal {
    fn fire(&mut self, timer: &RunningTimer) {
        self.fired.lock().unwrap().push(timer.label.clone());
    }
}

#[test]
fn test_pizza_bake_step_end_to_end() {
    let recipe = Recipe::from_json(PIZZA).unwrap();
    let steps = analyze_recipe(&recipe, &Settings::default());

    let bake = &steps[2];
    assert_eq!(bake.index, 3);
    assert_eq!(bake.duration_minutes, Some(15));
    assert_eq!(bake.label, "Bake – Step 3");
    assert!(bake.suggest_parallel_work);

    let signal = CountingSignal::default();
    let mut engine = TimerEngine::with_signal(signal.clone());
    assert!(engine.start(bake.duration_minutes.unwrap(), &bake.label));
    engine.toggle(&bake.label);
    assert_eq!(
        format_clock(engine.get(&bake.label).unwrap().remaining_seconds),
        "15:00"
    );

    let mut expired = Vec::new();
    for _ in 0..900 {
        expired.extend(engine.tick());
    }

    let timer = engine.get(&bake.label).unwrap();
    assert_eq!(timer.state(), TimerState::Expired);
    assert_eq!(format_clock(timer.remaining_seconds), "00:00");
    assert_eq!(expired, vec!["Bake – Step 3".to_string()]);
    assert_eq!(*signal.fired.lock().unwrap(), vec!["Bake – Step 3".to_string()]);
}

#[test]
fn test_pizza_other_steps() {
    let recipe = Recipe::from_json(PIZZA).unwrap();
    let steps = analyze_recipe(&recipe, &Settings::default());
    assert_eq!(steps.len(), 4);

    assert_eq!(steps[0].label, "Teig gehen lassen");
    assert!(steps[0].explicit_label);
    assert_eq!(steps[0].duration_minutes, Some(60));

    // Preheating mentions the oven but no time
    assert_eq!(steps[1].label, "Bake – Step 2");
    assert_eq!(steps[1].duration_minutes, None);
    assert!(!steps[1].suggest_parallel_work);

    assert_eq!(steps[3].label, "Mit frischem Basilikum servieren. – Step 4");
    assert_eq!(steps[3].duration_minutes, None);
}

#[test]
fn test_pizza_for_two() {
    let recipe = Recipe::from_json(PIZZA).unwrap();
    let items = recipe_steps::shopping_list(&recipe.ingredients, 2);

    assert_eq!(items[3].name, "Olivenöl");
    assert_eq!(items[3].aisle, recipe_steps::Aisle::Spices);
    assert_eq!(items[5].aisle, recipe_steps::Aisle::Dairy);

    let quantities: Vec<Option<&str>> = items.iter().map(|i| i.quantity.as_deref()).collect();
    assert_eq!(
        quantities,
        vec![
            Some("250g"),
            Some("0.5"),
            Some("150ml"),
            Some("1EL"),
            Some("0.5TL"),
            Some("100g"),
            Some("0.5Dose"),
        ]
    );
}

#[test]
fn test_pizza_markdown() {
    let recipe = Recipe::from_json(PIZZA).unwrap();
    let md = recipe_steps::to_markdown(&recipe);

    assert!(md.starts_with("# Pizza Margherita\n"));
    assert!(md.contains("**Difficulty:** leicht"));
    assert!(md.contains("**Step 3**\n\nBacke die Pizza 15-20 Minuten im Ofen bei 220°C.\n"));
    assert!(md.contains("- **Carbohydrates:** 102.0g"));
    assert!(md.ends_with("---\n"));
}
