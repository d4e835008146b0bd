use serde::{Deserialize, Serialize};

/// Supermarket section an ingredient is sorted into on the shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aisle {
    Meat,
    Fish,
    Vegetables,
    Fruits,
    Dairy,
    Bakery,
    Grains,
    Canned,
    Spices,
    Beverages,
    Frozen,
    Snacks,
    Other,
}

// Checked in this order; fish before meat keeps "Thunfisch" out of the meat aisle.
const KEYWORDS: &[(Aisle, &[&str])] = &[
    (
        Aisle::Fish,
        &[
            "fisch", "fish", "lachs", "salmon", "thunfisch", "tuna", "garnele", "shrimp",
            "prawn", "krabbe", "crab", "muschel", "mussel", "tintenfisch", "squid",
            "calamari", "forelle", "trout", "kabeljau", "cod", "hering", "herring",
            "makrele", "mackerel", "sardine", "sardelle", "anchovy", "seelachs", "dorade",
            "zander", "hummer", "lobster", "austern", "oyster", "scallop",
        ],
    ),
    (
        Aisle::Meat,
        &[
            "fleisch", "meat", "hähnchen", "hühnchen", "chicken", "rind", "beef", "schwein",
            "pork", "lamm", "lamb", "pute", "turkey", "ente", "duck", "wurst", "sausage",
            "schinken", "ham", "speck", "bacon", "steak", "schnitzel", "kotelett", "salami",
            "chorizo", "prosciutto", "pancetta",
        ],
    ),
    (
        Aisle::Frozen,
        &["tiefkühl", "tk", "frozen", "eiswürfel", "speiseeis", "ice cream"],
    ),
    (
        Aisle::Canned,
        &["dose", "dosen", "konserve", "canned", "passata", "tomatenmark", "kokosmilch"],
    ),
    (
        Aisle::Vegetables,
        &[
            "tomate", "tomato", "gurke", "cucumber", "paprika", "bell pepper", "zwiebel",
            "onion", "knoblauch", "garlic", "karotte", "möhre", "carrot", "kartoffel",
            "potato", "salat", "lettuce", "kohl", "cabbage", "brokkoli", "broccoli",
            "zucchini", "aubergine", "eggplant", "spinat", "spinach", "lauch", "leek",
            "sellerie", "celery", "pilz", "champignon", "mushroom", "erbsen", "peas",
            "bohne", "beans", "linsen", "lentils", "kürbis", "pumpkin", "mais", "corn",
            "spargel", "asparagus", "radieschen", "rucola", "ingwer", "ginger", "chili",
            "fenchel", "fennel", "rote bete", "pastinake", "artischocke",
        ],
    ),
    (
        Aisle::Fruits,
        &[
            "apfel", "äpfel", "apple", "birne", "pear", "banane", "banana", "orange",
            "zitrone", "lemon", "limette", "lime", "erdbeere", "strawberr", "himbeere",
            "raspberr", "heidelbeere", "blaubeere", "blueberr", "kirsche", "cherr",
            "pfirsich", "peach", "traube", "grape", "melone", "melon", "ananas",
            "pineapple", "mango", "kiwi", "avocado", "mandarine",
        ],
    ),
    (
        Aisle::Dairy,
        &[
            "milch", "milk", "käse", "cheese", "butter", "sahne", "cream", "joghurt",
            "yogurt", "quark", "ei", "eier", "eigelb", "eiweiß", "eiklar", "egg", "eggs",
            "mascarpone", "ricotta", "feta",
            "mozzarella", "parmesan", "gouda", "schmand", "crème fraîche",
        ],
    ),
    (
        Aisle::Grains,
        &[
            "nudel", "pasta", "noodle", "reis", "rice", "spaghetti", "penne", "fusilli",
            "tagliatelle", "couscous", "quinoa", "bulgur", "hafer", "oat", "müsli",
            "risotto",
        ],
    ),
    (
        Aisle::Bakery,
        &[
            "brot", "bread", "brötchen", "toast", "baguette", "croissant", "mehl", "flour",
            "hefe", "yeast", "backpulver", "baking powder", "zucker", "sugar",
        ],
    ),
    (
        Aisle::Spices,
        &[
            "salz", "salt", "pfeffer", "pepper", "curry", "kurkuma", "turmeric", "zimt",
            "cinnamon", "oregano", "basilikum", "basil", "thymian", "thyme", "rosmarin",
            "rosemary", "petersilie", "parsley", "koriander", "cilantro", "dill",
            "schnittlauch", "chive", "minze", "mint", "muskat", "nutmeg", "öl", "oil",
            "olivenöl", "rapsöl", "sonnenblumenöl", "sesamöl", "kokosöl", "erdnussöl",
            "walnussöl", "leinöl", "speiseöl", "bratöl",
            "essig", "vinegar", "senf", "mustard", "sojasoße", "sojasauce", "soy sauce",
        ],
    ),
    (
        Aisle::Beverages,
        &["wasser", "water", "saft", "juice", "wein", "wine", "bier", "beer", "kaffee", "coffee", "tee"],
    ),
    (
        Aisle::Snacks,
        &["schokolade", "chocolate", "chips", "nüsse", "nuts", "mandeln", "almonds", "keks", "cookie"],
    ),
];

impl Aisle {
    /// Sort an ingredient line into an aisle by keyword.
    ///
    /// Keywords of three letters or fewer ("ei", "öl", "ham") only match whole
    /// words so that "Reis" is not mistaken for an egg.
    pub fn categorize(ingredient: &str) -> Aisle {
        let lower = ingredient.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords.iter().any(|kw| {
                    if kw.chars().count() <= 3 {
                        words.contains(kw)
                    } else {
                        lower.contains(kw)
                    }
                })
            })
            .map(|(aisle, _)| *aisle)
            .unwrap_or(Aisle::Other)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Aisle::Meat => "meat",
            Aisle::Fish => "fish",
            Aisle::Vegetables => "vegetables",
            Aisle::Fruits => "fruits",
            Aisle::Dairy => "dairy",
            Aisle::Bakery => "bakery",
            Aisle::Grains => "grains",
            Aisle::Canned => "canned",
            Aisle::Spices => "spices",
            Aisle::Beverages => "beverages",
            Aisle::Frozen => "frozen",
            Aisle::Snacks => "snacks",
            Aisle::Other => "other",
        }
    }
}
