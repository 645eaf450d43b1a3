//! Ingredient synonym table used to widen user exclusions.

const DAIRY: &[&str] = &[
    "dairy", "milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "ghee", "paneer", "whey",
    "ice cream", "custard", "mozzarella", "parmesan", "cheddar", "feta", "ricotta", "lassi",
    "latte", "cheesecake",
];

const MUSHROOM: &[&str] = &[
    "mushroom", "mushrooms", "shiitake", "portobello", "porcini", "enoki", "truffle", "champignon",
    "oyster mushroom",
];

const NUTS: &[&str] = &[
    "nut", "nuts", "peanut", "peanuts", "almond", "almonds", "cashew", "cashews", "walnut",
    "walnuts", "pecan", "pecans", "pistachio", "pistachios", "hazelnut", "hazelnuts", "macadamia",
    "praline", "satay", "pesto",
];

const PEANUT: &[&str] = &["peanut", "peanuts", "peanut butter", "satay", "groundnut"];

const GLUTEN: &[&str] = &[
    "gluten", "wheat", "flour", "bread", "breaded", "pasta", "noodle", "noodles", "barley", "rye",
    "seitan", "couscous", "bun", "buns", "dumpling", "dumplings", "tempura", "croutons", "spaghetti",
    "udon", "ramen", "pizza", "cake", "soy sauce",
];

const EGG: &[&str] = &[
    "egg", "eggs", "omelette", "omelet", "mayonnaise", "mayo", "aioli", "meringue", "custard",
];

const SHELLFISH: &[&str] = &[
    "shellfish", "shrimp", "shrimps", "prawn", "prawns", "crab", "lobster", "crayfish", "scallop",
    "scallops", "clam", "clams", "mussel", "mussels", "oyster", "oysters",
];

const FISH: &[&str] = &[
    "fish", "salmon", "tuna", "cod", "anchovy", "anchovies", "sardine", "sardines", "mackerel",
    "trout", "tilapia", "eel", "fish sauce",
];

const SEAFOOD: &[&str] = &[
    "seafood", "fish", "shrimp", "prawn", "prawns", "crab", "lobster", "squid", "calamari",
    "octopus", "scallop", "scallops", "clam", "clams", "mussel", "mussels", "oyster", "oysters",
    "salmon", "tuna",
];

const PORK: &[&str] = &[
    "pork", "bacon", "ham", "lard", "prosciutto", "pancetta", "chorizo", "salami", "char siu",
    "sausage",
];

const BEEF: &[&str] = &["beef", "steak", "brisket", "veal", "burger", "meatball", "meatballs"];

const CHICKEN: &[&str] = &["chicken", "poultry", "wings", "drumstick", "nuggets"];

const MEAT: &[&str] = &[
    "meat", "beef", "pork", "chicken", "lamb", "mutton", "duck", "turkey", "veal", "bacon", "ham",
    "sausage", "steak", "goat",
];

const SOY: &[&str] = &["soy", "soya", "tofu", "edamame", "tempeh", "miso", "soy sauce"];

const ONION: &[&str] = &["onion", "onions", "shallot", "shallots", "scallion", "scallions", "leek"];

const GARLIC: &[&str] = &["garlic", "aioli"];

const SESAME: &[&str] = &["sesame", "tahini", "hummus"];

const ALCOHOL: &[&str] = &[
    "alcohol", "wine", "beer", "sake", "rum", "vodka", "whiskey", "whisky", "gin", "tequila",
    "liqueur", "cocktail", "mirin",
];

const SUGAR: &[&str] = &["sugar", "syrup", "honey", "caramel", "candied", "sweetened"];

const CORIANDER: &[&str] = &["coriander", "cilantro"];

/// Synonyms for a canonical negative key, if the key is known.
pub fn synonyms_for(key: &str) -> Option<&'static [&'static str]> {
    let synonyms = match key {
        "dairy" | "milk" | "lactose" => DAIRY,
        "mushroom" | "mushrooms" => MUSHROOM,
        "nut" | "nuts" | "treenut" | "treenuts" => NUTS,
        "peanut" | "peanuts" => PEANUT,
        "gluten" | "wheat" => GLUTEN,
        "egg" | "eggs" => EGG,
        "shellfish" => SHELLFISH,
        "fish" => FISH,
        "seafood" => SEAFOOD,
        "pork" => PORK,
        "beef" => BEEF,
        "chicken" => CHICKEN,
        "meat" => MEAT,
        "soy" | "soya" => SOY,
        "onion" | "onions" => ONION,
        "garlic" => GARLIC,
        "sesame" => SESAME,
        "alcohol" => ALCOHOL,
        "sugar" => SUGAR,
        "coriander" | "cilantro" => CORIANDER,
        _ => return None,
    };

    Some(synonyms)
}
