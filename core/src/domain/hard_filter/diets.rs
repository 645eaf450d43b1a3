//! Fixed term tables for the core hard diets.

const MEAT: &[&str] = &[
    "meat", "beef", "steak", "brisket", "veal", "pork", "bacon", "ham", "lard", "prosciutto",
    "pancetta", "chorizo", "salami", "pepperoni", "sausage", "sausages", "char siu", "chicken",
    "duck", "turkey", "lamb", "mutton", "goat", "venison", "burger", "meatball", "meatballs",
    "wings", "ribs", "jerky", "foie gras", "gelatin", "gelatine",
];

const SEAFOOD: &[&str] = &[
    "fish", "salmon", "tuna", "cod", "anchovy", "anchovies", "sardine", "sardines", "mackerel",
    "eel", "shrimp", "shrimps", "prawn", "prawns", "crab", "lobster", "squid", "calamari",
    "octopus", "scallop", "scallops", "clam", "clams", "mussel", "mussels", "oyster", "oysters",
    "fish sauce", "oyster sauce", "bonito", "dashi",
];

const ANIMAL_PRODUCTS: &[&str] = &[
    "milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "ghee", "paneer", "whey",
    "ice cream", "custard", "mozzarella", "parmesan", "cheddar", "feta", "ricotta", "egg", "eggs",
    "omelette", "mayonnaise", "mayo", "aioli", "meringue", "honey", "pudding", "latte",
];

const GLUTEN: &[&str] = &[
    "wheat", "flour", "bread", "breaded", "pasta", "noodle", "noodles", "barley", "rye", "seitan",
    "couscous", "bun", "buns", "dumpling", "dumplings", "spring roll", "spring rolls", "tempura",
    "croutons", "spaghetti", "udon", "ramen", "pizza", "cake", "soy sauce", "batter", "crust",
    "tortilla", "pancake", "pancakes", "wonton", "wontons",
];

/// Tables a core diet excludes, labelled for debug output.
pub fn exclusion_tables(diet: &str) -> &'static [(&'static str, &'static [&'static str])] {
    match diet {
        "vegan" => &[
            ("meat", MEAT),
            ("seafood", SEAFOOD),
            ("animal-product", ANIMAL_PRODUCTS),
        ],
        "vegetarian" => &[("meat", MEAT), ("seafood", SEAFOOD)],
        "glutenfree" => &[("gluten", GLUTEN)],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegan_is_stricter_than_vegetarian() {
        let vegan: Vec<_> = exclusion_tables("vegan").iter().map(|(l, _)| *l).collect();
        let vegetarian: Vec<_> = exclusion_tables("vegetarian").iter().map(|(l, _)| *l).collect();

        assert!(vegetarian.iter().all(|label| vegan.contains(label)));
        assert!(vegan.contains(&"animal-product"));
    }

    #[test]
    fn test_unknown_diet_has_no_rules() {
        assert!(exclusion_tables("halal").is_empty());
    }
}
