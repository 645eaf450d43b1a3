use crate::domain::tags::{
    synonyms::synonyms_for,
    value_objects::{CORE_HARD_TAGS, NegativeTerm, TagClassification},
};

/// Prefixes tried after the attached `no<word>` form, in priority order.
const NEGATIVE_PREFIXES: [&str; 8] = [
    "no-", "no:", "avoid ", "avoid-", "avoid:", "exclude ", "exclude-", "exclude:",
];

const NEGATIVE_SUFFIXES: [&str; 2] = ["-free", " free"];

/// Extracts the canonical ingredient key of a negative-pattern tag.
pub fn parse_negative_key(tag: &str) -> Option<String> {
    let raw = strip_negative_affix(tag)?;

    let key: String = raw
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if key.is_empty() { None } else { Some(key) }
}

fn strip_negative_affix(tag: &str) -> Option<&str> {
    if tag.len() > 2
        && let Some(rest) = tag.strip_prefix("no")
    {
        return Some(rest);
    }

    NEGATIVE_PREFIXES
        .iter()
        .find_map(|prefix| tag.strip_prefix(prefix))
        .or_else(|| {
            NEGATIVE_SUFFIXES
                .iter()
                .find_map(|suffix| tag.strip_suffix(suffix))
        })
}

/// Collects the deduplicated negative keys found in `tags`.
pub fn parse_dynamic_negative_keys(tags: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();

    for key in tags.iter().filter_map(|tag| parse_negative_key(tag)) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    keys
}

pub fn resolve_negative_term(key: &str) -> NegativeTerm {
    match synonyms_for(key) {
        Some(synonyms) => NegativeTerm::Known {
            key: key.to_string(),
            synonyms,
        },
        None => NegativeTerm::Literal(key.to_string()),
    }
}

/// Expands negative keys into the flat exclusion vocabulary.
pub fn build_dynamic_hard_terms(negative_keys: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    for key in negative_keys {
        for term in resolve_negative_term(key).terms() {
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
    }

    terms
}

pub fn is_core_hard_tag(tag: &str) -> bool {
    CORE_HARD_TAGS.contains(&tag)
}

/// Splits normalized tags into core diets, negative keys and soft preferences.
pub fn classify_tags(tags: &[String]) -> TagClassification {
    let mut classification = TagClassification::default();

    for tag in tags {
        if is_core_hard_tag(tag) {
            if !classification.hard_core.contains(tag) {
                classification.hard_core.push(tag.clone());
            }
        } else if let Some(key) = parse_negative_key(tag) {
            if !classification.neg_keys.contains(&key) {
                classification.neg_keys.push(key);
            }
        } else if !classification.soft.contains(tag) {
            classification.soft.push(tag.clone());
        }
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_negative_key_patterns() {
        assert_eq!(parse_dynamic_negative_keys(&tags(&["no-dairy"])), vec!["dairy"]);
        assert_eq!(parse_dynamic_negative_keys(&tags(&["avoid nuts"])), vec!["nuts"]);
        assert_eq!(parse_dynamic_negative_keys(&tags(&["gluten-free"])), vec!["gluten"]);
        assert_eq!(parse_dynamic_negative_keys(&tags(&["nodairy"])), vec!["dairy"]);
        assert_eq!(parse_dynamic_negative_keys(&tags(&["no:pork"])), vec!["pork"]);
        assert_eq!(parse_dynamic_negative_keys(&tags(&["exclude-beef"])), vec!["beef"]);
        assert_eq!(parse_dynamic_negative_keys(&tags(&["avoid:egg"])), vec!["egg"]);
        assert_eq!(parse_dynamic_negative_keys(&tags(&["sugar free"])), vec!["sugar"]);
        assert_eq!(
            parse_dynamic_negative_keys(&tags(&["no mushroom"])),
            vec!["mushroom"]
        );
    }

    #[test]
    fn test_non_negative_tags_yield_nothing() {
        assert!(parse_dynamic_negative_keys(&tags(&["spicy", "vegan", "no", "no-"])).is_empty());
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let keys = parse_dynamic_negative_keys(&tags(&["no-dairy", "dairy-free", "avoid dairy"]));
        assert_eq!(keys, vec!["dairy"]);
    }

    #[test]
    fn test_unknown_keys_are_literal_terms() {
        assert_eq!(
            resolve_negative_term("durian"),
            NegativeTerm::Literal("durian".to_string())
        );
        assert_eq!(build_dynamic_hard_terms(&tags(&["durian"])), vec!["durian"]);
    }

    #[test]
    fn test_known_keys_expand_to_synonyms() {
        let terms = build_dynamic_hard_terms(&tags(&["dairy"]));
        assert!(terms.contains(&"cheese".to_string()));
        assert!(terms.contains(&"ice cream".to_string()));

        let unique: std::collections::HashSet<_> = terms.iter().collect();
        assert_eq!(terms.len(), unique.len());
    }

    #[test]
    fn test_expanded_terms_are_deduplicated_across_keys() {
        let terms = build_dynamic_hard_terms(&tags(&["peanut", "nuts"]));
        let peanut_count = terms.iter().filter(|t| *t == "peanut").count();
        assert_eq!(peanut_count, 1);
    }

    #[test]
    fn test_classification_partitions_tags() {
        let classification =
            classify_tags(&tags(&["vegan", "no mushroom", "spicy", "glutenfree", "halal"]));

        assert_eq!(classification.hard_core, vec!["vegan", "glutenfree"]);
        assert_eq!(classification.neg_keys, vec!["mushroom"]);
        assert_eq!(classification.soft, vec!["spicy", "halal"]);
    }
}
