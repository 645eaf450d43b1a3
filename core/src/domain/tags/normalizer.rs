use crate::domain::tags::value_objects::{DEFAULT_TAGS, TagInput};

const NEGATIVE_PREFIXES: [&str; 3] = ["no ", "avoid ", "exclude "];
const NEGATIVE_SUFFIXES: [&str; 2] = ["-free", " free"];

/// Returns a fresh copy of the default tag list.
pub fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
}

/// Normalizes free-form tag input into canonical tags, falling back to
/// [`default_tags`] when nothing usable remains.
pub fn normalize_tags(input: Option<&TagInput>) -> Vec<String> {
    normalize_tags_strict(input).unwrap_or_else(default_tags)
}

/// Same as [`normalize_tags`] but returns `None` instead of the defaults.
pub fn normalize_tags_strict(input: Option<&TagInput>) -> Option<Vec<String>> {
    let raw_tokens = match input? {
        TagInput::Text(text) => split_text(text),
        TagInput::List(list) => list.clone(),
    };

    let mut tags: Vec<String> = Vec::new();
    for token in raw_tokens {
        let Some(tag) = clean_token(&token) else {
            continue;
        };
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    if tags.is_empty() { None } else { Some(tags) }
}

/// Picks the effective tags: explicit request tags, then profile tags
/// (unless `ignore_profile_tags`), then the defaults.
pub fn resolve_tags(
    explicit: Option<&TagInput>,
    profile_tags: Option<&[String]>,
    ignore_profile_tags: bool,
) -> Vec<String> {
    if let Some(tags) = normalize_tags_strict(explicit) {
        return tags;
    }

    if !ignore_profile_tags
        && let Some(profile) = profile_tags
        && let Some(tags) = normalize_tags_strict(Some(&TagInput::List(profile.to_vec())))
    {
        return tags;
    }

    default_tags()
}

fn split_text(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for segment in text.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        if is_negative_phrase(&segment.to_lowercase()) {
            tokens.push(segment.to_string());
        } else {
            tokens.extend(segment.split_whitespace().map(str::to_string));
        }
    }

    tokens
}

fn is_negative_phrase(segment: &str) -> bool {
    NEGATIVE_PREFIXES.iter().any(|p| segment.starts_with(p))
        || NEGATIVE_SUFFIXES.iter().any(|s| segment.ends_with(s))
}

fn clean_token(token: &str) -> Option<String> {
    let filtered: String = token
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ':' | '-' | ' '))
        .collect();

    let cleaned = filtered.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> TagInput {
        TagInput::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_defaults_when_absent_or_empty() {
        assert_eq!(normalize_tags(None), default_tags());
        assert_eq!(normalize_tags(Some(&list(&[]))), default_tags());
        assert_eq!(normalize_tags(Some(&TagInput::from("  , ,"))), default_tags());
        assert!(!default_tags().is_empty());
    }

    #[test]
    fn test_text_keeps_negative_phrases_whole() {
        let tags = normalize_tags(Some(&TagInput::from(
            "No Mushroom, spicy hot, gluten free, avoid raw onion",
        )));
        assert_eq!(
            tags,
            vec!["no mushroom", "spicy", "hot", "gluten free", "avoid raw onion"]
        );
    }

    #[test]
    fn test_strips_invalid_characters_and_dedupes() {
        let tags = normalize_tags(Some(&list(&["Spicy!", "spicy", " Vegan ", "no-dairy", "@@"])));
        assert_eq!(tags, vec!["spicy", "vegan", "no-dairy"]);
    }

    #[test]
    fn test_array_elements_are_not_split() {
        let tags = normalize_tags(Some(&list(&["extra   crispy", "no:nuts"])));
        assert_eq!(tags, vec!["extra crispy", "no:nuts"]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = vec![
            TagInput::from("No Mushroom, spicy  hot, Gluten-Free!!"),
            list(&["  Vegan", "exclude: peanuts", "vegan", "Ice   Cream"]),
            TagInput::from(""),
            list(&["***"]),
        ];

        for input in inputs {
            let once = normalize_tags(Some(&input));
            let twice = normalize_tags(Some(&TagInput::List(once.clone())));
            assert_eq!(once, twice, "normalization not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_only_allowed_characters_survive() {
        let tags = normalize_tags(Some(&TagInput::from("Crème brûlée, halal ✓, no_sugar")));
        for tag in &tags {
            assert!(
                tag.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || ":- ".contains(c)),
                "unexpected character in {tag}"
            );
        }
    }

    #[test]
    fn test_resolve_prefers_explicit_tags() {
        let profile = vec!["vegan".to_string()];
        let tags = resolve_tags(Some(&TagInput::from("spicy")), Some(&profile), false);
        assert_eq!(tags, vec!["spicy"]);
    }

    #[test]
    fn test_resolve_falls_back_to_profile_tags() {
        let profile = vec!["No Dairy".to_string()];
        let tags = resolve_tags(Some(&TagInput::from(" , ")), Some(&profile), false);
        assert_eq!(tags, vec!["no dairy"]);
    }

    #[test]
    fn test_resolve_ignores_profile_when_asked() {
        let profile = vec!["no dairy".to_string()];
        let tags = resolve_tags(None, Some(&profile), true);
        assert_eq!(tags, default_tags());
    }

    #[test]
    fn test_resolve_defaults_without_any_source() {
        assert_eq!(resolve_tags(None, None, false), default_tags());
    }
}
