use std::{collections::HashMap, sync::LazyLock};

use tracing::debug;

use crate::domain::{
    hard_filter::{
        diets::exclusion_tables,
        matcher::TermMatcher,
        value_objects::{FilterDebug, FilterResult},
    },
    menu::entities::{MenuInfo, MenuItem},
    tags::{CORE_HARD_TAGS, build_dynamic_hard_terms, classify_tags},
};

#[derive(Debug)]
struct Rule {
    label: String,
    matcher: TermMatcher,
}

static CORE_DIET_RULES: LazyLock<HashMap<&'static str, Vec<Rule>>> = LazyLock::new(|| {
    CORE_HARD_TAGS
        .iter()
        .map(|diet| (*diet, compile_diet_rules(diet)))
        .collect()
});

/// Removes menu items that violate a core diet or a user exclusion.
pub fn apply_hard_filter(menu: &MenuInfo, tags: &[String]) -> FilterResult {
    let classification = classify_tags(tags);
    let dynamic = dynamic_rules(&classification.neg_keys);
    let mut rules: Vec<&Rule> = Vec::new();
    for diet in &classification.hard_core {
        rules.extend(core_diet_rules(diet).unwrap_or_default());
    }
    rules.extend(&dynamic);

    let mut allowed_items = Vec::with_capacity(menu.items.len());
    let mut debug_entries = Vec::new();

    for item in &menu.items {
        match first_violation(item, &rules) {
            Some(reason) => {
                debug!(item = %item.name, %reason, "menu item excluded");
                debug_entries.push(FilterDebug {
                    item_name: item.name.clone(),
                    reason,
                });
            }
            None => allowed_items.push(item.clone()),
        }
    }

    FilterResult {
        removed_count: menu.items.len() - allowed_items.len(),
        allowed_items,
        hard_core: classification.hard_core,
        neg_keys: classification.neg_keys,
        soft: classification.soft,
        debug: debug_entries,
    }
}

fn core_diet_rules(diet: &str) -> Option<&'static [Rule]> {
    CORE_DIET_RULES.get(diet).map(Vec::as_slice)
}

fn compile_diet_rules(diet: &str) -> Vec<Rule> {
    exclusion_tables(diet)
        .iter()
        .flat_map(|(category, terms)| {
            terms.iter().filter_map(move |term| {
                TermMatcher::new(term).map(|matcher| Rule {
                    label: format!("core:{diet}:{category}"),
                    matcher,
                })
            })
        })
        .collect()
}

fn dynamic_rules(neg_keys: &[String]) -> Vec<Rule> {
    build_dynamic_hard_terms(neg_keys)
        .iter()
        .filter_map(|term| {
            TermMatcher::new(term).map(|matcher| Rule {
                label: "avoid".to_string(),
                matcher,
            })
        })
        .collect()
}

fn first_violation(item: &MenuItem, rules: &[&Rule]) -> Option<String> {
    let text = item.searchable_text();

    rules
        .iter()
        .find(|rule| rule.matcher.is_match(&text))
        .map(|rule| format!("{}:{}", rule.label, rule.matcher.term()))
}
