use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical listing categories.
///
/// Backend records carry loose labels (plural and cased variants); they are
/// resolved to this enum exactly once, at the normalization boundary, so no
/// consumer ever re-interprets a raw label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Event,
    Cultural,
}

impl Category {
    /// Resolve a raw backend label. Unrecognized labels fall back to
    /// `Cultural`, the catch-all browse category.
    pub fn resolve(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "restaurant" | "restaurants" => Category::Restaurant,
            "event" | "events" => Category::Event,
            "cultural" | "culture" | "cultural_site" | "cultural_sites" => Category::Cultural,
            _ => Category::Cultural,
        }
    }

    /// Wire label used in outgoing queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Event => "event",
            Category::Cultural => "cultural",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category display badge memo, owned by the rendering collaborator
/// that needs it. Lifecycle is the owner's, not the process's.
#[derive(Debug, Default)]
pub struct CategoryBadgeCache {
    badges: HashMap<Category, String>,
}

impl CategoryBadgeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn badge(&mut self, category: Category) -> &str {
        self.badges.entry(category).or_insert_with(|| match category {
            Category::Restaurant => "🍽".to_string(),
            Category::Event => "🎟".to_string(),
            Category::Cultural => "🏛".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plural_and_cased_variants() {
        assert_eq!(Category::resolve("Restaurants"), Category::Restaurant);
        assert_eq!(Category::resolve("EVENT"), Category::Event);
        assert_eq!(Category::resolve("cultural_sites"), Category::Cultural);
    }

    #[test]
    fn unknown_label_falls_back_to_cultural() {
        assert_eq!(Category::resolve("spa"), Category::Cultural);
        assert_eq!(Category::resolve(""), Category::Cultural);
    }

    #[test]
    fn badge_is_memoized_per_instance() {
        let mut cache = CategoryBadgeCache::new();
        let first = cache.badge(Category::Restaurant).to_string();
        assert_eq!(cache.badge(Category::Restaurant), first);
    }
}
