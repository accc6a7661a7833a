//! Query/aggregation layer for the restaurant catalog.
//!
//! Pure functions over already-fetched data: slug lookup, cuisine
//! filtering, free-text search, menu grouping and review summaries. None
//! of these touch the store, so they carry no timeout or cancellation
//! semantics of their own.

use crate::models::{MenuItem, Restaurant};

/// Sentinel cuisine meaning "no filter".
pub const CUISINE_ALL: &str = "all";

/// Display value for a restaurant with no usable rating, distinguishing
/// "no ratings yet" from "rated zero".
pub const UNRATED_DISPLAY: &str = "New";

/// Forward slug transform: lowercase with each whitespace run replaced by
/// a single hyphen. Runs at the ends of the name are replaced too, not
/// trimmed, matching the transform the detail URLs were minted with.
pub fn slug_of(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        }
    }
    slug
}

/// Lookup-key normalization: hyphens back to spaces, then lowercase.
/// Multi-space sequences are deliberately not collapsed.
pub fn normalize_slug_key(key: &str) -> String {
    key.replace('-', " ").to_lowercase()
}

/// Exact-match slug lookup. Both the key and each candidate name go
/// through [`normalize_slug_key`]; the first match wins (name uniqueness
/// is a data-quality assumption, not an enforced constraint). No partial
/// or fuzzy matching.
pub fn find_by_slug<'a>(restaurants: &'a [Restaurant], raw_key: &str) -> Option<&'a Restaurant> {
    let needle = normalize_slug_key(raw_key);
    restaurants
        .iter()
        .find(|r| normalize_slug_key(&r.name) == needle)
}

/// Case-insensitive exact match on the cuisine field. The sentinel
/// [`CUISINE_ALL`] (any casing) returns the input unchanged.
pub fn filter_by_cuisine<'a>(restaurants: &'a [Restaurant], cuisine: &str) -> Vec<&'a Restaurant> {
    if cuisine.eq_ignore_ascii_case(CUISINE_ALL) {
        return restaurants.iter().collect();
    }
    let needle = cuisine.to_lowercase();
    restaurants
        .iter()
        .filter(|r| r.cuisine.to_lowercase() == needle)
        .collect()
}

fn matches_query(restaurant: &Restaurant, query_lower: &str) -> bool {
    restaurant.name.to_lowercase().contains(query_lower)
        || restaurant.cuisine.to_lowercase().contains(query_lower)
}

/// Case-insensitive substring search over name OR cuisine. An empty query
/// is a no-op returning the input unchanged.
pub fn search<'a>(restaurants: &'a [Restaurant], query: &str) -> Vec<&'a Restaurant> {
    if query.is_empty() {
        return restaurants.iter().collect();
    }
    let needle = query.to_lowercase();
    restaurants
        .iter()
        .filter(|r| matches_query(r, &needle))
        .collect()
}

/// Cuisine filter followed by the search predicate. Both stages are
/// intersecting predicates and both are always applied.
pub fn combined_filter<'a>(
    restaurants: &'a [Restaurant],
    cuisine: &str,
    query: &str,
) -> Vec<&'a Restaurant> {
    let filtered = filter_by_cuisine(restaurants, cuisine);
    if query.is_empty() {
        return filtered;
    }
    let needle = query.to_lowercase();
    filtered
        .into_iter()
        .filter(|r| matches_query(r, &needle))
        .collect()
}

/// One menu category in first-seen order, holding its items in source
/// order. The label is the raw category string, un-normalized.
#[derive(Debug, PartialEq)]
pub struct MenuCategory<'a> {
    pub label: &'a str,
    pub items: Vec<&'a MenuItem>,
}

impl MenuCategory<'_> {
    /// Display transform only: capitalize the first character of the raw
    /// label. Nothing is stored in this form.
    pub fn display_name(&self) -> String {
        display_category_name(self.label)
    }
}

pub fn display_category_name(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Partition menu items by their literal category label, preserving the
/// relative order items appeared in the source sequence. Categories come
/// out in order of first appearance.
pub fn group_menu_by_category(items: &[MenuItem]) -> Vec<MenuCategory<'_>> {
    let mut groups: Vec<MenuCategory> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.label == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(MenuCategory {
                label: &item.category,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Derived display values for a restaurant card or header.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub review_count: usize,
    pub display_rating: String,
}

/// Review count plus the rating display value: the stored rating when
/// present and non-zero, otherwise the [`UNRATED_DISPLAY`] sentinel.
pub fn review_summary(restaurant: &Restaurant) -> ReviewSummary {
    let display_rating = match restaurant.rating {
        Some(rating) if rating != 0.0 => format!("{}", rating),
        _ => UNRATED_DISPLAY.to_string(),
    };
    ReviewSummary {
        review_count: restaurant.reviews.len(),
        display_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;
    use crate::models::Review;

    fn sample() -> Vec<Restaurant> {
        fixtures::sample_restaurants()
    }

    #[test]
    fn slug_transform_round_trips_for_every_restaurant() {
        let all = sample();
        for r in &all {
            let found = find_by_slug(&all, &r.slug()).expect("slug lookup must hit");
            assert_eq!(found.id, r.id);
        }
    }

    #[test]
    fn slug_of_replaces_whitespace_runs_with_single_hyphens() {
        assert_eq!(slug_of("Pizza Palace"), "pizza-palace");
        assert_eq!(slug_of("Pizza \t Palace"), "pizza-palace");
        assert_eq!(slug_of(" Pizza Palace "), "-pizza-palace-");
        assert_eq!(slug_of("SUSHI Spot"), "sushi-spot");
    }

    #[test]
    fn find_by_slug_is_case_insensitive_and_exact() {
        let all = sample();
        assert_eq!(find_by_slug(&all, "pizza-palace").unwrap().name, "Pizza Palace");
        assert_eq!(find_by_slug(&all, "PIZZA-PALACE").unwrap().name, "Pizza Palace");
        assert_eq!(find_by_slug(&all, "Pizza Palace").unwrap().name, "Pizza Palace");
        assert!(find_by_slug(&all, "pizza").is_none());
        assert!(find_by_slug(&all, "unknown-restaurant").is_none());
    }

    #[test]
    fn find_by_slug_returns_first_match_for_duplicate_names() {
        let mut all = sample();
        let mut dup = all[0].clone();
        dup.id = "dup".to_string();
        all.push(dup);
        assert_eq!(find_by_slug(&all, "pizza-palace").unwrap().id, "1");
    }

    #[test]
    fn cuisine_all_sentinel_is_a_no_op_in_any_casing() {
        let all = sample();
        for sentinel in ["all", "ALL", "All"] {
            let filtered = filter_by_cuisine(&all, sentinel);
            assert_eq!(filtered.len(), all.len());
            for (got, want) in filtered.iter().zip(all.iter()) {
                assert_eq!(got.id, want.id);
            }
        }
    }

    #[test]
    fn filter_by_cuisine_matches_exactly_and_case_insensitively() {
        let all = sample();
        let japanese = filter_by_cuisine(&all, "japanese");
        assert_eq!(japanese.len(), 1);
        assert_eq!(japanese[0].name, "Sushi Spot");

        // Exact match, not substring.
        assert!(filter_by_cuisine(&all, "ital").is_empty());
    }

    #[test]
    fn empty_search_is_a_no_op_and_results_are_a_subset() {
        let all = sample();
        assert_eq!(search(&all, "").len(), all.len());

        for query in ["o", "an", "zz", "sushi", "no-such-restaurant"] {
            let hits = search(&all, query);
            assert!(hits.len() <= all.len());
            for hit in hits {
                assert!(all.iter().any(|r| r.id == hit.id));
            }
        }
    }

    #[test]
    fn search_covers_name_and_cuisine_substrings() {
        let all = sample();
        let hits = search(&all, "o");
        let names: Vec<_> = hits.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"Burger Joint"));
        assert!(names.contains(&"Sushi Spot"));
        assert!(!names.contains(&"Pizza Palace"));

        // Cuisine-only hit.
        let italian = search(&all, "italian");
        assert_eq!(italian.len(), 1);
        assert_eq!(italian[0].name, "Pizza Palace");

        // Case-insensitive substring on the name.
        let sushi = search(&all, "SUSHI");
        assert_eq!(sushi.len(), 1);
    }

    #[test]
    fn combined_filter_applies_both_predicates() {
        let all = sample();
        let hits = combined_filter(&all, "japanese", "spot");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sushi Spot");

        assert!(combined_filter(&all, "japanese", "pizza").is_empty());
        assert_eq!(combined_filter(&all, "all", "").len(), all.len());

        let american = combined_filter(&all, "AMERICAN", "");
        assert_eq!(american.len(), 1);
        assert_eq!(american[0].name, "Burger Joint");
    }

    #[test]
    fn grouping_partitions_menu_items_exactly() {
        let all = sample();
        let sushi = find_by_slug(&all, "sushi-spot").unwrap();
        let groups = group_menu_by_category(&sushi.menu_items);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "rolls");
        assert_eq!(groups[1].label, "appetizers");

        // Concatenating groups in first-seen order reconstructs the input.
        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, sushi.menu_items.len());
        let flattened: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.id.as_str()))
            .collect();
        let source: Vec<&str> = sushi.menu_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(flattened, source);
    }

    #[test]
    fn grouping_preserves_intra_category_order() {
        let all = sample();
        let pizza = find_by_slug(&all, "pizza-palace").unwrap();
        let groups = group_menu_by_category(&pizza.menu_items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "pizza");
        let ids: Vec<&str> = groups[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["201", "202"]);
    }

    #[test]
    fn category_display_names_capitalize_first_char_only() {
        assert_eq!(display_category_name("pizza"), "Pizza");
        assert_eq!(display_category_name("main course"), "Main course");
        assert_eq!(display_category_name(""), "");
        assert_eq!(display_category_name("BURGERS"), "BURGERS");
    }

    #[test]
    fn review_summary_counts_reviews_and_formats_the_rating() {
        let all = sample();
        let pizza = find_by_slug(&all, "pizza-palace").unwrap();
        let summary = review_summary(pizza);
        assert_eq!(summary.review_count, 1);
        assert_eq!(summary.display_rating, "4.5");
    }

    #[test]
    fn absent_or_zero_rating_displays_the_new_sentinel() {
        let mut r = fixtures::sample_restaurants().remove(0);
        r.reviews = Vec::<Review>::new();

        r.rating = None;
        let summary = review_summary(&r);
        assert_eq!(summary.review_count, 0);
        assert_eq!(summary.display_rating, UNRATED_DISPLAY);

        r.rating = Some(0.0);
        assert_eq!(review_summary(&r).display_rating, UNRATED_DISPLAY);
    }
}
