use serde::{Deserialize, Serialize};

use crate::listing::{BrandClass, NetworkPart};

/// Queries shorter than this (after trimming) do not narrow the results.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 4;

/// Marketplace filter: free text plus optional brand, class and city.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilter {
    #[serde(default)]
    pub query: String,
    pub brand: Option<String>,
    pub brand_class: Option<BrandClass>,
    pub city: Option<String>,
}

impl SearchFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_class(mut self, brand_class: BrandClass) -> Self {
        self.brand_class = Some(brand_class);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// The effective text term, or `None` when the query is too short to apply.
    /// Only the length check ignores surrounding whitespace; the raw query is matched.
    pub fn text_term(&self, min_query_chars: usize) -> Option<&str> {
        if self.query.trim().chars().count() >= min_query_chars {
            Some(self.query.as_str())
        } else {
            None
        }
    }

    pub fn matches(&self, part: &NetworkPart, min_query_chars: usize) -> bool {
        let matches_search = match self.text_term(min_query_chars) {
            Some(term) => part.part_name.contains(term) || part.part_number.contains(term),
            None => true,
        };

        // An empty selection behaves like "all" in the filter bar
        let matches_brand = non_empty(&self.brand).map_or(true, |b| part.brand == b);
        let matches_class = self.brand_class.map_or(true, |c| part.brand_class == c);
        let matches_city = non_empty(&self.city).map_or(true, |c| part.seller.city == c);

        matches_search && matches_brand && matches_class && matches_city
    }

    /// Apply the filter, preserving input order.
    pub fn apply<'a, I>(&self, parts: I, min_query_chars: usize) -> Vec<NetworkPart>
    where
        I: IntoIterator<Item = &'a NetworkPart>,
    {
        parts
            .into_iter()
            .filter(|part| self.matches(part, min_query_chars))
            .cloned()
            .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Distinct seller cities in first-seen order, for the city dropdown.
pub fn available_cities<'a, I>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a NetworkPart>,
{
    let mut cities: Vec<String> = Vec::new();
    for part in parts {
        if !cities.iter().any(|c| c == &part.seller.city) {
            cities.push(part.seller.city.clone());
        }
    }
    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use qstock_shared::Contact;

    fn parts() -> Vec<NetworkPart> {
        let riyadh = Contact::new("Fast Parts", "Riyadh", "0501234567");
        let jeddah = Contact::new("Al Noor", "Jeddah", "0559876543");
        let tabuk = Contact::new("Branch 3", "Tabuk", "0591234567");
        vec![
            NetworkPart::new("123-456-TY", "Front brake pads", "Toyota", BrandClass::Original, 250.0, 15, riyadh.clone()),
            NetworkPart::new("999-888-NS", "Oil filter", "Nissan", BrandClass::Original, 35.0, 100, jeddah),
            NetworkPart::new("BRK-Pad-001", "Brake kit", "Toyota", BrandClass::Commercial, 120.0, 50, tabuk.clone()),
            NetworkPart::new("ALT-HY-2024", "Alternator", "Hyundai", BrandClass::Oem, 800.0, 3, riyadh),
            NetworkPart::new("112-4-XX", "Spark plug", "Toyota", BrandClass::Oem, 20.0, 8, tabuk),
        ]
    }

    #[test]
    fn test_short_query_is_ignored() {
        let parts = parts();
        let result = SearchFilter::query("abc").apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        assert_eq!(result.len(), parts.len());

        let padded = SearchFilter::query("  abc   ").apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        assert_eq!(padded.len(), parts.len());
    }

    #[test]
    fn test_four_char_query_matches_number_or_name() {
        let parts = parts();
        let result = SearchFilter::query("12-4").apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].part_number, "112-4-XX");

        let padded = SearchFilter::query(" 12-4 ").apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        assert!(padded.is_empty());

        let by_name = SearchFilter::query("Brake").apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].part_number, "BRK-Pad-001");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let parts = parts();
        let filter = SearchFilter::default()
            .with_brand("Toyota")
            .with_class(BrandClass::Original)
            .with_city("Riyadh");
        let result = filter.apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].part_number, "123-456-TY");

        let none = SearchFilter::query("Alternator").with_city("Tabuk").apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        assert!(none.is_empty());
    }

    #[test]
    fn test_empty_selection_means_all() {
        let parts = parts();
        let filter = SearchFilter::default().with_brand("").with_city(" ");
        assert_eq!(filter.apply(&parts, DEFAULT_MIN_QUERY_CHARS).len(), parts.len());
    }

    #[test]
    fn test_filter_is_idempotent_and_keeps_order() {
        let parts = parts();
        let filter = SearchFilter::default().with_brand("Toyota");
        let first = filter.apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        let second = filter.apply(&parts, DEFAULT_MIN_QUERY_CHARS);
        assert_eq!(first, second);
        let numbers: Vec<&str> = first.iter().map(|p| p.part_number.as_str()).collect();
        assert_eq!(numbers, vec!["123-456-TY", "BRK-Pad-001", "112-4-XX"]);
    }

    #[test]
    fn test_available_cities_first_seen_order() {
        assert_eq!(available_cities(&parts()), vec!["Riyadh", "Jeddah", "Tabuk"]);
    }
}
