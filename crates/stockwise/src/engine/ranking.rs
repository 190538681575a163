use crate::model::{Category, Suggestion, Urgency};
use serde::Deserialize;

/// Optional narrowing of the suggestion listing. Every set field must match.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionFilter {
    pub category: Option<Category>,
    pub urgency: Option<Urgency>,
    /// Case-insensitive substring of the product name, SKU or supplier.
    #[serde(alias = "searchText")]
    pub search: Option<String>,
}

impl SuggestionFilter {
    pub fn matches(&self, suggestion: &Suggestion) -> bool {
        if self.category.is_some_and(|c| c != suggestion.category) {
            return false;
        }
        if self.urgency.is_some_and(|u| u != suggestion.urgency) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                [
                    suggestion.product_name.as_str(),
                    suggestion.sku.as_str(),
                    suggestion.supplier.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Urgency high to low, then confidence descending, then product name.
pub fn rank(mut suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    suggestions.sort_by(|a, b| {
        b.urgency
            .cmp(&a.urgency)
            .then_with(|| b.confidence.cmp(&a.confidence))
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    suggestions
}

/// Open suggestions that pass `filter`, ranked for display.
pub fn select(suggestions: Vec<Suggestion>, filter: &SuggestionFilter) -> Vec<Suggestion> {
    rank(
        suggestions
            .into_iter()
            .filter(|s| s.is_open() && filter.matches(s))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sku, SuggestionStatus};

    fn suggestion(name: &str, category: Category, urgency: Urgency, confidence: u8) -> Suggestion {
        Suggestion {
            sku: Sku::new(name.to_uppercase()),
            product_name: name.to_string(),
            category,
            supplier: "Fresh Farms Inc.".to_string(),
            current_stock: 1,
            predicted_demand: 10.0,
            suggested_quantity: 5,
            confidence,
            urgency,
            contributing_factors: Vec::new(),
            capacity: 50,
            status: SuggestionStatus::Open,
        }
    }

    fn names(list: &[Suggestion]) -> Vec<&str> {
        list.iter().map(|s| s.product_name.as_str()).collect()
    }

    #[test]
    fn ranks_by_urgency_then_confidence_then_name() {
        let ranked = rank(vec![
            suggestion("milk", Category::Dairy, Urgency::Medium, 90),
            suggestion("bread", Category::Bakery, Urgency::High, 80),
            suggestion("apples", Category::Produce, Urgency::Medium, 90),
            suggestion("eggs", Category::Dairy, Urgency::High, 95),
            suggestion("rice", Category::Pantry, Urgency::Low, 99),
        ]);
        assert_eq!(names(&ranked), vec!["eggs", "bread", "apples", "milk", "rice"]);
    }

    #[test]
    fn select_hides_resolved_and_applies_filter() {
        let mut rejected = suggestion("cheese", Category::Dairy, Urgency::High, 90);
        rejected.status = SuggestionStatus::Rejected;
        let all = vec![
            suggestion("milk", Category::Dairy, Urgency::Medium, 90),
            suggestion("bananas", Category::Produce, Urgency::High, 85),
            rejected,
        ];

        let dairy = SuggestionFilter {
            category: Some(Category::Dairy),
            ..Default::default()
        };
        assert_eq!(names(&select(all.clone(), &dairy)), vec!["milk"]);

        let search = SuggestionFilter {
            search: Some("BAN".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&select(all.clone(), &search)), vec!["bananas"]);

        let high = SuggestionFilter {
            urgency: Some(Urgency::High),
            ..Default::default()
        };
        assert_eq!(names(&select(all.clone(), &high)), vec!["bananas"]);

        assert_eq!(
            names(&select(all, &SuggestionFilter::default())),
            vec!["bananas", "milk"]
        );
    }
}
