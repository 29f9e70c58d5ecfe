use resmap_boundary::Resource;

/// Query and category selected in the filter bar.
///
/// Empty values are wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: String,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

impl FilterState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.category.trim().is_empty()
    }

    /// Case-insensitive substring match of the query on name or address,
    /// AND case-insensitive exact match of the category.
    #[must_use]
    pub fn matches(&self, resource: &Resource) -> bool {
        let query = normalize(&self.query);
        let category = normalize(&self.category);
        matches_normalized(&query, &category, resource)
    }

    /// Whether any of the resources belongs to the selected category.
    ///
    /// Always `true` without a selected category.
    #[must_use]
    pub fn category_available(&self, resources: &[Resource]) -> bool {
        let category = normalize(&self.category);
        category.is_empty() || resources.iter().any(|r| matches_normalized("", &category, r))
    }

    /// Keeps the order of the input.
    #[must_use]
    pub fn apply<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        let query = normalize(&self.query);
        let category = normalize(&self.category);
        resources
            .iter()
            .filter(|r| matches_normalized(&query, &category, r))
            .collect()
    }
}

fn matches_normalized(query: &str, category: &str, resource: &Resource) -> bool {
    let matches_query = query.is_empty()
        || resource.name.to_lowercase().contains(query)
        || resource
            .address
            .as_deref()
            .is_some_and(|a| a.to_lowercase().contains(query));
    let matches_category = category.is_empty()
        || resource
            .category
            .as_deref()
            .is_some_and(|c| normalize(c) == category);
    matches_query && matches_category
}

/// Distinct categories of the given resources for the category selector.
///
/// Duplicates that only differ in case or surrounding whitespace are
/// collapsed into the first spelling; the result is sorted.
#[must_use]
pub fn categories(resources: &[Resource]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut categories: Vec<String> = resources
        .iter()
        .filter_map(|r| r.category.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .filter(|c| seen.insert(c.to_lowercase()))
        .map(ToOwned::to_owned)
        .collect();
    categories.sort_by_key(|c| c.to_lowercase());
    categories
}
