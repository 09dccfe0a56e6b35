use std::collections::BTreeMap;

/// One group of the category aggregation as returned by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Category value (exactly as stored) to number of products.
pub type CategoryCounts = BTreeMap<String, u64>;

/// Folds store groups into the response mapping. Repeated keys are summed
/// and empty groups dropped, so every key present has a count of at least 1.
pub fn into_category_counts(groups: impl IntoIterator<Item = CategoryCount>) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for group in groups.into_iter().filter(|g| g.count > 0) {
        *counts.entry(group.category).or_insert(0) += group.count;
    }
    counts
}

/// Groups raw category values the way a document store `$group` stage
/// would: by exact value, no case folding.
pub fn group_by_category<'a>(categories: impl IntoIterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut tally: BTreeMap<&str, u64> = BTreeMap::new();
    for category in categories {
        *tally.entry(category).or_insert(0) += 1;
    }
    tally
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}
