use serde::{Deserialize, Serialize};

/// Page metadata returned alongside list results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Number of items in this page.
    pub count: u64,
    pub limit: u64,
    pub offset: u64,
}

impl PaginationMeta {
    #[must_use]
    pub const fn new(count: u64, limit: u64, offset: u64) -> Self {
        Self {
            count,
            limit,
            offset,
        }
    }
}

/// A page of results with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Paginated<T> {
    /// Wrap `data`, taking the count from its length.
    #[must_use]
    pub fn new(data: Vec<T>, limit: u64, offset: u64) -> Self {
        let count = data.len() as u64;
        Self {
            data,
            pagination: PaginationMeta::new(count, limit, offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_counts_its_items() {
        let page = Paginated::new(vec!["a", "b"], 20, 40);
        assert_eq!(page.pagination, PaginationMeta::new(2, 20, 40));
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            serde_json::json!({
                "data": ["a", "b"],
                "pagination": { "count": 2, "limit": 20, "offset": 40 }
            })
        );
    }
}
