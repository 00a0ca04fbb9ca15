//! List view queries: search, categorical filters, sorting and pagination.

use serde::{Deserialize, Serialize};

use crate::models::Entity;

/// Row ordering for list views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Seed order followed by records in the order they were first saved
    #[default]
    Natural,
    /// Most recently updated first
    Recent,
    /// Title ascending, case-insensitive
    Title,
}

/// Query string of a list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
    /// 1-based page number
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// One page of a filtered list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ListQuery {
    /// Whether `entity` passes the search box and every categorical filter.
    pub fn matches<T: Entity>(&self, entity: &T) -> bool {
        if let Some(needle) = non_empty(&self.q) {
            let needle = needle.to_lowercase();
            if !entity
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(status) = non_empty(&self.status) {
            if !entity.status_key().eq_ignore_ascii_case(status) {
                return false;
            }
        }

        if let Some(account) = non_empty(&self.account) {
            if entity.account_id() != Some(account) {
                return false;
            }
        }

        if let Some(category) = non_empty(&self.category) {
            if !entity
                .category()
                .is_some_and(|c| c.eq_ignore_ascii_case(category))
            {
                return false;
            }
        }

        true
    }

    /// Filter, sort and cut out the requested page.
    pub fn apply<T: Entity>(&self, items: Vec<T>, default_page_size: usize) -> Page<T> {
        let mut filtered: Vec<T> = items.into_iter().filter(|e| self.matches(e)).collect();

        match self.sort {
            SortOrder::Natural => {}
            SortOrder::Recent => filtered.sort_by(|a, b| b.updated_at().cmp(a.updated_at())),
            SortOrder::Title => filtered.sort_by_key(|e| e.title().to_lowercase()),
        }

        let page_size = self
            .page_size
            .filter(|&size| size > 0)
            .unwrap_or(default_page_size.max(1));
        paginate(filtered, self.page.unwrap_or(1), page_size)
    }
}

/// Slice out 1-based page `page`. Pages past the end come back empty.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size);

    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Faq, PublishStatus};

    fn faq(
        id: &str,
        question: &str,
        category: &str,
        status: PublishStatus,
        updated_at: &str,
    ) -> Faq {
        Faq {
            id: id.to_string(),
            question: question.to_string(),
            answer: String::new(),
            category: category.to_string(),
            order: 0,
            status,
            updated_at: updated_at.to_string(),
        }
    }

    fn sample() -> Vec<Faq> {
        use PublishStatus::{Draft, Published};

        vec![
            faq("1", "How do I redeem?", "Rewards", Published, "2024-01-02"),
            faq("2", "My coupon?", "Rewards", Draft, "2024-01-03"),
            faq("3", "Account deletion", "Account", Published, "2024-01-01"),
        ]
    }

    #[test]
    fn test_page_counts() {
        let page = paginate((0..25).collect::<Vec<_>>(), 3, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);

        let page = paginate((0..20).collect::<Vec<_>>(), 2, 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 10);

        let page = paginate((0..20).collect::<Vec<_>>(), 3, 10);
        assert!(page.items.is_empty());

        let page = paginate(Vec::<u8>::new(), 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let page = paginate(vec![1, 2, 3], 0, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![1, 2]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = ListQuery {
            q: Some("COUPON".into()),
            ..Default::default()
        };
        let page = query.apply(sample(), 10);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "2");
    }

    #[test]
    fn test_categorical_filters() {
        let query = ListQuery {
            status: Some("published".into()),
            category: Some("rewards".into()),
            ..Default::default()
        };
        let page = query.apply(sample(), 10);
        assert_eq!(
            page.items.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            vec!["1"]
        );

        let blank_filter = ListQuery {
            status: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(blank_filter.apply(sample(), 10).total, 3);
    }

    #[test]
    fn test_sorting() {
        let recent = ListQuery {
            sort: SortOrder::Recent,
            ..Default::default()
        };
        let ids: Vec<_> = recent
            .apply(sample(), 10)
            .items
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["2", "1", "3"]);

        let by_title = ListQuery {
            sort: SortOrder::Title,
            ..Default::default()
        };
        let ids: Vec<_> = by_title
            .apply(sample(), 10)
            .items
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_requested_page_size_wins() {
        let query = ListQuery {
            page: Some(2),
            page_size: Some(2),
            ..Default::default()
        };
        let page = query.apply(sample(), 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
    }
}
