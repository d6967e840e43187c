//! Pure derivation: records + controls → visible rows
//!
//! Filter, then sort, then paginate. Nothing here touches view-model state.

use std::cmp::Ordering;

use crate::model::{CommitRecord, SortDirection, SortSpec};

/// One page of the filtered and sorted sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Rows on the requested page
    pub rows: Vec<&'a CommitRecord>,
    /// Count after filtering (across all pages)
    pub matched: usize,
    pub total_pages: usize,
    /// Requested page (1-based, not clamped)
    pub page: usize,
    pub page_size: usize,
}

impl PageView<'_> {
    /// 1-based inclusive range of rows on this page, for "Showing a to b of n"
    pub fn shown_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let start = (self.page - 1) * self.page_size + 1;
        Some((start, start + self.rows.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Locale-style string comparison.
///
/// Case-insensitive first; among strings equal ignoring case, lowercase
/// sorts before uppercase (`"a" < "A" < "b"`).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    primary.then_with(|| b.cmp(a))
}

/// Keep records where the term is a case-insensitive substring of any
/// searchable field. An empty term keeps everything.
pub fn filter<'a>(records: &'a [CommitRecord], term: &str) -> Vec<&'a CommitRecord> {
    let needle = term.to_lowercase();
    records.iter().filter(|r| r.matches(&needle)).collect()
}

/// Stable sort on the chosen field
pub fn sort(rows: &mut [&CommitRecord], spec: SortSpec) {
    rows.sort_by(|a, b| {
        let ordering = locale_cmp(a.field(spec.field), b.field(spec.field));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// `ceil(len / page_size)`
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Slice `[(page-1)*size, page*size)`; empty for page 0 or past the end
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Full pipeline. Also used by the property tests.
pub fn derive<'a>(
    records: &'a [CommitRecord],
    search: &str,
    spec: SortSpec,
    page: usize,
    page_size: usize,
) -> PageView<'a> {
    let page_size = page_size.max(1);
    let mut rows = filter(records, search);
    sort(&mut rows, spec);
    let matched = rows.len();
    let visible = page_slice(&rows, page, page_size).to_vec();

    PageView {
        rows: visible,
        matched,
        total_pages: total_pages(matched, page_size),
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommitId, SortField};

    fn make(id: &str, project: &str, header: &str, created: &str) -> CommitRecord {
        CommitRecord {
            id: Some(CommitId::new(id)),
            project: project.to_string(),
            lifecycle: "development".to_string(),
            action: "add".to_string(),
            commit_type: "feat".to_string(),
            header: header.to_string(),
            description: None,
            created_at: Some(created.to_string()),
            updated_at: None,
        }
    }

    fn numbered(n: usize) -> Vec<CommitRecord> {
        (1..=n)
            .map(|i| {
                make(
                    &i.to_string(),
                    "core",
                    &format!("item {i}"),
                    &format!("2024-01-{i:02}"),
                )
            })
            .collect()
    }

    #[test]
    fn test_locale_cmp_case_insensitive() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_filter_empty_term_keeps_all() {
        let records = numbered(3);
        assert_eq!(filter(&records, "").len(), 3);
    }

    #[test]
    fn test_filter_matches_description() {
        let mut records = numbered(3);
        records[1].description = Some("Touches the PAYMENT flow".to_string());
        let rows = filter(&records, "payment");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, Some(CommitId::new("2")));
    }

    #[test]
    fn test_filter_ignores_timestamps() {
        let records = numbered(3);
        assert!(filter(&records, "2024-01").is_empty());
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let records = vec![
            make("1", "beta", "h", "2024-01-02"),
            make("2", "Alpha", "h", "2024-01-03"),
            make("3", "gamma", "h", "2024-01-01"),
        ];
        let mut rows = filter(&records, "");
        sort(&mut rows, SortSpec::new(SortField::Project, SortDirection::Ascending));
        let projects: Vec<_> = rows.iter().map(|r| r.project.as_str()).collect();
        assert_eq!(projects, vec!["Alpha", "beta", "gamma"]);

        sort(&mut rows, SortSpec::new(SortField::CreatedAt, SortDirection::Descending));
        let ids: Vec<_> = rows.iter().filter_map(|r| r.id.as_ref()).map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_missing_optional_field_reads_empty() {
        let mut records = numbered(2);
        records[0].updated_at = Some("2024-02-01".to_string());
        let mut rows = filter(&records, "");
        sort(&mut rows, SortSpec::new(SortField::UpdatedAt, SortDirection::Ascending));
        assert_eq!(rows[0].id, Some(CommitId::new("2")));
    }

    #[test]
    fn test_twelve_records_two_pages() {
        let records = numbered(12);
        let spec = SortSpec::new(SortField::CreatedAt, SortDirection::Ascending);

        let first = derive(&records, "", spec, 1, 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.rows[0].header, "item 1");
        assert_eq!(first.rows[9].header, "item 10");
        assert_eq!(first.shown_range(), Some((1, 10)));
        assert!(!first.has_previous());
        assert!(first.has_next());

        let second = derive(&records, "", spec, 2, 10);
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.rows[0].header, "item 11");
        assert_eq!(second.rows[1].header, "item 12");
        assert_eq!(second.shown_range(), Some((11, 12)));
        assert!(!second.has_next());
    }

    #[test]
    fn test_out_of_range_pages_are_empty_not_clamped() {
        let records = numbered(5);
        let spec = SortSpec::default();
        let zero = derive(&records, "", spec, 0, 10);
        assert!(zero.rows.is_empty());
        assert_eq!(zero.page, 0);

        let beyond = derive(&records, "", spec, 7, 10);
        assert!(beyond.rows.is_empty());
        assert_eq!(beyond.page, 7);
        assert_eq!(beyond.total_pages, 1);
        assert_eq!(beyond.shown_range(), None);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_page_slice_huge_page_does_not_overflow() {
        let rows = [1, 2, 3];
        assert!(page_slice(&rows, usize::MAX, usize::MAX).is_empty());
    }
}
