//! Generic collection view: search, status filter and stable sort over a
//! loaded collection.
//!
//! Every list screen runs the same three steps; what differs per entity is
//! captured by a [`CollectionSpec`] (which fields are searchable, where the
//! status lives, how a column maps to a comparable value).

use chrono::NaiveDate;
use leasedesk_types::RecordId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Column + direction controlling the view's order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortSpec<K> {
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Header-click semantics: the active key flips, any other key starts ascending.
    pub fn toggle(current: Option<SortSpec<K>>, key: K) -> SortSpec<K> {
        match current {
            Some(spec) if spec.key == key => SortSpec {
                key,
                direction: spec.direction.flipped(),
            },
            _ => SortSpec::ascending(key),
        }
    }
}

/// Status restriction; `All` is the "no filtering" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn admits(&self, status: Option<&S>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == Some(wanted),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }
}

impl<S: FromStr> FromStr for StatusFilter<S> {
    type Err = S::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// The three independent view parameters of a list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery<K, S> {
    pub search: String,
    pub status: StatusFilter<S>,
    pub sort: Option<SortSpec<K>>,
}

impl<K, S> Default for ViewQuery<K, S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            sort: None,
        }
    }
}

impl<K: Copy + PartialEq, S> ViewQuery<K, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn status(mut self, status: StatusFilter<S>) -> Self {
        self.status = status;
        self
    }

    pub fn sort(mut self, sort: Option<SortSpec<K>>) -> Self {
        self.sort = sort;
        self
    }

    pub fn toggle_sort(&mut self, key: K) {
        self.sort = Some(SortSpec::toggle(self.sort, key));
    }

    /// True when search or status narrows the collection
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || matches!(self.status, StatusFilter::Only(_))
    }
}

/// A column value reduced to something with a natural total order.
///
/// Dates are compared as calendar values, never as their string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    Id(i64),
    Text(Cow<'a, str>),
    Date(NaiveDate),
    Amount(Decimal),
}

/// Per-entity configuration of the collection view
pub trait CollectionSpec {
    type Record;
    type SortKey: Copy + PartialEq;
    type Status: PartialEq;

    /// Text fields the free-text search looks into
    fn search_fields<'r>(&'r self, record: &'r Self::Record) -> Vec<Cow<'r, str>>;

    /// Id matched as a substring of its decimal form, when the entity opts in
    fn search_id(&self, _record: &Self::Record) -> Option<RecordId> {
        None
    }

    fn status(&self, _record: &Self::Record) -> Option<Self::Status> {
        None
    }

    fn sort_value<'r>(&'r self, record: &'r Self::Record, key: Self::SortKey) -> SortValue<'r>;
}

fn matches_search<S: CollectionSpec>(spec: &S, record: &S::Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    spec.search_fields(record)
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
        || spec
            .search_id(record)
            .is_some_and(|id| id.to_string().contains(needle))
}

/// Derive the ordered, filtered view of `items`. The input is never reordered.
pub fn apply_view<'a, S: CollectionSpec>(
    spec: &S,
    items: &'a [S::Record],
    query: &ViewQuery<S::SortKey, S::Status>,
) -> Vec<&'a S::Record> {
    let needle = query.search.to_lowercase();

    let mut view: Vec<&'a S::Record> = items
        .iter()
        .filter(|record| matches_search(spec, record, &needle))
        .filter(|record| query.status.admits(spec.status(record).as_ref()))
        .collect();

    // sort_by is stable: ties keep their arrival order in both directions
    if let Some(sort) = query.sort {
        view.sort_by(|a, b| {
            let ordering = spec
                .sort_value(a, sort.key)
                .cmp(&spec.sort_value(b, sort.key));
            sort.direction.apply(ordering)
        });
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: &'static str,
        day: NaiveDate,
        flag: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Key {
        Label,
        Day,
        Flag,
    }

    struct RowSpec;

    impl CollectionSpec for RowSpec {
        type Record = Row;
        type SortKey = Key;
        type Status = bool;

        fn search_fields<'r>(&'r self, record: &'r Row) -> Vec<Cow<'r, str>> {
            vec![Cow::Borrowed(record.label)]
        }

        fn search_id(&self, record: &Row) -> Option<RecordId> {
            Some(record.id)
        }

        fn status(&self, record: &Row) -> Option<bool> {
            Some(record.flag)
        }

        fn sort_value<'r>(&'r self, record: &'r Row, key: Key) -> SortValue<'r> {
            match key {
                Key::Label => SortValue::Text(Cow::Borrowed(record.label)),
                Key::Day => SortValue::Date(record.day),
                Key::Flag => SortValue::Id(record.flag as i64),
            }
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 10, label: "Beta", day: day("2024-02-01"), flag: true },
            Row { id: 21, label: "alpha", day: day("2024-01-10"), flag: false },
            Row { id: 32, label: "Gamma", day: day("2023-12-31"), flag: true },
            Row { id: 43, label: "beta two", day: day("2024-01-10"), flag: false },
        ]
    }

    fn ids(view: &[&Row]) -> Vec<i64> {
        view.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_preserves_arrival_order() {
        let items = rows();
        let view = apply_view(&RowSpec, &items, &ViewQuery::new());
        assert_eq!(ids(&view), vec![10, 21, 32, 43]);
    }

    #[test]
    fn test_empty_collection_yields_empty_view() {
        let items: Vec<Row> = Vec::new();
        let query = ViewQuery::new().search("x").sort(Some(SortSpec::ascending(Key::Day)));
        assert!(apply_view(&RowSpec, &items, &query).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_matches_id() {
        let items = rows();

        let view = apply_view(&RowSpec, &items, &ViewQuery::new().search("BETA"));
        assert_eq!(ids(&view), vec![10, 43]);

        let view = apply_view(&RowSpec, &items, &ViewQuery::new().search("3"));
        assert_eq!(ids(&view), vec![32, 43]);

        let view = apply_view(&RowSpec, &items, &ViewQuery::new().search("zzz"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_search_and_status_combine_with_and() {
        let items = rows();
        let query = ViewQuery::new()
            .search("beta")
            .status(StatusFilter::Only(false));
        assert_eq!(ids(&apply_view(&RowSpec, &items, &query)), vec![43]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = rows();
        let query = ViewQuery::new().search("a").status(StatusFilter::Only(true));

        let once: Vec<Row> = apply_view(&RowSpec, &items, &query)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Row> = apply_view(&RowSpec, &once, &query)
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_sort_uses_calendar_order() {
        let items = rows();
        let view = apply_view(
            &RowSpec,
            &items,
            &ViewQuery::new().sort(Some(SortSpec::ascending(Key::Day))),
        );
        assert_eq!(ids(&view), vec![32, 21, 43, 10]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let items = rows();
        let query = ViewQuery::new().sort(Some(SortSpec::ascending(Key::Label)));

        let once: Vec<Row> = apply_view(&RowSpec, &items, &query)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Row> = apply_view(&RowSpec, &once, &query)
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_descending_after_ascending_keeps_ties_in_original_order() {
        let items = rows();
        let asc = ViewQuery::new().sort(Some(SortSpec::ascending(Key::Flag)));
        let desc = ViewQuery::new().sort(Some(SortSpec::descending(Key::Flag)));

        let sorted: Vec<Row> = apply_view(&RowSpec, &items, &asc)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(sorted.iter().map(|r| r.id).collect::<Vec<_>>(), vec![21, 43, 10, 32]);

        let flipped = apply_view(&RowSpec, &sorted, &desc);
        assert_eq!(ids(&flipped), vec![10, 32, 21, 43]);
    }

    #[test]
    fn test_toggle_flips_same_key_and_resets_new_key() {
        let mut query: ViewQuery<Key, bool> = ViewQuery::new();

        query.toggle_sort(Key::Label);
        assert_eq!(query.sort, Some(SortSpec::ascending(Key::Label)));

        query.toggle_sort(Key::Label);
        assert_eq!(query.sort, Some(SortSpec::descending(Key::Label)));

        query.toggle_sort(Key::Day);
        assert_eq!(query.sort, Some(SortSpec::ascending(Key::Day)));
    }

    #[test]
    fn test_status_filter_parses_all_sentinel() {
        let all: StatusFilter<leasedesk_types::UnitStatus> = "all".parse().unwrap();
        assert!(all.is_all());

        let only: StatusFilter<leasedesk_types::UnitStatus> = "occupied".parse().unwrap();
        assert_eq!(only, StatusFilter::Only(leasedesk_types::UnitStatus::Occupied));
    }
}
