//! The list-screen transformation: search, expiry filter, sort, paginate.
//!
//! Stages run strictly in that order and never touch the records they are
//! given; intermediate results are vectors of borrowed records and only the
//! final page is cloned out.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::customer::CustomerRecord;
use crate::domain::expiry::days_left;
use crate::domain::query::{ExpiryFilter, QueryState, SortKey};

/// The slice of records to render plus the numbers the pager needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordPage {
    items: Vec<CustomerRecord>,
    page: usize,
    total_pages: usize,
    total_matched: usize,
}

impl RecordPage {
    pub fn items(&self) -> &[CustomerRecord] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CustomerRecord> {
        self.items
    }

    /// The page actually shown, after clamping the requested one.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Always at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Records left after searching and filtering, across all pages.
    pub fn total_matched(&self) -> usize {
        self.total_matched
    }

    pub fn is_empty(&self) -> bool {
        self.total_matched == 0
    }
}

/// Keeps records whose name contains `search_text`, ignoring case.
pub fn search_filter<'a>(records: &'a [CustomerRecord], search_text: &str) -> Vec<&'a CustomerRecord> {
    let needle = search_text.to_lowercase();
    records
        .iter()
        .filter(|record| record.name_or_empty().to_lowercase().contains(&needle))
        .collect()
}

/// Applies the time-bounded filter. Records without an end date only pass `All`.
pub fn expiry_filter<'a>(
    records: &[&'a CustomerRecord],
    filter: ExpiryFilter,
    now: DateTime<Utc>,
) -> Vec<&'a CustomerRecord> {
    let window = |max_days: i64| {
        move |record: &&CustomerRecord| {
            record
                .amc_end_date
                .map(|end| days_left(end, now))
                .is_some_and(|days| (0..=max_days).contains(&days))
        }
    };

    match filter {
        ExpiryFilter::All => records.to_vec(),
        ExpiryFilter::Within7Days => records.iter().copied().filter(window(7)).collect(),
        ExpiryFilter::Within30Days => records.iter().copied().filter(window(30)).collect(),
        ExpiryFilter::ExpiredOnly => records
            .iter()
            .copied()
            .filter(|record| {
                record
                    .amc_end_date
                    .is_some_and(|end| days_left(end, now) < 0)
            })
            .collect(),
    }
}

fn compare_end_dates(a: &CustomerRecord, b: &CustomerRecord, ascending: bool) -> Ordering {
    match (a.amc_end_date, b.amc_end_date) {
        (Some(a), Some(b)) if ascending => a.cmp(&b),
        (Some(a), Some(b)) => b.cmp(&a),
        // Missing dates go last in both directions.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort; ties keep the order they arrived in.
pub fn sort_records<'a>(records: &[&'a CustomerRecord], key: SortKey) -> Vec<&'a CustomerRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::None => {}
        SortKey::NameAsc => sorted.sort_by(|a, b| a.name_or_empty().cmp(b.name_or_empty())),
        SortKey::NameDesc => sorted.sort_by(|a, b| b.name_or_empty().cmp(a.name_or_empty())),
        SortKey::EndDateAsc => sorted.sort_by(|a, b| compare_end_dates(a, b, true)),
        SortKey::EndDateDesc => sorted.sort_by(|a, b| compare_end_dates(a, b, false)),
    }
    sorted
}

/// Cuts out one page, clamping `page_number` into `1..=total_pages`.
pub fn paginate(records: &[&CustomerRecord], page_number: usize, page_size: usize) -> RecordPage {
    let page_size = page_size.max(1);
    let total_matched = records.len();
    let total_pages = total_matched.div_ceil(page_size).max(1);
    let page = page_number.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_matched);

    RecordPage {
        items: records[start..end].iter().map(|&record| record.clone()).collect(),
        page,
        total_pages,
        total_matched,
    }
}

/// Runs all four stages over the working set.
pub fn run(records: &[CustomerRecord], query: &QueryState, now: DateTime<Utc>) -> RecordPage {
    let searched = search_filter(records, &query.search_text);
    let filtered = expiry_filter(&searched, query.expiry_filter, now);
    let sorted = sort_records(&filtered, query.sort_key);
    paginate(&sorted, query.page_number, query.effective_page_size())
}
