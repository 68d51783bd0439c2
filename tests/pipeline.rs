use amc_scheduler::domain::customer::CustomerRecord;
use amc_scheduler::domain::query::{ExpiryFilter, QueryState, SortKey};
use amc_scheduler::domain::types::CustomerId;
use amc_scheduler::pipeline;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn jan_first() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn customer(id: usize, name: &str, end: Option<NaiveDate>) -> CustomerRecord {
    CustomerRecord {
        id: CustomerId::new(format!("c{id}")).unwrap(),
        name: Some(name.to_string()),
        contact: Some(format!("98450{id:05}")),
        amc_start_date: NaiveDate::from_ymd_opt(2023, 1, 1),
        amc_end_date: end,
    }
}

fn twelve_customers() -> Vec<CustomerRecord> {
    (1..=12)
        .map(|i| {
            let end = if i <= 3 {
                NaiveDate::from_ymd_opt(2024, 1, 10)
            } else {
                NaiveDate::from_ymd_opt(2024, 6, 1)
            };
            customer(i, &format!("Customer {i}"), end)
        })
        .collect()
}

#[test]
fn third_page_of_twelve_holds_two_records() {
    let records = twelve_customers();
    let query = QueryState::new().page(3).page_size(5);

    let page = pipeline::run(&records, &query, jan_first());

    assert_eq!(page.items().len(), 2);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.total_matched(), 12);
    assert_eq!(page.items()[0].id.as_str(), "c11");
    assert_eq!(page.items()[1].id.as_str(), "c12");
}

#[test]
fn thirty_day_window_includes_january_excludes_february() {
    let records = vec![
        customer(1, "Soon", NaiveDate::from_ymd_opt(2024, 1, 20)),
        customer(2, "Later", NaiveDate::from_ymd_opt(2024, 2, 15)),
    ];
    let query = QueryState::new().filter(ExpiryFilter::Within30Days);

    let page = pipeline::run(&records, &query, jan_first());

    assert_eq!(page.total_matched(), 1);
    assert_eq!(page.items()[0].name.as_deref(), Some("Soon"));
}

#[test]
fn narrowing_filter_clamps_stale_page() {
    let records = twelve_customers();
    let before = pipeline::run(&records, &QueryState::new().page(3), jan_first());
    assert_eq!(before.page(), 3);

    let query = QueryState::new()
        .page(3)
        .filter(ExpiryFilter::Within30Days);
    let after = pipeline::run(&records, &query, jan_first());

    assert_eq!(after.total_matched(), 3);
    assert_eq!(after.total_pages(), 1);
    assert_eq!(after.page(), 1);
    assert_eq!(after.items().len(), 3);
}

#[test]
fn empty_working_set() {
    let page = pipeline::run(&[], &QueryState::default(), jan_first());

    assert!(page.items().is_empty());
    assert!(page.is_empty());
    assert_eq!(page.total_pages(), 1);
    assert_eq!(page.total_matched(), 0);
    assert_eq!(page.page(), 1);
}

#[test]
fn search_ignores_case() {
    let records = vec![
        customer(1, "Sri Durga", None),
        customer(2, "Lakshmi Towers", None),
    ];
    let query = QueryState::new().search("durga");

    let page = pipeline::run(&records, &query, jan_first());

    assert_eq!(page.total_matched(), 1);
    assert_eq!(page.items()[0].name.as_deref(), Some("Sri Durga"));
}

#[test]
fn equal_names_keep_input_order() {
    let records = vec![
        customer(1, "Zeta", None),
        customer(2, "Acme", None),
        customer(3, "Zeta", None),
        customer(4, "Acme", None),
    ];
    let query = QueryState::new().sort(SortKey::NameAsc);

    let page = pipeline::run(&records, &query, jan_first());
    let ids: Vec<&str> = page.items().iter().map(|r| r.id.as_str()).collect();

    assert_eq!(ids, vec!["c2", "c4", "c1", "c3"]);
}

#[test]
fn ending_exactly_now_is_not_expired() {
    let records = vec![customer(1, "Today", NaiveDate::from_ymd_opt(2024, 1, 1))];

    let expired = pipeline::run(
        &records,
        &QueryState::new().filter(ExpiryFilter::ExpiredOnly),
        jan_first(),
    );
    let week = pipeline::run(
        &records,
        &QueryState::new().filter(ExpiryFilter::Within7Days),
        jan_first(),
    );

    assert_eq!(expired.total_matched(), 0);
    assert_eq!(week.total_matched(), 1);
}

#[test]
fn expired_only_keeps_past_contracts() {
    let records = vec![
        customer(1, "Lapsed", NaiveDate::from_ymd_opt(2023, 12, 1)),
        customer(2, "Current", NaiveDate::from_ymd_opt(2024, 3, 1)),
        customer(3, "Undated", None),
    ];

    let page = pipeline::run(
        &records,
        &QueryState::new().filter(ExpiryFilter::ExpiredOnly),
        jan_first(),
    );

    assert_eq!(page.total_matched(), 1);
    assert_eq!(page.items()[0].name.as_deref(), Some("Lapsed"));
}

#[test]
fn search_runs_before_filter_and_sort() {
    let records = vec![
        customer(1, "Durga Lifts", NaiveDate::from_ymd_opt(2024, 1, 5)),
        customer(2, "Anand Durga", NaiveDate::from_ymd_opt(2024, 1, 3)),
        customer(3, "Durga Heights", NaiveDate::from_ymd_opt(2024, 5, 1)),
        customer(4, "Other", NaiveDate::from_ymd_opt(2024, 1, 2)),
    ];
    let query = QueryState::new()
        .search("DURGA")
        .filter(ExpiryFilter::Within7Days)
        .sort(SortKey::EndDateAsc);

    let page = pipeline::run(&records, &query, jan_first());
    let ids: Vec<&str> = page.items().iter().map(|r| r.id.as_str()).collect();

    assert_eq!(ids, vec!["c2", "c1"]);
}

#[test]
fn input_is_left_untouched() {
    let records = twelve_customers();
    let snapshot = records.clone();
    let query = QueryState::new().sort(SortKey::NameDesc).page(2);

    let first = pipeline::run(&records, &query, jan_first());
    let second = pipeline::run(&records, &query, jan_first());

    assert_eq!(records, snapshot);
    assert_eq!(first, second);
}

fn matched_names(records: &[CustomerRecord], filter: ExpiryFilter, now: DateTime<Utc>) -> Vec<String> {
    let query = QueryState::new().filter(filter).page_size(50);
    pipeline::run(records, &query, now)
        .items()
        .iter()
        .filter_map(|r| r.name.clone())
        .collect()
}

#[test]
fn seven_day_window_is_inclusive_of_day_seven() {
    let records = vec![
        customer(1, "Day 7", NaiveDate::from_ymd_opt(2024, 1, 8)),
        customer(2, "Day 8", NaiveDate::from_ymd_opt(2024, 1, 9)),
    ];

    assert_eq!(
        matched_names(&records, ExpiryFilter::Within7Days, jan_first()),
        vec!["Day 7"]
    );
}

#[test]
fn thirty_day_window_is_inclusive_of_day_thirty() {
    let records = vec![
        customer(1, "Day 30", NaiveDate::from_ymd_opt(2024, 1, 31)),
        customer(2, "Day 31", NaiveDate::from_ymd_opt(2024, 2, 1)),
    ];

    assert_eq!(
        matched_names(&records, ExpiryFilter::Within30Days, jan_first()),
        vec!["Day 30"]
    );
}

#[test]
fn expired_only_with_partial_day_now() {
    let afternoon = Utc.with_ymd_and_hms(2024, 1, 10, 15, 30, 0).unwrap();
    let records = vec![
        customer(1, "Yesterday", NaiveDate::from_ymd_opt(2024, 1, 9)),
        customer(2, "Today", NaiveDate::from_ymd_opt(2024, 1, 10)),
        customer(3, "Tomorrow", NaiveDate::from_ymd_opt(2024, 1, 11)),
        customer(4, "Undated", None),
    ];

    assert_eq!(
        matched_names(&records, ExpiryFilter::ExpiredOnly, afternoon),
        vec!["Yesterday"]
    );
    assert_eq!(
        matched_names(&records, ExpiryFilter::Within7Days, afternoon),
        vec!["Today", "Tomorrow"]
    );
}
