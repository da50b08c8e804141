//! End-to-end dashboard assembly over synthetic stores.

#![allow(clippy::unwrap_used)]

use commerce_insights::prelude::*;

fn record(
    company: &str,
    price: f64,
    meridiem: Meridiem,
    provider: &str,
    language: &str,
    job: &str,
) -> Record {
    Record {
        company: company.to_string(),
        purchase_price: price,
        meridiem,
        cc_provider: provider.to_string(),
        language: language.to_string(),
        job: job.to_string(),
    }
}

fn sample_store() -> RecordStore {
    RecordStore::new(vec![
        record("Acme", 10.0, Meridiem::Am, "Visa", "en", "Engineer"),
        record("Globex", 30.0, Meridiem::Pm, "Mastercard", "fr", "Teacher"),
        record("Acme", 20.0, Meridiem::Am, "Visa", "en", "Engineer"),
        record("Initech", 50.0, Meridiem::Pm, "Amex", "de", "Analyst"),
        record("Globex", 10.0, Meridiem::Am, "Visa", "en", "Teacher"),
    ])
}

#[test]
fn dashboard_has_five_charts_in_fixed_order() {
    let dashboard = Dashboard::build(&sample_store()).unwrap();

    let titles: Vec<&str> = dashboard.charts.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Top 5 Companies by Avg Purchase Price",
            "AM vs PM Purchases",
            "Top 5 Credit Card Providers by Purchase Value",
            "Language Distribution",
            "Top 10 Job Titles",
        ]
    );

    let kinds: Vec<ChartKind> = dashboard.charts.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ChartKind::Bar,
            ChartKind::Pie,
            ChartKind::Bar,
            ChartKind::Bar,
            ChartKind::Line,
        ]
    );
}

#[test]
fn company_chart_ranks_by_mean_price_descending() {
    let dashboard = Dashboard::build(&sample_store()).unwrap();
    let companies = &dashboard.charts[0];

    assert_eq!(companies.x_label, "Company");
    assert_eq!(companies.y_label, "Avg Purchase Price");
    // Means: Initech 50, Globex 20, Acme 15.
    assert_eq!(
        companies.series,
        vec![
            ("Initech".to_string(), 50.0),
            ("Globex".to_string(), 20.0),
            ("Acme".to_string(), 15.0),
        ]
    );
}

#[test]
fn am_pm_chart_is_unsorted_first_seen_split() {
    let dashboard = Dashboard::build(&sample_store()).unwrap();
    let am_pm = &dashboard.charts[1];

    assert_eq!(am_pm.kind, ChartKind::Pie);
    assert_eq!(
        am_pm.series,
        vec![("AM".to_string(), 3.0), ("PM".to_string(), 2.0)]
    );
}

#[test]
fn provider_chart_ranks_by_summed_price() {
    let dashboard = Dashboard::build(&sample_store()).unwrap();
    let providers = &dashboard.charts[2];

    // Sums: Amex 50, Visa 40, Mastercard 30.
    assert_eq!(
        providers.series,
        vec![
            ("Amex".to_string(), 50.0),
            ("Visa".to_string(), 40.0),
            ("Mastercard".to_string(), 30.0),
        ]
    );
}

#[test]
fn language_chart_keeps_all_categories_sorted_descending() {
    let dashboard = Dashboard::build(&sample_store()).unwrap();
    let languages = &dashboard.charts[3];

    assert_eq!(
        languages.series,
        vec![
            ("en".to_string(), 3.0),
            ("fr".to_string(), 1.0),
            ("de".to_string(), 1.0),
        ]
    );
}

#[test]
fn job_chart_is_line_with_markers() {
    let dashboard = Dashboard::build(&sample_store()).unwrap();
    let jobs = &dashboard.charts[4];

    assert_eq!(jobs.kind, ChartKind::Line);
    assert!(jobs.markers);
    assert_eq!(jobs.x_label, "Job Title");
    assert_eq!(
        jobs.series,
        vec![
            ("Engineer".to_string(), 2.0),
            ("Teacher".to_string(), 2.0),
            ("Analyst".to_string(), 1.0),
        ]
    );
}

#[test]
fn insights_carry_expected_names_and_values() {
    let dashboard = Dashboard::build(&sample_store()).unwrap();

    let avg = dashboard.insights[AVG_PURCHASE_PRICE].as_number().unwrap();
    assert!((avg - 24.0).abs() < 1e-12);
    assert_eq!(dashboard.insights[TOP_LANGUAGE].as_label(), Some("en"));
    assert_eq!(dashboard.insights.len(), 2);
}

#[test]
fn empty_store_fails_insights_but_not_charts() {
    let store = RecordStore::default();

    assert_eq!(Dashboard::build(&store).unwrap_err(), Error::EmptyInput);
    assert_eq!(insights(&store).unwrap_err(), Error::EmptyInput);

    let charts = charts(&store);
    assert_eq!(charts.len(), 5);
    assert!(charts.iter().all(|c| c.series.is_empty()));
}

#[test]
fn spec_scenario_group_mean_then_top_one() {
    // records [{A,10},{B,30},{A,20}] -> mean by company {A:15, B:30} -> top 1 [(B,30)]
    let store = RecordStore::new(vec![
        record("A", 10.0, Meridiem::Am, "Visa", "en", "Engineer"),
        record("B", 30.0, Meridiem::Am, "Visa", "en", "Engineer"),
        record("A", 20.0, Meridiem::Am, "Visa", "en", "Engineer"),
    ]);

    let means = group_reduce(
        &store,
        CategoricalField::Company,
        NumericField::PurchasePrice,
        Reducer::Mean,
    );
    assert_eq!(
        means.entries(),
        &[("A".to_string(), 15.0), ("B".to_string(), 30.0)]
    );

    let top = means.top_n(1, SortOrder::Descending);
    assert_eq!(top.entries(), &[("B".to_string(), 30.0)]);
}

#[test]
fn chart_spec_survives_json_round_trip() {
    let dashboard = Dashboard::build(&sample_store()).unwrap();

    let json = serde_json::to_string(&dashboard.charts).unwrap();
    let back: Vec<ChartSpec> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dashboard.charts);
}

#[test]
fn loader_contract_violation_surfaces_immediately() {
    let err = Record::builder().language("en").build().unwrap_err();
    assert_eq!(err, Error::MissingField { field: "company" });
}
