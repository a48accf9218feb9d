//! End-to-end searches for small diameters.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use oca_search::{MaxPeriodSearch, PairReport, SearchConfig};

fn run(diameter: usize, parallel: bool) -> Vec<PairReport> {
    MaxPeriodSearch::with_config(SearchConfig { diameter, parallel })
        .unwrap()
        .run()
        .unwrap()
}

fn summary(reports: &[PairReport]) -> Vec<(String, String, Option<u64>)> {
    reports
        .iter()
        .map(|r| {
            (
                r.first.number.to_string(),
                r.second.number.to_string(),
                r.order.as_ref().and_then(|o| o.to_u64()),
            )
        })
        .collect()
}

#[test]
fn diameter_three_finds_maximal_pair() {
    let reports = run(3, false);
    assert_eq!(reports.len(), 1);
    let pair = &reports[0];
    assert_eq!(pair.order, Some(BigUint::from(15u32)));
    assert!(pair.maximal);
    assert_eq!(pair.distribution, [2, 2, 2, 2]);
    assert_eq!(
        pair.to_string(),
        "Rule: 90 NL: 0; POL: P(X) = 1 + X^2; Rule: 150 NL: 0; POL: P(X) = 1 + X^1 + X^2; Order: 15"
    );
}

#[test]
fn diameter_four_pairs_in_enumeration_order() {
    let reports = run(4, false);
    let s = |a: &str, b: &str, o: Option<u64>| (a.to_string(), b.to_string(), o);
    assert_eq!(
        summary(&reports),
        vec![
            s("21930", "39270", Some(63)),
            s("21930", "42330", None),
            s("39270", "42330", None),
            s("39270", "27030", Some(21)),
            s("42330", "27030", Some(7)),
        ]
    );
    let maximal: Vec<bool> = reports.iter().map(|r| r.maximal).collect();
    assert_eq!(maximal, vec![true, false, false, false, false]);
    assert!(reports.iter().all(|r| r.distribution == [4, 4, 4, 4]));
    assert_eq!(reports[0].first.polynomial, "P(X) = 1 + X^3");
    assert_eq!(reports[0].second.polynomial, "P(X) = 1 + X^1 + X^3");
    assert_eq!(reports[4].second.polynomial, "P(X) = 1 + X^1 + X^2 + X^3");
    assert!(reports
        .iter()
        .all(|r| r.first.nonlinearity == 0 && r.first.degree == 1));
    assert!(reports[1].to_string().ends_with("Order: -1"));
}

#[test]
fn diameter_five_maximal_pairs() {
    let reports = run(5, true);
    assert_eq!(reports.len(), 21);
    let maximal: Vec<(String, String, Option<u64>)> = summary(&reports)
        .into_iter()
        .filter(|(_, _, o)| *o == Some(255))
        .collect();
    assert_eq!(maximal.len(), 3);
    assert_eq!(maximal[0].0, "2779077210");
    assert_eq!(maximal[0].1, "1520805210");
}

#[test]
fn parallel_and_sequential_runs_agree() {
    for diameter in 3..=5 {
        assert_eq!(run(diameter, true), run(diameter, false), "d = {diameter}");
    }
}

#[test]
fn reports_serialize_numbers_as_decimal_strings() {
    let reports = run(4, false);
    let json = serde_json::to_value(&reports[0]).unwrap();
    assert_eq!(json["first"]["number"], "21930");
    assert_eq!(json["order"], "63");
    assert_eq!(json["maximal"], true);
    assert_eq!(json["distribution"], serde_json::json!([4, 4, 4, 4]));
    let missing = serde_json::to_value(&reports[1]).unwrap();
    assert!(missing["order"].is_null());
}
