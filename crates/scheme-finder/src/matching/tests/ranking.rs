use super::common::*;
use crate::catalog::{AgeRange, EligibilityRule, SchemeCatalog, SchemeId};
use crate::matching::SeekerProfile;

#[test]
fn results_are_ordered_by_score_descending() {
    let mut partial = unconstrained("partial", "Partial Match");
    partial.eligibility = EligibilityRule {
        age: Some(AgeRange { min: 18, max: 60 }),
        ..EligibilityRule::default()
    };
    let schemes = catalog(vec![
        unconstrained("open", "Open Scheme"),
        womens_scholarship(),
        partial,
    ]);

    let report = engine().rank(&young_woman(), &schemes);

    assert_eq!(report.results.len(), 3);
    assert_eq!(report.results[0].scheme.id, SchemeId("womens-scholarship".to_string()));
    assert_eq!(report.results[0].score, 41);
    assert_eq!(report.results[1].score, 15);
    assert_eq!(report.results[2].score, 0);
}

#[test]
fn equal_scores_keep_catalog_order() {
    let schemes = catalog(vec![
        unconstrained("first", "First"),
        unconstrained("second", "Second"),
        unconstrained("third", "Third"),
    ]);

    let report = engine().rank(&SeekerProfile::default(), &schemes);

    let ids: Vec<&str> = report
        .results
        .iter()
        .map(|result| result.scheme.id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn eligible_only_drops_excluded_schemes() {
    let mut profile = young_woman();
    profile.age = Some(30);
    let schemes = catalog(vec![unconstrained("open", "Open"), womens_scholarship()]);

    let report = engine().rank(&profile, &schemes);

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].scheme.id, SchemeId("open".to_string()));
    assert_eq!(report.eligible_count, 1);
    assert_eq!(report.total_count, 2);
}

#[test]
fn toggling_eligible_only_adds_entries_without_changing_scores() {
    let mut profile = young_woman();
    profile.age = Some(30);
    let schemes = catalog(vec![unconstrained("open", "Open"), womens_scholarship()]);

    let filtered = engine().rank(&profile, &schemes);

    profile.eligible_only = false;
    let unfiltered = engine().rank(&profile, &schemes);

    assert!(unfiltered.results.len() > filtered.results.len());
    for kept in &filtered.results {
        let also = unfiltered
            .results
            .iter()
            .find(|result| result.scheme.id == kept.scheme.id)
            .expect("eligible entry survives the toggle");
        assert_eq!(also.score, kept.score);
        assert_eq!(also.eligible, kept.eligible);
    }
    // The ineligible scheme still outranks the zero-score one on raw score.
    assert_eq!(unfiltered.results[0].score, 26);
    assert!(!unfiltered.results[0].eligible);
    assert_eq!(unfiltered.eligible_count, 1);
}

#[test]
fn ranking_is_idempotent() {
    let schemes = catalog(vec![
        unconstrained("open", "Open"),
        womens_scholarship(),
        unconstrained("another", "Another"),
    ]);
    let profile = young_woman();

    let first = engine().rank(&profile, &schemes);
    let second = engine().rank(&profile, &schemes);

    assert_eq!(first, second);
}

#[test]
fn empty_catalog_produces_empty_report() {
    let catalog = SchemeCatalog::default();
    let report = engine().rank(&SeekerProfile::default(), &catalog);

    assert!(report.results.is_empty());
    assert_eq!(report.eligible_count, 0);
    assert_eq!(report.total_count, 0);
}

#[test]
fn ranking_never_mutates_the_catalog() {
    let schemes = catalog(vec![unconstrained("open", "Open"), womens_scholarship()]);
    let before = schemes.clone();

    let _ = engine().rank(&young_woman(), &schemes);

    assert_eq!(schemes, before);
}
