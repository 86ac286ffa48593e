use crate::catalog::{
    AgeRange, Benefit, EligibilityRule, Gender, PayoutFrequency, Scheme, SchemeCatalog, SchemeId,
    SchemeType,
};
use crate::matching::{MatchEngine, SeekerProfile};

pub(super) fn engine() -> MatchEngine {
    MatchEngine::default()
}

/// Catalog entry with no eligibility constraints at all.
pub(super) fn unconstrained(id: &str, name: &str) -> Scheme {
    Scheme {
        id: SchemeId(id.to_string()),
        name: name.to_string(),
        ministry: "Ministry of Testing".to_string(),
        source: "fixture".to_string(),
        website: "https://example.gov.in".to_string(),
        deadline: None,
        scheme_type: SchemeType::Scholarship,
        benefit: Benefit {
            value: 10_000,
            frequency: PayoutFrequency::Yearly,
        },
        tags: Vec::new(),
        eligibility: EligibilityRule::default(),
    }
}

/// The scenario scheme from the ranking rubric: 18-25, women only, income
/// ceiling of two lakh.
pub(super) fn womens_scholarship() -> Scheme {
    let mut scheme = unconstrained("womens-scholarship", "Women in Science Scholarship");
    scheme.ministry = "Ministry of Science and Technology".to_string();
    scheme.tags = vec!["women".to_string(), "science".to_string()];
    scheme.eligibility = EligibilityRule {
        age: Some(AgeRange { min: 18, max: 25 }),
        gender: Some(vec![Gender::Female]),
        income_max: Some(200_000),
        ..EligibilityRule::default()
    };
    scheme
}

pub(super) fn young_woman() -> SeekerProfile {
    SeekerProfile {
        age: Some(20),
        gender: Some(Gender::Female),
        annual_income: Some(100_000),
        ..SeekerProfile::default()
    }
}

pub(super) fn catalog(schemes: Vec<Scheme>) -> SchemeCatalog {
    SchemeCatalog::new(schemes)
}
