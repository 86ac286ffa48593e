mod config;
mod rules;

pub use config::MatchWeights;

use serde::{Deserialize, Serialize};

use crate::catalog::{Scheme, SchemeCatalog};
use crate::matching::profile::SeekerProfile;

/// One independent dimension of a scheme's eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchAxis {
    Age,
    Gender,
    Caste,
    Income,
    Education,
    Occupation,
    State,
    SchemeType,
    Keywords,
}

/// Discrete contribution to a match, kept so callers can explain a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub axis: MatchAxis,
    pub points: u32,
    pub satisfied: bool,
    pub notes: String,
}

/// Verdict and score for one scheme. Holds a shared reference into the
/// catalog; nothing here is cached or mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub scheme: &'a Scheme,
    pub score: u32,
    pub eligible: bool,
    pub components: Vec<ScoreComponent>,
}

/// Full ranked output for one profile against one catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport<'a> {
    pub results: Vec<MatchResult<'a>>,
    pub eligible_count: usize,
    pub total_count: usize,
}

/// Stateless engine applying the weight rubric to profiles and catalogs.
/// Evaluation is a pure function of its inputs, so a single engine can be
/// shared freely across callers.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    weights: MatchWeights,
}

impl MatchEngine {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Score a single scheme against a profile.
    pub fn evaluate<'a>(&self, profile: &SeekerProfile, scheme: &'a Scheme) -> MatchResult<'a> {
        let (components, score, eligible) = rules::score_scheme(profile, scheme, &self.weights);
        MatchResult {
            scheme,
            score,
            eligible,
            components,
        }
    }

    /// Evaluate the whole catalog, filter by eligibility when the profile
    /// asks for it, and order best-match first. The sort is stable, so equal
    /// scores keep their catalog order.
    pub fn rank<'a>(&self, profile: &SeekerProfile, catalog: &'a SchemeCatalog) -> MatchReport<'a> {
        let mut results: Vec<MatchResult<'a>> = catalog
            .iter()
            .map(|scheme| self.evaluate(profile, scheme))
            .collect();

        if profile.eligible_only {
            results.retain(|result| result.eligible);
        }

        results.sort_by(|a, b| b.score.cmp(&a.score));

        let eligible_count = results.iter().filter(|result| result.eligible).count();

        MatchReport {
            results,
            eligible_count,
            total_count: catalog.len(),
        }
    }
}
