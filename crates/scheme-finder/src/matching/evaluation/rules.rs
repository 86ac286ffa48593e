use super::config::MatchWeights;
use super::{MatchAxis, ScoreComponent};
use crate::catalog::domain::{IndianState, Scheme};
use crate::matching::profile::SeekerProfile;

/// Evaluate one (profile, scheme) pair axis by axis. Each axis is skipped
/// when either side leaves it unset. A failing axis flips the verdict but
/// never stops the remaining axes from scoring, so an ineligible scheme
/// still carries the points of every axis it satisfied.
pub(crate) fn score_scheme(
    profile: &SeekerProfile,
    scheme: &Scheme,
    weights: &MatchWeights,
) -> (Vec<ScoreComponent>, u32, bool) {
    let mut components = Vec::new();
    let mut score: u32 = 0;
    let mut eligible = true;
    let rule = &scheme.eligibility;

    if let (Some(range), Some(age)) = (rule.age, profile.age) {
        if age < range.min || age > range.max {
            eligible = false;
            components.push(ScoreComponent {
                axis: MatchAxis::Age,
                points: 0,
                satisfied: false,
                notes: format!("age {age} outside {}-{}", range.min, range.max),
            });
        } else {
            score += weights.age;
            components.push(ScoreComponent {
                axis: MatchAxis::Age,
                points: weights.age,
                satisfied: true,
                notes: format!("age {age} within {}-{}", range.min, range.max),
            });
        }
    }

    if let (Some(allowed), Some(gender)) = (rule.gender.as_deref(), profile.gender) {
        if allowed.contains(&gender) {
            score += weights.gender;
            components.push(ScoreComponent {
                axis: MatchAxis::Gender,
                points: weights.gender,
                satisfied: true,
                notes: format!("gender {} accepted", gender.label()),
            });
        } else {
            eligible = false;
            components.push(ScoreComponent {
                axis: MatchAxis::Gender,
                points: 0,
                satisfied: false,
                notes: format!("gender {} not covered", gender.label()),
            });
        }
    }

    if let (Some(allowed), Some(caste)) = (rule.caste.as_deref(), profile.caste) {
        if allowed.contains(&caste) {
            score += weights.caste;
            components.push(ScoreComponent {
                axis: MatchAxis::Caste,
                points: weights.caste,
                satisfied: true,
                notes: format!("category {} accepted", caste.label()),
            });
        } else {
            eligible = false;
            components.push(ScoreComponent {
                axis: MatchAxis::Caste,
                points: 0,
                satisfied: false,
                notes: format!("category {} not covered", caste.label()),
            });
        }
    }

    if let (Some(ceiling), Some(income)) = (rule.income_max, profile.annual_income) {
        if income > ceiling {
            eligible = false;
            components.push(ScoreComponent {
                axis: MatchAxis::Income,
                points: 0,
                satisfied: false,
                notes: format!("income {income} exceeds ceiling {ceiling}"),
            });
        } else {
            score += weights.income;
            components.push(ScoreComponent {
                axis: MatchAxis::Income,
                points: weights.income,
                satisfied: true,
                notes: format!("income {income} within ceiling {ceiling}"),
            });
        }
    }

    if let (Some(allowed), Some(education)) = (rule.education.as_deref(), profile.education) {
        if allowed.contains(&education) {
            score += weights.education;
            components.push(ScoreComponent {
                axis: MatchAxis::Education,
                points: weights.education,
                satisfied: true,
                notes: format!("education {} accepted", education.label()),
            });
        } else {
            eligible = false;
            components.push(ScoreComponent {
                axis: MatchAxis::Education,
                points: 0,
                satisfied: false,
                notes: format!("education {} not covered", education.label()),
            });
        }
    }

    if let (Some(allowed), Some(occupation)) = (rule.occupation.as_deref(), profile.occupation) {
        if allowed.contains(&occupation) {
            score += weights.occupation;
            components.push(ScoreComponent {
                axis: MatchAxis::Occupation,
                points: weights.occupation,
                satisfied: true,
                notes: format!("occupation {} accepted", occupation.label()),
            });
        } else {
            eligible = false;
            components.push(ScoreComponent {
                axis: MatchAxis::Occupation,
                points: 0,
                satisfied: false,
                notes: format!("occupation {} not covered", occupation.label()),
            });
        }
    }

    // The profile always carries a state (All India by default), so this axis
    // only skips when the scheme itself is state-unconstrained.
    if let Some(states) = rule.states.as_deref() {
        let served =
            states.contains(&IndianState::AllIndia) || states.contains(&profile.state);
        if served {
            score += weights.state;
            components.push(ScoreComponent {
                axis: MatchAxis::State,
                points: weights.state,
                satisfied: true,
                notes: format!("available in {}", profile.state.label()),
            });
        } else {
            eligible = false;
            components.push(ScoreComponent {
                axis: MatchAxis::State,
                points: 0,
                satisfied: false,
                notes: format!("not available in {}", profile.state.label()),
            });
        }
    }

    // Hard filter: a type mismatch excludes without awarding or removing
    // points, and a match earns nothing.
    if let Some(wanted) = profile.scheme_type {
        if wanted != scheme.scheme_type {
            eligible = false;
            components.push(ScoreComponent {
                axis: MatchAxis::SchemeType,
                points: 0,
                satisfied: false,
                notes: format!(
                    "{} filtered out by {} type filter",
                    scheme.scheme_type.label(),
                    wanted.label()
                ),
            });
        }
    }

    if !profile.search_terms.is_empty() {
        let haystack = scheme.search_haystack();
        let matches = profile
            .search_terms
            .iter()
            .filter(|term| haystack.contains(term.as_str()))
            .count() as u32;

        score += matches * weights.keyword;
        if matches == 0 {
            eligible = false;
        }
        components.push(ScoreComponent {
            axis: MatchAxis::Keywords,
            points: matches * weights.keyword,
            satisfied: matches > 0,
            notes: format!(
                "{matches} of {} search terms matched",
                profile.search_terms.len()
            ),
        });
    }

    (components, score, eligible)
}
