use serde::{Deserialize, Serialize};

use crate::catalog::domain::{
    CasteCategory, EducationLevel, Gender, IndianState, Occupation, SchemeType,
};

/// Normalized seeker attributes consumed by the match engine. Every `None`
/// means "no constraint on this axis": the field neither excludes schemes nor
/// contributes to their score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekerProfile {
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub caste: Option<CasteCategory>,
    pub annual_income: Option<u64>,
    pub education: Option<EducationLevel>,
    pub occupation: Option<Occupation>,
    pub state: IndianState,
    pub scheme_type: Option<SchemeType>,
    pub search_terms: Vec<String>,
    pub eligible_only: bool,
}

impl Default for SeekerProfile {
    fn default() -> Self {
        Self {
            age: None,
            gender: None,
            caste: None,
            annual_income: None,
            education: None,
            occupation: None,
            state: IndianState::AllIndia,
            scheme_type: None,
            search_terms: Vec::new(),
            eligible_only: true,
        }
    }
}

/// Raw intake form as submitted by a UI or API caller. Numeric fields arrive
/// as free text so that an empty input stays distinct from zero; select
/// fields arrive already typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub age: String,
    pub gender: Option<Gender>,
    pub caste: Option<CasteCategory>,
    pub income: String,
    pub education: Option<EducationLevel>,
    pub occupation: Option<Occupation>,
    pub state: Option<IndianState>,
    pub scheme_type: Option<SchemeType>,
    pub search: String,
    pub eligible_only: Option<bool>,
}

impl ProfileForm {
    /// Convert raw input into the typed profile. Malformed numeric text is
    /// treated as unset rather than rejected: this engine is advisory, so a
    /// half-filled form still produces a ranking.
    pub fn normalize(&self) -> SeekerProfile {
        SeekerProfile {
            age: parse_lenient(&self.age),
            gender: self.gender,
            caste: self.caste,
            annual_income: parse_lenient(&self.income),
            education: self.education,
            occupation: self.occupation,
            state: self.state.unwrap_or_default(),
            scheme_type: self.scheme_type,
            search_terms: search_terms(&self.search),
            eligible_only: self.eligible_only.unwrap_or(true),
        }
    }
}

/// Case-fold and tokenize free-text search input. An all-whitespace string
/// yields no tokens, which disables the keyword axis entirely.
pub fn search_terms(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn parse_lenient<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
