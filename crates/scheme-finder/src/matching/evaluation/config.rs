use serde::{Deserialize, Serialize};

/// Points awarded per satisfied axis. The keyword bonus applies once per
/// matching search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub age: u32,
    pub gender: u32,
    pub caste: u32,
    pub income: u32,
    pub education: u32,
    pub occupation: u32,
    pub state: u32,
    pub keyword: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            age: 15,
            gender: 12,
            caste: 12,
            income: 14,
            education: 12,
            occupation: 10,
            state: 10,
            keyword: 6,
        }
    }
}
