//! Read-only scheme catalog: domain model, built-in data, and importers.

pub mod domain;
pub mod import;
mod standard;

pub use domain::{
    AgeRange, Benefit, CasteCategory, EducationLevel, EligibilityRule, Gender, IndianState,
    Occupation, PayoutFrequency, Scheme, SchemeId, SchemeType,
};
pub use import::{CatalogImportError, CatalogImporter};

use serde::{Deserialize, Serialize};

/// Ordered, immutable collection of schemes. The supplied order is preserved
/// and acts as the tie-break baseline during ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.iter()
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn get(&self, id: &SchemeId) -> Option<&Scheme> {
        self.schemes.iter().find(|scheme| &scheme.id == id)
    }
}

impl From<Vec<Scheme>> for SchemeCatalog {
    fn from(schemes: Vec<Scheme>) -> Self {
        Self::new(schemes)
    }
}
