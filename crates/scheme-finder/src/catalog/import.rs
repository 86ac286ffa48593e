//! Catalog loading from JSON and CSV exports.
//!
//! JSON is the native shape (`Vec<Scheme>`); CSV is the flat export format
//! produced by the catalog curation spreadsheet, with pipe-delimited cells
//! for set-valued eligibility columns.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::domain::{AgeRange, Benefit, EligibilityRule, Scheme, SchemeId};
use super::SchemeCatalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid catalog JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog row {row}, column '{column}': {message}")]
    Field {
        row: usize,
        column: &'static str,
        message: String,
    },
    #[error("duplicate scheme id '{0}'")]
    DuplicateId(String),
    #[error("unsupported catalog format '{0}', expected .json or .csv")]
    UnsupportedFormat(String),
}

pub struct CatalogImporter;

impl CatalogImporter {
    /// Load a catalog file, dispatching on the `.json`/`.csv` extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SchemeCatalog, CatalogImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?),
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?),
            other => Err(CatalogImportError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<SchemeCatalog, CatalogImportError> {
        let schemes: Vec<Scheme> = serde_json::from_reader(reader)?;
        validate_ids(&schemes)?;
        Ok(SchemeCatalog::new(schemes))
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<SchemeCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut schemes = Vec::new();
        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            // Header occupies line 1, so data rows start at 2.
            let row = index + 2;
            schemes.push(record?.into_scheme(row)?);
        }

        validate_ids(&schemes)?;
        Ok(SchemeCatalog::new(schemes))
    }
}

fn validate_ids(schemes: &[Scheme]) -> Result<(), CatalogImportError> {
    let mut seen = std::collections::HashSet::new();
    for scheme in schemes {
        if !seen.insert(scheme.id.0.as_str()) {
            return Err(CatalogImportError::DuplicateId(scheme.id.0.clone()));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    ministry: String,
    source: String,
    website: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    deadline: Option<String>,
    scheme_type: String,
    benefit_value: u32,
    benefit_frequency: String,
    #[serde(default)]
    tags: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age_min: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age_max: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    caste: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    income_max: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    education: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    occupation: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    states: Option<String>,
}

impl CatalogRow {
    fn into_scheme(self, row: usize) -> Result<Scheme, CatalogImportError> {
        let age = match (self.age_min.as_deref(), self.age_max.as_deref()) {
            (None, None) => None,
            (Some(min), Some(max)) => {
                let min = parse_number(min, row, "age_min")?;
                let max = parse_number(max, row, "age_max")?;
                if min > max {
                    return Err(CatalogImportError::Field {
                        row,
                        column: "age_min",
                        message: format!("age range {min}-{max} is inverted"),
                    });
                }
                Some(AgeRange { min, max })
            }
            _ => {
                return Err(CatalogImportError::Field {
                    row,
                    column: "age_min",
                    message: "age_min and age_max must be supplied together".to_string(),
                })
            }
        };

        let deadline = self
            .deadline
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|err| {
                    CatalogImportError::Field {
                        row,
                        column: "deadline",
                        message: format!("expected YYYY-MM-DD, got '{raw}' ({err})"),
                    }
                })
            })
            .transpose()?;

        Ok(Scheme {
            id: SchemeId(self.id),
            name: self.name,
            ministry: self.ministry,
            source: self.source,
            website: self.website,
            deadline,
            scheme_type: parse_choice(&self.scheme_type, row, "scheme_type")?,
            benefit: Benefit {
                value: self.benefit_value,
                frequency: parse_choice(&self.benefit_frequency, row, "benefit_frequency")?,
            },
            tags: split_list(&self.tags)
                .map(str::to_string)
                .collect(),
            eligibility: EligibilityRule {
                age,
                gender: parse_choice_set(self.gender.as_deref(), row, "gender")?,
                caste: parse_choice_set(self.caste.as_deref(), row, "caste")?,
                income_max: self
                    .income_max
                    .as_deref()
                    .map(|raw| parse_number(raw, row, "income_max"))
                    .transpose()?,
                education: parse_choice_set(self.education.as_deref(), row, "education")?,
                occupation: parse_choice_set(self.occupation.as_deref(), row, "occupation")?,
                states: parse_choice_set(self.states.as_deref(), row, "states")?,
            },
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('|').map(str::trim).filter(|cell| !cell.is_empty())
}

/// Parse one cell against an enum's serde spellings ("SC", "Tamil Nadu", ...).
fn parse_choice<T: DeserializeOwned>(
    raw: &str,
    row: usize,
    column: &'static str,
) -> Result<T, CatalogImportError> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string())).map_err(|_| {
        CatalogImportError::Field {
            row,
            column,
            message: format!("unrecognized value '{}'", raw.trim()),
        }
    })
}

fn parse_choice_set<T: DeserializeOwned>(
    raw: Option<&str>,
    row: usize,
    column: &'static str,
) -> Result<Option<Vec<T>>, CatalogImportError> {
    raw.map(|cell| {
        split_list(cell)
            .map(|value| parse_choice(value, row, column))
            .collect()
    })
    .transpose()
}

fn parse_number<T: std::str::FromStr>(
    raw: &str,
    row: usize,
    column: &'static str,
) -> Result<T, CatalogImportError> {
    raw.trim().parse().map_err(|_| CatalogImportError::Field {
        row,
        column,
        message: format!("expected a non-negative number, got '{raw}'"),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
