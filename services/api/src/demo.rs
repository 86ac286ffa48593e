use clap::Args;
use scheme_finder::catalog::{
    CasteCategory, CatalogImporter, EducationLevel, Gender, IndianState, Occupation,
    SchemeCatalog, SchemeType,
};
use scheme_finder::error::AppError;
use scheme_finder::matching::{MatchEngine, ProfileForm};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct MatchArgs {
    /// Age in years
    #[arg(long)]
    pub(crate) age: Option<u8>,
    /// Gender: female, male, or other
    #[arg(long, value_parser = parse_choice::<Gender>)]
    pub(crate) gender: Option<Gender>,
    /// Category: General, OBC, SC, ST, or EWS
    #[arg(long, value_parser = parse_choice::<CasteCategory>)]
    pub(crate) caste: Option<CasteCategory>,
    /// Annual income in rupees
    #[arg(long)]
    pub(crate) income: Option<u64>,
    /// Highest education level, e.g. "12th Pass"
    #[arg(long, value_parser = parse_choice::<EducationLevel>)]
    pub(crate) education: Option<EducationLevel>,
    /// Occupation, e.g. Student or Farmer
    #[arg(long, value_parser = parse_choice::<Occupation>)]
    pub(crate) occupation: Option<Occupation>,
    /// State of residence; defaults to "All India"
    #[arg(long, value_parser = parse_choice::<IndianState>)]
    pub(crate) state: Option<IndianState>,
    /// Restrict results to one scheme type, e.g. Scholarship
    #[arg(long = "type", value_parser = parse_choice::<SchemeType>)]
    pub(crate) scheme_type: Option<SchemeType>,
    /// Free-text keywords matched against scheme names, ministries, and tags
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Include schemes the profile is not eligible for
    #[arg(long)]
    pub(crate) all: bool,
    /// Catalog file (.json or .csv); defaults to the built-in catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

/// Parse one CLI value against an enum's serde spellings.
fn parse_choice<T: DeserializeOwned + Clone + Send + Sync + 'static>(
    raw: &str,
) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string()))
        .map_err(|_| format!("unrecognized value '{}'", raw.trim()))
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let catalog = match &args.catalog {
        Some(path) => CatalogImporter::from_path(path)?,
        None => SchemeCatalog::standard(),
    };

    let form = ProfileForm {
        age: args.age.map(|value| value.to_string()).unwrap_or_default(),
        gender: args.gender,
        caste: args.caste,
        income: args
            .income
            .map(|value| value.to_string())
            .unwrap_or_default(),
        education: args.education,
        occupation: args.occupation,
        state: args.state,
        scheme_type: args.scheme_type,
        search: args.search.clone().unwrap_or_default(),
        eligible_only: Some(!args.all),
    };

    let report = MatchEngine::default().rank(&form.normalize(), &catalog);

    println!(
        "{} of {} schemes match the profile\n",
        report.eligible_count, report.total_count
    );
    println!("{:<4} {:<6} {:<6} {:<50} BENEFIT", "#", "MATCH", "SCORE", "SCHEME");
    for (index, result) in report.results.iter().enumerate() {
        let scheme = result.scheme;
        let marker = if result.eligible { "" } else { " (not eligible)" };
        println!(
            "{:<4} {:<6} {:<6} {:<50} ₹{} {}{marker}",
            index + 1,
            format!("{}%", result.score.min(100)),
            result.score,
            scheme.name,
            scheme.benefit.value,
            scheme.benefit.frequency.label(),
        );
        println!("     {} · {}", scheme.ministry, scheme.website);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_args_build_a_normalizing_form() {
        let args = MatchArgs {
            age: Some(20),
            gender: Some(Gender::Female),
            income: Some(100_000),
            ..MatchArgs::default()
        };

        let form = ProfileForm {
            age: args.age.map(|value| value.to_string()).unwrap_or_default(),
            gender: args.gender,
            income: args
                .income
                .map(|value| value.to_string())
                .unwrap_or_default(),
            eligible_only: Some(!args.all),
            ..ProfileForm::default()
        };
        let profile = form.normalize();

        assert_eq!(profile.age, Some(20));
        assert_eq!(profile.annual_income, Some(100_000));
        assert!(profile.eligible_only);
    }

    #[test]
    fn parse_choice_accepts_serde_spellings() {
        assert_eq!(parse_choice::<Gender>("female"), Ok(Gender::Female));
        assert_eq!(parse_choice::<CasteCategory>("OBC"), Ok(CasteCategory::Obc));
        assert_eq!(
            parse_choice::<IndianState>("Tamil Nadu"),
            Ok(IndianState::TamilNadu)
        );
        assert!(parse_choice::<Gender>("unknown").is_err());
    }
}
