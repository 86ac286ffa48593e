use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeId(pub String);

/// Gender as self-reported by the seeker and referenced by eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
        }
    }
}

/// Reservation categories used across central and state scheme rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasteCategory {
    General,
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "EWS")]
    Ews,
}

impl CasteCategory {
    pub const fn label(self) -> &'static str {
        match self {
            CasteCategory::General => "General",
            CasteCategory::Obc => "OBC",
            CasteCategory::Sc => "SC",
            CasteCategory::St => "ST",
            CasteCategory::Ews => "EWS",
        }
    }
}

/// Highest completed education level, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "Below 10th")]
    BelowTenth,
    #[serde(rename = "10th Pass")]
    TenthPass,
    #[serde(rename = "12th Pass")]
    TwelfthPass,
    Diploma,
    Graduate,
    Postgraduate,
    Doctorate,
}

impl EducationLevel {
    /// All levels in ascending order, for form rendering and validation.
    pub const ORDERED: [EducationLevel; 7] = [
        EducationLevel::BelowTenth,
        EducationLevel::TenthPass,
        EducationLevel::TwelfthPass,
        EducationLevel::Diploma,
        EducationLevel::Graduate,
        EducationLevel::Postgraduate,
        EducationLevel::Doctorate,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::BelowTenth => "Below 10th",
            EducationLevel::TenthPass => "10th Pass",
            EducationLevel::TwelfthPass => "12th Pass",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::Postgraduate => "Postgraduate",
            EducationLevel::Doctorate => "Doctorate",
        }
    }
}

/// Occupation choices offered on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupation {
    Student,
    Farmer,
    #[serde(rename = "Self Employed")]
    SelfEmployed,
    Salaried,
    #[serde(rename = "Daily Wage Worker")]
    DailyWageWorker,
    Artisan,
    Entrepreneur,
    Unemployed,
}

impl Occupation {
    pub const fn label(self) -> &'static str {
        match self {
            Occupation::Student => "Student",
            Occupation::Farmer => "Farmer",
            Occupation::SelfEmployed => "Self Employed",
            Occupation::Salaried => "Salaried",
            Occupation::DailyWageWorker => "Daily Wage Worker",
            Occupation::Artisan => "Artisan",
            Occupation::Entrepreneur => "Entrepreneur",
            Occupation::Unemployed => "Unemployed",
        }
    }
}

/// States and union territories, plus the `AllIndia` sentinel used both as the
/// default profile residence and as a wildcard inside scheme state sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndianState {
    #[serde(rename = "Andhra Pradesh")]
    AndhraPradesh,
    #[serde(rename = "Arunachal Pradesh")]
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Goa,
    Gujarat,
    Haryana,
    #[serde(rename = "Himachal Pradesh")]
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    #[serde(rename = "Madhya Pradesh")]
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    Telangana,
    Tripura,
    #[serde(rename = "Uttar Pradesh")]
    UttarPradesh,
    Uttarakhand,
    #[serde(rename = "West Bengal")]
    WestBengal,
    #[serde(rename = "Andaman & Nicobar Islands")]
    AndamanAndNicobar,
    Chandigarh,
    #[serde(rename = "Dadra & Nagar Haveli and Daman & Diu")]
    DadraNagarHaveliDamanDiu,
    Delhi,
    #[serde(rename = "Jammu & Kashmir")]
    JammuAndKashmir,
    Ladakh,
    Lakshadweep,
    Puducherry,
    #[serde(rename = "All India")]
    AllIndia,
}

impl Default for IndianState {
    fn default() -> Self {
        IndianState::AllIndia
    }
}

impl IndianState {
    pub const fn label(self) -> &'static str {
        match self {
            IndianState::AndhraPradesh => "Andhra Pradesh",
            IndianState::ArunachalPradesh => "Arunachal Pradesh",
            IndianState::Assam => "Assam",
            IndianState::Bihar => "Bihar",
            IndianState::Chhattisgarh => "Chhattisgarh",
            IndianState::Goa => "Goa",
            IndianState::Gujarat => "Gujarat",
            IndianState::Haryana => "Haryana",
            IndianState::HimachalPradesh => "Himachal Pradesh",
            IndianState::Jharkhand => "Jharkhand",
            IndianState::Karnataka => "Karnataka",
            IndianState::Kerala => "Kerala",
            IndianState::MadhyaPradesh => "Madhya Pradesh",
            IndianState::Maharashtra => "Maharashtra",
            IndianState::Manipur => "Manipur",
            IndianState::Meghalaya => "Meghalaya",
            IndianState::Mizoram => "Mizoram",
            IndianState::Nagaland => "Nagaland",
            IndianState::Odisha => "Odisha",
            IndianState::Punjab => "Punjab",
            IndianState::Rajasthan => "Rajasthan",
            IndianState::Sikkim => "Sikkim",
            IndianState::TamilNadu => "Tamil Nadu",
            IndianState::Telangana => "Telangana",
            IndianState::Tripura => "Tripura",
            IndianState::UttarPradesh => "Uttar Pradesh",
            IndianState::Uttarakhand => "Uttarakhand",
            IndianState::WestBengal => "West Bengal",
            IndianState::AndamanAndNicobar => "Andaman & Nicobar Islands",
            IndianState::Chandigarh => "Chandigarh",
            IndianState::DadraNagarHaveliDamanDiu => "Dadra & Nagar Haveli and Daman & Diu",
            IndianState::Delhi => "Delhi",
            IndianState::JammuAndKashmir => "Jammu & Kashmir",
            IndianState::Ladakh => "Ladakh",
            IndianState::Lakshadweep => "Lakshadweep",
            IndianState::Puducherry => "Puducherry",
            IndianState::AllIndia => "All India",
        }
    }
}

/// Broad category a scheme belongs to; doubles as the profile's type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemeType {
    Scholarship,
    Pension,
    Insurance,
    Loan,
    Subsidy,
    Skilling,
    Housing,
    Employment,
}

impl SchemeType {
    pub const fn label(self) -> &'static str {
        match self {
            SchemeType::Scholarship => "Scholarship",
            SchemeType::Pension => "Pension",
            SchemeType::Insurance => "Insurance",
            SchemeType::Loan => "Loan",
            SchemeType::Subsidy => "Subsidy",
            SchemeType::Skilling => "Skilling",
            SchemeType::Housing => "Housing",
            SchemeType::Employment => "Employment",
        }
    }
}

/// How often the benefit amount is disbursed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayoutFrequency {
    OneTime,
    Monthly,
    Quarterly,
    Yearly,
}

impl PayoutFrequency {
    pub const fn label(self) -> &'static str {
        match self {
            PayoutFrequency::OneTime => "one-time",
            PayoutFrequency::Monthly => "monthly",
            PayoutFrequency::Quarterly => "quarterly",
            PayoutFrequency::Yearly => "yearly",
        }
    }
}

/// Benefit amount in rupees and its disbursal cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub value: u32,
    pub frequency: PayoutFrequency,
}

/// Inclusive age window an applicant must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

/// Per-axis eligibility constraints; every absent field means the scheme is
/// unconstrained on that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Vec<Gender>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caste: Option<Vec<CasteCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationLevel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Vec<Occupation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<IndianState>>,
}

/// One catalog entry: scheme metadata plus its eligibility rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: SchemeId,
    pub name: String,
    pub ministry: String,
    pub source: String,
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub scheme_type: SchemeType,
    pub benefit: Benefit,
    pub tags: Vec<String>,
    #[serde(default)]
    pub eligibility: EligibilityRule,
}

impl Scheme {
    /// Case-folded text searched by the keyword axis: name, ministry, and tags.
    pub fn search_haystack(&self) -> String {
        let mut haystack =
            String::with_capacity(self.name.len() + self.ministry.len() + self.tags.len() * 8);
        haystack.push_str(&self.name);
        haystack.push(' ');
        haystack.push_str(&self.ministry);
        for tag in &self.tags {
            haystack.push(' ');
            haystack.push_str(tag);
        }
        haystack.to_lowercase()
    }
}
