use super::domain::{
    AgeRange, Benefit, CasteCategory, EducationLevel, EligibilityRule, Gender, IndianState,
    Occupation, PayoutFrequency, Scheme, SchemeId, SchemeType,
};
use super::SchemeCatalog;

impl SchemeCatalog {
    /// Built-in starter catalog curated from NSP, MyGov, and ministry portals.
    /// Used by the demo command and as the server fallback when no catalog
    /// file is configured.
    pub fn standard() -> Self {
        Self::new(standard_schemes())
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn standard_schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            id: SchemeId("nsp-post-matric-sc".to_string()),
            name: "Post Matric Scholarship for SC Students".to_string(),
            ministry: "Ministry of Social Justice and Empowerment".to_string(),
            source: "NSP".to_string(),
            website: "https://scholarships.gov.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Scholarship,
            benefit: Benefit {
                value: 12_000,
                frequency: PayoutFrequency::Yearly,
            },
            tags: tags(&["scholarship", "students", "post matric", "sc"]),
            eligibility: EligibilityRule {
                age: Some(AgeRange { min: 16, max: 30 }),
                caste: Some(vec![CasteCategory::Sc]),
                income_max: Some(250_000),
                education: Some(vec![
                    EducationLevel::TenthPass,
                    EducationLevel::TwelfthPass,
                    EducationLevel::Diploma,
                    EducationLevel::Graduate,
                ]),
                occupation: Some(vec![Occupation::Student]),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("pm-kisan".to_string()),
            name: "PM-KISAN Income Support".to_string(),
            ministry: "Ministry of Agriculture and Farmers Welfare".to_string(),
            source: "MyGov".to_string(),
            website: "https://pmkisan.gov.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Subsidy,
            benefit: Benefit {
                value: 2_000,
                frequency: PayoutFrequency::Quarterly,
            },
            tags: tags(&["farmers", "income support", "agriculture"]),
            eligibility: EligibilityRule {
                age: Some(AgeRange { min: 18, max: 100 }),
                occupation: Some(vec![Occupation::Farmer]),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("atal-pension-yojana".to_string()),
            name: "Atal Pension Yojana".to_string(),
            ministry: "Ministry of Finance".to_string(),
            source: "Jan Suraksha".to_string(),
            website: "https://www.jansuraksha.gov.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Pension,
            benefit: Benefit {
                value: 5_000,
                frequency: PayoutFrequency::Monthly,
            },
            tags: tags(&["pension", "unorganised sector", "retirement"]),
            eligibility: EligibilityRule {
                age: Some(AgeRange { min: 18, max: 40 }),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("stand-up-india".to_string()),
            name: "Stand-Up India Enterprise Loan".to_string(),
            ministry: "Ministry of Finance".to_string(),
            source: "SIDBI".to_string(),
            website: "https://www.standupmitra.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Loan,
            benefit: Benefit {
                value: 1_000_000,
                frequency: PayoutFrequency::OneTime,
            },
            tags: tags(&["entrepreneur", "women", "sc", "st", "greenfield"]),
            eligibility: EligibilityRule {
                age: Some(AgeRange { min: 18, max: 65 }),
                caste: Some(vec![CasteCategory::Sc, CasteCategory::St]),
                occupation: Some(vec![Occupation::Entrepreneur, Occupation::SelfEmployed]),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("pmay-gramin".to_string()),
            name: "Pradhan Mantri Awas Yojana (Gramin)".to_string(),
            ministry: "Ministry of Rural Development".to_string(),
            source: "MyGov".to_string(),
            website: "https://pmayg.nic.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Housing,
            benefit: Benefit {
                value: 120_000,
                frequency: PayoutFrequency::OneTime,
            },
            tags: tags(&["housing", "rural", "pucca house"]),
            eligibility: EligibilityRule {
                income_max: Some(180_000),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("nmms".to_string()),
            name: "National Means-cum-Merit Scholarship".to_string(),
            ministry: "Ministry of Education".to_string(),
            source: "NSP".to_string(),
            website: "https://scholarships.gov.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Scholarship,
            benefit: Benefit {
                value: 12_000,
                frequency: PayoutFrequency::Yearly,
            },
            tags: tags(&["scholarship", "merit", "school students"]),
            eligibility: EligibilityRule {
                age: Some(AgeRange { min: 12, max: 18 }),
                income_max: Some(350_000),
                education: Some(vec![EducationLevel::BelowTenth]),
                occupation: Some(vec![Occupation::Student]),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("mahila-samman-savings".to_string()),
            name: "Mahila Samman Savings Certificate".to_string(),
            ministry: "Ministry of Finance".to_string(),
            source: "India Post".to_string(),
            website: "https://www.indiapost.gov.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Subsidy,
            benefit: Benefit {
                value: 200_000,
                frequency: PayoutFrequency::OneTime,
            },
            tags: tags(&["women", "savings", "deposit"]),
            eligibility: EligibilityRule {
                gender: Some(vec![Gender::Female]),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("pmkvy".to_string()),
            name: "Pradhan Mantri Kaushal Vikas Yojana".to_string(),
            ministry: "Ministry of Skill Development and Entrepreneurship".to_string(),
            source: "MyGov".to_string(),
            website: "https://www.pmkvyofficial.org".to_string(),
            deadline: None,
            scheme_type: SchemeType::Skilling,
            benefit: Benefit {
                value: 8_000,
                frequency: PayoutFrequency::OneTime,
            },
            tags: tags(&["skilling", "training", "youth", "employment"]),
            eligibility: EligibilityRule {
                age: Some(AgeRange { min: 15, max: 45 }),
                occupation: Some(vec![Occupation::Unemployed, Occupation::Student]),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("mjpjay-maharashtra".to_string()),
            name: "Mahatma Jyotirao Phule Jan Arogya Yojana".to_string(),
            ministry: "Government of Maharashtra".to_string(),
            source: "State Portal".to_string(),
            website: "https://www.jeevandayee.gov.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Insurance,
            benefit: Benefit {
                value: 500_000,
                frequency: PayoutFrequency::Yearly,
            },
            tags: tags(&["health", "insurance", "maharashtra"]),
            eligibility: EligibilityRule {
                income_max: Some(100_000),
                states: Some(vec![IndianState::Maharashtra]),
                ..EligibilityRule::default()
            },
        },
        Scheme {
            id: SchemeId("mgnrega".to_string()),
            name: "Mahatma Gandhi National Rural Employment Guarantee".to_string(),
            ministry: "Ministry of Rural Development".to_string(),
            source: "MyGov".to_string(),
            website: "https://nrega.nic.in".to_string(),
            deadline: None,
            scheme_type: SchemeType::Employment,
            benefit: Benefit {
                value: 7_000,
                frequency: PayoutFrequency::Monthly,
            },
            tags: tags(&["employment", "rural", "wage", "guarantee"]),
            eligibility: EligibilityRule {
                age: Some(AgeRange { min: 18, max: 100 }),
                occupation: Some(vec![
                    Occupation::DailyWageWorker,
                    Occupation::Farmer,
                    Occupation::Unemployed,
                ]),
                ..EligibilityRule::default()
            },
        },
    ]
}
