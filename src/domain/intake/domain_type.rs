//! Domain enum: the closed set of medical and lifestyle topics screened during intake.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A medical or lifestyle topic the interview screens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Osteo,
    Cardio,
    Psy,
    Onco,
    Endocrine,
    Respiratory,
    Neuro,
    Digestive,
    Renal,
    Derm,
    Gyneco,
    Infectious,
    OrlOph,
    Lifestyle,
    SportsRisk,
}

impl Domain {
    /// Returns every domain, including the data-only ones.
    pub fn all() -> &'static [Domain] {
        &[
            Domain::Osteo,
            Domain::Cardio,
            Domain::Psy,
            Domain::Onco,
            Domain::Endocrine,
            Domain::Respiratory,
            Domain::Neuro,
            Domain::Digestive,
            Domain::Renal,
            Domain::Derm,
            Domain::Gyneco,
            Domain::Infectious,
            Domain::OrlOph,
            Domain::Lifestyle,
            Domain::SportsRisk,
        ]
    }

    /// Stable snake_case code, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Domain::Osteo => "osteo",
            Domain::Cardio => "cardio",
            Domain::Psy => "psy",
            Domain::Onco => "onco",
            Domain::Endocrine => "endocrine",
            Domain::Respiratory => "respiratory",
            Domain::Neuro => "neuro",
            Domain::Digestive => "digestive",
            Domain::Renal => "renal",
            Domain::Derm => "derm",
            Domain::Gyneco => "gyneco",
            Domain::Infectious => "infectious",
            Domain::OrlOph => "orl_oph",
            Domain::Lifestyle => "lifestyle",
            Domain::SportsRisk => "sports_risk",
        }
    }

    /// Returns the display name shown to underwriters.
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Osteo => "Os et articulations",
            Domain::Cardio => "Cœur et vaisseaux",
            Domain::Psy => "Santé psychique",
            Domain::Onco => "Tumeurs et cancers",
            Domain::Endocrine => "Hormones et métabolisme",
            Domain::Respiratory => "Voies respiratoires",
            Domain::Neuro => "Système nerveux",
            Domain::Digestive => "Appareil digestif",
            Domain::Renal => "Reins et voies urinaires",
            Domain::Derm => "Peau",
            Domain::Gyneco => "Gynécologie",
            Domain::Infectious => "Maladies infectieuses",
            Domain::OrlOph => "ORL et yeux",
            Domain::Lifestyle => "Habitudes de vie",
            Domain::SportsRisk => "Sports à risque",
        }
    }

    /// Returns the coarser case category for this domain.
    ///
    /// Domains without a dedicated category fall back to [`CaseCategory::Other`].
    pub fn category(&self) -> CaseCategory {
        match self {
            Domain::Osteo => CaseCategory::Back,
            Domain::Cardio => CaseCategory::Cardio,
            Domain::Psy => CaseCategory::Psy,
            Domain::Onco => CaseCategory::Onco,
            Domain::Endocrine => CaseCategory::Metabolic,
            Domain::Respiratory => CaseCategory::Respiratory,
            Domain::Neuro => CaseCategory::Neuro,
            Domain::Digestive => CaseCategory::Digestive,
            Domain::Lifestyle => CaseCategory::Lifestyle,
            _ => CaseCategory::Other,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Grouping used by underwriters to file cases; coarser than [`Domain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseCategory {
    Back,
    Cardio,
    Psy,
    Onco,
    Metabolic,
    Respiratory,
    Neuro,
    Digestive,
    Lifestyle,
    Other,
}

impl CaseCategory {
    /// Stable snake_case code, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            CaseCategory::Back => "back",
            CaseCategory::Cardio => "cardio",
            CaseCategory::Psy => "psy",
            CaseCategory::Onco => "onco",
            CaseCategory::Metabolic => "metabolic",
            CaseCategory::Respiratory => "respiratory",
            CaseCategory::Neuro => "neuro",
            CaseCategory::Digestive => "digestive",
            CaseCategory::Lifestyle => "lifestyle",
            CaseCategory::Other => "other",
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_15_domains() {
        assert_eq!(Domain::all().len(), 15);
    }

    #[test]
    fn code_matches_serialized_form() {
        for domain in Domain::all() {
            let json = serde_json::to_string(domain).unwrap();
            assert_eq!(json, format!("\"{}\"", domain.code()));
        }
    }

    #[test]
    fn orl_oph_uses_underscore_code() {
        let parsed: Domain = serde_json::from_str("\"orl_oph\"").unwrap();
        assert_eq!(parsed, Domain::OrlOph);
    }

    #[test]
    fn osteo_files_cases_under_back() {
        assert_eq!(Domain::Osteo.category(), CaseCategory::Back);
        assert_eq!(Domain::Osteo.category().code(), "back");
    }

    #[test]
    fn unmapped_domains_fall_back_to_other() {
        for domain in [
            Domain::Renal,
            Domain::Derm,
            Domain::Gyneco,
            Domain::Infectious,
            Domain::OrlOph,
            Domain::SportsRisk,
        ] {
            assert_eq!(domain.category(), CaseCategory::Other, "{}", domain);
        }
    }
}
