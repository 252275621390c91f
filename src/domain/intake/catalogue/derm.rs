//! Skin.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Derm;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_derm",
            D,
            "Avez-vous une maladie de peau (psoriasis, eczéma sévère, mélanome…) ?",
        ),
        flow: vec![
            Question::text("derm_description", D, "Décrivez brièvement l'affection cutanée."),
            Question::choice(
                "derm_type",
                D,
                "De quelle affection s'agit-il ?",
                &[
                    "Psoriasis",
                    "Eczéma",
                    "Mélanome / grain de beauté suspect",
                    "Acné sévère",
                    "Autre",
                ],
            ),
            Question::year("derm_first_year", D, "En quelle année l'affection est-elle apparue ?"),
            Question::text("derm_treatments", D, "Quel traitement suivez-vous ou avez-vous suivi ?"),
            Question::boolean("derm_excision", D, "Une biopsie ou une exérèse a-t-elle été réalisée ?"),
            Question::choice(
                "derm_status",
                D,
                "Quelle est la situation actuelle ?",
                &["Guéri", "Poussées", "Permanent"],
            ),
            Question::boolean("derm_another_case", D, "Avez-vous une autre affection cutanée à déclarer ?"),
        ],
        rules: vec![
            ("derm_description", FactRule::Describe),
            ("derm_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("derm_first_year", FactRule::StartYear),
            ("derm_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "derm_excision",
                FactRule::Flag {
                    label: "Biopsie / exérèse",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            (
                "derm_status",
                FactRule::Status {
                    label: "Statut",
                    resolved: &["Guéri"],
                },
            ),
        ],
    }
}
