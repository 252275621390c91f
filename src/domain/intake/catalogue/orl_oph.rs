//! Ear, nose, throat and eyes.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::OrlOph;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_orl_oph",
            D,
            "Avez-vous une affection des oreilles, du nez, de la gorge ou des yeux (hors simple correction optique) ?",
        ),
        flow: vec![
            Question::text("orl_oph_description", D, "Décrivez brièvement l'affection."),
            Question::choice(
                "orl_oph_type",
                D,
                "De quelle affection s'agit-il ?",
                &[
                    "Perte auditive",
                    "Acouphènes",
                    "Glaucome",
                    "Cataracte",
                    "Décollement de rétine",
                    "Autre",
                ],
            ),
            Question::year("orl_oph_first_year", D, "En quelle année l'affection a-t-elle été diagnostiquée ?"),
            Question::boolean("orl_oph_surgery", D, "Avez-vous été opéré(e) ?"),
            Question::boolean(
                "orl_oph_device",
                D,
                "Portez-vous un appareillage (prothèse auditive, implant…) ?",
            ),
            Question::choice(
                "orl_oph_status",
                D,
                "Quelle est la situation actuelle ?",
                &["Corrigé / guéri", "Stable", "Aggravation"],
            ),
            Question::text(
                "orl_oph_limitation",
                D,
                "Décrivez les éventuelles limitations (vision, audition, conduite).",
            ),
            Question::boolean(
                "orl_oph_another_case",
                D,
                "Avez-vous une autre affection ORL ou ophtalmologique à déclarer ?",
            ),
        ],
        rules: vec![
            ("orl_oph_description", FactRule::Describe),
            ("orl_oph_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("orl_oph_first_year", FactRule::StartYear),
            (
                "orl_oph_surgery",
                FactRule::Flag {
                    label: "Opération",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            (
                "orl_oph_device",
                FactRule::Flag {
                    label: "Appareillage",
                    target: FragmentTarget::Treatments,
                },
            ),
            (
                "orl_oph_status",
                FactRule::Status {
                    label: "Évolution",
                    resolved: &["Corrigé / guéri"],
                },
            ),
            (
                "orl_oph_limitation",
                FactRule::Detail {
                    label: "Limitations",
                    target: FragmentTarget::Sequelae,
                },
            ),
        ],
    }
}
