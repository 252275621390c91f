//! Respiratory tract.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Respiratory;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_respiratory",
            D,
            "Avez-vous une maladie respiratoire (asthme, bronchite chronique, apnée du sommeil…) ?",
        ),
        flow: vec![
            Question::text("respiratory_description", D, "Décrivez brièvement la maladie respiratoire."),
            Question::choice(
                "respiratory_type",
                D,
                "De quelle maladie s'agit-il ?",
                &["Asthme", "BPCO", "Apnée du sommeil", "Pneumonie", "Autre"],
            ),
            Question::year("respiratory_first_year", D, "En quelle année le diagnostic a-t-il été posé ?"),
            Question::text("respiratory_treatments", D, "Quel traitement suivez-vous ?"),
            Question::boolean(
                "respiratory_device",
                D,
                "Utilisez-vous un appareillage (PPC, oxygène) ?",
            ),
            Question::boolean("respiratory_hospitalized", D, "Avez-vous été hospitalisé(e) pour cette maladie ?"),
            Question::choice(
                "respiratory_status",
                D,
                "Quelle est la situation actuelle ?",
                &["Guéri", "Contrôlé", "Crises fréquentes"],
            ),
            Question::year("respiratory_last_year", D, "En quelle année a eu lieu la dernière crise ?"),
            Question::boolean(
                "respiratory_another_case",
                D,
                "Avez-vous une autre maladie respiratoire à déclarer ?",
            ),
        ],
        rules: vec![
            ("respiratory_description", FactRule::Describe),
            ("respiratory_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("respiratory_first_year", FactRule::StartYear),
            ("respiratory_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "respiratory_device",
                FactRule::Flag {
                    label: "Appareillage",
                    target: FragmentTarget::Treatments,
                },
            ),
            (
                "respiratory_hospitalized",
                FactRule::Flag {
                    label: "Hospitalisation",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            (
                "respiratory_status",
                FactRule::Status {
                    label: "Statut",
                    resolved: &["Guéri"],
                },
            ),
            ("respiratory_last_year", FactRule::EndYear),
        ],
    }
}
