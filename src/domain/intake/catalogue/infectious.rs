//! Infectious diseases.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Infectious;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_infectious",
            D,
            "Avez-vous eu une maladie infectieuse grave ou chronique (hépatite B ou C, VIH, tuberculose…) ?",
        ),
        flow: vec![
            Question::text("infectious_description", D, "Décrivez brièvement la maladie infectieuse."),
            Question::choice(
                "infectious_type",
                D,
                "De quelle maladie s'agit-il ?",
                &["Hépatite B / C", "VIH", "Tuberculose", "Paludisme", "Autre"],
            ),
            Question::year("infectious_first_year", D, "En quelle année le diagnostic a-t-il été posé ?"),
            Question::text("infectious_treatments", D, "Quel traitement avez-vous reçu ?"),
            Question::boolean("infectious_hospitalized", D, "Avez-vous été hospitalisé(e) ?"),
            Question::choice(
                "infectious_status",
                D,
                "Quelle est la situation actuelle ?",
                &["Guéri", "Infection chronique contrôlée", "Traitement en cours"],
            ),
            Question::year("infectious_end_year", D, "En quelle année le traitement s'est-il terminé ?"),
            Question::text("infectious_caregiver", D, "Quel médecin ou service vous suit ?"),
            Question::boolean(
                "infectious_another_case",
                D,
                "Avez-vous une autre maladie infectieuse à déclarer ?",
            ),
        ],
        rules: vec![
            ("infectious_description", FactRule::Describe),
            ("infectious_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("infectious_first_year", FactRule::StartYear),
            ("infectious_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "infectious_hospitalized",
                FactRule::Flag {
                    label: "Hospitalisation",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            (
                "infectious_status",
                FactRule::Status {
                    label: "Statut",
                    resolved: &["Guéri"],
                },
            ),
            ("infectious_end_year", FactRule::EndYear),
            ("infectious_caregiver", FactRule::Caregiver),
        ],
    }
}
