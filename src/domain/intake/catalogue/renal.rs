//! Kidneys and urinary tract.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Renal;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_renal",
            D,
            "Avez-vous eu une maladie des reins ou des voies urinaires (calculs, insuffisance rénale, infections à répétition…) ?",
        ),
        flow: vec![
            Question::text("renal_description", D, "Décrivez brièvement la maladie rénale ou urinaire."),
            Question::choice(
                "renal_type",
                D,
                "De quelle maladie s'agit-il ?",
                &[
                    "Calculs rénaux",
                    "Insuffisance rénale",
                    "Infection urinaire récidivante",
                    "Malformation",
                    "Autre",
                ],
            ),
            Question::year("renal_first_year", D, "En quelle année le diagnostic a-t-il été posé ?"),
            Question::text("renal_treatments", D, "Quel traitement suivez-vous ou avez-vous suivi ?"),
            Question::boolean("renal_dialysis", D, "Êtes-vous ou avez-vous été dialysé(e) ?"),
            Question::boolean("renal_hospitalized", D, "Avez-vous été hospitalisé(e) ?"),
            Question::choice(
                "renal_status",
                D,
                "Quelle est la situation actuelle ?",
                &["Guéri", "Suivi régulier", "Insuffisance persistante"],
            ),
            Question::boolean(
                "renal_another_case",
                D,
                "Avez-vous une autre maladie rénale ou urinaire à déclarer ?",
            ),
        ],
        rules: vec![
            ("renal_description", FactRule::Describe),
            ("renal_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("renal_first_year", FactRule::StartYear),
            ("renal_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "renal_dialysis",
                FactRule::Flag {
                    label: "Dialyse",
                    target: FragmentTarget::Treatments,
                },
            ),
            (
                "renal_hospitalized",
                FactRule::Flag {
                    label: "Hospitalisation",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            (
                "renal_status",
                FactRule::Status {
                    label: "Fonction rénale",
                    resolved: &["Guéri"],
                },
            ),
        ],
    }
}
