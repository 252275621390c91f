//! Digestive system.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Digestive;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_digestive",
            D,
            "Avez-vous eu une maladie de l'appareil digestif, du foie ou du pancréas (Crohn, ulcère, hépatite…) ?",
        ),
        flow: vec![
            Question::text("digestive_description", D, "Décrivez brièvement la maladie digestive."),
            Question::choice(
                "digestive_type",
                D,
                "De quelle maladie s'agit-il ?",
                &[
                    "Maladie de Crohn / RCH",
                    "Ulcère",
                    "Hépatite",
                    "Calculs biliaires",
                    "Hernie",
                    "Autre",
                ],
            ),
            Question::year("digestive_first_year", D, "En quelle année le diagnostic a-t-il été posé ?"),
            Question::boolean("digestive_surgery", D, "Avez-vous été opéré(e) ?"),
            Question::text("digestive_treatments", D, "Quel traitement suivez-vous ou avez-vous suivi ?"),
            Question::choice(
                "digestive_status",
                D,
                "Quelle est la situation actuelle ?",
                &["Guéri", "Poussées occasionnelles", "Actif"],
            ),
            Question::year("digestive_last_year", D, "En quelle année a eu lieu la dernière poussée ?"),
            Question::numeric("digestive_work_stoppage", D, "Combien de jours d'arrêt de travail au total ?"),
            Question::boolean(
                "digestive_another_case",
                D,
                "Avez-vous une autre maladie digestive à déclarer ?",
            ),
        ],
        rules: vec![
            ("digestive_description", FactRule::Describe),
            ("digestive_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("digestive_first_year", FactRule::StartYear),
            (
                "digestive_surgery",
                FactRule::Flag {
                    label: "Opération",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            ("digestive_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "digestive_status",
                FactRule::Status {
                    label: "Activité",
                    resolved: &["Guéri"],
                },
            ),
            ("digestive_last_year", FactRule::EndYear),
            ("digestive_work_stoppage", FactRule::WorkStoppage),
        ],
    }
}
