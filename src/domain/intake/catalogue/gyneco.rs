//! Gynaecology. Only asked of female respondents.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Gyneco;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_gyneco",
            D,
            "Avez-vous eu une affection gynécologique ou une complication de grossesse (endométriose, fibrome, frottis anormal…) ?",
        ),
        flow: vec![
            Question::text("gyneco_description", D, "Décrivez brièvement l'affection."),
            Question::choice(
                "gyneco_type",
                D,
                "De quelle affection s'agit-il ?",
                &[
                    "Endométriose",
                    "Fibrome",
                    "Kyste ovarien",
                    "Anomalie du frottis",
                    "Complication de grossesse",
                    "Autre",
                ],
            ),
            Question::year("gyneco_first_year", D, "En quelle année le diagnostic a-t-il été posé ?"),
            Question::boolean("gyneco_surgery", D, "Une intervention chirurgicale a-t-elle eu lieu ?"),
            Question::text("gyneco_treatments", D, "Quel traitement suivez-vous ou avez-vous suivi ?"),
            Question::boolean("gyneco_pregnancy", D, "Êtes-vous actuellement enceinte ?"),
            Question::choice(
                "gyneco_status",
                D,
                "Quelle est la situation actuelle ?",
                &["Guéri", "Suivi en cours", "Traitement en cours"],
            ),
            Question::year("gyneco_end_year", D, "En quelle année le suivi s'est-il terminé ?"),
            Question::boolean(
                "gyneco_another_case",
                D,
                "Avez-vous une autre affection gynécologique à déclarer ?",
            ),
        ],
        rules: vec![
            ("gyneco_description", FactRule::Describe),
            ("gyneco_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("gyneco_first_year", FactRule::StartYear),
            (
                "gyneco_surgery",
                FactRule::Flag {
                    label: "Intervention",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            ("gyneco_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "gyneco_pregnancy",
                FactRule::Flag {
                    label: "Grossesse en cours",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (
                "gyneco_status",
                FactRule::Status {
                    label: "Suivi",
                    resolved: &["Guéri"],
                },
            ),
            ("gyneco_end_year", FactRule::EndYear),
        ],
    }
}
