//! Mental health.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Psy;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_psy",
            D,
            "Avez-vous déjà été suivi(e) ou traité(e) pour un trouble psychique (dépression, burn-out, anxiété…) ?",
        ),
        flow: vec![
            Question::text("psy_description", D, "Décrivez brièvement le trouble et son contexte."),
            Question::choice(
                "psy_type",
                D,
                "De quel type de trouble s'agit-il ?",
                &[
                    "Dépression",
                    "Burn-out",
                    "Trouble anxieux",
                    "Trouble bipolaire",
                    "Addiction",
                    "Autre",
                ],
            ),
            Question::year("psy_first_year", D, "En quelle année le trouble a-t-il débuté ?"),
            Question::text(
                "psy_treatments",
                D,
                "Quels traitements avez-vous reçus (psychothérapie, antidépresseurs…) ?",
            ),
            Question::boolean("psy_hospitalized", D, "Avez-vous été hospitalisé(e) pour ce trouble ?"),
            Question::numeric("psy_work_stoppage", D, "Combien de jours d'arrêt de travail au total ?"),
            Question::choice(
                "psy_status",
                D,
                "Quelle est votre situation aujourd'hui ?",
                &[
                    "Rémission complète",
                    "Amélioration",
                    "Toujours en traitement",
                    "Rechute",
                ],
            ),
            Question::year("psy_last_year", D, "En quelle année le traitement a-t-il pris fin ?"),
            Question::boolean(
                "psy_work_impact",
                D,
                "Ce trouble a-t-il encore un impact sur votre activité professionnelle ?",
            ),
            Question::text("psy_caregiver", D, "Quel praticien ou établissement vous a suivi(e) ?"),
            Question::boolean("psy_another_case", D, "Avez-vous un autre épisode psychique à déclarer ?"),
        ],
        rules: vec![
            ("psy_description", FactRule::Describe),
            ("psy_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("psy_first_year", FactRule::StartYear),
            ("psy_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "psy_hospitalized",
                FactRule::Flag {
                    label: "Hospitalisation",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            ("psy_work_stoppage", FactRule::WorkStoppage),
            (
                "psy_status",
                FactRule::Status {
                    label: "Évolution",
                    resolved: &["Rémission complète"],
                },
            ),
            ("psy_last_year", FactRule::EndYear),
            (
                "psy_work_impact",
                FactRule::Flag {
                    label: "Impact professionnel",
                    target: FragmentTarget::Sequelae,
                },
            ),
            ("psy_caregiver", FactRule::Caregiver),
        ],
    }
}
