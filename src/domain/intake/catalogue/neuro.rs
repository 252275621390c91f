//! Nervous system.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Neuro;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_neuro",
            D,
            "Avez-vous déjà eu une affection neurologique (épilepsie, migraines sévères, AVC, sclérose en plaques, traumatisme crânien…) ?",
        ),
        flow: vec![
            Question::text("neuro_description", D, "Décrivez brièvement l'affection neurologique."),
            Question::choice(
                "neuro_type",
                D,
                "De quelle affection s'agit-il ?",
                &[
                    "Épilepsie",
                    "Migraine",
                    "AVC / AIT",
                    "Sclérose en plaques",
                    "Traumatisme crânien",
                    "Autre",
                ],
            ),
            Question::year("neuro_first_year", D, "En quelle année les symptômes sont-ils apparus ?"),
            Question::year("neuro_last_year", D, "En quelle année a eu lieu le dernier épisode ?"),
            Question::text("neuro_treatments", D, "Quel traitement suivez-vous ou avez-vous suivi ?"),
            Question::boolean("neuro_hospitalized", D, "Avez-vous été hospitalisé(e) ?"),
            Question::boolean(
                "neuro_driving_restriction",
                D,
                "Faites-vous l'objet d'une restriction de conduite ?",
            ),
            Question::choice(
                "neuro_status",
                D,
                "Comment l'affection évolue-t-elle ?",
                &["Guéri, sans séquelle", "Stabilisé", "Évolutif"],
            ),
            Question::text("neuro_sequelae", D, "Décrivez les éventuelles séquelles."),
            Question::numeric("neuro_work_stoppage", D, "Combien de jours d'arrêt de travail au total ?"),
            Question::boolean(
                "neuro_another_case",
                D,
                "Avez-vous une autre affection neurologique à déclarer ?",
            ),
        ],
        rules: vec![
            ("neuro_description", FactRule::Describe),
            ("neuro_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("neuro_first_year", FactRule::StartYear),
            ("neuro_last_year", FactRule::EndYear),
            ("neuro_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "neuro_hospitalized",
                FactRule::Flag {
                    label: "Hospitalisation",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            (
                "neuro_driving_restriction",
                FactRule::Flag {
                    label: "Restriction de conduite",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (
                "neuro_status",
                FactRule::Status {
                    label: "Évolution",
                    resolved: &["Guéri, sans séquelle"],
                },
            ),
            (
                "neuro_sequelae",
                FactRule::Detail {
                    label: "Séquelles",
                    target: FragmentTarget::Sequelae,
                },
            ),
            ("neuro_work_stoppage", FactRule::WorkStoppage),
        ],
    }
}
