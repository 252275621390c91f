//! Heart and blood vessels.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Cardio;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_cardio",
            D,
            "Avez-vous déjà eu un problème cardiaque ou vasculaire (hypertension, trouble du rythme, infarctus, phlébite…) ?",
        ),
        flow: vec![
            Question::text("cardio_description", D, "Décrivez brièvement le problème cardiovasculaire."),
            Question::choice(
                "cardio_type",
                D,
                "De quel type de problème s'agit-il ?",
                &[
                    "Hypertension artérielle",
                    "Trouble du rythme",
                    "Infarctus / angine de poitrine",
                    "Valvulopathie",
                    "Phlébite / embolie",
                    "Autre",
                ],
            ),
            Question::year("cardio_first_year", D, "En quelle année le diagnostic a-t-il été posé ?"),
            Question::text("cardio_treatments", D, "Quel traitement suivez-vous ou avez-vous suivi ?"),
            Question::boolean("cardio_hospitalized", D, "Avez-vous été hospitalisé(e) pour ce problème ?"),
            Question::boolean(
                "cardio_exams_abnormal",
                D,
                "Des examens (ECG, échographie, test d'effort) ont-ils montré une anomalie ?",
            ),
            Question::choice(
                "cardio_status",
                D,
                "Le problème est-il aujourd'hui contrôlé ?",
                &[
                    "Guéri, plus de traitement",
                    "Stabilisé sous traitement",
                    "En cours d'exploration",
                    "Non contrôlé",
                ],
            ),
            Question::numeric("cardio_work_stoppage", D, "Combien de jours d'arrêt de travail au total ?"),
            Question::text("cardio_caregiver", D, "Quel cardiologue ou établissement vous suit ?"),
            Question::boolean(
                "cardio_another_case",
                D,
                "Avez-vous un autre problème cardiovasculaire à déclarer ?",
            ),
        ],
        rules: vec![
            ("cardio_description", FactRule::Describe),
            ("cardio_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("cardio_first_year", FactRule::StartYear),
            ("cardio_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "cardio_hospitalized",
                FactRule::Flag {
                    label: "Hospitalisation",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            (
                "cardio_exams_abnormal",
                FactRule::Flag {
                    label: "Examens anormaux",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (
                "cardio_status",
                FactRule::Status {
                    label: "Contrôle",
                    resolved: &["Guéri, plus de traitement"],
                },
            ),
            ("cardio_work_stoppage", FactRule::WorkStoppage),
            ("cardio_caregiver", FactRule::Caregiver),
        ],
    }
}
