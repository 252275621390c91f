//! Bones, joints and spine.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Osteo;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_osteo",
            D,
            "Avez-vous déjà souffert d'une affection du dos, de la colonne vertébrale, des os ou des articulations (hernie discale, fracture, arthrose, lumbago…) ?",
        ),
        flow: vec![
            Question::text(
                "osteo_description",
                D,
                "Décrivez brièvement l'affection (diagnostic, localisation).",
            ),
            Question::choice(
                "osteo_type",
                D,
                "De quel type d'affection s'agit-il ?",
                &[
                    "Fracture",
                    "Hernie discale",
                    "Arthrose",
                    "Lombalgie / dorsalgie",
                    "Entorse / luxation",
                    "Autre",
                ],
            ),
            Question::year(
                "osteo_first_year",
                D,
                "En quelle année les premiers symptômes sont-ils apparus ?",
            ),
            Question::boolean("osteo_surgery", D, "Avez-vous été opéré(e) ?"),
            Question::text(
                "osteo_treatments",
                D,
                "Quels traitements avez-vous suivis (kinésithérapie, infiltrations, médicaments…) ?",
            ),
            Question::numeric(
                "osteo_work_stoppage",
                D,
                "Combien de jours d'arrêt de travail au total ?",
            ),
            Question::choice(
                "osteo_status",
                D,
                "Quelle est la situation actuelle ?",
                &[
                    "Guéri, aucune gêne",
                    "Gêne occasionnelle",
                    "Gêne permanente",
                    "En cours de traitement",
                ],
            ),
            Question::year(
                "osteo_last_year",
                D,
                "En quelle année remonte le dernier épisode ou la fin du traitement ?",
            ),
            Question::text(
                "osteo_limitation",
                D,
                "Décrivez les éventuelles limitations persistantes (mobilité, port de charges…).",
            ),
            Question::text(
                "osteo_caregiver",
                D,
                "Quel médecin ou établissement vous a suivi(e) ?",
            ),
            Question::boolean(
                "osteo_another_case",
                D,
                "Avez-vous une autre affection des os ou des articulations à déclarer ?",
            ),
        ],
        rules: vec![
            ("osteo_description", FactRule::Describe),
            ("osteo_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("osteo_first_year", FactRule::StartYear),
            (
                "osteo_surgery",
                FactRule::Flag {
                    label: "Opération",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            ("osteo_treatments", FactRule::Append(FragmentTarget::Treatments)),
            ("osteo_work_stoppage", FactRule::WorkStoppage),
            (
                "osteo_status",
                FactRule::Status {
                    label: "Statut",
                    resolved: &["Guéri, aucune gêne"],
                },
            ),
            ("osteo_last_year", FactRule::EndYear),
            (
                "osteo_limitation",
                FactRule::Detail {
                    label: "Limitations",
                    target: FragmentTarget::Sequelae,
                },
            ),
            ("osteo_caregiver", FactRule::Caregiver),
        ],
    }
}
