//! Hormones and metabolism.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Endocrine;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_endocrine",
            D,
            "Avez-vous un diabète, un trouble thyroïdien, un excès de cholestérol ou une autre maladie hormonale ou métabolique ?",
        ),
        flow: vec![
            Question::text("endocrine_description", D, "Décrivez brièvement la maladie."),
            Question::choice(
                "endocrine_type",
                D,
                "De quelle maladie s'agit-il ?",
                &[
                    "Diabète de type 1",
                    "Diabète de type 2",
                    "Trouble thyroïdien",
                    "Cholestérol élevé",
                    "Obésité",
                    "Autre",
                ],
            ),
            Question::year("endocrine_first_year", D, "En quelle année le diagnostic a-t-il été posé ?"),
            Question::text("endocrine_treatments", D, "Quel traitement suivez-vous ?"),
            Question::boolean("endocrine_insulin", D, "Êtes-vous traité(e) par insuline ?"),
            Question::numeric("endocrine_hba1c", D, "Quelle est votre dernière valeur d'HbA1c (en %) ?"),
            Question::boolean(
                "endocrine_complications",
                D,
                "Avez-vous des complications (yeux, reins, nerfs, cœur) ?",
            ),
            Question::choice(
                "endocrine_status",
                D,
                "Comment qualifieriez-vous l'équilibre de la maladie ?",
                &["Équilibré", "Déséquilibré", "Guéri / traitement arrêté"],
            ),
            Question::text("endocrine_caregiver", D, "Quel médecin assure votre suivi ?"),
            Question::boolean(
                "endocrine_another_case",
                D,
                "Avez-vous une autre maladie hormonale ou métabolique à déclarer ?",
            ),
        ],
        rules: vec![
            ("endocrine_description", FactRule::Describe),
            ("endocrine_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("endocrine_first_year", FactRule::StartYear),
            ("endocrine_treatments", FactRule::Append(FragmentTarget::Treatments)),
            (
                "endocrine_insulin",
                FactRule::Flag {
                    label: "Insuline",
                    target: FragmentTarget::Treatments,
                },
            ),
            (
                "endocrine_hba1c",
                FactRule::Quantity {
                    label: "HbA1c (%)",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (
                "endocrine_complications",
                FactRule::Flag {
                    label: "Complications",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (
                "endocrine_status",
                FactRule::Status {
                    label: "Équilibre",
                    resolved: &["Guéri / traitement arrêté"],
                },
            ),
            ("endocrine_caregiver", FactRule::Caregiver),
        ],
    }
}
