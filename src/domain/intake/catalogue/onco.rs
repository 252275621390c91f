//! Tumours and cancers.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Onco;

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_onco",
            D,
            "Avez-vous déjà eu une tumeur, bénigne ou maligne, ou un cancer ?",
        ),
        flow: vec![
            Question::text("onco_description", D, "Décrivez la tumeur (organe, nature)."),
            Question::choice(
                "onco_type",
                D,
                "De quel type de lésion s'agit-il ?",
                &["Tumeur bénigne", "Cancer", "Lésion précancéreuse", "Autre"],
            ),
            Question::year("onco_first_year", D, "En quelle année le diagnostic a-t-il été posé ?"),
            Question::boolean("onco_surgery", D, "Avez-vous été opéré(e) ?"),
            Question::boolean(
                "onco_chemo_radio",
                D,
                "Avez-vous reçu une chimiothérapie ou une radiothérapie ?",
            ),
            Question::text("onco_treatments", D, "Quels autres traitements avez-vous reçus ?"),
            Question::year("onco_end_year", D, "En quelle année les traitements se sont-ils terminés ?"),
            Question::choice(
                "onco_status",
                D,
                "Quelle est votre situation actuelle ?",
                &[
                    "Rémission depuis plus de 5 ans",
                    "Rémission depuis moins de 5 ans",
                    "Surveillance active",
                    "Traitement en cours",
                ],
            ),
            Question::boolean("onco_recurrence", D, "Y a-t-il eu une récidive ?"),
            Question::text("onco_caregiver", D, "Quel oncologue ou établissement vous suit ?"),
            Question::boolean("onco_another_case", D, "Avez-vous une autre tumeur à déclarer ?"),
        ],
        rules: vec![
            ("onco_description", FactRule::Describe),
            ("onco_type", FactRule::Append(FragmentTarget::Diagnosis)),
            ("onco_first_year", FactRule::StartYear),
            (
                "onco_surgery",
                FactRule::Flag {
                    label: "Chirurgie",
                    target: FragmentTarget::Hospitalizations,
                },
            ),
            (
                "onco_chemo_radio",
                FactRule::Flag {
                    label: "Chimiothérapie / radiothérapie",
                    target: FragmentTarget::Treatments,
                },
            ),
            ("onco_treatments", FactRule::Append(FragmentTarget::Treatments)),
            ("onco_end_year", FactRule::EndYear),
            (
                "onco_status",
                FactRule::Status {
                    label: "Statut",
                    resolved: &["Rémission depuis plus de 5 ans"],
                },
            ),
            (
                "onco_recurrence",
                FactRule::Flag {
                    label: "Récidive",
                    target: FragmentTarget::Sequelae,
                },
            ),
            ("onco_caregiver", FactRule::Caregiver),
        ],
    }
}
