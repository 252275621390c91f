//! Lifestyle: tobacco, other substances, alcohol and weight.
//!
//! The question order here is the linear fallback; the lifestyle router
//! skips parts of it depending on earlier answers.

use super::DomainCatalogue;
use crate::domain::intake::extraction::{FactRule, FragmentTarget};
use crate::domain::intake::{Domain, Question};

const D: Domain = Domain::Lifestyle;

pub(crate) const SMOKING_STATUS: &str = "lifestyle_smoking_status";
pub(crate) const SMOKING_QUANTITY: &str = "lifestyle_smoking_quantity";
pub(crate) const SMOKING_SINCE_YEAR: &str = "lifestyle_smoking_since_year";
pub(crate) const SMOKING_QUIT_YEAR: &str = "lifestyle_smoking_quit_year";
pub(crate) const OTHER_SUBSTANCES: &str = "lifestyle_other_substances";
pub(crate) const SUBSTANCES_DETAIL: &str = "lifestyle_substances_detail";
pub(crate) const ALCOHOL_UNITS: &str = "lifestyle_alcohol_units";
pub(crate) const WEIGHT_CHANGE: &str = "lifestyle_weight_change";
pub(crate) const WEIGHT_DETAIL: &str = "lifestyle_weight_detail";
pub(crate) const ANOTHER_CASE: &str = "lifestyle_another_case";

pub(crate) const CURRENT_SMOKER: &str = "Fumeur actuel";
pub(crate) const FORMER_SMOKER: &str = "Ancien fumeur";
pub(crate) const NEVER_SMOKED: &str = "Jamais fumé régulièrement";

pub(super) fn catalogue() -> DomainCatalogue {
    DomainCatalogue {
        domain: D,
        screening: Question::screening(
            "screen_lifestyle",
            D,
            "Fumez-vous ou avez-vous fumé, consommez-vous de l'alcool ou d'autres substances, ou votre poids a-t-il fortement varié ?",
        ),
        flow: vec![
            Question::choice(
                SMOKING_STATUS,
                D,
                "Quelle est votre situation vis-à-vis du tabac ?",
                &[CURRENT_SMOKER, FORMER_SMOKER, NEVER_SMOKED],
            ),
            Question::numeric(SMOKING_QUANTITY, D, "Combien de cigarettes par jour (en moyenne) ?"),
            Question::year(SMOKING_SINCE_YEAR, D, "En quelle année avez-vous commencé à fumer ?"),
            Question::year(SMOKING_QUIT_YEAR, D, "En quelle année avez-vous arrêté de fumer ?"),
            Question::boolean(
                OTHER_SUBSTANCES,
                D,
                "Consommez-vous ou avez-vous consommé d'autres substances (cannabis, drogues) ?",
            ),
            Question::text(
                SUBSTANCES_DETAIL,
                D,
                "Précisez les substances, la fréquence et la période de consommation.",
            ),
            Question::numeric(ALCOHOL_UNITS, D, "Combien de verres d'alcool buvez-vous par semaine ?"),
            Question::boolean(
                WEIGHT_CHANGE,
                D,
                "Votre poids a-t-il varié de plus de 10 kg au cours des 12 derniers mois ?",
            ),
            Question::text(WEIGHT_DETAIL, D, "Précisez l'ampleur et la cause de cette variation."),
            Question::boolean(
                ANOTHER_CASE,
                D,
                "Avez-vous une autre habitude de vie à déclarer ?",
            ),
        ],
        rules: vec![
            (
                SMOKING_STATUS,
                FactRule::Status {
                    label: "Tabac",
                    resolved: &[FORMER_SMOKER, NEVER_SMOKED],
                },
            ),
            (
                SMOKING_QUANTITY,
                FactRule::Quantity {
                    label: "Cigarettes/jour",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (SMOKING_SINCE_YEAR, FactRule::StartYear),
            (SMOKING_QUIT_YEAR, FactRule::EndYear),
            (
                OTHER_SUBSTANCES,
                FactRule::Flag {
                    label: "Autres substances",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (
                SUBSTANCES_DETAIL,
                FactRule::Detail {
                    label: "Substances",
                    target: FragmentTarget::Diagnosis,
                },
            ),
            (
                ALCOHOL_UNITS,
                FactRule::Quantity {
                    label: "Verres d'alcool/semaine",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (
                WEIGHT_CHANGE,
                FactRule::Flag {
                    label: "Variation de poids",
                    target: FragmentTarget::Sequelae,
                },
            ),
            (
                WEIGHT_DETAIL,
                FactRule::Detail {
                    label: "Poids",
                    target: FragmentTarget::Sequelae,
                },
            ),
        ],
    }
}
