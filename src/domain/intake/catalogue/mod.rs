//! Static interview catalogue: per-domain screening gate, follow-up flow and
//! fact rules.
//!
//! Every flow ends with the domain's "another case?" question. `sports_risk`
//! is data-only and has no entry.

mod cardio;
mod derm;
mod digestive;
mod endocrine;
mod gyneco;
mod infectious;
pub(crate) mod lifestyle;
mod neuro;
mod onco;
mod orl_oph;
mod osteo;
mod psy;
mod renal;
mod respiratory;

use super::extraction::FactRule;
use super::{Domain, Question};

/// Everything the catalogue knows about one domain.
#[derive(Debug, Clone)]
pub struct DomainCatalogue {
    pub domain: Domain,
    pub screening: Question,
    pub flow: Vec<Question>,
    pub rules: Vec<(&'static str, FactRule)>,
}

/// Returns the catalogue of every modeled domain.
pub fn all() -> Vec<DomainCatalogue> {
    vec![
        osteo::catalogue(),
        cardio::catalogue(),
        psy::catalogue(),
        onco::catalogue(),
        endocrine::catalogue(),
        respiratory::catalogue(),
        neuro::catalogue(),
        digestive::catalogue(),
        renal::catalogue(),
        derm::catalogue(),
        gyneco::catalogue(),
        infectious::catalogue(),
        orl_oph::catalogue(),
        lifestyle::catalogue(),
    ]
}
