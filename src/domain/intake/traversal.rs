//! DomainSequence - the order in which domains are screened.
//!
//! The base order is fixed. `gyneco` is inserted right after `derm` for female
//! respondents only, then `infectious`, `orl_oph` and `lifestyle` always close
//! the interview. Both variants are computed once.

use once_cell::sync::Lazy;

use crate::domain::foundation::Sex;

use super::Domain;

const BASE: [Domain; 10] = [
    Domain::Osteo,
    Domain::Cardio,
    Domain::Psy,
    Domain::Onco,
    Domain::Endocrine,
    Domain::Respiratory,
    Domain::Neuro,
    Domain::Digestive,
    Domain::Renal,
    Domain::Derm,
];

const TAIL: [Domain; 3] = [Domain::Infectious, Domain::OrlOph, Domain::Lifestyle];

static WITH_GYNECO: Lazy<Vec<Domain>> = Lazy::new(|| build(true));
static WITHOUT_GYNECO: Lazy<Vec<Domain>> = Lazy::new(|| build(false));

fn build(include_gyneco: bool) -> Vec<Domain> {
    let mut order = BASE.to_vec();
    if include_gyneco {
        order.push(Domain::Gyneco);
    }
    order.extend_from_slice(&TAIL);
    order
}

/// Central location for domain ordering logic.
pub struct DomainSequence;

impl DomainSequence {
    /// Returns the domains screened for a respondent, in order.
    pub fn ordered(sex: Sex) -> &'static [Domain] {
        if sex.is_female() {
            &WITH_GYNECO
        } else {
            &WITHOUT_GYNECO
        }
    }

    /// Returns the first domain screened.
    pub fn first(sex: Sex) -> Domain {
        Self::ordered(sex)[0]
    }

    /// Returns the domain screened after `domain`, or None when the interview is complete.
    ///
    /// A domain that is not part of the respondent's sequence has no successor.
    pub fn next_after(domain: Domain, sex: Sex) -> Option<Domain> {
        let order = Self::ordered(sex);
        let idx = order.iter().position(|&d| d == domain)?;
        order.get(idx + 1).copied()
    }

    /// Returns the 0-based position of `domain` in the respondent's sequence.
    pub fn position(domain: Domain, sex: Sex) -> Option<usize> {
        Self::ordered(sex).iter().position(|&d| d == domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_sequence_has_thirteen_domains_without_gyneco() {
        let order = DomainSequence::ordered(Sex::Male);
        assert_eq!(order.len(), 13);
        assert!(!order.contains(&Domain::Gyneco));
    }

    #[test]
    fn unspecified_sex_excludes_gyneco() {
        assert!(!DomainSequence::ordered(Sex::Unspecified).contains(&Domain::Gyneco));
    }

    #[test]
    fn female_sequence_inserts_gyneco_after_derm() {
        let order = DomainSequence::ordered(Sex::Female);
        assert_eq!(order.len(), 14);
        let derm = DomainSequence::position(Domain::Derm, Sex::Female).unwrap();
        assert_eq!(order[derm + 1], Domain::Gyneco);
        assert_eq!(order[derm + 2], Domain::Infectious);
    }

    #[test]
    fn sequence_starts_with_osteo_and_ends_with_lifestyle() {
        for sex in [Sex::Female, Sex::Male] {
            assert_eq!(DomainSequence::first(sex), Domain::Osteo);
            assert_eq!(*DomainSequence::ordered(sex).last().unwrap(), Domain::Lifestyle);
        }
    }

    #[test]
    fn next_after_walks_the_sequence() {
        assert_eq!(
            DomainSequence::next_after(Domain::Osteo, Sex::Male),
            Some(Domain::Cardio)
        );
        assert_eq!(
            DomainSequence::next_after(Domain::Derm, Sex::Male),
            Some(Domain::Infectious)
        );
        assert_eq!(
            DomainSequence::next_after(Domain::Derm, Sex::Female),
            Some(Domain::Gyneco)
        );
        assert_eq!(DomainSequence::next_after(Domain::Lifestyle, Sex::Female), None);
    }

    #[test]
    fn domains_outside_the_sequence_have_no_successor() {
        assert_eq!(DomainSequence::next_after(Domain::Gyneco, Sex::Male), None);
        assert_eq!(DomainSequence::next_after(Domain::SportsRisk, Sex::Female), None);
    }

    #[test]
    fn sequence_is_stable_across_calls() {
        assert_eq!(
            DomainSequence::ordered(Sex::Female),
            DomainSequence::ordered(Sex::Female)
        );
    }
}
