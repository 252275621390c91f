//! Terminal rendering of questions and parsing of typed answers.

use underwriting_intake::domain::intake::{AnswerValue, InterviewProgress, Question, QuestionKind};

/// Prompt shown for a question, with its options when it has some.
pub fn render_prompt(question: &Question, progress: &InterviewProgress) -> String {
    let mut prompt = match progress.domain_position {
        Some(position) => format!(
            "[{}/{}] {}",
            position, progress.domain_total, question.label
        ),
        None => question.label.to_string(),
    };

    match question.kind {
        QuestionKind::Boolean => prompt.push_str(" (o/n)"),
        QuestionKind::Year => prompt.push_str(" (AAAA)"),
        QuestionKind::Choice => {
            for (i, option) in question.options.iter().enumerate() {
                prompt.push_str(&format!("\n  {}. {}", i + 1, option));
            }
        }
        QuestionKind::Numeric | QuestionKind::Text => {}
    }
    prompt
}

/// Converts a typed line into the value shape the question expects.
///
/// Choice questions accept the option number or the option text. Anything
/// unreadable is passed through as text and left to the engine's defaults.
pub fn parse_answer(question: &Question, input: &str) -> AnswerValue {
    let input = input.trim();
    match question.kind {
        QuestionKind::Boolean => AnswerValue::Bool(matches!(
            input.to_lowercase().as_str(),
            "o" | "oui" | "y" | "yes" | "true"
        )),
        QuestionKind::Choice => input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.options.get(i))
            .map(|option| AnswerValue::from(*option))
            .unwrap_or_else(|| AnswerValue::from(input)),
        QuestionKind::Numeric | QuestionKind::Year => {
            let number = AnswerValue::from(input);
            match number.as_number() {
                Some(n) => AnswerValue::Number(n),
                None => number,
            }
        }
        QuestionKind::Text => AnswerValue::from(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use underwriting_intake::domain::intake::{QuestionId, QuestionRegistry};

    fn question(id: &'static str) -> &'static Question {
        QuestionRegistry::global()
            .question(&QuestionId::from_static(id))
            .unwrap()
    }

    #[test]
    fn boolean_accepts_french_and_english_yes() {
        let q = question("screen_osteo");
        assert_eq!(parse_answer(q, "o"), AnswerValue::Bool(true));
        assert_eq!(parse_answer(q, " Oui "), AnswerValue::Bool(true));
        assert_eq!(parse_answer(q, "yes"), AnswerValue::Bool(true));
        assert_eq!(parse_answer(q, "n"), AnswerValue::Bool(false));
        assert_eq!(parse_answer(q, ""), AnswerValue::Bool(false));
    }

    #[test]
    fn choice_accepts_option_number() {
        let q = question("osteo_status");
        assert_eq!(parse_answer(q, "1"), AnswerValue::from("Guéri, aucune gêne"));
        assert_eq!(parse_answer(q, "Gêne permanente"), AnswerValue::from("Gêne permanente"));
        assert_eq!(parse_answer(q, "0"), AnswerValue::from("0"));
        assert_eq!(parse_answer(q, "99"), AnswerValue::from("99"));
    }

    #[test]
    fn years_and_numbers_become_numeric() {
        assert_eq!(parse_answer(question("osteo_first_year"), "2019"), AnswerValue::Number(2019.0));
        assert_eq!(
            parse_answer(question("osteo_first_year"), "vers 2019"),
            AnswerValue::from("vers 2019")
        );
    }

    #[test]
    fn prompt_lists_choice_options() {
        let progress = InterviewProgress {
            open_domain: None,
            domain_position: Some(1),
            domain_total: 13,
            cases_declared: 1,
            answers_given: 1,
            finished: false,
        };
        let prompt = render_prompt(question("osteo_status"), &progress);
        assert!(prompt.starts_with("[1/13] "));
        assert!(prompt.contains("\n  1. Guéri, aucune gêne"));
        assert!(render_prompt(question("screen_osteo"), &progress).ends_with("(o/n)"));
    }
}
