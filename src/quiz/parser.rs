//! Free-text quiz parser.
//!
//! Converts the semi-structured text pasted into the admin console into an
//! ordered list of [`Question`] records. Single pass, line oriented; the only
//! state carried between lines is the question currently being accumulated.
//!
//! The recognized shape (markers are case-insensitive Portuguese):
//!
//! ```text
//! 1. Enunciado da questão...
//! a) Primeira opção
//! b) Segunda opção Gabarito: B
//! Comentário: por que a resposta é B.
//! ```
//!
//! A block may also open with `QUESTÃO 1` instead of a numbered prefix.
//! Option letters are decorative: the Nth option line becomes index N-1
//! regardless of which letter it carried. A missing answer marker leaves
//! `correct_answer` at 0 — a lenient default, not an error.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::domain::Question;

/// Every save is exactly one quiz, and every quiz has exactly 15 questions.
pub const REQUIRED_QUESTION_COUNT: usize = 15;

static QUESTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:QUESTÃO|QUESTAO)").expect("valid regex"));
static QUESTION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:QUESTÃO|QUESTAO)?\s*\d+[.\-)]?\s*").expect("valid regex"));
static NUMBERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.\-)]").expect("valid regex"));
static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-eA-E][.)]\s").expect("valid regex"));
static OPTION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-eA-E][.)]\s*").expect("valid regex"));
static ANSWER_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Resposta|Gabarito)(?:\s+correta)?\s*:\s*([a-eA-E])").expect("valid regex")
});
static ANSWER_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Resposta|Gabarito)(?:\s+correta)?\s*:\s*[a-eA-E].*").expect("valid regex")
});
static ANSWER_ONLY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:Resposta|Gabarito)(?:\s+correta)?\s*:").expect("valid regex")
});
static JUSTIFICATION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Comentário|Comentario|Justificativa)\s*:\s*(.*)").expect("valid regex")
});
static JUSTIFICATION_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Comentário|Comentario|Justificativa)\s*:.*").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "quiz text contains {found} identified questions; exactly {} are required \
     (check the \"QUESTÃO X\" / \"1.\" formatting)",
    REQUIRED_QUESTION_COUNT
)]
pub struct QuizParseError {
    pub found: usize,
}

fn letter_to_index(letter: char) -> usize {
    (letter.to_ascii_lowercase() as u8 - b'a') as usize
}

/// Parses a pasted quiz text block into exactly
/// [`REQUIRED_QUESTION_COUNT`] questions, ids `1..=15` in encounter order.
pub fn parse_quiz_text(text: &str) -> Result<Vec<Question>, QuizParseError> {
    let mut questions: Vec<Question> = Vec::new();
    let mut current: Option<Question> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        // Question start. A bare leading number only counts with list
        // punctuation ("1.", "2)", "3-"); an explicit label needs a number
        // but no punctuation ("QUESTÃO 4").
        if QUESTION_PREFIX.is_match(line)
            && (QUESTION_LABEL.is_match(line) || NUMBERED_LIST.is_match(line))
        {
            if let Some(question) = current.take() {
                questions.push(question);
            }
            let text = QUESTION_PREFIX.replace(line, "").into_owned();
            current = Some(Question::new(questions.len() as i32 + 1, &text));
            continue;
        }

        let Some(question) = current.as_mut() else {
            // Preamble before the first question block is dropped.
            continue;
        };

        // Option line. The letter is not inspected again: position decides
        // the index.
        let is_option_line = OPTION_LINE.is_match(line);
        if is_option_line {
            question
                .options
                .push(OPTION_PREFIX.replace(line, "").into_owned());
        }

        // Answer marker, possibly inline after an option ("d) Opção D
        // Gabarito: D"). The annotation must not leak into the option text.
        if let Some(caps) = ANSWER_MARKER.captures(line) {
            let letter = caps[1].chars().next().unwrap_or('a');
            question.correct_answer = letter_to_index(letter);

            if is_option_line {
                if let Some(last) = question.options.last_mut() {
                    *last = ANSWER_TAIL.replace(last, "").trim().to_string();
                }
            }
        }

        // Justification marker, same inline-stripping rule.
        if let Some(caps) = JUSTIFICATION_MARKER.captures(line) {
            question.justification = Some(caps[1].trim().to_string());

            if is_option_line {
                if let Some(last) = question.options.last_mut() {
                    *last = JUSTIFICATION_TAIL.replace(last, "").trim().to_string();
                }
            }
            continue;
        }

        if is_option_line || ANSWER_ONLY_LINE.is_match(line) {
            continue;
        }

        // Continuation: space-join to whichever field is currently open.
        // Priority: open justification, else last option, else question text.
        if let Some(justification) = question.justification.as_mut() {
            justification.push(' ');
            justification.push_str(line);
        } else if let Some(last_option) = question.options.last_mut() {
            last_option.push(' ');
            last_option.push_str(line);
        } else {
            question.text.push(' ');
            question.text.push_str(line);
        }
    }

    if let Some(question) = current.take() {
        questions.push(question);
    }

    if questions.len() != REQUIRED_QUESTION_COUNT {
        return Err(QuizParseError {
            found: questions.len(),
        });
    }
    Ok(questions)
}
