// ============================================================
// Layer 1 — Interactive Quiz Prompt
// ============================================================
// Asks the questions of a prepared quiz on a terminal:
//
//   Question 1/10 [easy]
//   Complete the sentence: "_____ absorbs sunlight"
//     1) Process
//     2) Chlorophyll
//     3) Plants
//     4) Energy
//   Your answer (1-4, q to quit): 2
//   ✔ Correct!
//
// Generic over BufRead/Write so tests can drive it with byte
// buffers instead of stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::quiz_use_case::QuizSession;

/// Ask every question until the session ends, input runs out or
/// the learner types `q`. Invalid input is asked again.
pub fn run_quiz<R: BufRead, W: Write>(
    session:    &mut QuizSession,
    total:      usize,
    mut input:  R,
    mut output: W,
) -> Result<()> {
    let mut number = 0;

    while let Some(question) = session.next_question() {
        number += 1;
        writeln!(output, "\nQuestion {number}/{total} [{}]", question.difficulty)?;
        writeln!(output, "{}", question.question)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, option)?;
        }
        let option_count = question.options.len();

        let Some(choice) = read_choice(&mut input, &mut output, option_count)? else {
            writeln!(output, "\nQuiz stopped.")?;
            return Ok(());
        };

        let outcome = session.answer(choice)?;
        if outcome.correct {
            writeln!(output, "✔ Correct!")?;
        } else {
            writeln!(output, "✘ Not quite. The answer is: {}", outcome.correct_option)?;
        }
        if let Some(explanation) = &outcome.explanation {
            writeln!(output, "  {explanation}")?;
        }
    }

    Ok(())
}

/// Zero-based option index, or None on `q` or end of input
fn read_choice<R: BufRead, W: Write>(
    input:        &mut R,
    output:       &mut W,
    option_count: usize,
) -> Result<Option<usize>> {
    loop {
        write!(output, "Your answer (1-{option_count}, q to quit): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match answer.parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => return Ok(Some(n - 1)),
            _ => writeln!(output, "Please enter a number from 1 to {option_count}.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::{Difficulty, GeneratedQuestion};

    fn session() -> QuizSession {
        let q = |n: usize| GeneratedQuestion {
            question:       format!("Question text {n}"),
            options:        vec!["Alpha".into(), "Beta".into(), "Gamma".into(), "Delta".into()],
            correct_answer: 1,
            difficulty:     Difficulty::Easy,
            topic:          None,
            explanation:    None,
        };
        QuizSession::new(vec![q(0), q(1)], Difficulty::Easy)
    }

    #[test]
    fn test_answers_are_scored() {
        let mut s   = session();
        let mut out = Vec::new();
        run_quiz(&mut s, 2, "2\n1\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Question 1/2 [easy]"));
        assert!(text.contains("  2) Beta"));
        assert!(text.contains("✔ Correct!"));
        assert!(text.contains("The answer is: Beta"));
        assert_eq!((s.score(), s.asked()), (1, 2));
    }

    #[test]
    fn test_invalid_input_is_asked_again() {
        let mut s   = session();
        let mut out = Vec::new();
        run_quiz(&mut s, 2, "seven\n9\n2\nq\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please enter a number from 1 to 4.").count(), 2);
        assert!(text.contains("Quiz stopped."));
        assert_eq!((s.score(), s.asked()), (1, 1));
    }

    #[test]
    fn test_end_of_input_stops_quiz() {
        let mut s = session();
        run_quiz(&mut s, 2, "".as_bytes(), Vec::new()).unwrap();
        assert_eq!(s.asked(), 0);
    }
}
