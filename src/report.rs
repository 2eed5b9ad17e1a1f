//! Plain-text summary of a question bank.

use std::io::{self, Write};

use crate::QuestionBank;

fn plural<N: Into<u64>>(n: N) -> &'static str {
    let n: u64 = n.into();
    if n == 1 { "" } else { "s" }
}

/// Write one line per question, then the totals.
///
/// A trailing line counts the questions without a correct choice; it is
/// left out when every question has one.
pub fn write_summary<W: Write>(bank: &QuestionBank, out: &mut W) -> io::Result<()> {
    for (i, question) in bank.questions().iter().enumerate() {
        let choices = question.choices().len() as u64;
        writeln!(
            out,
            "{:>3}. {} [{} pt{}] {} choice{}, {} correct",
            i + 1,
            question.title(),
            question.points(),
            plural(question.points()),
            choices,
            plural(choices),
            question.correct_choices().count(),
        )?;
    }

    writeln!(
        out,
        "{} question{}, {} point{} total",
        bank.len(),
        plural(bank.len() as u64),
        bank.total_points(),
        plural(bank.total_points()),
    )?;

    let unanswerable = bank.without_correct_choice().count();
    if unanswerable > 0 {
        writeln!(out, "{} without a correct choice", unanswerable)?;
    }

    Ok(())
}
