//! Rendering for the interactive game.
//!
//! The round table is a diagnostic view of the whole engine state: one
//! row per class with its posterior and stored observation indices, the
//! entropy line, and a caret marking the question the selector just
//! picked. Absent observations render as a dash so sparsity stays
//! visible.

use owo_colors::OwoColorize;
use pythia_core::{ClassId, Knowledge, Selection, Session};

pub fn game_header(knowledge: &Knowledge) {
    println!();
    println!(
        "{}  {}",
        "?".bright_cyan().bold(),
        "Think of one of the things I know and I'll try to guess it"
            .bright_white()
            .bold()
    );
    println!(
        "   {}",
        format!(
            "{} things, {} questions, {} observations",
            knowledge.class_count(),
            knowledge.question_count(),
            knowledge.observation_count()
        )
        .dimmed()
    );
}

/// One row per class: name, posterior, observation row. The caret line
/// points at the chosen question's column.
pub fn round_table(
    session: &Session,
    selection: Option<Selection>,
    entropy: f64,
    top: Option<ClassId>,
) {
    let knowledge = session.knowledge();
    println!();

    for (class, info) in knowledge.classes() {
        let posterior = session.posterior(class);
        let cells: String = knowledge
            .question_ids()
            .map(|q| match knowledge.observation(class, q) {
                Some(value) => format!("{} ", value.index()),
                None => "- ".to_string(),
            })
            .collect();

        let line = format!("{:<21.21} {:>8.6}  {}", info.name, posterior, cells);
        if top == Some(class) {
            println!("   {}", line.bright_green());
        } else {
            println!("   {}", line.dimmed());
        }
    }

    let mut caret = String::new();
    if let Some(selection) = selection {
        for q in knowledge.question_ids() {
            caret.push(if q == selection.question { '^' } else { ' ' });
            caret.push(' ');
        }
    }
    println!(
        "   {}",
        format!("{:<21.21} {:>8.6}  {}", "Entropy:", entropy, caret).dimmed()
    );

    if let Some(selection) = selection {
        if let Some(question) = knowledge.question(selection.question) {
            println!(
                "   {}",
                format!(
                    "Next: {} (entropy {:.6} to {:.6})",
                    question.text, selection.bounds.min, selection.bounds.max
                )
                .dimmed()
            );
        }
    }
}

pub fn guess(name: &str, posterior: f64) {
    println!();
    println!(
        "{}  {} {}",
        "*".bright_cyan().bold(),
        "My guess:".bright_white(),
        name.bright_cyan().bold()
    );
    println!("   {}", format!("({:.0}% sure)", posterior * 100.0).dimmed());
}

pub fn win() {
    println!("   {}  Got it!", "+".bright_green());
}

pub fn lose() {
    println!("   {}  You got me", "-".yellow());
}
