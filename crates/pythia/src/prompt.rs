//! Interactive prompts for the game.
//!
//! Every prompt re-asks on invalid input. A closed stdin reads as `None`,
//! which the game treats as "stop playing" instead of spinning on EOF.

use owo_colors::OwoColorize;
use pythia_core::Answer;
use std::io::{self, BufRead, Write};

/// Ask a question answerable with the five-key vocabulary.
pub fn ask_answer(question: &str) -> io::Result<Option<Answer>> {
    println!();
    println!("   {}", question.bright_white());

    loop {
        print!("   {}  ", "(y)es / (p)robably / (u)nknown / (d)oubtful / (n)o:".bright_magenta());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let input = input.trim();

        if let Some(answer) = input.chars().next().and_then(Answer::from_key) {
            return Ok(Some(answer));
        }

        println!(
            "   {}  Please answer y, p, u, d or n",
            "!".yellow()
        );
    }
}

/// Read one line of free text; the caller decides what blank means.
pub fn ask_text(prompt: &str) -> io::Result<Option<String>> {
    print!("   {}  ", prompt.bright_magenta());
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Yes/no confirmation; `default_yes` decides what a bare Enter means.
pub fn confirm(prompt: &str, default_yes: bool) -> io::Result<Option<bool>> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };

    loop {
        print!("   {}  ", format!("{} {}:", prompt, hint).bright_magenta());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let input = input.trim().to_lowercase();

        match input.as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            "" => return Ok(Some(default_yes)),
            _ => {
                println!(
                    "   {}  Please enter 'y' for yes or 'n' for no",
                    "?".yellow()
                );
            }
        }
    }
}
