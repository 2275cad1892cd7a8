//! Plain-text persistence for the knowledge base.
//!
//! Three files in the data directory:
//!
//! - `classes.txt`   — one class name per line; line order is the id
//! - `questions.txt` — one question per line; same rule
//! - `answers.txt`   — one `<class> <question> <value>` triple per line,
//!   ids as line indices, value as the answer's stable index
//!
//! A missing file loads as an empty section, so first run needs no setup.
//! Malformed or out-of-range observation lines are skipped with a warning
//! rather than failing the load; the files are made for hand editing and
//! one bad line should not take the whole store down. Saves rewrite all
//! three files, since line order is the identity contract.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::answer::Answer;
use crate::knowledge::Knowledge;

pub const CLASSES_FILE: &str = "classes.txt";
pub const QUESTIONS_FILE: &str = "questions.txt";
pub const ANSWERS_FILE: &str = "answers.txt";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create data directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load the knowledge base from `dir`.
pub fn load(dir: &Path) -> Result<Knowledge, StorageError> {
    let classes = read_names(&dir.join(CLASSES_FILE))?;
    let questions = read_names(&dir.join(QUESTIONS_FILE))?;
    let observations = read_observations(&dir.join(ANSWERS_FILE), classes.len(), questions.len())?;
    Ok(Knowledge::from_parts(classes, questions, observations))
}

/// Persist the whole knowledge base into `dir`, creating it if needed.
pub fn save(dir: &Path, knowledge: &Knowledge) -> Result<(), StorageError> {
    fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut classes = String::new();
    for (_, class) in knowledge.classes() {
        classes.push_str(&class.name);
        classes.push('\n');
    }
    write_file(&dir.join(CLASSES_FILE), &classes)?;

    let mut questions = String::new();
    for (_, question) in knowledge.questions() {
        questions.push_str(&question.text);
        questions.push('\n');
    }
    write_file(&dir.join(QUESTIONS_FILE), &questions)?;

    let mut answers = String::new();
    for (class, question, value) in knowledge.observations() {
        answers.push_str(&format!("{} {} {}\n", class, question, value.index()));
    }
    write_file(&dir.join(ANSWERS_FILE), &answers)?;

    Ok(())
}

/// One trimmed name per line; blank lines are dropped. A missing file is
/// an empty list.
fn read_names(path: &Path) -> Result<Vec<String>, StorageError> {
    let contents = match read_optional(path)? {
        Some(contents) => contents,
        None => return Ok(Vec::new()),
    };
    Ok(contents
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Parse the observation triples, dropping lines that do not parse or
/// whose ids fall outside the loaded name lists.
fn read_observations(
    path: &Path,
    classes: usize,
    questions: usize,
) -> Result<Vec<(usize, usize, Answer)>, StorageError> {
    let contents = match read_optional(path)? {
        Some(contents) => contents,
        None => return Ok(Vec::new()),
    };

    let mut observations = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_triple(line) {
            Some((class, question, value)) if class < classes && question < questions => {
                observations.push((class, question, value));
            }
            Some((class, question, _)) => {
                warn!(
                    "{}:{}: observation ({}, {}) out of range, skipping",
                    path.display(),
                    number + 1,
                    class,
                    question
                );
            }
            None => {
                warn!(
                    "{}:{}: malformed observation record, skipping",
                    path.display(),
                    number + 1
                );
            }
        }
    }
    Ok(observations)
}

fn parse_triple(line: &str) -> Option<(usize, usize, Answer)> {
    let mut parts = line.split_whitespace();
    let class = parts.next()?.parse().ok()?;
    let question = parts.next()?.parse().ok()?;
    let value = parts.next()?.parse().ok().and_then(Answer::from_index)?;
    if parts.next().is_some() {
        return None;
    }
    Some((class, question, value))
}

fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn write_file(path: &Path, contents: &str) -> Result<(), StorageError> {
    fs::write(path, contents).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
