#!/usr/bin/env rust-script
//! Self-play Simulator - Deterministic answering scenarios for the engine
//!
//! Plays one full game per starter class with a scripted answerer instead of
//! a human, using the same stopping rule as the interactive shell.
//!
//! Usage:
//!   selfplay_sim --scenario faithful
//!   selfplay_sim --scenario contrary
//!   selfplay_sim --scenario sparse
//!
//! Outputs machine-readable JSON reports to ./artifacts/simulations/

use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use pythia_core::seed::starter_knowledge;
use pythia_core::{Answer, ClassId, Knowledge, QuestionId, Session};

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct TranscriptEntry {
    question: String,
    answer: Answer,
}

#[derive(Debug, Clone, Serialize)]
struct GameResult {
    secret: String,
    guess: String,
    correct: bool,
    rounds: usize,
    final_posterior: f64,
    final_entropy: f64,
    transcript: Vec<TranscriptEntry>,
}

#[derive(Debug, Clone, Serialize)]
struct SimulationReport {
    scenario: String,
    classes: usize,
    questions: usize,
    games: Vec<GameResult>,
    correct_games: usize,
    accuracy: f64,
    success: bool,
    notes: String,
}

// ============================================================================
// SCRIPTED ANSWERERS
// ============================================================================

/// Answers exactly what the store records for the secret.
fn faithful_answer(knowledge: &Knowledge, secret: ClassId, question: QuestionId) -> Answer {
    knowledge.value_or_unknown(secret, question)
}

/// Inverts every recorded answer: yes becomes no, probably becomes
/// doubtful, unknown stays unknown. A worst-case player.
fn contrary_answer(knowledge: &Knowledge, secret: ClassId, question: QuestionId) -> Answer {
    match knowledge.value_or_unknown(secret, question) {
        Answer::Yes => Answer::No,
        Answer::No => Answer::Yes,
        Answer::Probably => Answer::Doubtful,
        Answer::Doubtful => Answer::Probably,
        Answer::Unknown => Answer::Unknown,
    }
}

/// Only commits to yes/no answers the store holds; everything soft or
/// unrecorded comes back as unknown. A hesitant player.
fn sparse_answer(knowledge: &Knowledge, secret: ClassId, question: QuestionId) -> Answer {
    match knowledge.observation(secret, question) {
        Some(answer) if answer.is_polar() => answer,
        _ => Answer::Unknown,
    }
}

// ============================================================================
// SIMULATOR LOGIC
// ============================================================================

fn play_game(
    session: &mut Session,
    secret: ClassId,
    answerer: fn(&Knowledge, ClassId, QuestionId) -> Answer,
) -> GameResult {
    session.reset();
    let total = session.knowledge().question_count();
    let mut transcript = Vec::new();

    for _ in 0..total {
        let question = match session.select() {
            Some(selection) => selection.question,
            None => {
                let confident = session
                    .top_class()
                    .map(|c| session.posterior(c) > 0.5)
                    .unwrap_or(false);
                if confident {
                    break;
                }
                match session.first_unasked() {
                    Some(q) => q,
                    None => break,
                }
            }
        };

        let answer = answerer(session.knowledge(), secret, question);
        transcript.push(TranscriptEntry {
            question: session.knowledge().question(question).unwrap().text.clone(),
            answer,
        });
        session.commit_answer(question, answer);
    }

    let final_entropy = session.entropy();
    let guess = session.top_class().unwrap_or(ClassId(0));

    GameResult {
        secret: session.knowledge().class(secret).unwrap().name.clone(),
        guess: session.knowledge().class(guess).unwrap().name.clone(),
        correct: guess == secret,
        rounds: transcript.len(),
        final_posterior: session.posterior(guess),
        final_entropy,
        transcript,
    }
}

fn run_scenario(
    scenario: &str,
    answerer: fn(&Knowledge, ClassId, QuestionId) -> Answer,
) -> SimulationReport {
    let knowledge = starter_knowledge();
    let classes = knowledge.class_count();
    let questions = knowledge.question_count();
    let secrets: Vec<ClassId> = knowledge.class_ids().collect();
    let mut session = Session::new(knowledge);

    let mut games = Vec::new();
    for secret in secrets {
        games.push(play_game(&mut session, secret, answerer));
    }

    let correct_games = games.iter().filter(|g| g.correct).count();
    let accuracy = correct_games as f64 / games.len() as f64;
    let terminated = games
        .iter()
        .all(|g| g.rounds <= questions && g.final_entropy.is_finite());

    let (success, notes) = match scenario {
        "faithful" => (
            terminated && correct_games + 1 >= classes,
            format!(
                "Every answer matched the store; {}/{} classes identified.",
                correct_games, classes
            ),
        ),
        "contrary" => (
            terminated,
            format!(
                "Every answer inverted; checking the engine degrades without \
                 diverging. {}/{} identified (none expected).",
                correct_games, classes
            ),
        ),
        _ => (
            terminated,
            format!(
                "Only firm yes/no answers given; {}/{} identified on partial \
                 information.",
                correct_games, classes
            ),
        ),
    };

    SimulationReport {
        scenario: scenario.to_string(),
        classes,
        questions,
        games,
        correct_games,
        accuracy,
        success,
        notes,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    let mut scenario = "faithful".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scenario" => {
                if i + 1 < args.len() {
                    scenario = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --scenario requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Self-play Simulator");
                println!();
                println!("Usage:");
                println!("  selfplay_sim --scenario <scenario>");
                println!();
                println!("Options:");
                println!("  --scenario <scenario> Scenario: faithful, contrary, sparse");
                println!();
                println!("Examples:");
                println!("  selfplay_sim --scenario faithful");
                println!("  selfplay_sim --scenario contrary");
                println!("  selfplay_sim --scenario sparse");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                eprintln!("Run with --help for usage");
                std::process::exit(1);
            }
        }
    }

    // Run simulation
    let report = match scenario.as_str() {
        "faithful" => run_scenario("faithful", faithful_answer),
        "contrary" => run_scenario("contrary", contrary_answer),
        "sparse" => run_scenario("sparse", sparse_answer),
        _ => {
            eprintln!("Error: Unknown scenario: {}", scenario);
            eprintln!("Valid scenarios: faithful, contrary, sparse");
            std::process::exit(1);
        }
    };

    // Create output directory
    let output_dir = PathBuf::from("./artifacts/simulations");
    fs::create_dir_all(&output_dir).unwrap();

    // Write report
    let output_file = output_dir.join(format!("{}.json", scenario));
    let json = serde_json::to_string_pretty(&report).unwrap();
    fs::write(&output_file, json).unwrap();

    // Print summary
    println!("\n=== Self-play Simulation: {} ===\n", scenario);
    println!("Classes:              {}", report.classes);
    println!("Questions:            {}", report.questions);
    println!("Games Played:         {}", report.games.len());
    println!("Correct Guesses:      {}", report.correct_games);
    println!("Accuracy:             {:.3}", report.accuracy);

    for game in &report.games {
        let mark = if game.correct { "ok " } else { "MISS" };
        println!(
            "  [{}] {:<12} guessed {:<12} in {} rounds (p={:.3})",
            mark, game.secret, game.guess, game.rounds, game.final_posterior
        );
    }

    println!("\nNotes: {}", report.notes);
    println!("\nReport saved to: {}\n", output_file.display());

    if report.success {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}
