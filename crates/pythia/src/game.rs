//! The interactive game loop.
//!
//! One round: select a question, ask it, commit the answer, repeat until
//! the selector gives up and the leader is past even odds (or the pool
//! runs dry), then guess. Wrong guesses flow into the teaching prompts,
//! and in learn mode every finished game is saved back to disk.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use pythia_core::seed::starter_knowledge;
use pythia_core::{storage, Config, Knowledge, Registered, Session};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{display, paths, prompt};

struct GameOptions {
    learn: bool,
    debug: bool,
    data_dir: PathBuf,
}

enum Outcome {
    Finished,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum Taught {
    Learned,
    Declined,
    Quit,
}

/// Entry point for `pythia play`.
pub fn play(no_learn: bool, debug_flag: bool, data_dir: Option<PathBuf>) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!("playing needs an interactive terminal; try `pythia stats` instead");
    }

    let config = Config::load()?;
    let options = GameOptions {
        learn: !no_learn && config.game.learn,
        debug: debug_flag || config.game.is_debug_enabled(),
        data_dir: paths::resolve_data_dir(data_dir, &config),
    };

    let knowledge = load_or_seed(&options.data_dir, options.learn)?;
    let mut session = Session::new(knowledge);

    loop {
        let game_id = Uuid::new_v4();
        let _game = game_span(game_id).entered();
        info!("game starting");

        if let Outcome::Quit = play_round(&mut session, &options)? {
            break;
        }

        match prompt::confirm("Another round?", true)? {
            Some(true) => continue,
            _ => break,
        }
    }

    println!();
    println!("   {}", "Thanks for playing".dimmed());
    Ok(())
}

/// Load the knowledge base, installing the starter set when the store
/// comes back empty. The starter set is only written out in learn mode;
/// without learning it stays in memory and the data directory is left
/// untouched.
pub fn load_or_seed(data_dir: &Path, learn: bool) -> Result<Knowledge> {
    let knowledge = storage::load(data_dir)
        .with_context(|| format!("loading knowledge from {}", data_dir.display()))?;
    if knowledge.class_count() > 0 {
        return Ok(knowledge);
    }

    info!("empty knowledge base, installing the starter set");
    let knowledge = starter_knowledge();
    if learn {
        storage::save(data_dir, &knowledge)
            .with_context(|| format!("saving starter set to {}", data_dir.display()))?;
    }
    println!(
        "   {}",
        "First run: starting from the built-in animal set".dimmed()
    );
    Ok(knowledge)
}

/// Span tagging every log line of one game with its id.
fn game_span(game_id: Uuid) -> tracing::Span {
    tracing::info_span!("game", %game_id)
}

fn play_round(session: &mut Session, options: &GameOptions) -> Result<Outcome> {
    session.reset();
    display::game_header(session.knowledge());

    if session.knowledge().question_count() == 0 {
        println!(
            "   {}  I have no questions to ask yet; teach me something",
            "~".yellow()
        );
        if options.learn {
            let taught = teach(session)?;
            save(session, options)?;
            if taught == Taught::Quit {
                return Ok(Outcome::Quit);
            }
        }
        return Ok(Outcome::Finished);
    }

    let total = session.knowledge().question_count();
    for round in 1..=total {
        let selection = session.select();
        let entropy = session.entropy();
        let top = session.top_class();

        if options.debug {
            display::round_table(session, selection, entropy, top);
        }

        let question = match selection {
            Some(selection) => selection.question,
            None => {
                let confident = top
                    .map(|class| session.posterior(class) > 0.5)
                    .unwrap_or(false);
                if confident {
                    debug!("round {}: confident enough to guess", round);
                    break;
                }
                // No question improves the worst case but nothing stands
                // out yet either; work through the pool in order.
                match session.first_unasked() {
                    Some(question) => question,
                    None => break,
                }
            }
        };

        let text = match session.knowledge().question(question) {
            Some(q) => format!("{}. {}", round, q.text),
            None => break,
        };
        let answer = match prompt::ask_answer(&text)? {
            Some(answer) => answer,
            None => return Ok(Outcome::Quit),
        };
        debug!("round {}: question {} answered {}", round, question, answer);
        session.commit_answer(question, answer);
    }

    let entropy = session.entropy();
    let guess = match session.top_class() {
        Some(class) => class,
        None => return Ok(Outcome::Finished),
    };
    let name = session
        .knowledge()
        .class(guess)
        .map(|class| class.name.clone())
        .unwrap_or_default();
    debug!("guessing {} at entropy {:.6}", name, entropy);
    display::guess(&name, session.posterior(guess));

    let correct = match prompt::confirm("Did I get it?", true)? {
        Some(correct) => correct,
        None => return Ok(Outcome::Quit),
    };

    if correct {
        display::win();
        if options.learn {
            session.record_features_for(guess);
            save(session, options)?;
        }
    } else {
        display::lose();
        if options.learn {
            let taught = teach(session)?;
            save(session, options)?;
            if taught == Taught::Quit {
                return Ok(Outcome::Quit);
            }
        }
    }

    Ok(Outcome::Finished)
}

/// After a loss: the player names what they had in mind, optionally adds
/// a question that would have given it away, and the session's answers
/// become that object's first observations.
fn teach(session: &mut Session) -> Result<Taught> {
    let name = match prompt::ask_text("What was it? (Enter to skip)")? {
        Some(name) => name,
        None => return Ok(Taught::Quit),
    };

    let class = match session.register_class(&name) {
        None => return Ok(Taught::Declined),
        Some(Registered::Existing(id)) => {
            println!(
                "   {}  I know {} already; noting this game's answers",
                "+".bright_green(),
                name.bright_white()
            );
            id
        }
        Some(Registered::Created(id)) => id,
    };

    let question =
        match prompt::ask_text("A question that would have given it away? (Enter to skip)")? {
            Some(text) => text,
            None => return Ok(Taught::Quit),
        };

    if let Some(registered) = session.register_question(&question) {
        if registered.is_existing() {
            println!("   {}  I know that question already", "+".bright_green());
        }
        match prompt::ask_answer(&format!("And for {}, the answer would be?", name))? {
            Some(answer) => {
                session.record_observation(class, registered.id(), answer);
            }
            None => {
                session.record_features_for(class);
                return Ok(Taught::Quit);
            }
        }
    }

    session.record_features_for(class);
    info!(
        "learned {} ({} observations total)",
        name,
        session.knowledge().observation_count()
    );
    Ok(Taught::Learned)
}

fn save(session: &Session, options: &GameOptions) -> Result<()> {
    storage::save(&options.data_dir, session.knowledge())
        .with_context(|| format!("saving knowledge to {}", options.data_dir.display()))?;
    debug!(
        "saved {} observations to {}",
        session.knowledge().observation_count(),
        options.data_dir.display()
    );
    Ok(())
}
