//! Non-interactive subcommands: stats and config.

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use pythia_core::{storage, Config, Knowledge};
use serde::Serialize;
use std::path::PathBuf;

use crate::paths;

/// Machine-readable knowledge summary.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub data_dir: String,
    pub classes: usize,
    pub questions: usize,
    pub observations: usize,
    /// Observed (class, question) pairs over all possible pairs.
    pub coverage: f64,
    pub generated_at: String,
}

impl StatsReport {
    pub fn new(knowledge: &Knowledge, data_dir: &PathBuf) -> Self {
        let possible = knowledge.class_count() * knowledge.question_count();
        let coverage = if possible > 0 {
            knowledge.observation_count() as f64 / possible as f64
        } else {
            0.0
        };
        StatsReport {
            data_dir: data_dir.display().to_string(),
            classes: knowledge.class_count(),
            questions: knowledge.question_count(),
            observations: knowledge.observation_count(),
            coverage,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// `pythia stats`
pub fn stats(json: bool, data_dir: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let data_dir = paths::resolve_data_dir(data_dir, &config);
    let knowledge = storage::load(&data_dir)
        .with_context(|| format!("loading knowledge from {}", data_dir.display()))?;

    let report = StatsReport::new(&knowledge, &data_dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("{}  {}", "*".bright_cyan().bold(), "Knowledge base".bright_white().bold());
    println!("   {}  {}", "Location:".cyan(), report.data_dir);
    println!("   {}  {}", "Things:".cyan(), report.classes);
    println!("   {}  {}", "Questions:".cyan(), report.questions);
    println!(
        "   {}  {} ({:.0}% of the grid)",
        "Observations:".cyan(),
        report.observations,
        report.coverage * 100.0
    );

    if knowledge.class_count() > 0 {
        println!();
        for (class, info) in knowledge.classes() {
            let observed = knowledge
                .question_ids()
                .filter(|&q| knowledge.observation(class, q).is_some())
                .count();
            println!(
                "   {}",
                format!(
                    "{:<21.21} {:>3} of {} questions answered",
                    info.name,
                    observed,
                    knowledge.question_count()
                )
                .dimmed()
            );
        }
    }

    Ok(())
}

/// `pythia config`
pub fn config(set: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    let path = Config::user_config_path()?;

    if let Some(expr) = set {
        let (key, value) = expr
            .split_once('=')
            .context("invalid format, use: key=value")?;
        apply_setting(&mut config, key.trim(), value.trim())?;
        config.save()?;
        println!("   {}  {} updated", "+".bright_green(), key.trim());
        println!(
            "   {}",
            format!("saved to {}", path.display()).dimmed()
        );
        return Ok(());
    }

    println!();
    println!("{}  {}", "*".bright_cyan().bold(), "Configuration".bright_white().bold());
    if path.exists() {
        println!("   {}  {}", "File:".cyan(), path.display());
    } else {
        println!(
            "   {}  {} {}",
            "File:".cyan(),
            path.display(),
            "(not present, using defaults)".dimmed()
        );
    }
    println!("   {}  {}", "learn:".cyan(), config.game.learn);
    println!("   {}  {}", "debug:".cyan(), config.game.is_debug_enabled());
    println!(
        "   {}  {}",
        "data_dir:".cyan(),
        paths::resolve_data_dir(None, &config).display()
    );
    println!();
    println!(
        "   {}",
        "Change with --set key=value (learn, debug, data_dir)".dimmed()
    );

    Ok(())
}

/// Apply one `key=value` assignment to the loaded configuration.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "learn" => {
            config.game.learn = value
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid boolean, use true or false"))?;
        }
        "debug" => {
            config.game.debug = value
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid boolean, use true or false"))?;
        }
        "data_dir" => {
            config.data_dir = Some(PathBuf::from(value));
        }
        _ => anyhow::bail!(
            "unknown configuration key: {} (available: learn, debug, data_dir)",
            key
        ),
    }
    Ok(())
}
