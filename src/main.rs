//! Scoreboard CLI - France vs. Finland in the terminal

use anyhow::{anyhow, Result};
use clap::Parser;
use scoreboard::{MatchStore, ScoreboardView, Side};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Apply a sequence of goals and exit, e.g. "1121" (1 = home, 2 = away)
    #[arg(short, long)]
    script: Option<String>,

    /// Print the final state as JSON instead of the rendered board
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Score(Side),
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "h" | "home" => Some(Command::Score(Side::Home)),
        "2" | "a" | "away" => Some(Command::Score(Side::Away)),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn parse_script(script: &str) -> Result<Vec<Side>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '1' => Ok(Side::Home),
            '2' => Ok(Side::Away),
            other => Err(anyhow!("Invalid script character '{other}', expected '1' or '2'")),
        })
        .collect()
}

fn print_state(view: &ScoreboardView, json: bool) -> Result<()> {
    if json {
        println!("{}", view.store().state().to_json()?);
    } else {
        print!("{}", view.render());
    }
    Ok(())
}

fn run_script(view: &mut ScoreboardView, script: &str, json: bool) -> Result<()> {
    let sides = parse_script(script)?;
    let controls = view.controls();
    for side in sides {
        let control = &controls[side as usize];
        view.activate(control);
    }
    info!(goals = view.store().log().goals(), "script applied");
    print_state(view, json)
}

fn run_interactive(view: &mut ScoreboardView, json: bool) -> Result<()> {
    let controls = view.controls();
    print_state(view, json)?;
    println!(
        "Commands: 1 = {}, 2 = {}, q = quit",
        controls[0].label(),
        controls[1].label()
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Score(side)) => {
                view.activate(&controls[side as usize]);
                print_state(view, json)?;
            }
            Some(Command::Quit) => break,
            None if line.trim().is_empty() => {}
            None => warn!(input = %line.trim(), "unknown command"),
        }
        io::stdout().flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut view = ScoreboardView::mount(MatchStore::new());

    match cli.script {
        Some(script) => run_script(&mut view, &script, cli.json),
        None => run_interactive(&mut view, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_accepts_aliases() {
        assert_eq!(parse_command("1"), Some(Command::Score(Side::Home)));
        assert_eq!(parse_command(" Home "), Some(Command::Score(Side::Home)));
        assert_eq!(parse_command("a"), Some(Command::Score(Side::Away)));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("3"), None);
    }

    #[test]
    fn parse_script_maps_digits_to_sides() {
        let sides = parse_script("12 1").unwrap();
        assert_eq!(sides, vec![Side::Home, Side::Away, Side::Home]);
        assert!(parse_script("1x").is_err());
    }

    #[test]
    fn script_run_applies_goals_in_order() {
        let mut view = ScoreboardView::mount(MatchStore::new());
        run_script(&mut view, "121", true).unwrap();
        let state = view.store().state();
        assert_eq!((state.home, state.away), (2, 1));
        assert!(state.events[2].ends_with("Finland scores! (1 – 1)"));
    }
}
