mod cli;
mod help;
mod helper;

use cli::Parser;
use colored::Colorize;
use d8_lib::solver::Solver;
use d8_lib::solver::System;
use helper::ReplHelper;
use rustyline::error::ReadlineError;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::debug;
use tracing::Level;

const HISTORY_FILE: &str = "history";

enum Flow {
    Continue,
    Exit,
}

fn main() -> rustyline::Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    if let Some((system, line)) = one_shot_roll(&args) {
        debug!("One-shot `{}` roll `{}`", system, line);
        match Solver::new(system).solve(&line) {
            Ok(result) => println!("{result}"),
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    interactive()
}

/// The system flag and roll text of a one-shot invocation, if one was given
fn one_shot_roll(args: &cli::Args) -> Option<(System, String)> {
    if let Some(line) = &args.dnd {
        return Some((System::Dnd, line.clone()));
    }
    args.kob
        .as_ref()
        .map(|line| (System::Explosion, line.clone()))
}

fn interactive() -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(ReplHelper::new()));
    if rline.load_history(HISTORY_FILE).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    println!("Welcome to the dice rolling application.");
    println!("You may enter the command 'help' at any time to get a list of options.");
    let mut solver = Solver::default();
    let mut count = 1u64;
    loop {
        let prompt = format!("{}: {}> ", solver.system(), count);
        rline.helper_mut().expect("repl: panic: no helper").colored =
            prompt.bold().green().to_string();
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                if !line.trim().is_empty() {
                    if let Flow::Exit = dispatch(&mut solver, line.trim(), &skin) {
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(HISTORY_FILE)
}

/// One session command or roll line, to completion
fn dispatch(solver: &mut Solver, line: &str, skin: &MadSkin) -> Flow {
    if line == "exit" {
        return Flow::Exit;
    }
    if line == "help" {
        skin.print_text(help::HELP_TEXT);
        return Flow::Continue;
    }
    if let Some(selector) = line.strip_prefix("switch") {
        let selector = selector.trim();
        if selector.is_empty() {
            eprintln!("{}", "usage: switch <system>".bold().yellow());
            return Flow::Continue;
        }
        match solver.select(selector) {
            Ok(system) => {
                debug!("Switched to `{}`", system);
                println!(
                    "{}",
                    format!("Rolling with the {system} system").bold().yellow()
                );
            }
            Err(error) => eprintln!("{}", format!("{error}").bold().red()),
        }
        return Flow::Continue;
    }
    match solver.solve(line) {
        Ok(result) => println!("{}", result.magenta()),
        Err(error) => eprintln!("{}", format!("{error}").bold().red()),
    }
    Flow::Continue
}
