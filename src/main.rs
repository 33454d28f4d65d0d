use chess_referee::config::{self, EngineSettings, OracleSettings};
use chess_referee::game::ai::GameMode;
use chess_referee::game::components::PieceColor;
use chess_referee::{CheckStatus, GameController, MoveOutcome, MoveReport};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Chess referee: play against a human or an automated opponent", author, version)]
struct CmdArgs {
    /// Side played by the automated opponent
    #[arg(long, value_enum, value_name = "SIDE")]
    ai: Option<AiSide>,

    /// Program consulted for automated moves; receives the board as its last argument
    #[arg(long, value_name = "PROGRAM")]
    oracle: Option<PathBuf>,

    /// Extra argument passed to the oracle program before the board (repeatable)
    #[arg(long = "oracle-arg", value_name = "ARG")]
    oracle_args: Vec<String>,

    /// How long to wait for the oracle
    #[arg(long, value_name = "MS")]
    oracle_timeout_ms: Option<u64>,

    /// Seed for tie-breaks between equally scored moves
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AiSide {
    White,
    Black,
    /// Two humans
    None,
}

impl From<AiSide> for Option<PieceColor> {
    fn from(side: AiSide) -> Self {
        match side {
            AiSide::White => Some(PieceColor::White),
            AiSide::Black => Some(PieceColor::Black),
            AiSide::None => None,
        }
    }
}

/// One line of player input
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Click(i32, i32),
    New,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;
    let command = match first {
        "quit" | "exit" | "q" => Command::Quit,
        "new" => Command::New,
        "help" | "?" => Command::Help,
        _ => {
            let row = first.parse().ok()?;
            let col = tokens.next()?.parse().ok()?;
            Command::Click(row, col)
        }
    };
    tokens.next().is_none().then_some(command)
}

fn apply_overrides(settings: &mut EngineSettings, args: &CmdArgs) {
    if let Some(side) = args.ai {
        settings.ai_color = side.into();
    }
    if let Some(program) = &args.oracle {
        settings.oracle = Some(OracleSettings::new(program));
    }
    if let Some(oracle) = settings.oracle.as_mut() {
        if !args.oracle_args.is_empty() {
            oracle.args = args.oracle_args.clone();
        }
        if let Some(timeout_ms) = args.oracle_timeout_ms {
            oracle.timeout_ms = timeout_ms;
        }
    }
    if args.seed.is_some() {
        settings.rng_seed = args.seed;
    }
}

/// Forward a click unless the side to move belongs to the automated opponent
fn human_click(controller: &mut GameController, mode: GameMode, row: i32, col: i32) -> Option<MoveOutcome> {
    if mode.is_ai_turn(controller.side_to_move()) {
        return None;
    }
    Some(controller.select_or_attempt_move(row, col))
}

fn print_report(out: &mut impl Write, report: &MoveReport) -> io::Result<()> {
    write!(out, "{} {} -> {}", report.piece.color(), report.from, report.to)?;
    if let Some(taken) = report.captured {
        write!(out, ", takes {taken}")?;
    }
    if let Some(kind) = report.promoted_to {
        write!(out, ", promotes to {}", kind.name())?;
    }
    match report.check {
        CheckStatus::Check => write!(out, ", check")?,
        CheckStatus::KingMissing => write!(out, " (no opposing king on the board)")?,
        CheckStatus::Safe => {}
    }
    writeln!(out)
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <row> <col>  select a piece, then click its destination")?;
    writeln!(out, "  new          start a new game")?;
    writeln!(out, "  quit         exit")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = CmdArgs::parse();
    let settings_path = args.settings.clone().unwrap_or_else(config::settings_path);
    let mut settings = config::load_or_default(&settings_path);
    apply_overrides(&mut settings, &args);
    settings.validate().context("invalid settings")?;

    if args.save_settings {
        config::save_settings(&settings, &settings_path)
            .with_context(|| format!("failed to save settings to {}", settings_path.display()))?;
    }

    let mode = settings.game_mode();
    let mut selector = settings.build_selector();
    let mut controller = GameController::new();
    info!("[SETTINGS] Mode {:?}, oracle {}", mode, selector.has_oracle());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();
    let mut automated_side_stuck = false;

    writeln!(out, "{}", controller.board())?;
    print_help(&mut out)?;

    loop {
        let side = controller.side_to_move();
        if mode.is_ai_turn(side) && !automated_side_stuck {
            match controller.play_automated_turn(&mut selector) {
                Some(report) => {
                    print_report(&mut out, &report)?;
                    writeln!(out, "{}", controller.board())?;
                    continue;
                }
                None => {
                    writeln!(out, "{side} has no legal move. Type 'new' or 'quit'.")?;
                    automated_side_stuck = true;
                }
            }
        }

        write!(out, "{side}> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::New) => {
                controller.reset();
                automated_side_stuck = false;
                writeln!(out, "{}", controller.board())?;
            }
            Some(Command::Help) => print_help(&mut out)?,
            Some(Command::Click(row, col)) => match human_click(&mut controller, mode, row, col) {
                None => writeln!(out, "{side} is played by the engine. Type 'new' or 'quit'.")?,
                Some(MoveOutcome::Selected(square)) => {
                    let targets: Vec<String> = controller
                        .selection()
                        .possible_moves
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    writeln!(out, "Selected {square}; moves: {}", targets.join(" "))?;
                }
                Some(MoveOutcome::Rejected(reason)) => writeln!(out, "{reason}")?,
                Some(MoveOutcome::Committed(report)) => {
                    print_report(&mut out, &report)?;
                    writeln!(out, "{}", controller.board())?;
                }
            },
            None if line.trim().is_empty() => {}
            None => writeln!(out, "Unrecognised input {:?}; type 'help'", line.trim())?,
        }
    }

    Ok(())
}
