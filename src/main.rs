use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use plum_board::engines::difficulty::DifficultyTier;
use plum_board::game_state::chess_types::Color;
use plum_board::game_state::game_state::GameOutcome;
use plum_board::session::game_session::{CommitResult, GameSession};
use plum_board::session::session_config::SessionConfig;
use plum_board::utils::algebraic::{algebraic_to_square, move_to_algebraic, parse_coordinate_move};
use plum_board::utils::render_game_state::render_board;

/// Play a game in the terminal, against the computer or another human.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// AI strength: easy, medium, hard or expert.
    #[arg(short, long, default_value = "medium")]
    tier: DifficultyTier,

    /// Two humans share the keyboard; no AI.
    #[arg(long, default_value = "false")]
    two_player: bool,

    /// Play Black; the AI opens as White.
    #[arg(short, long, default_value = "false")]
    black: bool,

    /// Seed for the AI's random choices.
    #[arg(short, long, required = false)]
    seed: Option<u64>,

    /// Skip the AI's thinking pause.
    #[arg(long, default_value = "false")]
    instant: bool,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let mut config = if self.two_player {
            SessionConfig::two_player()
        } else {
            let ai_side = if self.black { Color::White } else { Color::Black };
            SessionConfig::against_ai(ai_side, self.tier)
        };
        if self.instant {
            config.think_time_scale = 0.0;
        }
        config.rng_seed = self.seed;
        config
    }
}

const HELP: &str = "commands: <from><to> (e.g. e2e4), moves <square>, reset, help, quit";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut session = GameSession::new(cli.session_config());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!("{HELP}");
    loop {
        println!("{}", render_board(session.board(), &[]));

        if let Some(outcome) = session.state().outcome {
            println!("{}", describe_outcome(outcome));
            break;
        }

        if let Some(ai) = session.ai_to_move() {
            println!("{} ({}) is thinking...", ai.side, ai.tier);
            session.request_ai_move(ai.side, ai.tier)?;
            let result = wait_for_reply(&mut session)?;
            print_info_lines(&mut session);
            if let Some(record) = session.history().last() {
                println!("{} plays {}", record.side, move_to_algebraic(record.mv()));
            }
            report(&session, result);
            continue;
        }

        print!("{} to move> ", session.side_to_move());
        stdout.flush().context("flushing prompt")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        let input = line.trim();

        match input.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => {}
            ["quit" | "exit"] => break,
            ["help"] => println!("{HELP}"),
            ["reset"] => {
                session.reset_session();
                print_info_lines(&mut session);
            }
            ["moves", square] => match algebraic_to_square(square) {
                Ok(square) => {
                    let moves = session.legal_moves(square)?;
                    println!("{}", render_board(session.board(), &moves));
                }
                Err(e) => println!("{e}"),
            },
            _ => match parse_coordinate_move(input) {
                Ok(mv) => {
                    let result = session.commit_move(mv.from, mv.to)?;
                    if !result.accepted {
                        println!("illegal move: {input}");
                    }
                    report(&session, result);
                }
                Err(e) => println!("{e}; {HELP}"),
            },
        }
    }

    session.shutdown_ai()?;
    Ok(())
}

fn wait_for_reply(session: &mut GameSession) -> Result<CommitResult> {
    // Ten seconds covers the slowest tier's pause with room to spare.
    for _ in 0..100 {
        if let Some(result) = session.wait_for_ai(Duration::from_millis(100))? {
            return Ok(result);
        }
        session.tick_display();
    }
    bail!("the AI did not answer in time")
}

fn report(session: &GameSession, result: CommitResult) {
    if let Some(notice) = session.promotion_notice() {
        if result.promoted {
            println!("{}", notice.message);
        }
    }
    for color in Color::BOTH {
        if result.check.for_color(color) && !result.game_over {
            println!("{color} is in check");
        }
    }
}

fn print_info_lines(session: &mut GameSession) {
    for line in session.drain_info_lines() {
        println!("{line}");
    }
}

fn describe_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameOutcome::NoLegalMoves {
            stuck,
            winner: Some(winner),
        } => format!("{stuck} has no legal move, {winner} wins"),
        GameOutcome::NoLegalMoves { stuck, winner: None } => {
            format!("{stuck} has no legal move, draw")
        }
        GameOutcome::AiConceded { winner } => format!("the AI has no move, {winner} wins"),
        GameOutcome::KingCaptured { winner } => format!("king captured, {winner} wins"),
    }
}
