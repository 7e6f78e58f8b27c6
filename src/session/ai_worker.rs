//! Background AI worker.
//!
//! The session hands the worker a board snapshot over a channel; the worker
//! waits out the tier's thinking pause, runs the tiered engine and sends the
//! chosen move back. It never sees the session's board, so the session stays
//! the only place a move is ever committed.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::difficulty::DifficultyTier;
use crate::engines::engine_tiered::TieredEngine;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{GameError, GameResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone)]
pub struct AiRequest {
    /// Echoed in the reply so the session can drop answers it no longer wants.
    pub ticket: u64,
    pub side: Color,
    pub tier: DifficultyTier,
    pub board: Board,
    pub think_time_scale: f64,
}

#[derive(Debug)]
pub struct AiReply {
    pub ticket: u64,
    pub side: Color,
    pub think_time: Duration,
    pub result: GameResult<EngineOutput>,
}

enum WorkerCommand {
    Compute(AiRequest),
    Shutdown,
}

pub struct AiWorker {
    command_tx: Sender<WorkerCommand>,
    reply_rx: Receiver<AiReply>,
    handle: Option<JoinHandle<()>>,
}

impl AiWorker {
    pub fn spawn(seed: Option<u64>) -> Self {
        let (command_tx, command_rx) = channel::<WorkerCommand>();
        let (reply_tx, reply_rx) = channel::<AiReply>();
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let handle = thread::spawn(move || worker_loop(command_rx, reply_tx, rng));

        Self {
            command_tx,
            reply_rx,
            handle: Some(handle),
        }
    }

    pub fn submit(&self, request: AiRequest) -> GameResult<()> {
        self.command_tx
            .send(WorkerCommand::Compute(request))
            .map_err(|_| GameError::WorkerUnavailable)
    }

    /// Non-blocking check for a finished reply.
    pub fn try_recv(&self) -> GameResult<Option<AiReply>> {
        match self.reply_rx.try_recv() {
            Ok(reply) => Ok(Some(reply)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(GameError::WorkerUnavailable),
        }
    }

    pub fn recv_timeout(&self, timeout: Duration) -> GameResult<Option<AiReply>> {
        match self.reply_rx.recv_timeout(timeout) {
            Ok(reply) => Ok(Some(reply)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(GameError::WorkerUnavailable),
        }
    }

    /// Interrupts any pending pause and joins the thread.
    ///
    /// `WorkerUnavailable` if the thread had panicked. Later calls are no-ops.
    pub fn shutdown(&mut self) -> GameResult<()> {
        // A closed channel just means the thread is already gone.
        let _ = self.command_tx.send(WorkerCommand::Shutdown);
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| GameError::WorkerUnavailable),
            None => Ok(()),
        }
    }
}

impl Drop for AiWorker {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("{} AI worker panicked: {e}", env!("CARGO_PKG_NAME"));
        }
    }
}

fn worker_loop(command_rx: Receiver<WorkerCommand>, reply_tx: Sender<AiReply>, rng: StdRng) {
    let mut engine = TieredEngine::with_rng(DifficultyTier::default(), rng);
    let mut pending: Option<AiRequest> = None;

    loop {
        let request = match pending.take() {
            Some(request) => request,
            None => match command_rx.recv() {
                Ok(WorkerCommand::Compute(request)) => request,
                Ok(WorkerCommand::Shutdown) | Err(_) => return,
            },
        };

        engine.set_tier(request.tier);
        let think_time = engine.sample_think_time(request.think_time_scale);

        // The pause doubles as the wait for a shutdown or a newer request.
        match command_rx.recv_timeout(think_time) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(WorkerCommand::Compute(newer)) => {
                pending = Some(newer);
                continue;
            }
            Ok(WorkerCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => return,
        }

        let result = engine.choose_move(&request.board, request.side).map(|mut out| {
            out.info_lines
                .push(format!("info string worker engine {}", engine.name()));
            out
        });
        let reply = AiReply {
            ticket: request.ticket,
            side: request.side,
            think_time,
            result,
        };
        if reply_tx.send(reply).is_err() {
            return;
        }
    }
}
