//! One game from first move to result, as seen by a presentation layer.
//!
//! The session owns the `GameState` and is the single place a move is ever
//! committed, whether it came from a human click or from the AI worker.
//! While an AI request is in flight every human commit is refused, so the
//! worker's snapshot can never go stale underneath it; a reset bumps the
//! request ticket so late replies for a previous game are dropped unread.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::engines::difficulty::DifficultyTier;
use crate::errors::{GameError, GameResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{PROMOTION_MESSAGE, PROMOTION_NOTICE_FRAMES};
use crate::game_state::chess_types::{CheckStatus, Color, Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::pseudo_legal::pseudo_legal_moves_from;
use crate::session::ai_worker::{AiReply, AiRequest, AiWorker};
use crate::session::session_config::{AiOpponent, MoveValidation, SessionConfig};

/// Piece-selection state of the interactive side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    AwaitingSelection,
    PieceSelected {
        square: Square,
        moves: Vec<Square>,
    },
}

/// Outcome of a commit attempt, human or AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitResult {
    pub accepted: bool,
    pub promoted: bool,
    pub check: CheckStatus,
    pub game_over: bool,
    pub winner: Option<Color>,
}

impl CommitResult {
    fn from_state(state: &GameState, accepted: bool, promoted: bool) -> Self {
        Self {
            accepted,
            promoted,
            check: state.check,
            game_over: state.is_game_over(),
            winner: state.winner(),
        }
    }
}

/// Transient promotion banner for the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionNotice {
    pub message: String,
    pub frames_remaining: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    pub side: Color,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub promoted: bool,
    pub played_at: DateTime<Local>,
}

impl MoveRecord {
    #[inline]
    pub fn mv(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    selection: Selection,
    ai_thinking: bool,
    ticket: u64,
    worker: Option<AiWorker>,
    promotion_notice: Option<PromotionNotice>,
    history: Vec<MoveRecord>,
    info_lines: Vec<String>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: GameState::new_game(),
            selection: Selection::default(),
            ai_thinking: false,
            ticket: 0,
            worker: None,
            promotion_notice: None,
            history: Vec::new(),
            info_lines: Vec::new(),
        }
    }

    /// Throws the current game away and starts over from the initial position.
    ///
    /// Any in-flight AI reply belongs to the old game and will be discarded.
    pub fn reset_session(&mut self) {
        self.state = GameState::new_game();
        self.selection = Selection::AwaitingSelection;
        self.ai_thinking = false;
        self.ticket = self.ticket.wrapping_add(1);
        self.promotion_notice = None;
        self.history.clear();
        self.info_lines.push("info string session reset".to_owned());
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn is_ai_thinking(&self) -> bool {
        self.ai_thinking
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[inline]
    pub fn promotion_notice(&self) -> Option<&PromotionNotice> {
        self.promotion_notice.as_ref()
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn drain_info_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.info_lines)
    }

    /// The configured AI when it is its turn and nothing is pending.
    pub fn ai_to_move(&self) -> Option<AiOpponent> {
        let ai = self.config.ai?;
        (!self.state.is_game_over() && !self.ai_thinking && ai.side == self.state.side_to_move)
            .then_some(ai)
    }

    /// Destinations for the piece on `square`; empty for an empty square, an
    /// opposing piece or a finished game.
    pub fn legal_moves(&self, square: Square) -> GameResult<Vec<Square>> {
        if self.state.is_game_over() {
            return Ok(Vec::new());
        }
        match self.state.board.get(square) {
            Some(piece) if piece.color == self.state.side_to_move => {}
            _ => return Ok(Vec::new()),
        }
        match self.config.move_validation {
            MoveValidation::Legal => legal_moves(&self.state.board, square),
            MoveValidation::PseudoLegal => Ok(pseudo_legal_moves_from(&self.state.board, square)),
        }
    }

    /// Selects the piece on `square` for the interactive side, or clears the
    /// selection when the square holds nothing selectable.
    pub fn select(&mut self, square: Square) -> GameResult<&Selection> {
        if self.human_input_blocked() {
            return Ok(&self.selection);
        }
        let moves = self.legal_moves(square)?;
        let own_piece = self
            .state
            .board
            .get(square)
            .is_some_and(|piece| piece.color == self.state.side_to_move);
        self.selection = if own_piece {
            Selection::PieceSelected { square, moves }
        } else {
            Selection::AwaitingSelection
        };
        Ok(&self.selection)
    }

    pub fn cancel_selection(&mut self) {
        self.selection = Selection::AwaitingSelection;
    }

    /// A board click: commits when it hits a highlighted destination of the
    /// selected piece, otherwise (re)selects.
    pub fn click(&mut self, square: Square) -> GameResult<Option<CommitResult>> {
        if let Selection::PieceSelected { square: from, moves } = &self.selection {
            if moves.contains(&square) {
                let from = *from;
                return self.commit_move(from, square).map(Some);
            }
        }
        self.select(square)?;
        Ok(None)
    }

    /// Commits a human move. Rejected (state unchanged) while the AI is
    /// thinking, on the AI's turn, after the game ended, or when the move is
    /// not among the piece's allowed destinations.
    pub fn commit_move(&mut self, from: Square, to: Square) -> GameResult<CommitResult> {
        if self.human_input_blocked() {
            return Ok(self.rejected());
        }
        self.commit_validated(from, to)
    }

    /// Dispatches an AI move request for `side` to the background worker.
    ///
    /// Resolve it with `poll_ai` or `wait_for_ai`.
    pub fn request_ai_move(&mut self, side: Color, tier: DifficultyTier) -> GameResult<()> {
        if self.state.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.ai_thinking {
            return Err(GameError::AiAlreadyThinking);
        }
        if side != self.state.side_to_move {
            return Err(GameError::NotSidesTurn(side));
        }

        let seed = self.config.rng_seed;
        let worker = self.worker.get_or_insert_with(|| AiWorker::spawn(seed));
        self.ticket = self.ticket.wrapping_add(1);
        worker.submit(AiRequest {
            ticket: self.ticket,
            side,
            tier,
            board: self.state.board.clone(),
            think_time_scale: self.config.think_time_scale,
        })?;

        self.ai_thinking = true;
        self.selection = Selection::AwaitingSelection;
        self.info_lines
            .push(format!("info string session ai_request side {side} tier {tier}"));
        Ok(())
    }

    /// Applies the AI's reply if it has arrived. Never blocks.
    pub fn poll_ai(&mut self) -> GameResult<Option<CommitResult>> {
        while self.ai_thinking {
            let Some(worker) = self.worker.as_ref() else {
                return Err(GameError::WorkerUnavailable);
            };
            let Some(reply) = worker.try_recv()? else {
                return Ok(None);
            };
            if let Some(result) = self.apply_ai_reply(reply)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Blocks for up to `timeout` waiting for the AI's reply.
    pub fn wait_for_ai(&mut self, timeout: Duration) -> GameResult<Option<CommitResult>> {
        let deadline = Instant::now() + timeout;
        while self.ai_thinking {
            let Some(worker) = self.worker.as_ref() else {
                return Err(GameError::WorkerUnavailable);
            };
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Some(reply) = worker.recv_timeout(remaining)? else {
                return Ok(None);
            };
            if let Some(result) = self.apply_ai_reply(reply)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Stops the AI worker, if one was started, and joins it. A pending
    /// request is abandoned.
    pub fn shutdown_ai(&mut self) -> GameResult<()> {
        self.ai_thinking = false;
        self.ticket = self.ticket.wrapping_add(1);
        match self.worker.take() {
            Some(mut worker) => worker.shutdown(),
            None => Ok(()),
        }
    }

    /// Counts the promotion banner down by one display frame.
    pub fn tick_display(&mut self) {
        if let Some(notice) = self.promotion_notice.as_mut() {
            notice.frames_remaining = notice.frames_remaining.saturating_sub(1);
            if notice.frames_remaining == 0 {
                self.promotion_notice = None;
            }
        }
    }

    fn human_input_blocked(&self) -> bool {
        self.state.is_game_over()
            || self.ai_thinking
            || self.config.ai_side() == Some(self.state.side_to_move)
    }

    fn rejected(&self) -> CommitResult {
        CommitResult::from_state(&self.state, false, false)
    }

    /// `Ok(None)` for a stale reply that was dropped.
    fn apply_ai_reply(&mut self, reply: AiReply) -> GameResult<Option<CommitResult>> {
        if reply.ticket != self.ticket {
            return Ok(None);
        }
        self.ai_thinking = false;

        let output = reply.result?;
        self.info_lines.extend(output.info_lines);
        self.info_lines.push(format!(
            "info string session ai_think_ms {}",
            reply.think_time.as_millis()
        ));

        match output.best_move {
            Some(Move { from, to }) => self.commit_validated(from, to).map(Some),
            // Status refresh already ends the game for a side without moves,
            // so this only fires if the worker saw a position with none.
            None => {
                self.state.concede(reply.side);
                Ok(Some(self.rejected()))
            }
        }
    }

    fn commit_validated(&mut self, from: Square, to: Square) -> GameResult<CommitResult> {
        if self.state.is_game_over() {
            return Ok(self.rejected());
        }
        let Some(piece) = self.state.board.get(from).copied() else {
            return Ok(self.rejected());
        };
        if piece.color != self.state.side_to_move || !self.legal_moves(from)?.contains(&to) {
            return Ok(self.rejected());
        }

        let Some(applied) = self
            .state
            .commit(Move::new(from, to), self.config.no_move_policy)?
        else {
            return Ok(self.rejected());
        };

        self.selection = Selection::AwaitingSelection;
        if applied.promoted {
            self.promotion_notice = Some(PromotionNotice {
                message: PROMOTION_MESSAGE.to_owned(),
                frames_remaining: PROMOTION_NOTICE_FRAMES,
            });
        }
        self.history.push(MoveRecord {
            side: applied.color,
            kind: applied.moved_kind,
            from,
            to,
            captured: applied.captured.map(|p| p.kind),
            promoted: applied.promoted,
            played_at: Local::now(),
        });

        Ok(CommitResult::from_state(&self.state, true, applied.promoted))
    }
}
