//! The checkers rules engine.
//!
//! Owns the board, the per-player piece counts, the active-player marker,
//! the capture-chain lock, and the winner flag. [`Game::turn`] is the only
//! operation that mutates state: it runs a move through a fixed gate
//! pipeline and either applies it atomically or rejects it with the game
//! left untouched.

use std::fmt;

use thiserror::Error;

use crate::board::{Board, Piece, Player, Rank, Square, SquareError};

/// Why a move was rejected. Every variant is a full no-op on the game;
/// callers that only need a single invalid-move signal can ignore which
/// gate fired.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("a capture chain must continue from {0}")]
    ChainLocked(Square),

    #[error("{0} is not a playable square")]
    NotPlayable(Square),

    #[error("no piece of the active player on {0}")]
    NotYourPiece(Square),

    #[error("a capture is available and must be taken")]
    CaptureAvailable,

    #[error("illegal move geometry")]
    IllegalMove,
}

/// What a successful call to [`Game::turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A simple diagonal step; the turn passes.
    Stepped,
    /// A capture with no follow-up; the turn passes.
    Captured,
    /// A capture that must continue from the landing square; the same
    /// player moves again.
    CaptureChain(Square),
    /// The capture removed the opponent's last piece.
    Won(Player),
}

/// A from/to pair the engine would accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// How a validated move will mutate the board.
enum MoveKind {
    Step,
    Jump(Square),
}

/// A game of checkers in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    counts: [u8; 2],
    active: Player,
    chain_lock: Option<Square>,
    winner: Option<Player>,
}

impl Game {
    /// A fresh game from the standard opening position, player one to move.
    pub fn new() -> Game {
        Game::from_board(Board::opening(), Player::One)
    }

    /// Starts from an arbitrary position, deriving piece counts from the
    /// board. A side with nothing left means the position is already
    /// decided.
    pub fn from_board(board: Board, active: Player) -> Game {
        let counts = [board.count(Player::One), board.count(Player::Two)];
        let winner = match counts {
            [0, _] => Some(Player::Two),
            [_, 0] => Some(Player::One),
            _ => None,
        };
        Game {
            board,
            counts,
            active,
            chain_lock: None,
            winner,
        }
    }

    /// The occupant of a square.
    pub fn cell(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    /// Raw-coordinate query for collaborators that index the physical
    /// matrix; out-of-range coordinates are an error, never a read.
    pub fn cell_at(&self, row: u8, col: u8) -> Result<Option<Piece>, SquareError> {
        Ok(self.board.get(Square::new(row, col)?))
    }

    /// How many pieces the player has left.
    pub fn piece_count(&self, player: Player) -> u8 {
        self.counts[player.index()]
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn has_won(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The square a capture chain must continue from, if one is pending.
    pub fn chain_square(&self) -> Option<Square> {
        self.chain_lock
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays one move (or one leg of a capture chain) for the active
    /// player.
    ///
    /// Gates run in a fixed order; the first failure rejects the move with
    /// no state change. Captures are mandatory: a simple step is refused
    /// whenever any capture exists anywhere for the active player, and a
    /// capture leaving a further capture from its landing square locks the
    /// turn onto that square.
    pub fn turn(&mut self, from: Square, to: Square) -> Result<TurnOutcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if let Some(lock) = self.chain_lock {
            if from != lock {
                return Err(MoveError::ChainLocked(lock));
            }
        }
        if !from.is_dark() {
            return Err(MoveError::NotPlayable(from));
        }
        if !to.is_dark() {
            return Err(MoveError::NotPlayable(to));
        }
        let piece = match self.board.get(from) {
            Some(p) if p.player == self.active => p,
            _ => return Err(MoveError::NotYourPiece(from)),
        };

        let dr = to.row() as i8 - from.row() as i8;
        let dc = to.col() as i8 - from.col() as i8;
        let kind = if dr.abs() == 1 && dc.abs() == 1 {
            if self.can_jump() {
                return Err(MoveError::CaptureAvailable);
            }
            if self.board.get(to).is_some() || !piece.directions().contains(&(dr, dc)) {
                return Err(MoveError::IllegalMove);
            }
            MoveKind::Step
        } else if dr.abs() == 2 && dc.abs() == 2 {
            // Both conditions apply uniformly to men and to either king
            // owner: the landing square must be empty and the midpoint must
            // hold an opposing piece.
            let over = from.midpoint(to);
            let victim_ok =
                matches!(self.board.get(over), Some(v) if v.player == self.active.opponent());
            if !victim_ok
                || self.board.get(to).is_some()
                || !piece.directions().contains(&(dr / 2, dc / 2))
            {
                return Err(MoveError::IllegalMove);
            }
            MoveKind::Jump(over)
        } else {
            return Err(MoveError::IllegalMove);
        };

        // Every gate passed; the move now applies in full.
        let landed = if piece.rank == Rank::Man && to.row() == self.active.crowning_row() {
            Piece::king(self.active)
        } else {
            piece
        };
        self.board.set(from, None);
        self.board.set(to, Some(landed));

        match kind {
            MoveKind::Step => {
                self.chain_lock = None;
                self.active = self.active.opponent();
                Ok(TurnOutcome::Stepped)
            }
            MoveKind::Jump(over) => {
                self.board.set(over, None);
                let loser = self.active.opponent();
                self.counts[loser.index()] -= 1;
                if self.counts[loser.index()] == 0 {
                    self.winner = Some(self.active);
                    return Ok(TurnOutcome::Won(self.active));
                }
                // The landed piece may just have been crowned; the chain
                // check uses its new directions.
                if self.piece_can_capture(to, landed) {
                    self.chain_lock = Some(to);
                    Ok(TurnOutcome::CaptureChain(to))
                } else {
                    self.chain_lock = None;
                    self.active = self.active.opponent();
                    Ok(TurnOutcome::Captured)
                }
            }
        }
    }

    /// Whether any capture is available to the active player anywhere on
    /// the board. Captures are mandatory, so this gates every simple step.
    pub fn can_jump(&self) -> bool {
        Square::all().any(|sq| match self.board.get(sq) {
            Some(p) if p.player == self.active => self.piece_can_capture(sq, p),
            _ => false,
        })
    }

    /// Whether `piece`, sitting on `square`, has a capture available.
    fn piece_can_capture(&self, square: Square, piece: Piece) -> bool {
        piece.directions().iter().any(|&(dr, dc)| {
            match (square.offset(dr, dc), square.offset(2 * dr, 2 * dc)) {
                (Some(over), Some(land)) => {
                    self.board.get(land).is_none()
                        && matches!(self.board.get(over), Some(v) if v.player == piece.player.opponent())
                }
                _ => false,
            }
        })
    }

    /// Every move [`Game::turn`] would currently accept: nothing once the
    /// game is won, only continuations from the lock square during a chain,
    /// only captures while one is available, simple steps otherwise.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let must_jump = self.can_jump();
        let mut moves = Vec::new();
        for from in Square::all() {
            if let Some(lock) = self.chain_lock {
                if from != lock {
                    continue;
                }
            }
            let piece = match self.board.get(from) {
                Some(p) if p.player == self.active => p,
                _ => continue,
            };
            for &(dr, dc) in piece.directions() {
                if must_jump {
                    if let (Some(over), Some(to)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc))
                    {
                        if self.board.get(to).is_none()
                            && matches!(self.board.get(over), Some(v) if v.player == self.active.opponent())
                        {
                            moves.push(Move { from, to });
                        }
                    }
                } else if let Some(to) = from.offset(dr, dc) {
                    if self.board.get(to).is_none() {
                        moves.push(Move { from, to });
                    }
                }
            }
        }
        moves
    }
}
