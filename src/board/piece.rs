//! Players, ranks, and pieces.
//!
//! Carries the 5-valued numeric cell encoding the LED matrix hardware
//! consumes (`0` empty, `1`/`2` men, `3`/`4` kings); everywhere else the
//! crate works with the typed representation.

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The player number used in hardware codes and console output.
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parses a player from its number.
    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The row a man of this player is crowned on. Player one advances
    /// toward row 0, player two toward row 7.
    pub const fn crowning_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 7,
        }
    }

    /// Zero-based index for per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Whether a piece has been promoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub player: Player,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(player: Player) -> Piece {
        Piece {
            player,
            rank: Rank::Man,
        }
    }

    pub const fn king(player: Player) -> Piece {
        Piece {
            player,
            rank: Rank::King,
        }
    }

    /// The diagonal directions this piece may step and capture in:
    /// forward-only for a man, all four for a king.
    pub fn directions(self) -> &'static [(i8, i8)] {
        match (self.rank, self.player) {
            (Rank::Man, Player::One) => &[(-1, -1), (-1, 1)],
            (Rank::Man, Player::Two) => &[(1, -1), (1, 1)],
            (Rank::King, _) => &[(-1, -1), (-1, 1), (1, -1), (1, 1)],
        }
    }

    /// The numeric cell code for this piece; empty cells encode as 0.
    pub const fn code(self) -> u8 {
        match (self.player, self.rank) {
            (Player::One, Rank::Man) => 1,
            (Player::Two, Rank::Man) => 2,
            (Player::One, Rank::King) => 3,
            (Player::Two, Rank::King) => 4,
        }
    }

    /// Parses a piece from its numeric cell code. Returns `None` for 0
    /// (empty) and for codes outside the encoding.
    pub fn from_code(code: u8) -> Option<Piece> {
        match code {
            1 => Some(Piece::man(Player::One)),
            2 => Some(Piece::man(Player::Two)),
            3 => Some(Piece::king(Player::One)),
            4 => Some(Piece::king(Player::Two)),
            _ => None,
        }
    }
}
