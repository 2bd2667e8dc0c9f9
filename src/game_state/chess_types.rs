//! Core value types shared by both boards.
//!
//! Squares use the row/column convention of the board grid: row `0` is rank 8
//! and column `0` is the a-file, so `(row, col)` maps to algebraic notation as
//! `file = 'a' + col`, `rank = 8 - row`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side owning a piece or holding the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this side.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case one-letter code (`P`, `N`, `B`, `R`, `Q`, `K`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kinds a pawn may become on the last rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// Stable identity of a piece, the join key between the two boards.
///
/// `origin` is the kind the piece started the game as; it never changes, even
/// after promotion. The display form is the legacy code used by clients: the
/// origin letter (upper case for White, lower case for Black) followed by the
/// ordinal, e.g. `P3` or `n2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub color: Color,
    pub origin: PieceKind,
    pub ordinal: u8,
}

impl PieceId {
    #[inline]
    pub const fn new(color: Color, origin: PieceKind, ordinal: u8) -> Self {
        Self {
            color,
            origin,
            ordinal,
        }
    }

    /// Parse a legacy identity code such as `P3`, `k1` or `N2`.
    pub fn from_code(code: &str) -> Result<Self, String> {
        let mut chars = code.chars();
        let letter = chars
            .next()
            .ok_or_else(|| "Empty piece identity code".to_owned())?;
        let origin = PieceKind::from_letter(letter)
            .ok_or_else(|| format!("Invalid piece letter in identity code: {code}"))?;
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let ordinal = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| format!("Invalid ordinal in identity code: {code}"))?;
        if ordinal == 0 {
            return Err(format!("Identity ordinals start at 1: {code}"));
        }
        Ok(Self::new(color, origin, ordinal))
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.color {
            Color::White => self.origin.letter(),
            Color::Black => self.origin.letter().to_ascii_lowercase(),
        };
        write!(f, "{}{}", letter, self.ordinal)
    }
}

/// Occupant of a board square: an identity plus its current kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
}

impl Piece {
    /// A piece still of its starting kind.
    #[inline]
    pub const fn original(id: PieceId) -> Self {
        Self { id, kind: id.origin }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.id.color
    }

    #[inline]
    pub const fn promoted_to(self, kind: PieceKind) -> Self {
        Self { id: self.id, kind }
    }

    /// FEN letter of the current kind.
    #[inline]
    pub fn fen_char(&self) -> char {
        match self.color() {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// Bitmask over the 64 squares, bit `row * 8 + col`.
pub type SquareMask = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Caller guarantees `row < 8 && col < 8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }

    #[inline]
    pub const fn mask(self) -> SquareMask {
        1u64 << self.index()
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Iterate the squares of a mask in index order.
    pub fn iter_mask(mask: SquareMask) -> impl Iterator<Item = Square> {
        let mut remaining = mask;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let index = remaining.trailing_zeros() as usize;
            remaining &= remaining - 1;
            Some(Square::from_index(index))
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Column of the rook taking part in the castle.
    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideCastlingRights {
    pub kingside: bool,
    pub queenside: bool,
}

/// Castling flags of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white: SideCastlingRights {
            kingside: true,
            queenside: true,
        },
        black: SideCastlingRights {
            kingside: true,
            queenside: true,
        },
    };

    pub const NONE: CastlingRights = CastlingRights {
        white: SideCastlingRights {
            kingside: false,
            queenside: false,
        },
        black: SideCastlingRights {
            kingside: false,
            queenside: false,
        },
    };

    #[inline]
    pub fn side(&self, color: Color) -> SideCastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn allows(&self, color: Color, castle: CastleSide) -> bool {
        let rights = self.side(color);
        match castle {
            CastleSide::Kingside => rights.kingside,
            CastleSide::Queenside => rights.queenside,
        }
    }

    pub fn revoke(&mut self, color: Color, castle: CastleSide) {
        let rights = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        match castle {
            CastleSide::Kingside => rights.kingside = false,
            CastleSide::Queenside => rights.queenside = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::Kingside);
        self.revoke(color, CastleSide::Queenside);
    }

    /// Revoke the flag whose rook starts on `square`, if any.
    pub fn revoke_for_rook_home(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.row != color.home_row() {
                continue;
            }
            for castle in [CastleSide::Kingside, CastleSide::Queenside] {
                if square.col == castle.rook_home_col() {
                    self.revoke(color, castle);
                }
            }
        }
    }

    /// Keep only the flags set in both records.
    pub fn intersect(&mut self, other: &CastlingRights) {
        self.white.kingside &= other.white.kingside;
        self.white.queenside &= other.white.queenside;
        self.black.kingside &= other.black.kingside;
        self.black.queenside &= other.black.queenside;
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}

/// Which of the two boards; also the scheduler's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardKind {
    Main,
    Secondary,
}

impl BoardKind {
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            BoardKind::Main => BoardKind::Secondary,
            BoardKind::Secondary => BoardKind::Main,
        }
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardKind::Main => write!(f, "main"),
            BoardKind::Secondary => write!(f, "secondary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
    Repetition,
}

/// Terminal classification of one board. Once it leaves `Active` it never
/// changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoardOutcome {
    #[default]
    Active,
    Won(Color),
    Drawn(DrawReason),
}

impl BoardOutcome {
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, BoardOutcome::Active)
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            BoardOutcome::Won(color) => Some(color),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(self, BoardOutcome::Drawn(_))
    }
}

/// Overall result once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Side(Color),
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Side(color) => write!(f, "{color}"),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_names_follow_row_major_layout() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
        assert_eq!(Square::new(6, 4).to_string(), "e2");
        assert_eq!(Square::new(3, 3).offset(-4, 0), None);
        assert_eq!(Square::new(3, 3).offset(1, -2), Some(Square::new(4, 1)));
    }

    #[test]
    fn piece_identity_codes_parse_and_display() {
        let id = PieceId::from_code("P3").expect("P3 should parse");
        assert_eq!(id, PieceId::new(Color::White, PieceKind::Pawn, 3));
        assert_eq!(id.to_string(), "P3");

        let id = PieceId::from_code("n2").expect("n2 should parse");
        assert_eq!(id.color, Color::Black);
        assert_eq!(id.origin, PieceKind::Knight);
        assert_eq!(id.to_string(), "n2");

        assert!(PieceId::from_code("x1").is_err());
        assert!(PieceId::from_code("Q").is_err());
        assert!(PieceId::from_code("Q0").is_err());
    }

    #[test]
    fn promotion_keeps_identity() {
        let pawn = Piece::original(PieceId::new(Color::White, PieceKind::Pawn, 5));
        let queen = pawn.promoted_to(PieceKind::Queen);
        assert_eq!(queen.id, pawn.id);
        assert_eq!(queen.fen_char(), 'Q');
    }

    #[test]
    fn rook_home_revokes_only_matching_flag() {
        let mut rights = CastlingRights::ALL;
        rights.revoke_for_rook_home(Square::new(0, 7));
        assert!(!rights.allows(Color::Black, CastleSide::Kingside));
        assert!(rights.allows(Color::Black, CastleSide::Queenside));
        assert!(rights.allows(Color::White, CastleSide::Kingside));

        rights.revoke_for_rook_home(Square::new(4, 0));
        assert!(rights.allows(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn mask_iteration_visits_each_square() {
        let mask = Square::new(0, 0).mask() | Square::new(7, 7).mask() | Square::new(4, 2).mask();
        let squares: Vec<Square> = Square::iter_mask(mask).collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 0), Square::new(4, 2), Square::new(7, 7)]
        );
    }
}
