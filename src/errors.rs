use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenParseError {
    #[error("FEN is missing the piece placement field")]
    MissingBoard,
    #[error("piece placement has {0} ranks, expected 8")]
    WrongRankCount(usize),
    #[error("rank {0} does not describe exactly 8 squares")]
    BadRankWidth(u8),
    #[error("unexpected character in piece placement: {0:?}")]
    UnexpectedCharacter(char),
    #[error("expected side to move 'w' or 'b', got {0:?}")]
    InvalidSide(String),
    #[error("invalid castling field: {0:?}")]
    InvalidCastling(String),
    #[error("invalid en passant field: {0:?}")]
    InvalidEnPassant(String),
    #[error("invalid halfmove clock: {0:?}")]
    InvalidHalfmoveClock(String),
    #[error("invalid fullmove number: {0:?}")]
    InvalidFullmoveNumber(String),
    #[error("each side must have exactly one king")]
    KingCount,
    #[error("pawns are not allowed on the first or last rank")]
    PawnsOnBackRank,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move string {0:?} is too short or too long")]
    InvalidLength(String),
    #[error("invalid square in move {0:?}")]
    InvalidSquare(String),
    #[error("invalid promotion piece {0:?}")]
    InvalidPromotionPiece(char),
    #[error("move {0} is not legal in this position")]
    IllegalMove(String),
}
