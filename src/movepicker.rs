use arrayvec::ArrayVec;

use crate::board::movegen::{GenMode, MoveList, MAX_MOVES};
use crate::board::Board;
use crate::chessmove::Move;
use crate::historytable::HistoryTable;
use crate::piece::PieceType;
use crate::see::see;

const TT_MOVE_SCORE: i32 = i32::MAX / 2;

#[derive(Clone, Copy)]
struct Token {
    mov: Move,
    score: i32,
    see: Option<i32>,
}

/// Hands out moves in descending estimated usefulness: the table move,
/// winning and even captures by exchange value, killers, the refutation,
/// remaining quiets by history, and losing captures dead last. Selection
/// happens one max at a time, which beats a full sort at nodes that cut
/// off early; `previous` replays the picked prefix for history updates.
pub struct MovePicker {
    tokens: ArrayVec<Token, MAX_MOVES>,
    index: usize,
}

impl MovePicker {
    /// `depth` selects what gets generated: the main search (depth > 0)
    /// wants everything, quiescence at depth 0 adds quiet checks to the
    /// captures, and deeper quiescence takes captures only. In check, all
    /// evasions are generated and exchange-scored regardless.
    pub fn new(
        board: &Board,
        depth: i32,
        tt_move: Option<Move>,
        killers: [Option<Move>; 2],
        refutation: Option<Move>,
        history: &HistoryTable,
    ) -> Self {
        let in_check = board.is_check();
        let mode = if in_check || depth > 0 {
            GenMode::All
        } else if depth == 0 {
            GenMode::CapturesAndChecks
        } else {
            GenMode::Captures
        };
        let exchange_ordered = in_check || depth > 0;

        let mut list = MoveList::new();
        board.generate(mode, &mut list);

        let mut tokens = ArrayVec::new();
        for mov in list {
            let token = if Some(mov) == tt_move {
                Token {
                    mov,
                    score: TT_MOVE_SCORE,
                    see: None,
                }
            } else if board.is_tactical(mov) {
                if exchange_ordered {
                    let value = see(board, mov);
                    let score = if value >= 0 {
                        value + HistoryTable::MAX
                    } else {
                        value - HistoryTable::MAX
                    };
                    Token {
                        mov,
                        score,
                        see: Some(value),
                    }
                } else {
                    Token {
                        mov,
                        score: mvv_lva(board, mov),
                        see: None,
                    }
                }
            } else {
                let score = if Some(mov) == killers[0] {
                    HistoryTable::MAX - 1
                } else if Some(mov) == killers[1] {
                    HistoryTable::MAX - 2
                } else if Some(mov) == refutation {
                    HistoryTable::MAX - 3
                } else {
                    let piece = board.piece_at(mov.from()).unwrap_or(PieceType::Pawn);
                    history.get(piece, mov.to())
                };
                Token {
                    mov,
                    score,
                    see: None,
                }
            };
            let _ = tokens.try_push(token);
        }

        Self { tokens, index: 0 }
    }

    /// Total number of legal moves generated.
    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    /// The best remaining move and its exchange value.
    pub fn next(&mut self, board: &Board) -> Option<(Move, i32)> {
        if self.index >= self.tokens.len() {
            return None;
        }

        let mut best = self.index;
        for i in self.index + 1..self.tokens.len() {
            if self.tokens[i].score > self.tokens[best].score {
                best = i;
            }
        }
        self.tokens.swap(self.index, best);

        let token = &mut self.tokens[self.index];
        let mov = token.mov;
        let value = *token.see.get_or_insert_with(|| see(board, mov));
        self.index += 1;
        Some((mov, value))
    }

    /// Walk back through the already-tried moves, most recent first.
    pub fn previous(&mut self) -> Option<Move> {
        if self.index > 0 {
            self.index -= 1;
            Some(self.tokens[self.index].mov)
        } else {
            None
        }
    }
}

/// Most-valuable-victim / least-valuable-attacker, for quiescence where a
/// full exchange resolution would cost more than it saves.
fn mvv_lva(board: &Board, m: Move) -> i32 {
    let victim = if m.is_en_passant() {
        PieceType::Pawn
    } else {
        board.piece_at(m.to()).unwrap_or(PieceType::Pawn)
    };
    let attacker = board.piece_at(m.from()).unwrap_or(PieceType::Pawn);
    let promo_bonus = m.promotion().map_or(0, |p| 8 * p.index() as i32);
    16 * victim.index() as i32 - attacker.index() as i32 + promo_bonus
}

mod tests {
    #![allow(unused_imports)]
    use super::*;
    use crate::util::Square;

    #[test]
    fn tt_move_comes_first() {
        let board = Board::startpos();
        let history = HistoryTable::new();
        let tt_move = board.parse_move("g1f3").unwrap();
        let mut picker = MovePicker::new(&board, 5, Some(tt_move), [None; 2], None, &history);
        let (first, _) = picker.next(&board).unwrap();
        assert_eq!(first, tt_move);
        assert_eq!(picker.count(), 20);
    }

    #[test]
    fn winning_capture_before_quiet_moves() {
        let mut board = Board::new();
        // white can win the undefended rook on d5
        board
            .set_fen("4k3/8/8/3r4/8/8/8/3RK3 w - - 0 1")
            .unwrap();
        let history = HistoryTable::new();
        let mut picker = MovePicker::new(&board, 5, None, [None; 2], None, &history);
        let (first, value) = picker.next(&board).unwrap();
        assert!(board.is_capture(first));
        assert!(value > 0);
    }

    #[test]
    fn losing_capture_after_quiet_moves() {
        let mut board = Board::new();
        // QxP on d6 is defended; every quiet move should come first
        board
            .set_fen("4k3/2p5/3p4/8/8/8/3Q4/4K3 w - - 0 1")
            .unwrap();
        let history = HistoryTable::new();
        let mut picker = MovePicker::new(&board, 5, None, [None; 2], None, &history);
        let mut seen_losing_capture = false;
        let mut quiets_after_losing = 0;
        while let Some((m, _)) = picker.next(&board) {
            if board.is_capture(m) {
                seen_losing_capture = true;
            } else if seen_losing_capture {
                quiets_after_losing += 1;
            }
        }
        assert!(seen_losing_capture);
        assert_eq!(quiets_after_losing, 0);
    }

    #[test]
    fn killers_outrank_plain_quiets() {
        let board = Board::startpos();
        let history = HistoryTable::new();
        let killer = board.parse_move("b1c3").unwrap();
        let mut picker = MovePicker::new(&board, 5, None, [Some(killer), None], None, &history);
        let (first, _) = picker.next(&board).unwrap();
        assert_eq!(first, killer);
    }

    #[test]
    fn previous_replays_in_reverse() {
        let board = Board::startpos();
        let history = HistoryTable::new();
        let mut picker = MovePicker::new(&board, 5, None, [None; 2], None, &history);
        let (a, _) = picker.next(&board).unwrap();
        let (b, _) = picker.next(&board).unwrap();
        assert_eq!(picker.previous(), Some(b));
        assert_eq!(picker.previous(), Some(a));
        assert_eq!(picker.previous(), None);
    }
}
