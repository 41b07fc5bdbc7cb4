//! Zobrist keys for incremental position hashing. The whole key set is
//! derived at compile time from the xorshift generator, so the hash of any
//! position is stable across builds with the same seed.

use crate::macros::cfor;
use crate::piece::{Colour, PieceType};
use crate::rng::XorShiftState;
use crate::util::Square;

struct Keys {
    piece: [[[u64; 64]; 6]; 2],
    castling: [u64; 16],
    en_passant: [u64; 64],
    side: u64,
}

const fn generate() -> Keys {
    let mut keys = Keys {
        piece: [[[0; 64]; 6]; 2],
        castling: [0; 16],
        en_passant: [0; 64],
        side: 0,
    };
    let mut rng = XorShiftState::new();

    cfor!(let mut colour = 0; colour < 2; colour += 1; {
        cfor!(let mut piece = 0; piece < 6; piece += 1; {
            cfor!(let mut sq = 0; sq < 64; sq += 1; {
                let (value, next) = rng.next_self();
                keys.piece[colour][piece][sq] = value;
                rng = next;
            });
        });
    });
    cfor!(let mut rights = 0; rights < 16; rights += 1; {
        let (value, next) = rng.next_self();
        keys.castling[rights] = value;
        rng = next;
    });
    cfor!(let mut sq = 0; sq < 64; sq += 1; {
        let (value, next) = rng.next_self();
        keys.en_passant[sq] = value;
        rng = next;
    });
    let (value, _) = rng.next_self();
    keys.side = value;

    keys
}

static KEYS: Keys = generate();

pub fn piece(colour: Colour, piece: PieceType, sq: Square) -> u64 {
    KEYS.piece[colour.index()][piece.index()][sq.index()]
}

pub fn castling(rights: u8) -> u64 {
    KEYS.castling[usize::from(rights & 0xF)]
}

pub fn en_passant(sq: Square) -> u64 {
    KEYS.en_passant[sq.index()]
}

pub fn side() -> u64 {
    KEYS.side
}

mod tests {
    #[test]
    fn keys_are_distinct() {
        use super::KEYS;
        let mut seen = std::collections::HashSet::new();
        for colour in &KEYS.piece {
            for piece in colour {
                for &key in piece {
                    assert!(seen.insert(key));
                }
            }
        }
        for &key in &KEYS.castling {
            assert!(seen.insert(key));
        }
        assert!(seen.insert(KEYS.side));
    }
}
