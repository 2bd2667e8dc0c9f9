//! Leaf-node counting over the legal move tree of a single board.
//!
//! Used to validate the legality engine against published counts; the
//! dual-board scheduler never calls it.

use std::sync::Arc;
use std::thread;

use crate::chess_errors::MoveResult;
use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::play_move_description;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::MoveDescription;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn record_leaf(&mut self, mv: &MoveDescription) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.castle_side().is_some() {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }
    }
}

pub fn perft_legal(position: &BoardPosition, side: Color, depth: u8) -> MoveResult<PerftCounts> {
    perft(&LegalMoveGenerator, position, side, depth)
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    position: &BoardPosition,
    side: Color,
    depth: u8,
) -> MoveResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position, side)? {
        perft_recurse(generator, position, &mv, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Split the root moves across worker threads.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    position: &BoardPosition,
    side: Color,
    depth: u8,
) -> MoveResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(position, side)?;
    let mut handles = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = *position;
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &root, &mv, depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok((result, local)) => {
                result?;
                total.merge(local);
            }
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    parent: &BoardPosition,
    mv: &MoveDescription,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveResult<()> {
    if current_depth == search_depth {
        counts.record_leaf(mv);
        return Ok(());
    }

    let next = play_move_description(parent, mv);
    let side = mv.piece.color().opposite();
    for child in generator.generate_legal_moves(&next, side)? {
        perft_recurse(generator, &next, &child, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}
