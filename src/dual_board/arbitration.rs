//! Overall result from the two board outcomes.

use crate::game_state::chess_types::*;

/// A color wins once it has won a board and its opponent has won none. With
/// both boards resolved and no such color, the game is drawn. `None` means
/// play continues.
pub fn arbitrate(main: BoardOutcome, secondary: BoardOutcome) -> Option<Winner> {
    for color in [Color::White, Color::Black] {
        let won_any = main.winner() == Some(color) || secondary.winner() == Some(color);
        let lost_any = main.winner() == Some(color.opposite())
            || secondary.winner() == Some(color.opposite());
        if won_any && !lost_any {
            return Some(Winner::Side(color));
        }
    }

    if !main.is_active() && !secondary.is_active() {
        Some(Winner::Draw)
    } else {
        None
    }
}
