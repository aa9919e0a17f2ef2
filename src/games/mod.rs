//! Game implementations.
//!
//! One module per variant, each exporting a zero-sized behaviour type that
//! implements [`VariantRules`]. [`behavior`] is the dispatch table `Game`
//! goes through; [`VariantState`] carries the little per-variant state that
//! does not live on the board.

pub mod checkers;
pub mod chess;
pub mod connect_four;
mod lines;
pub mod tictactoe;

use serde::{Deserialize, Serialize};

use crate::rules::{Variant, VariantRules};

pub use checkers::Checkers;
pub use chess::{CastlingRights, Chess};
pub use connect_four::ConnectFour;
pub use tictactoe::TicTacToe;

/// Per-variant state carried alongside the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantState {
    TicTacToe,
    ConnectFour,
    Checkers,
    Chess(CastlingRights),
}

impl VariantState {
    /// Fresh state for a game starting from the default position.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::TicTacToe => VariantState::TicTacToe,
            Variant::ConnectFour => VariantState::ConnectFour,
            Variant::Checkers => VariantState::Checkers,
            Variant::Chess => VariantState::Chess(CastlingRights::default()),
        }
    }

    /// Castling bookkeeping, if this is a chess game.
    #[must_use]
    pub fn castling(&self) -> Option<&CastlingRights> {
        match self {
            VariantState::Chess(rights) => Some(rights),
            _ => None,
        }
    }
}

/// Behaviour table lookup.
#[must_use]
pub fn behavior(variant: Variant) -> &'static dyn VariantRules {
    match variant {
        Variant::TicTacToe => &TicTacToe,
        Variant::ConnectFour => &ConnectFour,
        Variant::Checkers => &Checkers,
        Variant::Chess => &Chess,
    }
}
