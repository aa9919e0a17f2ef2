//! Rules layer for the supported variants.
//!
//! `Rules` is the static, shared configuration of a variant; `VariantRules`
//! is the behaviour table (move generation, terminal detection, scoring)
//! that `Game` dispatches through. The game state machine never interprets
//! variant-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, Phase, Rules, Variant, VariantRules};
