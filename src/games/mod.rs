//! Game implementations.
pub mod gomoku;
