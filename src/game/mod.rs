//! Match lifecycle on top of the board and rules.
//!
//! - `Match`: one game between two players, with turn bookkeeping and the
//!   `InProgress -> Won` state machine
//! - `MatchRegistry`: many matches, each independently locked

mod quixo;
mod registry;

pub use quixo::{Match, MatchSnapshot, MatchStatus};
pub use registry::{MatchHandle, MatchRegistry};
