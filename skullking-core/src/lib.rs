pub mod game_state;
pub mod input;
pub mod roster;
pub mod rounds;
pub mod scoring;

// Re-export main components
pub use game_state::*;
pub use input::*;
pub use roster::*;
pub use rounds::*;
pub use scoring::*;
