pub mod bonus;
pub mod errors;
pub mod player;
pub mod round;
pub mod view;

use uuid::Uuid;

pub type PlayerId = Uuid;
pub type RoundId = Uuid;

// Re-export all types
pub use bonus::*;
pub use errors::*;
pub use player::*;
pub use round::*;
pub use view::*;
