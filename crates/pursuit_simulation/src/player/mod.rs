//! Player: управляемый диск + input seam

pub mod input;
pub mod player;

pub use input::{direction_vector, Direction, InputSnapshot, InputSource};
pub use player::PlayerBody;
