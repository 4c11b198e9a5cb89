pub mod form_state;
pub mod use_prize_wheel;

pub use form_state::*;
pub use use_prize_wheel::*;
