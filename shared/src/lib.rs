pub mod constants;
pub mod prize_catalog;
pub mod prize_engine;
pub mod session;
pub mod shared_wheel_game;
pub mod user_info;
pub mod validation;
