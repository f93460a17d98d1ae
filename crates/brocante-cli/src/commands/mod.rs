pub mod cities;
pub mod config;
pub mod gate;
pub mod search;
pub mod show;
pub mod utils;
