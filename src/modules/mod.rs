pub mod ball;
pub mod config;
pub mod flipper;
pub mod resources;
pub mod statics;
pub mod world;
