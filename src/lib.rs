pub mod modules;

// Re-export public items
pub use modules::ball::{Ball, BallOptions};
pub use modules::config::WorldConfig;
pub use modules::flipper::{Flipper, Side};
pub use modules::resources::{load_image, resource_path};
pub use modules::statics::{Peg, StaticActor, WALL_ELASTICITY, WALL_FRICTION, Wall};
pub use modules::world::{Actor, BodySnapshot, KeyAction, PinballWorld, key_action};
