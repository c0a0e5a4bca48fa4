use macroquad::prelude::*;
use rapier2d::prelude::*;
use std::f32::consts::PI;

/// Spawn parameters for one ball. Everything except the radius has a
/// default, so call sites only spell out what they change.
#[derive(Debug, Clone, Copy)]
pub struct BallOptions {
    pub radius: f32,
    pub x: f32,
    pub y: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub vel_x: f32,
    pub vel_y: f32,
    pub mass: f32,
    /// Registers the ball as an immovable shape instead of a dynamic body.
    pub fixed: bool,
}

impl BallOptions {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            x: 0.0,
            y: 0.0,
            elasticity: 0.75,
            friction: 1.0,
            vel_x: 0.0,
            vel_y: 0.0,
            mass: 10.0,
            fixed: false,
        }
    }
}

/// A physics-backed sprite. The body moves, the sprite follows.
pub struct Ball {
    sprite: Texture2D,
    body: RigidBodyHandle,
}

impl Ball {
    /// Builds the body + circle collider pair and registers both. The mass
    /// comes entirely from the options; the collider carries no density of
    /// its own.
    pub fn new(
        sprite: Texture2D,
        options: BallOptions,
        linear_damping: f32,
        bodies: &mut RigidBodySet,
        colliders: &mut ColliderSet,
    ) -> Self {
        let builder = if options.fixed {
            RigidBodyBuilder::fixed().translation(vector![options.x, options.y])
        } else {
            RigidBodyBuilder::dynamic()
                .translation(vector![options.x, options.y])
                .linvel(vector![options.vel_x, options.vel_y])
                .linear_damping(linear_damping)
                .additional_mass(options.mass)
                // Fixed initial orientation; the sprite never shows it.
                .rotation(3.0 * PI / 2.0)
        };
        let body = bodies.insert(builder.build());

        let collider = ColliderBuilder::ball(options.radius)
            .restitution(options.elasticity)
            .friction(options.friction)
            .density(0.0)
            .build();
        colliders.insert_with_parent(collider, body, bodies);

        Self { sprite, body }
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    /// Reads the body's current position and paints the sprite with its
    /// top-left corner there.
    pub fn draw(&self, bodies: &RigidBodySet) {
        if let Some(body) = bodies.get(self.body) {
            let pos = body.translation();
            draw_texture(&self.sprite, pos.x, pos.y, WHITE);
        }
    }
}
