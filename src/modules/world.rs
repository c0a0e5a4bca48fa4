use macroquad::prelude::*;
// Rapier2D provides the rigid-body simulation; nothing here integrates motion
// by hand.
use rapier2d::prelude::*;
use std::num::NonZeroUsize;

use crate::modules::ball::{Ball, BallOptions};
use crate::modules::config::WorldConfig;
use crate::modules::flipper::{Flipper, Side};
use crate::modules::statics::{Peg, StaticActor, Wall};

/// What a key press means to the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Tear the window down and end the process.
    Exit,
    /// Surfaced for observation only; the simulation is left untouched.
    Observe(KeyCode),
}

/// Maps a key press to its loop action. Escape is the one recognized key.
pub fn key_action(key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Escape => KeyAction::Exit,
        other => KeyAction::Observe(other),
    }
}

/// Everything the world can draw. Paint order is insertion order.
pub enum Actor {
    Ball(Ball),
    Peg(Peg),
    Wall(Wall),
    Flipper(Flipper),
}

impl Actor {
    fn draw(&self, bodies: &RigidBodySet) {
        match self {
            Actor::Ball(ball) => ball.draw(bodies),
            Actor::Peg(peg) => peg.draw(),
            Actor::Wall(wall) => wall.draw(),
            Actor::Flipper(flipper) => flipper.draw(),
        }
    }
}

/// Position/velocity read-back for one rigid body.
#[derive(Debug, Clone, Copy)]
pub struct BodySnapshot {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub rotation: f32,
}

/// The simulation space plus the ordered actor list. Lives for the whole
/// process; actors are only ever added.
pub struct PinballWorld {
    config: WorldConfig,
    integration_parameters: IntegrationParameters,
    // PhysicsPipeline orchestrates all physics computations each tick.
    pipeline: PhysicsPipeline,
    // IslandManager groups bodies that can interact; BroadPhase and
    // NarrowPhase are the coarse and precise collision passes.
    island_manager: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    pub(crate) bodies: RigidBodySet,
    pub(crate) colliders: ColliderSet,
    pub(crate) joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    /// The one immovable body every static shape hangs off.
    static_body: RigidBodyHandle,
    actors: Vec<Actor>,
}

impl PinballWorld {
    pub fn new(config: WorldConfig) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = config.timestep;
        if let Some(iterations) = NonZeroUsize::new(config.solver_iterations) {
            integration_parameters.num_solver_iterations = iterations;
        }

        let mut bodies = RigidBodySet::new();
        let static_body = bodies.insert(RigidBodyBuilder::fixed().build());

        Self {
            config,
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders: ColliderSet::new(),
            joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            static_body,
            actors: Vec::new(),
        }
    }

    /// Advances the simulation by exactly one fixed timestep.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.config.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }

    /// Draws every actor in insertion order: balls first, then the static
    /// geometry, then the flipper.
    pub fn draw(&self) {
        for actor in &self.actors {
            actor.draw(&self.bodies);
        }
    }

    pub fn add_ball(&mut self, sprite: Texture2D, options: BallOptions) -> RigidBodyHandle {
        let ball = Ball::new(
            sprite,
            options,
            self.config.damping_coefficient(),
            &mut self.bodies,
            &mut self.colliders,
        );
        let handle = ball.body();
        self.actors.push(Actor::Ball(ball));
        handle
    }

    pub fn add_peg(&mut self, x: f32, y: f32, radius: f32) {
        let peg = Peg::new(
            x,
            y,
            radius,
            self.static_body,
            &mut self.bodies,
            &mut self.colliders,
        );
        self.actors.push(Actor::Peg(peg));
    }

    pub fn add_wall(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, w: f32) {
        let wall = Wall::new(
            x1,
            y1,
            x2,
            y2,
            w,
            self.static_body,
            &mut self.bodies,
            &mut self.colliders,
        );
        self.actors.push(Actor::Wall(wall));
    }

    pub fn add_flipper(&mut self, x: f32, y: f32, side: Side) {
        let flipper = Flipper::new(
            x,
            y,
            side,
            self.static_body,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.joints,
        );
        self.actors.push(Actor::Flipper(flipper));
    }

    pub fn snapshot(&self, handle: RigidBodyHandle) -> Option<BodySnapshot> {
        self.bodies.get(handle).map(|body| BodySnapshot {
            position: [body.translation().x, body.translation().y],
            velocity: [body.linvel().x, body.linvel().y],
            rotation: body.rotation().angle(),
        })
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }
}
