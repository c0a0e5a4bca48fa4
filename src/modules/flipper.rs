use macroquad::prelude::*;
use rapier2d::prelude::*;

use crate::modules::statics::draw_quad;

pub const ANCHOR_RADIUS: f32 = 10.0;
pub const PADDLE_LENGTH: f32 = 100.0;
pub const PADDLE_HALF_WIDTH: f32 = 10.0;
const PADDLE_ELASTICITY: f32 = 0.9;
const PADDLE_FRICTION: f32 = 1.0;

/// Which side of the table the paddle nominally serves. Stored, never read:
/// no input is routed to the flipper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A paddle pinned next to a round anchor. Unactuated: no motor, no impulse,
/// no key is wired to it, and the drawn quad does not follow the body.
pub struct Flipper {
    x: f32,
    y: f32,
    side: Side,
    paddle: RigidBodyHandle,
    joint: ImpulseJointHandle,
}

impl Flipper {
    pub fn new(
        x: f32,
        y: f32,
        side: Side,
        static_body: RigidBodyHandle,
        bodies: &mut RigidBodySet,
        colliders: &mut ColliderSet,
        joints: &mut ImpulseJointSet,
    ) -> Self {
        let anchor = ColliderBuilder::ball(ANCHOR_RADIUS)
            .translation(vector![x, y])
            .build();
        colliders.insert_with_parent(anchor, static_body, bodies);

        // The paddle body sits at the origin; its capsule runs from the pivot
        // 100 units along +x in body-local coordinates.
        let paddle = bodies.insert(RigidBodyBuilder::dynamic().build());
        let blade = ColliderBuilder::new(SharedShape::capsule(
            point![x, y],
            point![x + PADDLE_LENGTH, y],
            PADDLE_HALF_WIDTH,
        ))
        .restitution(PADDLE_ELASTICITY)
        .friction(PADDLE_FRICTION)
        .build();
        colliders.insert_with_parent(blade, paddle, bodies);

        // Both local anchors sit at the space origin, not at the pivot.
        let pin = RevoluteJointBuilder::new()
            .local_anchor1(point![0.0, 0.0])
            .local_anchor2(point![0.0, 0.0]);
        let joint = joints.insert(paddle, static_body, pin, true);

        Self {
            x,
            y,
            side,
            paddle,
            joint,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn paddle(&self) -> RigidBodyHandle {
        self.paddle
    }

    pub fn joint(&self) -> ImpulseJointHandle {
        self.joint
    }

    /// Decorative: a fixed quad around the rest pose, whatever the paddle
    /// body is doing.
    pub fn draw(&self) {
        let (x, y) = (self.x, self.y);
        let r = PADDLE_HALF_WIDTH;
        draw_quad(
            [
                vec2(x - r, y - r),
                vec2(x + PADDLE_LENGTH + r, y - r),
                vec2(x + PADDLE_LENGTH + r, y + r),
                vec2(x - r, y + r),
            ],
            WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipper_registers_anchor_paddle_and_pin() {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        let mut joints = ImpulseJointSet::new();
        let static_body = bodies.insert(RigidBodyBuilder::fixed().build());

        let flipper = Flipper::new(
            300.0,
            300.0,
            Side::Left,
            static_body,
            &mut bodies,
            &mut colliders,
            &mut joints,
        );

        // One anchor disc and one paddle capsule, one new dynamic body.
        assert_eq!(bodies.len(), 2);
        assert_eq!(colliders.len(), 2);
        assert!(bodies[flipper.paddle()].is_dynamic());
        assert_eq!(flipper.side(), Side::Left);
    }

    #[test]
    fn pin_anchors_sit_at_the_origin_not_the_pivot() {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        let mut joints = ImpulseJointSet::new();
        let static_body = bodies.insert(RigidBodyBuilder::fixed().build());

        let flipper = Flipper::new(
            300.0,
            300.0,
            Side::Left,
            static_body,
            &mut bodies,
            &mut colliders,
            &mut joints,
        );

        assert_eq!(joints.len(), 1);
        let joint = joints.get(flipper.joint()).unwrap();
        assert_eq!(joint.data.local_anchor1(), point![0.0, 0.0]);
        assert_eq!(joint.data.local_anchor2(), point![0.0, 0.0]);
    }
}
