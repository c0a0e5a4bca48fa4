use macroquad::prelude::*;
use rapier2d::prelude::*;

pub const WALL_ELASTICITY: f32 = 0.9;
pub const WALL_FRICTION: f32 = 1.0;

/// Immovable table furniture. Implementations hang a collider off the shared
/// static anchor and keep their own copy of the geometry for drawing, since
/// the anchor body never moves.
pub trait StaticActor {
    /// Every concrete shape supplies its own draw; reaching this default is a
    /// programming error.
    fn draw(&self) {
        unimplemented!("static actor draw");
    }
}

/// Paints a solid quad as two triangles in strip order (v0 v1 v2, v1 v2 v3).
pub(crate) fn draw_quad(v: [Vec2; 4], color: Color) {
    draw_triangle(v[0], v[1], v[2], color);
    draw_triangle(v[1], v[2], v[3], color);
}

/// A round bumper anchored to the shared static body.
#[derive(Debug, Clone, Copy)]
pub struct Peg {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Peg {
    pub fn new(
        x: f32,
        y: f32,
        radius: f32,
        static_body: RigidBodyHandle,
        bodies: &mut RigidBodySet,
        colliders: &mut ColliderSet,
    ) -> Self {
        let collider = ColliderBuilder::ball(radius)
            .translation(vector![x, y])
            .build();
        colliders.insert_with_parent(collider, static_body, bodies);
        Self { x, y, radius }
    }

    /// Axis-aligned bounding quad of the circle. The peg is painted as a
    /// square, not a disc.
    pub fn bounding_quad(&self) -> [Vec2; 4] {
        let Self { x, y, radius: r } = *self;
        [
            vec2(x - r, y - r),
            vec2(x - r, y + r),
            vec2(x + r, y - r),
            vec2(x + r, y + r),
        ]
    }
}

impl StaticActor for Peg {
    fn draw(&self) {
        draw_quad(self.bounding_quad(), WHITE);
    }
}

/// A stretch of table edge: a capsule collider between two endpoints with a
/// little half-thickness.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Half-thickness of the collision capsule.
    pub w: f32,
}

impl Wall {
    pub fn new(
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        w: f32,
        static_body: RigidBodyHandle,
        bodies: &mut RigidBodySet,
        colliders: &mut ColliderSet,
    ) -> Self {
        let shape = SharedShape::capsule(point![x1, y1], point![x2, y2], w);
        let collider = ColliderBuilder::new(shape)
            .restitution(WALL_ELASTICITY)
            .friction(WALL_FRICTION)
            .build();
        colliders.insert_with_parent(collider, static_body, bodies);
        Self { x1, y1, x2, y2, w }
    }

    /// Draw quad for the segment. Corners are offset diagonally from each
    /// endpoint, not along the segment normal.
    pub fn quad(&self) -> [Vec2; 4] {
        let Self { x1, y1, x2, y2, w } = *self;
        [
            vec2(x1 - w, y1 - w),
            vec2(x1 + w, y1 + w),
            vec2(x2 - w, y2 - w),
            vec2(x2 + w, y2 + w),
        ]
    }
}

impl StaticActor for Wall {
    fn draw(&self) {
        draw_quad(self.quad(), WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn anchored_sets() -> (RigidBodySet, ColliderSet, RigidBodyHandle) {
        let mut bodies = RigidBodySet::new();
        let colliders = ColliderSet::new();
        let anchor = bodies.insert(RigidBodyBuilder::fixed().build());
        (bodies, colliders, anchor)
    }

    #[test]
    fn wall_quad_matches_stated_construction() {
        let wall = Wall {
            x1: 0.0,
            y1: 0.0,
            x2: 100.0,
            y2: 0.0,
            w: 3.0,
        };
        assert_eq!(
            wall.quad(),
            [
                vec2(-3.0, -3.0),
                vec2(3.0, 3.0),
                vec2(97.0, -3.0),
                vec2(103.0, 3.0),
            ]
        );
    }

    #[test]
    fn peg_bounding_quad_is_exact() {
        let peg = Peg {
            x: 470.0,
            y: 390.0,
            radius: 10.0,
        };
        assert_eq!(
            peg.bounding_quad(),
            [
                vec2(460.0, 380.0),
                vec2(460.0, 400.0),
                vec2(480.0, 380.0),
                vec2(480.0, 400.0),
            ]
        );
    }

    #[test]
    fn peg_hangs_a_ball_collider_off_the_anchor() {
        let (mut bodies, mut colliders, anchor) = anchored_sets();
        let peg = Peg::new(470.0, 390.0, 10.0, anchor, &mut bodies, &mut colliders);

        assert_eq!(colliders.len(), 1);
        let (_, collider) = colliders.iter().next().unwrap();
        assert_eq!(collider.parent(), Some(anchor));
        assert_eq!(collider.shape().as_ball().unwrap().radius, peg.radius);
    }

    #[test]
    fn wall_hangs_a_capsule_off_the_anchor_with_fixed_coefficients() {
        let (mut bodies, mut colliders, anchor) = anchored_sets();
        let _wall = Wall::new(0.0, 0.0, 100.0, 0.0, 3.0, anchor, &mut bodies, &mut colliders);

        assert_eq!(colliders.len(), 1);
        let (_, collider) = colliders.iter().next().unwrap();
        assert_eq!(collider.parent(), Some(anchor));
        assert_eq!(collider.restitution(), WALL_ELASTICITY);
        assert_eq!(collider.friction(), WALL_FRICTION);
        assert!(collider.shape().as_capsule().is_some());
    }

    struct Bare;
    impl StaticActor for Bare {}

    #[test]
    #[should_panic(expected = "not implemented")]
    fn bare_static_actor_draw_aborts() {
        Bare.draw();
    }

    proptest! {
        #[test]
        fn wall_quad_is_a_pure_function_of_its_inputs(
            x1 in -1000.0f32..1000.0,
            y1 in -1000.0f32..1000.0,
            x2 in -1000.0f32..1000.0,
            y2 in -1000.0f32..1000.0,
            w in 0.5f32..50.0,
        ) {
            let wall = Wall { x1, y1, x2, y2, w };
            let quad = wall.quad();
            prop_assert_eq!(quad, wall.quad());
            prop_assert_eq!(quad[0], vec2(x1 - w, y1 - w));
            prop_assert_eq!(quad[1], vec2(x1 + w, y1 + w));
            prop_assert_eq!(quad[2], vec2(x2 - w, y2 - w));
            prop_assert_eq!(quad[3], vec2(x2 + w, y2 + w));
        }
    }
}
