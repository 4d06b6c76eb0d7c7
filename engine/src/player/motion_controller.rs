//! Player Motion Controller
//!
//! Integrates gravity and input into a moving capsule, resolves it against
//! the static world collider, and derives the character's visual transform
//! (feet position plus a smoothed facing angle). A fall past the respawn
//! threshold teleports the player back to the spawn point.
//!
//! # Physics model
//!
//! - Move speed: 7.0 m/s (horizontal speed is exactly this when moving)
//! - Gravity: 30.0 m/s², vertical channel only
//! - Jump impulse: 11.0 m/s, grounded only
//! - Step dt clamped to 50 ms to ride out frame hitches
//!
//! # Usage
//!
//! ```rust,ignore
//! use walkabout_engine::player::{PlayerMotionController, MoveBasis, StepInput};
//! use glam::{Vec2, Vec3};
//!
//! let mut player = PlayerMotionController::new(spawn_point);
//!
//! // Each frame:
//! let input = StepInput {
//!     dt,
//!     intent: Vec2::new(right_axis, forward_axis),
//!     jump: jump_pressed,
//!     basis: MoveBasis::from_forward(camera_forward),
//!     facing_override: None,
//! };
//! let outcome = player.step(&input, &world_mesh);
//! character.set_transform(player.position(), player.facing());
//! ```

use glam::{Vec2, Vec3};

use crate::physics::{Capsule, CollisionMesh};
use crate::player::locomotion::MoveBasis;

/// Gravity acceleration in m/s².
pub const GRAVITY: f32 = 30.0;

/// Player capsule radius in meters.
pub const CAPSULE_RADIUS: f32 = 0.35;

/// Player capsule height (feet to top segment point) in meters.
pub const CAPSULE_HEIGHT: f32 = 1.0;

/// Vertical velocity applied when jumping, in m/s.
pub const JUMP_SPEED: f32 = 11.0;

/// Horizontal movement speed in m/s.
pub const MOVE_SPEED: f32 = 7.0;

/// Upper bound on a single step's delta time, in seconds.
pub const MAX_STEP_DT: f32 = 0.05;

/// Feet height below which the player respawns.
pub const FALL_RESPAWN_Y: f32 = -20.0;

/// Facing interpolation ratio applied once per step.
///
/// A fixed per-step ratio, not a dt-scaled decay: the turn settles in a
/// handful of steps and never overshoots.
pub const FACING_SMOOTHING: f32 = 0.4;

/// Per-step inputs to [`PlayerMotionController::step`].
#[derive(Debug, Clone, Copy)]
pub struct StepInput {
    /// Elapsed seconds since the previous step. Values above [`MAX_STEP_DT`]
    /// are clamped; zero or negative makes the step a no-op.
    pub dt: f32,
    /// Movement intent: `x` = strafe right, `y` = forward. Any magnitude is
    /// accepted; the direction is renormalized before use.
    pub intent: Vec2,
    /// Jump edge trigger (pressed this frame).
    pub jump: bool,
    /// Horizontal basis the intent is resolved against.
    pub basis: MoveBasis,
    /// Facing target override in radians (`atan2(x, z)`). Used by
    /// head-relative locomotion where the character faces the gaze rather
    /// than the movement direction.
    pub facing_override: Option<f32>,
}

impl Default for StepInput {
    fn default() -> Self {
        Self {
            dt: 0.0,
            intent: Vec2::ZERO,
            jump: false,
            basis: MoveBasis::default(),
            facing_override: None,
        }
    }
}

/// What happened during a step, for cue/animation collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// A jump impulse was applied this step.
    pub jumped: bool,
    /// The player fell past the threshold and was reset to spawn.
    pub respawned: bool,
    /// The player transitioned from airborne to grounded this step.
    pub landed: bool,
}

/// Owns the player capsule, velocity, and derived character transform.
///
/// All state is explicit and exclusively owned here; collaborators read the
/// derived transform and flags, never write them. Steps must run in order:
/// gravity/jump, then intent, then collision, then transform derivation.
#[derive(Debug, Clone)]
pub struct PlayerMotionController {
    collider: Capsule,
    velocity: Vec3,
    grounded: bool,
    moving: bool,
    facing: f32,
    spawn: Vec3,
}

impl Default for PlayerMotionController {
    /// A controller standing at the origin.
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl PlayerMotionController {
    /// Create a controller standing at `spawn` (feet position).
    ///
    /// The spawn point is captured once and reused for every respawn.
    pub fn new(spawn: Vec3) -> Self {
        Self {
            collider: Capsule::upright(spawn, CAPSULE_RADIUS, CAPSULE_HEIGHT),
            velocity: Vec3::ZERO,
            grounded: false,
            moving: false,
            facing: std::f32::consts::FRAC_PI_2,
            spawn,
        }
    }

    /// Character feet position, derived from the capsule.
    pub fn position(&self) -> Vec3 {
        self.collider.feet()
    }

    /// Smoothed facing angle in radians, `atan2(x, z)` convention.
    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Whether horizontal intent moved the player this step.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn collider(&self) -> &Capsule {
        &self.collider
    }

    pub fn spawn_point(&self) -> Vec3 {
        self.spawn
    }

    /// Reset the capsule to the spawn point, zero velocity, clear flags.
    pub fn respawn(&mut self) {
        self.collider = Capsule::upright(self.spawn, CAPSULE_RADIUS, CAPSULE_HEIGHT);
        self.velocity = Vec3::ZERO;
        self.grounded = false;
        self.moving = false;
    }

    /// Advance the simulation by one frame.
    ///
    /// Order within a step is fixed: gravity, jump, horizontal intent,
    /// translation, collision response, respawn check, facing smoothing.
    /// A `dt <= 0` step changes nothing.
    pub fn step(&mut self, input: &StepInput, world: &CollisionMesh) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if input.dt <= 0.0 {
            return outcome;
        }
        let dt = input.dt.min(MAX_STEP_DT);
        let was_grounded = self.grounded;

        if !self.grounded {
            self.velocity.y -= GRAVITY * dt;
        }

        if input.jump && self.grounded {
            self.velocity.y = JUMP_SPEED;
            self.grounded = false;
            outcome.jumped = true;
        }

        // Horizontal velocity is overwritten from intent every step; there is
        // no momentum. Normalizing keeps diagonal movement at MOVE_SPEED.
        let mut heading = None;
        let world_intent =
            input.basis.forward * input.intent.y + input.basis.right * input.intent.x;
        let direction = world_intent.normalize_or_zero();
        if direction != Vec3::ZERO {
            self.velocity.x = direction.x * MOVE_SPEED;
            self.velocity.z = direction.z * MOVE_SPEED;
            heading = Some(self.velocity.x.atan2(self.velocity.z));
            self.moving = true;
        } else {
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
            self.moving = false;
        }

        self.collider.translate(self.velocity * dt);

        match world.capsule_intersect(&self.collider) {
            Some(contact) => {
                self.grounded = contact.normal.y > 0.0;
                self.collider.translate(contact.normal * contact.depth);
                if self.grounded {
                    self.velocity.x = 0.0;
                    self.velocity.z = 0.0;
                    if self.velocity.y < 0.0 {
                        self.velocity.y = 0.0;
                    }
                }
            }
            None => self.grounded = false,
        }
        outcome.landed = self.grounded && !was_grounded;

        if self.position().y < FALL_RESPAWN_Y {
            self.respawn();
            outcome.respawned = true;
            outcome.landed = false;
            return outcome;
        }

        // Turn toward the gaze (VR) or the movement heading (desktop),
        // taking the short way around the circle.
        let target = input.facing_override.or(heading);
        if let Some(target) = target {
            let mut diff = (target - self.facing) % std::f32::consts::TAU;
            if diff > std::f32::consts::PI {
                diff -= std::f32::consts::TAU;
            } else if diff < -std::f32::consts::PI {
                diff += std::f32::consts::TAU;
            }
            self.facing += diff * FACING_SMOOTHING;
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Triangle;

    const DT: f32 = 0.016;

    fn flat_floor() -> CollisionMesh {
        let half = 50.0;
        let a = Vec3::new(-half, 0.0, -half);
        let b = Vec3::new(half, 0.0, -half);
        let c = Vec3::new(half, 0.0, half);
        let d = Vec3::new(-half, 0.0, half);
        CollisionMesh::from_triangles(vec![Triangle::new(a, c, b), Triangle::new(a, d, c)])
    }

    fn idle(dt: f32) -> StepInput {
        StepInput {
            dt,
            intent: Vec2::ZERO,
            jump: false,
            basis: MoveBasis::from_forward(Vec3::NEG_Z),
            facing_override: None,
        }
    }

    fn settle(player: &mut PlayerMotionController, world: &CollisionMesh) {
        for _ in 0..200 {
            player.step(&idle(DT), world);
        }
        assert!(player.is_grounded());
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let world = flat_floor();
        let mut player = PlayerMotionController::new(Vec3::new(0.0, 5.0, 0.0));
        player.step(&idle(DT), &world); // pick up some fall velocity
        let collider = *player.collider();
        let velocity = player.velocity();

        let outcome = player.step(&idle(0.0), &world);
        assert_eq!(outcome, StepOutcome::default());
        assert_eq!(*player.collider(), collider);
        assert_eq!(player.velocity(), velocity);
    }

    #[test]
    fn test_no_gravity_while_grounded() {
        let world = flat_floor();
        let mut player = PlayerMotionController::new(Vec3::new(0.0, 1.0, 0.0));
        settle(&mut player, &world);

        let vy = player.velocity().y;
        player.step(&idle(DT), &world);
        assert_eq!(player.velocity().y, vy, "gravity must not apply on the ground");
    }

    #[test]
    fn test_jump_applies_impulse_exactly_once() {
        let world = flat_floor();
        let mut player = PlayerMotionController::new(Vec3::new(0.0, 1.0, 0.0));
        settle(&mut player, &world);

        let mut input = idle(DT);
        input.jump = true;
        let outcome = player.step(&input, &world);
        assert!(outcome.jumped);
        assert_eq!(player.velocity().y, JUMP_SPEED);
        assert!(!player.is_grounded());

        // Holding jump while airborne must not re-trigger.
        let outcome = player.step(&input, &world);
        assert!(!outcome.jumped);
        assert!(player.velocity().y < JUMP_SPEED);
    }

    #[test]
    fn test_fall_converges_onto_floor() {
        let world = flat_floor();
        let mut player = PlayerMotionController::new(Vec3::new(0.0, 10.0, 0.0));

        let mut landed = false;
        for _ in 0..400 {
            let outcome = player.step(&idle(DT), &world);
            landed |= outcome.landed;
        }
        assert!(landed);
        assert!(player.is_grounded());
        assert!(
            player.position().y.abs() < 0.05,
            "feet should rest at floor level, got {}",
            player.position().y
        );
    }

    #[test]
    fn test_respawn_restores_spawn_exactly() {
        let world = CollisionMesh::default(); // bottomless
        let spawn = Vec3::new(3.0, 2.0, -4.0);
        let mut player = PlayerMotionController::new(spawn);

        let mut respawned = false;
        let mut input = idle(DT);
        input.intent = Vec2::new(0.3, 1.0); // drift while falling
        for _ in 0..600 {
            let outcome = player.step(&input, &world);
            if outcome.respawned {
                respawned = true;
                break;
            }
        }
        assert!(respawned, "player should fall past the threshold");
        let expected = Capsule::upright(spawn, CAPSULE_RADIUS, CAPSULE_HEIGHT);
        assert_eq!(*player.collider(), expected);
        assert_eq!(player.velocity(), Vec3::ZERO);
        assert!(!player.is_grounded());
        assert!(!player.is_moving());
    }

    #[test]
    fn test_horizontal_speed_is_normalized() {
        let world = CollisionMesh::default();
        // Huge diagonal intent still moves at exactly MOVE_SPEED.
        let mut input = idle(DT);
        input.intent = Vec2::new(25.0, 25.0);

        let mut player = PlayerMotionController::new(Vec3::new(0.0, 5.0, 0.0));
        player.step(&input, &world);
        let v = player.velocity();
        let horizontal = (v.x * v.x + v.z * v.z).sqrt();
        assert!(
            (horizontal - MOVE_SPEED).abs() < 1e-4,
            "horizontal speed {}",
            horizontal
        );
        assert!(player.is_moving());
    }

    #[test]
    fn test_tiny_intent_is_normalized_up() {
        let world = CollisionMesh::default();
        let mut input = idle(DT);
        input.intent = Vec2::new(0.0, 0.05); // light thumbstick push

        let mut player = PlayerMotionController::new(Vec3::new(0.0, 5.0, 0.0));
        player.step(&input, &world);
        let v = player.velocity();
        let horizontal = (v.x * v.x + v.z * v.z).sqrt();
        assert!((horizontal - MOVE_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_facing_converges_monotonically() {
        let world = CollisionMesh::default();
        let mut input = idle(DT);
        input.intent = Vec2::new(0.0, -1.0); // backward: heading atan2(0, 7) = 0

        let mut player = PlayerMotionController::new(Vec3::new(0.0, 100.0, 0.0));
        player.step(&input, &world);
        let v = player.velocity();
        let target = v.x.atan2(v.z);

        let mut last_err = (target - player.facing()).abs();
        for _ in 0..30 {
            player.step(&input, &world);
            let err = (target - player.facing()).abs();
            assert!(err <= last_err + 1e-6, "facing error must not grow");
            last_err = err;
        }
        assert!(last_err < 1e-3, "facing should converge, error {}", last_err);
    }

    #[test]
    fn test_facing_takes_short_way_around() {
        let world = CollisionMesh::default();
        let mut player = PlayerMotionController::new(Vec3::new(0.0, 100.0, 0.0));
        // Facing starts at PI/2. Target just across the -PI/PI seam should
        // rotate through PI, not back through zero.
        let mut input = idle(DT);
        input.facing_override = Some(-3.0);
        let before = player.facing();
        player.step(&input, &world);
        assert!(
            player.facing() > before,
            "should rotate forward through PI: {} -> {}",
            before,
            player.facing()
        );
    }

    #[test]
    fn test_grounded_contact_zeroes_horizontal_velocity() {
        let world = flat_floor();
        let mut player = PlayerMotionController::new(Vec3::new(0.0, 0.5, 0.0));
        let mut input = idle(DT);
        input.intent = Vec2::new(0.0, 1.0);
        settle(&mut player, &world);

        player.step(&input, &world);
        // Walking on the ground: contact response clears the horizontal
        // channel after the translation has been applied.
        assert!(player.is_grounded());
        assert_eq!(player.velocity().x, 0.0);
        assert_eq!(player.velocity().z, 0.0);
        assert!(player.is_moving());
    }

    #[test]
    fn test_walking_covers_ground() {
        let world = flat_floor();
        let mut player = PlayerMotionController::new(Vec3::new(0.0, 0.5, 0.0));
        settle(&mut player, &world);
        let start = player.position();

        let mut input = idle(DT);
        input.intent = Vec2::new(0.0, 1.0); // forward, basis -Z
        for _ in 0..100 {
            player.step(&input, &world);
        }
        let moved = player.position() - start;
        // 100 steps * 0.016 s * 7 m/s = 11.2 m toward -Z.
        assert!(moved.z < -10.0, "moved {:?}", moved);
        assert!(moved.x.abs() < 0.1);
    }

    #[test]
    fn test_dt_clamp_limits_travel() {
        let world = CollisionMesh::default();
        let mut input = idle(10.0); // absurd frame hitch
        input.intent = Vec2::new(0.0, 1.0);

        let mut player = PlayerMotionController::new(Vec3::new(0.0, 100.0, 0.0));
        let before = player.position();
        player.step(&input, &world);
        let travel = (player.position() - before).length();
        // One clamped step moves at most MOVE_SPEED * MAX_STEP_DT horizontally
        // plus the gravity fall.
        assert!(travel < 1.0, "travel {}", travel);
    }
}
