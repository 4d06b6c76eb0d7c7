//! Session Module
//!
//! Drives a loaded world: routes input into the motion controller,
//! keeps the follow camera on the player, runs squish animations, and
//! reports cue events for the embedding layer to turn into sound and
//! UI. Before a world is attached every update is a no-op.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use crate::anim::{SquishPlayer, SquishPose, SquishTimeline};
use crate::camera::FollowCamera;
use crate::input::InputState;
use crate::interact::{pick_object, ModalState};
use crate::player::{Locomotion, MoveBasis, PlayerMotionController, StepInput};
use crate::world::{ObjectKind, World};

/// Things that happened during an update or interaction, in order.
///
/// The engine plays no audio and draws no UI itself; the embedding
/// layer reacts to these.
#[derive(Debug, Clone, PartialEq)]
pub enum CueEvent {
    /// The player left the ground from a jump press.
    Jumped,
    /// The player touched down after being airborne.
    Landed,
    /// The player fell off the world or pressed the respawn key.
    Respawned,
    /// A prop was poked and its squish animation started.
    PropPoked { name: String },
    /// A landmark opened its modal.
    ModalOpened { object: String },
    /// The modal was dismissed.
    ModalClosed,
}

/// Render-ready character state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTransform {
    /// Feet position in world space.
    pub position: Vec3,
    /// Facing angle around Y in radians.
    pub yaw: f32,
    /// Landing-hop deformation.
    pub pose: SquishPose,
}

/// A running walk-around session.
#[derive(Debug, Clone, Default)]
pub struct WorldSession {
    world: Option<World>,
    player: PlayerMotionController,
    /// Keyboard and thumbstick state, fed by the embedding layer.
    pub input: InputState,
    /// Third-person camera, updated every frame.
    pub camera: FollowCamera,
    modal: ModalState,
    locomotion: Locomotion,
    character_anim: SquishPlayer,
    prop_anims: HashMap<String, SquishPlayer>,
}

impl WorldSession {
    /// Create a session with no world attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a world and place the player at its spawn point.
    pub fn attach_world(&mut self, world: World) {
        log::info!(
            "attaching world '{}': {} triangles, {} objects",
            world.name,
            world.collision.triangle_count(),
            world.objects.len()
        );
        self.player = PlayerMotionController::new(world.spawn);
        self.camera.follow(self.player.position());
        self.modal = ModalState::new();
        self.prop_anims.clear();
        self.world = Some(world);
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn player(&self) -> &PlayerMotionController {
        &self.player
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Content of the open modal, if any.
    pub fn open_modal(&self) -> Option<&crate::world::ModalContent> {
        self.modal.content()
    }

    /// Switch to head-relative movement for a VR session.
    pub fn begin_vr(&mut self) {
        log::info!("entering VR: movement becomes head-relative");
        self.locomotion = Locomotion::HeadRelative;
    }

    /// Return to camera-relative movement.
    pub fn end_vr(&mut self) {
        log::info!("leaving VR: movement becomes camera-relative");
        self.locomotion = Locomotion::CameraRelative;
    }

    pub fn locomotion(&self) -> Locomotion {
        self.locomotion
    }

    /// Step the simulation by `dt` seconds.
    ///
    /// `head_forward` is the HMD view direction, used as the movement
    /// basis and facing target while in VR. Without an attached world
    /// this only runs animations and returns no events.
    pub fn update(&mut self, dt: f32, head_forward: Option<Vec3>) -> Vec<CueEvent> {
        let mut events = Vec::new();

        let Some(world) = self.world.as_ref() else {
            self.advance_animations(dt);
            return events;
        };

        let basis = match self.locomotion {
            Locomotion::CameraRelative => MoveBasis::from_forward(self.camera.forward()),
            Locomotion::HeadRelative => {
                MoveBasis::from_forward(head_forward.unwrap_or_else(|| self.camera.forward()))
            }
        };
        let facing_override = match self.locomotion {
            Locomotion::HeadRelative => Some(basis.yaw()),
            Locomotion::CameraRelative => None,
        };

        let step = StepInput {
            dt,
            intent: self.input.intent(),
            jump: self.input.keyboard.take_jump(),
            basis,
            facing_override,
        };
        let outcome = self.player.step(&step, &world.collision);

        if outcome.jumped {
            events.push(CueEvent::Jumped);
        }
        if outcome.landed {
            self.character_anim.try_play(SquishTimeline::character_hop());
            events.push(CueEvent::Landed);
        }
        if outcome.respawned {
            log::debug!("player fell out of the world, respawning");
            events.push(CueEvent::Respawned);
        }

        if self.input.keyboard.take_respawn() {
            self.player.respawn();
            events.push(CueEvent::Respawned);
        }

        self.camera.follow(self.player.position());

        if self.input.pointer.take_click() {
            if let Some(ndc) = self.input.pointer.ndc() {
                if let Some(cue) = self.interact(ndc) {
                    events.push(cue);
                }
            }
        }
        // The interact key dismisses an open modal, otherwise it acts as a
        // click at the current pointer position.
        if self.input.keyboard.take_interact() {
            let cue = if self.modal.is_open() {
                self.close_modal()
            } else {
                self.input.pointer.ndc().and_then(|ndc| self.interact(ndc))
            };
            if let Some(cue) = cue {
                events.push(cue);
            }
        }
        // Escape only ever dismisses.
        if self.input.keyboard.take_cancel() {
            if let Some(cue) = self.close_modal() {
                events.push(cue);
            }
        }

        self.advance_animations(dt);
        events
    }

    /// Handle a pointer click at normalized device coordinates.
    ///
    /// Picks the nearest object under the cursor. Props start their
    /// squish animation (ignored while one is already playing);
    /// landmarks open their modal. Ignored entirely while a modal is
    /// open.
    pub fn interact(&mut self, ndc: Vec2) -> Option<CueEvent> {
        let (origin, direction) = self.camera.pointer_ray(ndc);
        self.interact_ray(origin, direction)
    }

    /// Handle a pick along an explicit world-space ray, e.g. a VR
    /// controller's pose ray. Same rules as [`WorldSession::interact`].
    pub fn interact_ray(&mut self, origin: Vec3, direction: Vec3) -> Option<CueEvent> {
        let world = self.world.as_ref()?;
        if self.modal.is_open() {
            return None;
        }

        let pick = pick_object(&world.objects, origin, direction)?;
        let object = world.object(&pick.name)?;

        match object.kind {
            ObjectKind::Prop => {
                let player = self.prop_anims.entry(pick.name.clone()).or_default();
                if player.try_play(SquishTimeline::prop_jump()) {
                    Some(CueEvent::PropPoked { name: pick.name })
                } else {
                    None
                }
            }
            ObjectKind::Landmark => {
                let content = world.modal(&pick.name)?.clone();
                self.modal.open(content);
                Some(CueEvent::ModalOpened { object: pick.name })
            }
        }
    }

    /// Dismiss the open modal.
    pub fn close_modal(&mut self) -> Option<CueEvent> {
        self.modal.close().then_some(CueEvent::ModalClosed)
    }

    /// Character state for rendering this frame.
    pub fn character_transform(&self) -> CharacterTransform {
        CharacterTransform {
            position: self.player.position(),
            yaw: self.player.facing(),
            pose: self.character_anim.pose(),
        }
    }

    /// Current squish pose of a prop, [`SquishPose::REST`] when idle.
    pub fn prop_pose(&self, name: &str) -> SquishPose {
        self.prop_anims
            .get(name)
            .map_or(SquishPose::REST, |p| p.pose())
    }

    fn advance_animations(&mut self, dt: f32) {
        self.character_anim.advance(dt);
        for player in self.prop_anims.values_mut() {
            player.advance(dt);
        }
        self.prop_anims.retain(|_, p| p.is_busy());
    }
}
