//! Squish Timeline Module
//!
//! Keyframed squash-and-stretch animations for poked props and the
//! character's landing hop. Poses are scale multipliers around the
//! object's rest scale, so the same timeline works for small mushrooms
//! and house-sized props alike.

use crate::anim::ease::{self, EaseFn};

/// Instantaneous squish pose.
///
/// `scale_xz` and `scale_y` multiply the object's rest scale;
/// `y_offset` lifts it off its rest height in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquishPose {
    pub scale_xz: f32,
    pub scale_y: f32,
    pub y_offset: f32,
}

impl SquishPose {
    /// Undeformed pose.
    pub const REST: Self = Self {
        scale_xz: 1.0,
        scale_y: 1.0,
        y_offset: 0.0,
    };

    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            scale_xz: self.scale_xz + (other.scale_xz - self.scale_xz) * t,
            scale_y: self.scale_y + (other.scale_y - self.scale_y) * t,
            y_offset: self.y_offset + (other.y_offset - self.y_offset) * t,
        }
    }
}

impl Default for SquishPose {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    duration: f32,
    to: SquishPose,
    ease: EaseFn,
}

/// A sequence of eased pose segments played once.
///
/// Each segment starts from the previous segment's end pose and the
/// whole timeline starts from and returns to [`SquishPose::REST`].
#[derive(Debug, Clone)]
pub struct SquishTimeline {
    segments: Vec<Segment>,
    elapsed: f32,
}

impl SquishTimeline {
    /// The pop a prop does when poked: quick squash, a stretch into the
    /// air, then a bouncy settle back to rest.
    pub fn prop_jump() -> Self {
        Self {
            segments: vec![
                Segment {
                    duration: 0.1,
                    to: SquishPose {
                        scale_xz: 1.2,
                        scale_y: 0.8,
                        y_offset: 0.0,
                    },
                    ease: ease::power1_in_out,
                },
                Segment {
                    duration: 0.2,
                    to: SquishPose {
                        scale_xz: 0.8,
                        scale_y: 1.3,
                        y_offset: 2.0,
                    },
                    ease: ease::power2_out,
                },
                Segment {
                    duration: 0.5,
                    to: SquishPose::REST,
                    ease: ease::bounce_out,
                },
            ],
            elapsed: 0.0,
        }
    }

    /// The character's subtle hop on landing: a faint squash, a faint
    /// stretch, back to rest.
    pub fn character_hop() -> Self {
        Self {
            segments: vec![
                Segment {
                    duration: 0.1,
                    to: SquishPose {
                        scale_xz: 1.08,
                        scale_y: 0.9,
                        y_offset: 0.0,
                    },
                    ease: ease::power1_in_out,
                },
                Segment {
                    duration: 0.15,
                    to: SquishPose {
                        scale_xz: 0.92,
                        scale_y: 1.1,
                        y_offset: 0.0,
                    },
                    ease: ease::power1_in_out,
                },
                Segment {
                    duration: 0.25,
                    to: SquishPose::REST,
                    ease: ease::power1_in_out,
                },
            ],
            elapsed: 0.0,
        }
    }

    /// Total play time in seconds.
    pub fn duration(&self) -> f32 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Advance playback. `dt` must be non-negative.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration()
    }

    /// Current pose.
    pub fn pose(&self) -> SquishPose {
        let mut from = SquishPose::REST;
        let mut t = self.elapsed;
        for segment in &self.segments {
            if t < segment.duration {
                let progress = (segment.ease)(t / segment.duration);
                return from.lerp(segment.to, progress);
            }
            t -= segment.duration;
            from = segment.to;
        }
        SquishPose::REST
    }
}

/// Plays one squish timeline at a time.
///
/// A new timeline is rejected while one is still playing, so mashing
/// the poke button cannot restart the animation mid-flight.
#[derive(Debug, Clone, Default)]
pub struct SquishPlayer {
    timeline: Option<SquishTimeline>,
}

impl SquishPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timeline unless one is already playing.
    ///
    /// Returns `true` if playback started.
    pub fn try_play(&mut self, timeline: SquishTimeline) -> bool {
        if self.is_busy() {
            return false;
        }
        self.timeline = Some(timeline);
        true
    }

    pub fn is_busy(&self) -> bool {
        self.timeline.as_ref().is_some_and(|t| !t.finished())
    }

    /// Advance playback and return the current pose.
    pub fn advance(&mut self, dt: f32) -> SquishPose {
        let Some(timeline) = self.timeline.as_mut() else {
            return SquishPose::REST;
        };
        timeline.advance(dt);
        if timeline.finished() {
            self.timeline = None;
            return SquishPose::REST;
        }
        timeline.pose()
    }

    /// Current pose without advancing.
    pub fn pose(&self) -> SquishPose {
        self.timeline
            .as_ref()
            .map_or(SquishPose::REST, |t| t.pose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_starts_and_ends_at_rest() {
        let timeline = SquishTimeline::prop_jump();
        assert_eq!(timeline.pose(), SquishPose::REST);

        let mut done = timeline.clone();
        done.advance(done.duration() + 0.1);
        assert!(done.finished());
        assert_eq!(done.pose(), SquishPose::REST);
    }

    #[test]
    fn test_prop_jump_squashes_then_rises() {
        let mut timeline = SquishTimeline::prop_jump();
        timeline.advance(0.05); // mid-squash
        let squash = timeline.pose();
        assert!(squash.scale_xz > 1.0);
        assert!(squash.scale_y < 1.0);
        assert_eq!(squash.y_offset, 0.0);

        timeline.advance(0.15); // mid-rise
        let rise = timeline.pose();
        assert!(rise.y_offset > 0.5);
        assert!(rise.scale_y > 1.0);
    }

    #[test]
    fn test_character_hop_never_leaves_ground() {
        let mut timeline = SquishTimeline::character_hop();
        let step = timeline.duration() / 40.0;
        for _ in 0..40 {
            timeline.advance(step);
            assert_eq!(timeline.pose().y_offset, 0.0);
        }
    }

    #[test]
    fn test_player_rejects_retrigger_while_busy() {
        let mut player = SquishPlayer::new();
        assert!(player.try_play(SquishTimeline::prop_jump()));
        player.advance(0.1);
        assert!(player.is_busy());
        assert!(!player.try_play(SquishTimeline::prop_jump()));

        // Run the first one out, then a new play is accepted
        player.advance(10.0);
        assert!(!player.is_busy());
        assert!(player.try_play(SquishTimeline::prop_jump()));
    }

    #[test]
    fn test_player_returns_rest_after_finish() {
        let mut player = SquishPlayer::new();
        player.try_play(SquishTimeline::character_hop());
        let pose = player.advance(10.0);
        assert_eq!(pose, SquishPose::REST);
        assert!(!player.is_busy());
    }
}
