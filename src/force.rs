/*
 * Pointer Force Module
 *
 * This module implements the external point force driven by the host's
 * pointer: agents within the force radius of the anchor are attracted to it
 * while the pointer is pressed and repelled from it otherwise. The host
 * reports pointer state once per tick; during the tick the state is
 * read-only input.
 */

use glam::Vec2;

use crate::boid::diff_pos2;

pub const DEFAULT_FORCE_STRENGTH: f32 = 0.3;
pub const DEFAULT_FORCE_RADIUS: f32 = 60.0;

// Keeps the normalization finite when an agent sits exactly on the anchor.
const NORMALIZE_EPS: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerForce {
    pub anchor: Vec2,
    pub active: bool,
    /// Pressed attracts, released repels.
    pub pressed: bool,
    pub radius: f32,
    pub strength: f32,
}

impl Default for PointerForce {
    fn default() -> Self {
        Self {
            anchor: Vec2::ZERO,
            active: false,
            pressed: false,
            radius: DEFAULT_FORCE_RADIUS,
            strength: DEFAULT_FORCE_STRENGTH,
        }
    }
}

impl PointerForce {
    // Per-tick pointer report from the host; `toggle` flips the force on/off.
    pub fn set(&mut self, anchor: Vec2, pressed: bool, toggle: bool) {
        if toggle {
            self.active = !self.active;
        }
        self.anchor = anchor;
        self.pressed = pressed;
    }

    // Velocity contribution for one agent: a unit vector towards the anchor
    // scaled by +strength (attract) or -strength (repel). Zero when the
    // force is inactive or the agent is outside the radius.
    pub fn contribution(&self, position: Vec2) -> Vec2 {
        if !self.active {
            return Vec2::ZERO;
        }
        let dist2 = diff_pos2(self.anchor, position);
        if dist2 >= self.radius * self.radius {
            return Vec2::ZERO;
        }
        let unit = (self.anchor - position) / (dist2 + NORMALIZE_EPS).sqrt();
        let strength = if self.pressed {
            self.strength
        } else {
            -self.strength
        };
        unit * strength
    }
}
