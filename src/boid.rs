/*
 * Boid Module
 *
 * This module defines the Boid struct (one agent: a position and a velocity)
 * and the two scalar helpers used throughout the engine: squared distance
 * between positions and speed (velocity magnitude).
 */

use glam::Vec2;
use rand::Rng;

use crate::params::SimulationParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    // Spawn a boid at a uniform-random position inside the domain, heading in
    // a random direction at a tenth of the speed cap.
    pub fn random<R: Rng>(rng: &mut R, params: &SimulationParams) -> Self {
        let position = Vec2::new(
            rng.gen_range(0.0..params.width),
            rng.gen_range(0.0..params.height),
        );
        let heading = rng.gen_range(0.0..std::f32::consts::TAU);
        let velocity = Vec2::from_angle(heading) * (params.max_speed * 0.1);

        Self { position, velocity }
    }
}

// Squared Euclidean distance between two positions. Kept squared so the
// neighbor tests never pay for a square root.
pub fn diff_pos2(pos_i: Vec2, pos_j: Vec2) -> f32 {
    (pos_i - pos_j).length_squared()
}

// Velocity magnitude; the one place speed takes a square root.
pub fn get_speed(vel: Vec2) -> f32 {
    vel.length()
}
