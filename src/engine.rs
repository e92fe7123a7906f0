/*
 * Flock Engine Module
 *
 * This module owns the agent store and drives one simulation tick:
 * brute-force O(n^2) neighbor pass, rule evaluation, pointer force,
 * velocity clamping, position integration, and toroidal wrapping.
 * update(frame, dt) is the sole per-tick entry point; the engine is
 * single-threaded and a tick always runs to completion.
 */

use glam::Vec2;

use crate::boid::{get_speed, Boid};
use crate::force::PointerForce;
use crate::params::{ParamsError, SimulationParams};
use crate::rules::NeighborAccumulator;
use crate::stats::StatsSampler;

pub struct FlockEngine {
    boids: Vec<Boid>,
    params: SimulationParams,
    pointer_force: PointerForce,
    stats: StatsSampler,
}

impl FlockEngine {
    // Validates the parameters once; an invalid set prevents construction.
    pub fn new(boids: Vec<Boid>, params: SimulationParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            boids,
            params,
            pointer_force: PointerForce::default(),
            stats: StatsSampler::new(),
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    // Order-aligned read accessors for rendering and other host collaborators.
    pub fn positions(&self) -> Vec<Vec2> {
        self.boids.iter().map(|b| b.position).collect()
    }

    pub fn velocities(&self) -> Vec<Vec2> {
        self.boids.iter().map(|b| b.velocity).collect()
    }

    pub fn append(&mut self, boid: Boid) {
        self.boids.push(boid);
    }

    // Removes the most recently appended boid; None on an empty store.
    pub fn remove_last(&mut self) -> Option<Boid> {
        self.boids.pop()
    }

    // Per-tick pointer report from the host; `toggle` flips the force on/off.
    pub fn set_pointer_force(&mut self, anchor: Vec2, pressed: bool, toggle: bool) {
        self.pointer_force.set(anchor, pressed, toggle);
    }

    pub fn pointer_force(&self) -> &PointerForce {
        &self.pointer_force
    }

    // Advance the simulation by one step of `dt` simulated seconds.
    pub fn update(&mut self, frame: u64, dt: f32) {
        if self.boids.is_empty() {
            return;
        }

        // New velocities are computed against the pre-tick state so the
        // pass order cannot bias the rules.
        let mut next_velocities = Vec::with_capacity(self.boids.len());
        for (i, boid) in self.boids.iter().enumerate() {
            let mut acc = NeighborAccumulator::default();
            for (j, other) in self.boids.iter().enumerate() {
                if i == j {
                    continue;
                }
                acc.observe(&self.params, boid, other);
            }

            // Momentum is preserved: contributions adjust the current
            // velocity rather than rebuilding it from zero.
            let mut velocity = boid.velocity + acc.contribution(&self.params, boid);
            velocity += self.pointer_force.contribution(boid.position);
            next_velocities.push(limit_velocity(velocity, self.params.max_speed));
        }

        let (width, height) = (self.params.width, self.params.height);
        for (boid, velocity) in self.boids.iter_mut().zip(next_velocities) {
            boid.velocity = velocity;
            boid.position = wrap_position(boid.position + velocity * dt, width, height);
        }

        self.stats.tick(frame, dt, &self.boids);
    }
}

// Rescale to exactly max_speed when the magnitude exceeds it, keeping the
// direction; components are never truncated individually.
fn limit_velocity(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = get_speed(velocity);
    if speed > max_speed {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}

// Pac-man wrap, one conditional per bound rather than a modulo: an agent
// moving faster than one domain extent per tick is wrapped only once, by
// policy.
fn wrap_position(mut pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x >= width {
        pos.x -= width;
    }
    if pos.x < 0.0 {
        pos.x += width;
    }
    if pos.y >= height {
        pos.y -= height;
    }
    if pos.y < 0.0 {
        pos.y += height;
    }
    pos
}
