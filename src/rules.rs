/*
 * Flocking Rules Module
 *
 * This module contains the neighbor predicate and the three classic flocking
 * rules:
 * 1. Separation: push away from each neighbor closer than the separation radius
 * 2. Alignment: steer towards the mean velocity of the neighborhood
 * 3. Cohesion: steer towards the mean position of the neighborhood
 *
 * Separation reacts to each too-close neighbor individually and is summed
 * over the pass; alignment and cohesion react once to the neighborhood
 * aggregate. The NeighborAccumulator collects everything in a single pass
 * over the other agents, using squared distances throughout.
 */

use glam::Vec2;

use crate::boid::{diff_pos2, Boid};
use crate::params::SimulationParams;

// True iff j lies strictly inside the interaction radius of i.
pub fn is_neighbor(params: &SimulationParams, pos_i: Vec2, pos_j: Vec2) -> bool {
    diff_pos2(pos_i, pos_j) < params.interaction_radius * params.interaction_radius
}

// Rule 1, separation: repel from a single neighbor closer than the
// separation radius, proportionally to the offset.
pub fn rule1(params: &SimulationParams, pos_i: Vec2, pos_j: Vec2) -> Vec2 {
    if diff_pos2(pos_i, pos_j) < params.separation_radius * params.separation_radius {
        -params.separation * (pos_j - pos_i)
    } else {
        Vec2::ZERO
    }
}

// Rule 2, alignment: steer towards the mean neighbor velocity.
pub fn rule2(params: &SimulationParams, vel_i: Vec2, mean_vel: Vec2) -> Vec2 {
    params.alignment * (mean_vel - vel_i)
}

// Rule 3, cohesion: steer towards the neighborhood center of mass
// (the agent itself excluded).
pub fn rule3(params: &SimulationParams, pos_i: Vec2, center_mass: Vec2) -> Vec2 {
    params.cohesion * (center_mass - pos_i)
}

// Single-pass neighbor aggregates for one agent: summed separation pushes,
// neighbor position/velocity sums, and the neighbor count.
#[derive(Debug, Default)]
pub struct NeighborAccumulator {
    separation: Vec2,
    pos_sum: Vec2,
    vel_sum: Vec2,
    count: u32,
}

impl NeighborAccumulator {
    // Feed one other agent (the caller excludes self).
    pub fn observe(&mut self, params: &SimulationParams, this: &Boid, other: &Boid) {
        if !is_neighbor(params, this.position, other.position) {
            return;
        }
        self.separation += rule1(params, this.position, other.position);
        self.pos_sum += other.position;
        self.vel_sum += other.velocity;
        self.count += 1;
    }

    // Combined rule contribution for the agent the pass was run for.
    // With no neighbors only the (necessarily zero) separation term remains,
    // so alignment and cohesion leave the velocity untouched.
    pub fn contribution(&self, params: &SimulationParams, this: &Boid) -> Vec2 {
        let mut total = self.separation;
        if self.count > 0 {
            let n = self.count as f32;
            total += rule2(params, this.velocity, self.vel_sum / n);
            total += rule3(params, this.position, self.pos_sum / n);
        }
        total
    }
}
