/*
 * Statistics Module
 *
 * This module computes the periodic aggregate metrics of the flock: mean and
 * population standard deviation of speed, and of the pairwise distance over
 * all unordered agent pairs (brute-force O(n^2), like the neighbor pass).
 * The sampler is a read-only observer: it accumulates simulated time and
 * emits one tracing event per interval.
 */

use tracing::info;

use crate::boid::{get_speed, Boid};

/// Simulated seconds between two emitted samples.
pub const STATS_INTERVAL: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSample {
    pub mean_speed: f32,
    pub speed_std_dev: f32,
    pub mean_distance: f32,
    pub distance_std_dev: f32,
}

// Per-engine time accumulator; independent engines sample independently.
#[derive(Debug, Default)]
pub struct StatsSampler {
    elapsed: f32,
}

impl StatsSampler {
    pub fn new() -> Self {
        Self::default()
    }

    // Accumulates dt and, once a full interval has passed, computes and logs
    // a sample and resets the accumulator. Returns the sample when one was
    // emitted so hosts (and tests) can observe it directly.
    pub fn tick(&mut self, frame: u64, dt: f32, boids: &[Boid]) -> Option<StatsSample> {
        self.elapsed += dt;
        if self.elapsed < STATS_INTERVAL {
            return None;
        }
        self.elapsed = 0.0;

        let sample = compute(boids)?;
        info!(
            frame,
            mean_speed = sample.mean_speed,
            speed_std_dev = sample.speed_std_dev,
            mean_distance = sample.mean_distance,
            distance_std_dev = sample.distance_std_dev,
            "flock statistics"
        );
        Some(sample)
    }
}

// Aggregate metrics over the whole flock; None with fewer than two agents,
// where the pairwise metrics are meaningless.
pub fn compute(boids: &[Boid]) -> Option<StatsSample> {
    let n = boids.len();
    if n < 2 {
        return None;
    }

    let speeds: Vec<f32> = boids.iter().map(|b| get_speed(b.velocity)).collect();
    let (mean_speed, speed_std_dev) = mean_and_std_dev(&speeds);

    let mut distances = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            distances.push((boids[i].position - boids[j].position).length());
        }
    }
    let (mean_distance, distance_std_dev) = mean_and_std_dev(&distances);

    Some(StatsSample {
        mean_speed,
        speed_std_dev,
        mean_distance,
        distance_std_dev,
    })
}

// Mean and population standard deviation; callers guarantee non-empty input.
fn mean_and_std_dev(values: &[f32]) -> (f32, f32) {
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn fewer_than_two_agents_yield_no_sample() {
        assert_eq!(compute(&[]), None);
        let lone = [Boid::new(Vec2::ZERO, Vec2::new(1.0, 0.0))];
        assert_eq!(compute(&lone), None);
    }

    #[test]
    fn two_agent_sample_matches_closed_form() {
        let boids = [
            Boid::new(Vec2::ZERO, Vec2::new(3.0, 4.0)),
            Boid::new(Vec2::new(3.0, 4.0), Vec2::ZERO),
        ];
        let sample = compute(&boids).unwrap();

        // Speeds are 5 and 0: mean 2.5, population std dev 2.5.
        assert_relative_eq!(sample.mean_speed, 2.5);
        assert_relative_eq!(sample.speed_std_dev, 2.5);
        // One pair at distance 5: mean 5, std dev 0.
        assert_relative_eq!(sample.mean_distance, 5.0);
        assert_relative_eq!(sample.distance_std_dev, 0.0);
    }

    #[test]
    fn equal_speeds_have_zero_deviation() {
        let boids = [
            Boid::new(Vec2::ZERO, Vec2::new(0.0, 2.0)),
            Boid::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)),
            Boid::new(Vec2::new(0.0, 1.0), Vec2::new(-2.0, 0.0)),
        ];
        let sample = compute(&boids).unwrap();
        assert_relative_eq!(sample.mean_speed, 2.0);
        assert_relative_eq!(sample.speed_std_dev, 0.0);
    }

    #[test]
    fn sampler_emits_only_after_a_full_interval() {
        let boids = [
            Boid::new(Vec2::ZERO, Vec2::new(1.0, 0.0)),
            Boid::new(Vec2::new(10.0, 0.0), Vec2::new(1.0, 0.0)),
        ];
        let mut sampler = StatsSampler::new();

        assert!(sampler.tick(0, 0.4, &boids).is_none());
        assert!(sampler.tick(1, 0.4, &boids).is_none());
        // Third tick crosses the 1.0 second interval.
        assert!(sampler.tick(2, 0.4, &boids).is_some());
        // The accumulator was reset, so the next tick is gated again.
        assert!(sampler.tick(3, 0.4, &boids).is_none());
    }

    #[test]
    fn sampler_stays_quiet_for_a_lone_agent() {
        let lone = [Boid::new(Vec2::ZERO, Vec2::new(1.0, 0.0))];
        let mut sampler = StatsSampler::new();
        assert!(sampler.tick(0, 2.0, &lone).is_none());
    }
}
