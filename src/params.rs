/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct holding the five flocking
 * parameters (interaction radius, separation radius, and the three rule
 * gains) together with the domain size and speed cap. Parameters are
 * validated once, before an engine is constructed, and are immutable for the
 * engine's lifetime; ticks assume they are well-formed.
 */

use thiserror::Error;

pub const DEFAULT_WIDTH: f32 = 1600.0;
pub const DEFAULT_HEIGHT: f32 = 900.0;
pub const DEFAULT_MAX_SPEED: f32 = 360.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),
    #[error("separation radius {separation} exceeds interaction radius {interaction}")]
    SeparationExceedsInteraction { separation: f32, interaction: f32 },
    #[error("rule gain must be finite and non-negative, got {0}")]
    InvalidGain(f32),
    #[error("domain extents must be finite and positive, got {width}x{height}")]
    InvalidDomain { width: f32, height: f32 },
    #[error("max speed must be finite and positive, got {0}")]
    InvalidMaxSpeed(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    /// Alignment/cohesion neighborhood radius (d).
    pub interaction_radius: f32,
    /// Separation radius (d_s), never larger than the interaction radius.
    pub separation_radius: f32,
    /// Separation gain (s).
    pub separation: f32,
    /// Alignment gain (a).
    pub alignment: f32,
    /// Cohesion gain (c).
    pub cohesion: f32,
    /// Domain width; positions wrap into [0, width).
    pub width: f32,
    /// Domain height; positions wrap into [0, height).
    pub height: f32,
    /// Speed cap applied after all contributions each tick.
    pub max_speed: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            interaction_radius: 50.0,
            separation_radius: 25.0,
            separation: 0.1,
            alignment: 0.1,
            cohesion: 0.01,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

impl SimulationParams {
    // Construction-time validation; ticks never re-check these.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for radius in [self.interaction_radius, self.separation_radius] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ParamsError::InvalidRadius(radius));
            }
        }
        if self.separation_radius > self.interaction_radius {
            return Err(ParamsError::SeparationExceedsInteraction {
                separation: self.separation_radius,
                interaction: self.interaction_radius,
            });
        }
        for gain in [self.separation, self.alignment, self.cohesion] {
            if !gain.is_finite() || gain < 0.0 {
                return Err(ParamsError::InvalidGain(gain));
            }
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ParamsError::InvalidDomain {
                width: self.width,
                height: self.height,
            });
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(ParamsError::InvalidMaxSpeed(self.max_speed));
        }
        Ok(())
    }
}
