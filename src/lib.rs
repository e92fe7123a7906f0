/*
 * Flock Simulation Engine - Module Definitions
 *
 * This file defines the module structure for the flocking engine.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use boid::{diff_pos2, get_speed, Boid};
pub use engine::FlockEngine;
pub use force::PointerForce;
pub use params::{ParamsError, SimulationParams};
pub use stats::{StatsSample, StatsSampler};

// Define modules
pub mod boid;
pub mod engine;
pub mod force;
pub mod params;
pub mod rules;
pub mod stats;
