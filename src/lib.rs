//! Mass-spring soft bodies for real-time deformation.
//!
//! `squishy` simulates a deformable "blob" as point masses joined by Hookean
//! springs on a latitude x longitude grid, integrated with semi-implicit
//! Euler and per-step velocity damping. The host owns the frame clock and
//! the renderer; this crate hands back flat position and normal buffers.
//!
//! # Features
//!
//! - **Grid topology**: structural and shear springs from band counts
//! - **Hookean forces + impulses**: composable force accumulation per step
//! - **Area-weighted normals**: recomputed every step over a fixed triangulation
//! - **Controller**: idle / running / stopped with reset-to-rest
//! - **Observable**: monitor each stage via the `StepObserver` trait
//! - **`no_std` compatible**: logging through `ftlog` is an optional feature
//!
//! ```
//! use squishy::{NoOpStepObserver, Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::<f32>::sphere(16, 16, 1.0, SimulationConfig::new()).unwrap();
//! sim.start();
//! sim.push(40).unwrap();
//! sim.step(0.016, &mut NoOpStepObserver);
//! assert_eq!(sim.positions().len(), 17 * 17 * 3);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "logging")]
macro_rules! log_info {
    ($($arg:tt)+) => { ftlog::info!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_info {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)+) => { ftlog::warn!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

pub mod float;
pub mod vec;
pub mod node;
pub mod spring;
pub mod topology;
pub mod sphere;
pub mod normals;
pub mod mesh;
pub mod impulse;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec3};
pub use node::Node;
pub use spring::{Spring, SpringKind};
pub use topology::GridTopology;
pub use sphere::{SphereGeometry, UvSphere};
pub use normals::NormalField;
pub use mesh::SoftMesh;
pub use impulse::PushSchedule;
pub use simulation::{Simulation, SimulationState};
pub use config::SimulationConfig;
pub use observer::{NoOpStepObserver, StepObserver};
#[cfg(feature = "logging")]
pub use observer::LogObserver;
pub use error::SimError;
