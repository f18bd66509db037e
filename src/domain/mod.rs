//! Domain layer: entities, the course-assembly algorithm, and store traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`assembly`] - Pure course-assembly core (dedup + block planning)
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; store traits are implemented in
//! [`crate::infrastructure::persistence`] and orchestrated by
//! [`crate::application::services`].

pub mod assembly;
pub mod entities;
pub mod repositories;
