//! Engine data structures: models, textures, instances and props.
//!
//! This module contains the core data types for scene representation:
//!
//! - `model` contains mesh and material definitions, GPU resources for 3D models
//! - `texture` contains the GPU texture wrapper and creation utilities
//! - `instance` holds per-instance transformation data
//! - `prop` is an instanced drawable (model + instance list + instance buffer)

pub mod instance;
pub mod model;
pub mod prop;
pub mod texture;
