//! torchmaze
//!
//! A small first-person maze-exploration game. A plain-text tile map is
//! expanded into instanced 3D geometry (walls, floors, ceilings, torches and
//! three grass variants) and rendered through a forward wgpu pipeline with a
//! walk-style camera, a screen-space text overlay and a light that follows
//! the player.
//!
//! High-level modules
//! - `camera`: first-person camera, controller and uniforms for view/projection
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: engine data models (meshes, instances, textures, props)
//! - `flow`: high level flow control (program states / update loops)
//! - `hud`: on-screen text overlay
//! - `maze`: map parsing, instance placement, decoration scatter and the maze state
//! - `pipelines`: definitions for the render pipelines (basic, foliage, overlay)
//! - `resources`: helpers to load textures/models and create GPU resources
//! - `render`: render composition for efficient pipeline reuse
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod hud;
pub mod maze;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
