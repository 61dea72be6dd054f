//! Render pipeline definitions.
//!
//! Three fixed pipelines cover the whole game:
//! - `basic` draws the opaque maze geometry (walls, floors, ceilings, torches)
//! - `foliage` draws the alpha-blended grass variants
//! - `overlay` draws screen-space HUD quads
//!
//! `light` holds the uniform resources for the single point light both 3D
//! pipelines sample.

pub mod basic;
pub mod foliage;
pub mod light;
pub mod overlay;

/// The pipeline set owned by the context and re-bound each frame in pass
/// order: basic, foliage, overlay.
#[derive(Debug)]
pub struct PipelineSet {
    pub basic: wgpu::RenderPipeline,
    pub foliage: wgpu::RenderPipeline,
    pub overlay: wgpu::RenderPipeline,
}

impl PipelineSet {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        Self {
            basic: basic::mk_basic_pipeline(
                device,
                config,
                light_bind_group_layout,
                camera_bind_group_layout,
            ),
            foliage: foliage::mk_foliage_pipeline(
                device,
                config,
                light_bind_group_layout,
                camera_bind_group_layout,
            ),
            overlay: overlay::mk_overlay_pipeline(device, config),
        }
    }
}
