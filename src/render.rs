//! Render composition and pipeline batching.
//!
//! Flows describe what they want drawn with the [`Render`] enum; the engine
//! partitions the tree into the fixed pass order (opaque, foliage, overlay)
//! before issuing any draw call, so every pipeline is bound exactly once per
//! frame regardless of how many flows contribute to it.

use crate::data_structures::{model::Model, prop::InstancedProp};

/// Data for one instanced draw: a model plus its per-instance buffer.
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub model: &'a Model,
    pub amount: usize,
}

/// Data for one pre-transformed overlay draw: vertex/index buffers and the
/// texture bind group (the HUD font atlas).
pub struct Flat<'a> {
    pub vertex: &'a wgpu::Buffer,
    pub index: &'a wgpu::Buffer,
    pub group: &'a wgpu::BindGroup,
    pub amount: usize,
}

/// Specifies how a flow's objects should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Default(Instanced)` renders one opaque instanced object
/// - `Defaults(Vec<Instanced>)` renders a batch of opaque instanced objects,
///   in order
/// - `Transparent(Instanced)` renders one alpha-blended instanced object
/// - `Transparents(Vec<Instanced>)` renders a batch of alpha-blended objects,
///   in order, after all opaque geometry
/// - `Overlay(Flat)` renders screen-space geometry last
/// - `Composed(Vec<Render>)` nests several of the above
pub enum Render<'a> {
    None,
    Default(Instanced<'a>),
    Defaults(Vec<Instanced<'a>>),
    Transparent(Instanced<'a>),
    Transparents(Vec<Instanced<'a>>),
    Overlay(Flat<'a>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    /// Sort this render tree into the per-pipeline batches. Submission order
    /// within a batch follows the order of the tree walk.
    pub(crate) fn partition(
        self,
        basics: &mut Vec<Instanced<'a>>,
        foliage: &mut Vec<Instanced<'a>>,
        overlays: &mut Vec<Flat<'a>>,
    ) {
        match self {
            Render::Default(instanced) => basics.push(instanced),
            Render::Defaults(mut vec) => basics.append(&mut vec),
            Render::Transparent(instanced) => foliage.push(instanced),
            Render::Transparents(mut vec) => foliage.append(&mut vec),
            Render::Overlay(flat) => overlays.push(flat),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.partition(basics, foliage, overlays)),
            Render::None => (),
        }
    }
}

impl<'a> From<&'a InstancedProp> for Instanced<'a> {
    fn from(prop: &'a InstancedProp) -> Self {
        Instanced {
            instance: &prop.instance_buffer,
            model: &prop.model,
            amount: prop.amount(),
        }
    }
}

impl<'a> From<&'a InstancedProp> for Render<'a> {
    fn from(prop: &'a InstancedProp) -> Self {
        Render::Default(prop.into())
    }
}
