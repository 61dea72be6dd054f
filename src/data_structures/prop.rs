//! Instanced props: one mesh drawn many times at precomputed offsets.

use cgmath::Vector3;
use wgpu::util::DeviceExt;

use crate::data_structures::{instance::Instance, model::Model};

/// A renderable prop category: a model plus the instance transforms of every
/// copy placed in the world, mirrored into a per-instance vertex buffer.
///
/// All maze geometry (walls, floors, ceilings, torches, grass) is drawn this
/// way; the pipelines the instances run through are owned by the context.
pub struct InstancedProp {
    pub model: Model,
    pub instances: Vec<Instance>,
    pub instance_buffer: wgpu::Buffer,
}

impl InstancedProp {
    /// Build a prop from world-space translation offsets.
    ///
    /// An empty offset list is valid (a map without torches, say); the
    /// renderer skips zero-instance props.
    pub fn new(device: &wgpu::Device, model: Model, offsets: &[Vector3<f32>]) -> Self {
        let instances: Vec<Instance> = offsets.iter().map(|&offset| offset.into()).collect();
        let instance_data = instances.iter().map(Instance::to_raw).collect::<Vec<_>>();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Prop Instance Buffer"),
            contents: bytemuck::cast_slice(&instance_data),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            model,
            instances,
            instance_buffer,
        }
    }

    pub fn amount(&self) -> usize {
        self.instances.len()
    }
}
