//! The maze program state.
//!
//! A [`Maze`] is built in three steps: the tile map is parsed
//! ([`tilemap`]), expanded into per-category instance offsets ([`layout`]),
//! and decorated with randomized torches and grass ([`scatter`]). The result
//! is one [`InstancedProp`] per category, keyed by [`PropKind`] and drawn in
//! key order: opaque categories through the basic pipeline, grass through
//! the foliage pipeline.

pub mod layout;
pub mod scatter;
pub mod tilemap;

pub use layout::MazeLayout;
pub use tilemap::{MapError, TileKind, TileMap};

use std::collections::BTreeMap;

use cgmath::{Deg, Vector3};
use instant::Duration;
use rand::Rng;
use winit::event::{DeviceEvent, WindowEvent};

use crate::{
    context::{Context, InitContext},
    data_structures::prop::InstancedProp,
    flow::{GraphicsFlow, Out},
    render::{Instanced, Render},
    resources,
};

/// The renderable maze categories. Ordering is draw order within a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropKind {
    Wall,
    Floor,
    Ceiling,
    Torch,
    Grass1,
    Grass2,
    Grass3,
}

impl PropKind {
    pub const ALL: [PropKind; 7] = [
        PropKind::Wall,
        PropKind::Floor,
        PropKind::Ceiling,
        PropKind::Torch,
        PropKind::Grass1,
        PropKind::Grass2,
        PropKind::Grass3,
    ];

    /// Grass renders through the alpha-blended foliage pipeline; everything
    /// else is opaque.
    pub fn is_foliage(self) -> bool {
        matches!(self, PropKind::Grass1 | PropKind::Grass2 | PropKind::Grass3)
    }

    fn model_file(self) -> &'static str {
        match self {
            PropKind::Wall => "models/wall.obj",
            PropKind::Floor => "models/floor.obj",
            PropKind::Ceiling => "models/ceiling.obj",
            PropKind::Torch => "models/torch.obj",
            // All grass variants share the cross-quad mesh.
            PropKind::Grass1 | PropKind::Grass2 | PropKind::Grass3 => "models/grass.obj",
        }
    }

    fn texture_file(self) -> &'static str {
        match self {
            PropKind::Wall => "textures/wall.bmp",
            PropKind::Floor => "textures/floor.bmp",
            PropKind::Ceiling => "textures/ceiling.bmp",
            PropKind::Torch => "textures/torch.png",
            PropKind::Grass1 => "textures/grass1.png",
            PropKind::Grass2 => "textures/grass2.png",
            PropKind::Grass3 => "textures/grass3.png",
        }
    }
}

/// The maze flow: owns one instanced prop per category plus the layout it
/// was generated from. Dropping the maze releases every model, texture and
/// buffer it created.
pub struct Maze {
    layout: MazeLayout,
    props: BTreeMap<PropKind, InstancedProp>,
}

impl Maze {
    /// Build the maze's GPU resources from a placed layout.
    ///
    /// Scatters the decorations with the given random source, then loads one
    /// model + texture pair per category and freezes the instance buffers.
    pub async fn new<R: Rng>(
        init: &InitContext,
        layout: MazeLayout,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        let torches = scatter::scatter_torches(&layout.floors, rng);
        let [grass1, grass2, grass3] = scatter::scatter_grass(&layout.floors, rng);

        let mut props = BTreeMap::new();
        for kind in PropKind::ALL {
            let offsets: &[Vector3<f32>] = match kind {
                PropKind::Wall => &layout.walls,
                PropKind::Floor => &layout.floors,
                PropKind::Ceiling => &layout.ceilings,
                PropKind::Torch => &torches,
                PropKind::Grass1 => &grass1,
                PropKind::Grass2 => &grass2,
                PropKind::Grass3 => &grass3,
            };
            let model = resources::load_prop_model(
                kind.model_file(),
                kind.texture_file(),
                &init.device,
                &init.queue,
            )
            .await?;
            log::info!("{:?}: {} instances", kind, offsets.len());
            props.insert(kind, InstancedProp::new(&init.device, model, offsets));
        }

        Ok(Self { layout, props })
    }

    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    pub fn prop(&self, kind: PropKind) -> &InstancedProp {
        &self.props[&kind]
    }
}

impl<S, E> GraphicsFlow<S, E> for Maze {
    fn on_init(&mut self, ctx: &mut Context, _: &mut S) -> Out<S, E> {
        // Spawn the player at the map's start tile, looking down the Z axis.
        ctx.camera.camera.position = self.layout.spawn;
        ctx.camera.camera.yaw = Deg(90.0).into();
        ctx.camera.camera.pitch = Deg(0.0).into();
        Out::Empty
    }

    fn on_update(&mut self, _: &Context, _: &mut S, _: Duration) -> Out<S, E> {
        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut S) -> Out<S, E> {
        Out::Empty
    }

    fn on_device_events(&mut self, _: &Context, _: &mut S, _: &DeviceEvent) -> Out<S, E> {
        Out::Empty
    }

    fn on_window_events(&mut self, _: &Context, _: &mut S, _: &WindowEvent) -> Out<S, E> {
        Out::Empty
    }

    fn on_custom_events(&mut self, _: &Context, _: &mut S, event: E) -> Option<E> {
        Some(event)
    }

    fn on_render(&self) -> Render<'_> {
        let mut opaque: Vec<Instanced> = Vec::new();
        let mut foliage: Vec<Instanced> = Vec::new();
        for (kind, prop) in &self.props {
            if kind.is_foliage() {
                foliage.push(prop.into());
            } else {
                opaque.push(prop.into());
            }
        }
        Render::Composed(vec![Render::Defaults(opaque), Render::Transparents(foliage)])
    }

    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        _: &Context,
        _: &mut S,
        _: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<crate::flow::ImageTestResult, anyhow::Error> {
        Ok(crate::flow::ImageTestResult::Passed)
    }
}
