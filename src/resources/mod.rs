//! Loading of meshes and textures from the `assets/` directory.

use std::io::{BufReader, Cursor};

use crate::data_structures::{
    model::{Material, Model},
    texture::Texture,
};
use crate::resources::texture::{diffuse_normal_layout, load_string, load_texture};

pub mod mesh;
pub mod texture;

/// Load an OBJ mesh and pair it with an explicitly chosen diffuse texture.
///
/// Maze props assign their textures per category (the same quad mesh backs
/// all three grass variants), so the material is built here from the given
/// texture file rather than from whatever the OBJ's `.mtl` references.
/// Materials that ship no normal map get the neutral default so every prop
/// runs through the same pipeline layout.
pub async fn load_prop_model(
    obj_file: &str,
    texture_file: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<Model> {
    let obj_text = load_string(obj_file).await?;
    let obj_cursor = Cursor::new(obj_text);
    let mut obj_reader = BufReader::new(obj_cursor);

    let (models, _materials) = tobj::load_obj_buf_async(
        &mut obj_reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |p| async move {
            match load_string(&p).await {
                Ok(mat_text) => tobj::load_mtl_buf(&mut BufReader::new(Cursor::new(mat_text))),
                Err(_) => Err(tobj::LoadError::OpenFileFailed),
            }
        },
    )
    .await?;

    let meshes = mesh::load_meshes(&models, obj_file, device);

    let diffuse_texture = load_texture(texture_file, false, device, queue, None).await?;
    let normal_texture = Texture::create_default_normal_map(device, queue);
    let layout = diffuse_normal_layout(device);
    let material = Material::new(device, texture_file, diffuse_texture, normal_texture, &layout);

    Ok(Model {
        meshes,
        materials: vec![material],
    })
}
