//! Render command
//!
//! Loads a scene file, composites its shapes onto the background and saves
//! the result as an sRGB PNG.

use std::time::Instant;

use anyhow::Result;
use flare_core::Canvas;
use flare_shapes::render;
use tracing::{debug, info};

use crate::scene::Scene;
use crate::RenderArgs;

pub fn run(args: RenderArgs) -> Result<()> {
    let scene = Scene::from_file(&args.scene)?;
    let blend = args.blend.unwrap_or(scene.blend);

    info!(
        scene = %args.scene.display(),
        width = scene.width,
        height = scene.height,
        shapes = scene.shapes.len(),
        %blend,
        "Rendering"
    );

    let mut canvas = Canvas::filled(scene.width, scene.height, scene.background)?;
    let start = Instant::now();
    render(&mut canvas, &scene.shapes, blend);
    debug!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "render done");

    super::save_png(&args.output, &canvas)?;
    info!(output = %args.output.display(), "Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flare_shapes::BlendMode;
    use std::fs;

    #[test]
    fn test_render_scene_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("scene.yaml");
        let output = dir.path().join("flare.png");
        fs::write(
            &scene,
            "width: 32\nheight: 16\nshapes:\n  \
             - { kind: disk, center: [8, 8], radius: 4, color: [1, 1, 1] }\n",
        )
        .unwrap();

        run(RenderArgs {
            scene: scene.clone(),
            output: output.clone(),
            blend: Some(BlendMode::Max),
        })
        .unwrap();

        let bytes = fs::read(&output).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_missing_scene_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(RenderArgs {
            scene: dir.path().join("nope.yaml"),
            output: dir.path().join("out.png"),
            blend: None,
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("nope.yaml"));
    }
}
