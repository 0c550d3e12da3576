//! Simple ray tracer example.
//!
//! Renders the built-in reference scene and saves it in PPM format.

use glint_tracer::{color_to_rgb, render, Camera, ImageBuffer, RenderConfig, Scene};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let desc = glint_core::reference_scene();
    let scene = Scene::from_description(&desc)?;
    let camera = Camera::from_description(&desc.camera)?;
    let config = RenderConfig::default().with_settings(&desc.render);

    println!(
        "Rendering {}x{}, {} objects, {} lights, depth {}...",
        camera.image_width,
        camera.image_height,
        scene.len(),
        scene.lights().len(),
        config.max_depth
    );

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
