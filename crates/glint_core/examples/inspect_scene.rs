//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/reference.json
//! Without an argument the built-in reference scene is inspected.

use std::env;

use glint_core::{load_scene, reference_scene, ObjectDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let scene = match args.get(1) {
        Some(path) => {
            println!("Loading scene file: {}", path);
            match load_scene(path) {
                Ok(scene) => scene,
                Err(e) => {
                    eprintln!("Error loading scene file: {}", e);
                    return;
                }
            }
        }
        None => {
            println!("No scene file given, using the reference scene");
            reference_scene()
        }
    };

    println!("\n=== Scene: {} ===", scene.name);
    println!("Objects: {}", scene.object_count());
    println!("Lights: {}", scene.light_count());

    println!("\n--- Objects ---");
    for (i, object) in scene.objects.iter().enumerate() {
        match object {
            ObjectDescription::Plane { position, normal, .. } => println!(
                "  [{}] plane through ({:.2}, {:.2}, {:.2}) normal ({:.2}, {:.2}, {:.2})",
                i, position.x, position.y, position.z, normal.x, normal.y, normal.z
            ),
            ObjectDescription::Sphere { center, radius, .. } => println!(
                "  [{}] sphere at ({:.2}, {:.2}, {:.2}) radius {:.2}",
                i, center.x, center.y, center.z, radius
            ),
            ObjectDescription::Triangle { .. } => println!("  [{}] triangle", i),
            ObjectDescription::TriangleStrip { vertices, .. } => println!(
                "  [{}] triangle strip, {} vertices -> {} triangles",
                i,
                vertices.len(),
                vertices.len().saturating_sub(2)
            ),
        }
    }

    println!("\n--- Lights ---");
    for (i, light) in scene.lights.iter().enumerate() {
        println!(
            "  [{}] at ({:.2}, {:.2}, {:.2}) color ({:.2}, {:.2}, {:.2})",
            i,
            light.position.x,
            light.position.y,
            light.position.z,
            light.color.x,
            light.color.y,
            light.color.z
        );
    }

    let camera = &scene.camera;
    println!("\n--- Camera ---");
    println!(
        "  Eye: ({:.2}, {:.2}, {:.2})",
        camera.position.x, camera.position.y, camera.position.z
    );
    println!("  Resolution: {}x{}", camera.width, camera.height);
}
