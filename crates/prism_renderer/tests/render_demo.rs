//! End-to-end rendering of small scenes.

use prism_core::load_scene_from_str;
use prism_renderer::{
    render, render_parallel, save_image, write_ppm, Camera, Color, RenderConfig, Scene,
    DEFAULT_BUCKET_SIZE,
};

#[test]
fn demo_scene_sequential_and_parallel_agree() {
    let camera = Camera::new().with_resolution(96, 72);
    let scene = Scene::demo();
    let config = RenderConfig::default();

    let sequential = render(&camera, &scene, &config);
    let parallel = render_parallel(&camera, &scene, &config, 32);
    let single_bucket = render_parallel(&camera, &scene, &config, DEFAULT_BUCKET_SIZE * 4);

    assert_eq!(sequential.pixels.len(), 96 * 72);
    assert_eq!(sequential, parallel);
    assert_eq!(sequential, single_bucket);

    // The demo scene fills the middle of the frame
    assert_ne!(sequential.get(48, 36), config.background);
}

#[test]
fn ppm_has_header_and_three_bytes_per_pixel() {
    let camera = Camera::new().with_resolution(16, 9);
    let image = render(&camera, &Scene::demo(), &RenderConfig::default());

    let mut bytes = Vec::new();
    write_ppm(&image, &mut bytes).unwrap();

    let header = b"P6\n16 9\n255\n";
    assert!(bytes.starts_with(header));
    assert_eq!(bytes.len(), header.len() + 16 * 9 * 3);
}

#[test]
fn scene_file_renders_to_disk() {
    let json = r#"{
        "spheres": [
            { "center": [0.0, 0.0, -8.0], "radius": 2.0, "material": "gray" }
        ],
        "lights": [
            { "position": [-20.0, 20.0, 20.0], "intensity": 1.5 }
        ],
        "ground": null
    }"#;
    let scene = load_scene_from_str(json).unwrap();
    let camera = Camera::new().with_resolution(20, 20);
    let config = RenderConfig::default();
    let image = render(&camera, &scene, &config);

    // Corners see the sky, the center sees the sphere
    assert_eq!(image.get(0, 0), config.background);
    assert_eq!(image.get(19, 19), config.background);
    assert_ne!(image.get(10, 10), config.background);
    assert!(image.pixels.iter().all(|c| c.min_element() >= 0.0));

    let path = std::env::temp_dir().join(format!("prism-scene-{}.ppm", std::process::id()));
    save_image(&image, &path).unwrap();
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.len(), b"P6\n20 20\n255\n".len() + 20 * 20 * 3);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn background_only_image_is_uniform() {
    let camera = Camera::new().with_resolution(5, 4);
    let config = RenderConfig {
        background: Color::new(0.0, 0.0, 1.0),
        ..RenderConfig::default()
    };
    let image = render_parallel(&camera, &Scene::default(), &config, 2);
    assert!(image.pixels.iter().all(|&c| c == Color::new(0.0, 0.0, 1.0)));
}
