use sphere_tracer::interaction::{apply_normalized_pointer, PointerMode};
use sphere_tracer::parsing::config::{Config, TOMLConfig};
use sphere_tracer::parsing::construct_world;
use sphere_tracer::prelude::*;
use sphere_tracer::profile::FrameProfile;
use sphere_tracer::renderer::{background, pixel_color, SKY_COLOR};

fn render(world: &World, settings: &RenderSettings, width: usize, height: usize) -> Vec2D<[u8; 4]> {
    let mut film = Vec2D::new(width, height, [0u8; 4]);
    render_frame(world, settings, &mut film);
    film
}

fn no_gamma() -> RenderSettings {
    RenderSettings {
        gamma_correction: false,
        ..Default::default()
    }
}

#[test]
fn two_by_two_default_world() {
    let world = World::default();
    let film = render(&world, &RenderSettings::default(), 2, 2);

    // top left: ray (-1, -1, -1) misses all three spheres, v = -1 is pure sky
    assert_eq!(film.at(0, 0), [127, 178, 255, 255]);
    // bottom right: ray (0, 0, -1) hits the red sphere with normal +Z,
    // lit by 1/sqrt(3) and gamma corrected
    assert_eq!(film.at(1, 1), [198, 0, 0, 255]);

    let linear = render(&world, &no_gamma(), 2, 2);
    assert_eq!(linear.at(1, 1), [147, 0, 0, 255]);
    assert_eq!(linear.at(0, 0), film.at(0, 0));
}

#[test]
fn gamma_is_elementwise_power() {
    let world = World::default();
    let mut profile = FrameProfile::default();
    for (x, y) in [(1, 1), (3, 3), (4, 5), (6, 2)] {
        let linear = pixel_color(&world, &no_gamma(), (x, y), (8, 8), &mut profile);
        let corrected =
            pixel_color(&world, &RenderSettings::default(), (x, y), (8, 8), &mut profile);
        let ray = world.camera.get_ray(x, y, 8, 8);
        if world.first_hit(ray).is_none() {
            assert_eq!(linear, corrected);
            continue;
        }
        let gamma = 1.0 / 2.2;
        assert!((corrected.r() - linear.r().powf(gamma)).abs() < 1e-5);
        assert!((corrected.g() - linear.g().powf(gamma)).abs() < 1e-5);
        assert!((corrected.b() - linear.b().powf(gamma)).abs() < 1e-5);
    }
}

#[test]
fn first_inserted_sphere_wins_over_nearer_one() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 2.0));
    let a = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.75, Color::new(1.0, 0.0, 0.0));
    // b sits between the camera and a, overlapping it
    let b = Sphere::new(Vec3::ZERO, 0.5, Color::new(0.0, 1.0, 0.0));
    assert!(b.origin.z + b.radius > a.origin.z + a.radius);

    let world = World::new(camera, Vec3::new(-1.0, -1.0, -1.0), vec![a, b]);
    let pixel = render(&world, &RenderSettings::default(), 2, 2).at(1, 1);
    assert!(pixel[0] > 0);
    assert_eq!(pixel[1], 0);

    let world = World::new(camera, Vec3::new(-1.0, -1.0, -1.0), vec![b, a]);
    let pixel = render(&world, &RenderSettings::default(), 2, 2).at(1, 1);
    assert_eq!(pixel[0], 0);
    assert!(pixel[1] > 0);
}

#[test]
fn miss_paints_sky_gradient() {
    let world = World::default();
    let mut profile = FrameProfile::default();
    // bottom right corner of an 8x8 frame misses every sphere, v = 0.75
    let ray = world.camera.get_ray(7, 7, 8, 8);
    assert!(world.first_hit(ray).is_none());
    let color = pixel_color(&world, &RenderSettings::default(), (7, 7), (8, 8), &mut profile);
    assert_eq!(color, Color::mix(SKY_COLOR, Color::WHITE, 0.75 * 1.3));
    assert_eq!(color, background(0.75));
    assert_eq!(profile.background_hits, 1);
    assert_eq!(profile.sphere_tests, 3);
}

#[test]
fn pointer_changes_next_frame_only() {
    let mut world = World::default();
    let before = render(&world, &no_gamma(), 8, 8);

    apply_normalized_pointer(&mut world, PointerMode::Light, 0.0, 0.0);
    assert_eq!(world.light.x, 2.0);
    assert_eq!(world.light.y, 2.0);
    let after = render(&world, &no_gamma(), 8, 8);
    assert_ne!(before.buffer, after.buffer);

    // camera mode then back: the camera recenters and the frame is reproducible
    apply_normalized_pointer(&mut world, PointerMode::Camera, 0.9, 0.1);
    assert_ne!(world.camera.origin, World::default().camera.origin);
    apply_normalized_pointer(&mut world, PointerMode::Light, 0.0, 0.0);
    assert_eq!(world.camera.origin, World::default().camera.origin);
    assert_eq!(render(&world, &no_gamma(), 8, 8).buffer, after.buffer);
}

#[test]
fn scene_from_config_renders() {
    let data: TOMLConfig = toml::from_str(
        r#"
        [window]
        width = 2
        height = 2

        [render]
        gamma_correction = false

        [scene]
        light = [0.0, 0.0, -1.0]

        [[scene.spheres]]
        position = [0.0, 0.0, -1.0]
        radius = 0.5
        color = [0.0, 0.0, 1.0]
        "#,
    )
    .unwrap();
    let config = Config::try_from(data).unwrap();
    let world = construct_world(config.scene.as_ref()).unwrap();
    let (width, height) = config.window.frame_size();
    let film = render(&world, &config.render_settings, width, height);
    // light straight down -Z, normal +Z: full brightness
    assert_eq!(film.at(1, 1), [0, 0, 255, 255]);
}
