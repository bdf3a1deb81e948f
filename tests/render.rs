use rstest::*;
use sphere_tracer::{
    draw, util::math::point, Color, RenderError, RenderSettings, Renderer, Scene, Sphere,
    Viewport,
};

fn red_sphere_ahead() -> Scene {
    Scene::new(vec![Sphere::new(
        1.0,
        point(0.0, 0.0, 3.0),
        Color::new(255.0, 0.0, 0.0),
    )
    .with_specular(500.0)])
}

#[test]
fn test_sphere_straight_ahead_is_red_at_the_center() {
    let raster = draw(1000, 1000, &Viewport::default(), &red_sphere_ahead()).unwrap();

    let [r, g, b, a] = raster.get(500, 500).unwrap().to_rgba8();
    assert!(r > 100, "center pixel is too dark: {r}");
    assert_eq!((g, b, a), (0, 0, 255));

    for (x, y) in [(0, 0), (999, 0), (0, 999), (999, 999), (500, 0), (0, 500)] {
        assert_eq!(
            raster.get(x, y).unwrap().to_rgba8(),
            [0, 0, 0, 255],
            "pixel ({x}, {y}) should be background"
        );
    }
}

#[test]
fn test_sphere_below_the_eye_lands_in_the_lower_half() {
    let scene = Scene::new(vec![Sphere::new(
        0.5,
        point(0.0, -1.0, 3.0),
        Color::WHITE,
    )]);

    let raster = draw(100, 100, &Viewport::default(), &scene).unwrap();

    let lit = |y: u32| raster.get(50, y).unwrap() != Color::BLACK;
    assert!(lit(83));
    assert!(!lit(17));
}

#[rstest]
fn test_four_sphere_scene_renders_at_every_depth(#[values(0, 1, 2, 3, 4, 5)] max_depth: u32) {
    let renderer = Renderer::new(RenderSettings {
        max_depth,
        ..RenderSettings::default()
    });

    let raster = renderer
        .render(64, 48, &Viewport::default(), &Scene::four_spheres())
        .unwrap();

    assert_eq!(raster.pixels().len(), 64 * 48);
    assert!(raster
        .pixels()
        .iter()
        .all(|p| !p.has_nan() && (0.0..=255.0).contains(&p.r)));
    assert!(raster.pixels().iter().any(|p| *p != Color::BLACK));
}

#[test]
fn test_rendering_twice_is_pixel_identical() {
    let scene = Scene::four_spheres();
    let viewport = Viewport::new(1.5, 1.0);

    let first = draw(90, 60, &viewport, &scene).unwrap();
    let second = draw(90, 60, &viewport, &scene).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_rgba8(), second.to_rgba8());
}

#[test]
fn test_empty_scene_is_all_background() {
    let raster = draw(16, 16, &Viewport::default(), &Scene::default()).unwrap();

    assert!(raster.to_rgba8().chunks(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn test_degenerate_sphere_does_not_abort_the_render() {
    let mut spheres = red_sphere_ahead().spheres().to_vec();
    spheres.insert(0, Sphere::new(-1.0, point(0.0, 0.0, 2.0), Color::WHITE));
    let scene = Scene::new(spheres);

    let with_degenerate = draw(50, 50, &Viewport::default(), &scene).unwrap();
    let without = draw(50, 50, &Viewport::default(), &red_sphere_ahead()).unwrap();

    assert_eq!(with_degenerate, without);
}

#[test]
fn test_invalid_viewport_fails_before_rendering() {
    let result = draw(10, 10, &Viewport::new(0.0, 0.0), &Scene::four_spheres());

    assert!(matches!(result, Err(RenderError::InvalidConfiguration(_))));
}

#[test]
fn test_raster_exports_to_image() {
    let raster = draw(32, 24, &Viewport::default(), &Scene::four_spheres()).unwrap();

    let img = raster.to_image();

    assert_eq!(img.dimensions(), (32, 24));
    assert_eq!(img.as_raw(), &raster.to_rgba8());
}
