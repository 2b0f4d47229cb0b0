//! Where atoms land on the canvas.

use super::common::{assert_close, assert_inside_canvas, circle_xs, circle_ys, diatomic, water};
use periodica::render::{Bounds, Viewport};
use periodica::{render, Atom, Bond, CanvasSize, Molecule};

// ============================================================================
// FITTING
// ============================================================================

#[test]
fn test_single_atom_is_centered() {
    let molecule = Molecule::from_parts(vec![Atom::new("He", 0.0, 0.0)], vec![]);
    let scene = render(&molecule, 100.0, 100.0);
    assert_eq!(circle_xs(&scene), vec![50.0]);
    assert_eq!(circle_ys(&scene), vec![50.0]);
    assert_eq!(scene.lines().count(), 0);
}

#[test]
fn test_single_atom_away_from_origin_is_centered_too() {
    let molecule = Molecule::from_parts(vec![Atom::new("He", -7.5, 42.0)], vec![]);
    let scene = render(&molecule, 300.0, 120.0);
    assert_eq!(circle_xs(&scene), vec![150.0]);
    assert_eq!(circle_ys(&scene), vec![60.0]);
}

#[test]
fn test_horizontal_pair_fills_padded_width() {
    let scene = render(&diatomic(), 100.0, 100.0);
    let xs = circle_xs(&scene);
    assert_close(xs[0], 30.0);
    assert_close(xs[1], 70.0);
    assert_eq!(circle_ys(&scene), vec![50.0, 50.0]);
}

#[test]
fn test_world_up_is_canvas_up() {
    let molecule = Molecule::from_parts(
        vec![Atom::new("C", 0.0, 0.0), Atom::new("O", 0.0, 10.0)],
        vec![Bond::new(0, 1)],
    );
    let scene = render(&molecule, 100.0, 100.0);
    let ys = circle_ys(&scene);
    assert_close(ys[0], 70.0);
    assert_close(ys[1], 30.0);
    assert_eq!(circle_xs(&scene), vec![50.0, 50.0]);
}

#[test]
fn test_wide_canvas_centers_horizontally() {
    let scene = render(&diatomic(), 800.0, 100.0);
    // scale is limited by the 40-unit inner height
    let xs = circle_xs(&scene);
    assert_close(xs[0], 200.0);
    assert_close(xs[1], 600.0);
}

#[test]
fn test_tall_canvas_centers_vertically() {
    let scene = render(&diatomic(), 100.0, 800.0);
    let xs = circle_xs(&scene);
    assert_close(xs[0], 30.0);
    assert_close(xs[1], 70.0);
    assert_eq!(circle_ys(&scene), vec![400.0, 400.0]);
}

#[test]
fn test_scaling_is_uniform() {
    let molecule = water();
    let ratio = |w: f64, h: f64| {
        let scene = render(&molecule, w, h);
        let (xs, ys) = (circle_xs(&scene), circle_ys(&scene));
        let d = |i: usize, j: usize| ((xs[i] - xs[j]).powi(2) + (ys[i] - ys[j]).powi(2)).sqrt();
        d(0, 1) / d(1, 2)
    };
    let wide = ratio(800.0, 100.0);
    let tall = ratio(100.0, 800.0);
    let square = ratio(400.0, 400.0);
    assert!((wide - tall).abs() < 1e-9);
    assert!((wide - square).abs() < 1e-9);
}

#[test]
fn test_atoms_stay_inside_canvas() {
    for (w, h) in [(800.0, 200.0), (120.0, 640.0), (61.0, 61.0)] {
        assert_inside_canvas(&render(&water(), w, h));
    }
}

// ============================================================================
// DEGENERATE CANVASES AND COORDINATES
// ============================================================================

#[test]
fn test_canvas_smaller_than_padding_collapses() {
    let scene = render(&diatomic(), 40.0, 40.0);
    let xs = circle_xs(&scene);
    assert_eq!(xs[0], xs[1]);
    assert!(xs.iter().chain(circle_ys(&scene).iter()).all(|v| v.is_finite()));
}

#[test]
fn test_unusable_canvas_falls_back_to_defaults() {
    let scene = render(&water(), 0.0, f64::NAN);
    assert_eq!((scene.width, scene.height), (800.0, 200.0));

    let scene = render(&water(), -5.0, 300.0);
    assert_eq!((scene.width, scene.height), (800.0, 300.0));
    assert_eq!(CanvasSize::new(f64::INFINITY, 10.0), CanvasSize::new(800.0, 10.0));
}

#[test]
fn test_extreme_coordinates_stay_finite() {
    let molecule = Molecule::from_parts(
        vec![Atom::new("C", -1e308, 0.0), Atom::new("C", 1e308, 0.0)],
        vec![Bond::new(0, 1)],
    );
    let scene = render(&molecule, 800.0, 200.0);
    let xs = circle_xs(&scene);
    assert_close(xs[0], 30.0);
    assert!((xs[1] - 770.0).abs() < 1e-6, "{}", xs[1]);
    assert_eq!(circle_ys(&scene), vec![100.0, 100.0]);

    let line = scene.lines().next().unwrap();
    assert!([line.x1, line.y1, line.x2, line.y2].iter().all(|v| v.is_finite()));
    assert_inside_canvas(&scene);
}

#[test]
fn test_missing_coordinates_read_as_origin() {
    let molecule = Molecule::from_parts(
        vec![Atom::unplaced("Fe"), Atom::new("O", 10.0, 0.0)],
        vec![Bond::new(0, 1)],
    );
    let scene = render(&molecule, 100.0, 100.0);
    let placed = render(&diatomic(), 100.0, 100.0);
    assert_eq!(circle_xs(&scene), circle_xs(&placed));
    assert_eq!(circle_ys(&scene), circle_ys(&placed));
}

#[test]
fn test_bounds_of_atoms() {
    assert_eq!(Bounds::of_atoms(&[]), None);

    let bounds = Bounds::of_atoms(&water().atoms).unwrap();
    assert_close(bounds.width(), 1.92);
    assert_close(bounds.height(), 0.26);
}

#[test]
fn test_viewport_maps_box_corners() {
    let bounds = Bounds {
        min_x: 0.0,
        max_x: 4.0,
        min_y: 0.0,
        max_y: 1.0,
    };
    let viewport = Viewport::fit(&bounds, CanvasSize::new(100.0, 100.0), 10.0);
    assert_close(viewport.scale, 20.0);
    assert_eq!(viewport.to_canvas(0.0, 0.0), (10.0, 60.0));
    assert_eq!(viewport.to_canvas(4.0, 1.0), (90.0, 40.0));
}
