//! Per-pixel contract of the three shapes, exercised through `Shape`.

use approx::assert_abs_diff_eq;
use flare_color::Convert;
use flare_core::{Canvas, Color, Hsv, LinearRgb};
use flare_shapes::{
    render, BlendMode, CanvasSize, GradientDisk, Point, Ring, Sample, Shape, SolidDisk,
};

const SIZE: CanvasSize = CanvasSize::new(100, 100);

fn amber() -> Color<LinearRgb> {
    let picked: Color<Hsv> = Color::new(0.1, 0.8, 1.0);
    picked.convert()
}

#[test]
fn ring_reference_points() {
    let color = amber();
    let ring: Shape<LinearRgb> = Ring::new(SIZE, Point::new(50, 50), 20.0, 10.0, color).into();

    assert!(ring.sample(50, 50).is_zero());
    assert_eq!(ring.sample(50, 70), color);
    assert_eq!(ring.sample(70, 50), color);

    // d = 15.56, just inside the inner edge
    let inner = ring.sample(61, 61);
    assert!(!inner.is_zero());
    assert!(inner[0] < color[0]);
}

#[test]
fn solid_disk_reference_points() {
    let color = amber();
    let disk: Shape<LinearRgb> = SolidDisk::new(SIZE, Point::new(50, 50), 10.0, color).into();

    assert_eq!(disk.sample(50, 50), color);
    assert_eq!(disk.sample(50, 59), color);
    assert!(disk.sample(50, 61).is_zero());
    // d = 10.44: beyond the radius
    assert!(disk.sample(53, 60).is_zero());
}

#[test]
fn gradient_falls_to_zero_at_radius() {
    let white: Color<LinearRgb> = Color::splat(1.0);
    for gamma in [0.25, 1.0, 3.0] {
        let g = GradientDisk::new(SIZE, Point::new(50, 50), 16.0, white, gamma);
        assert_eq!(g.sample(50, 50), white);
        assert!(g.sample(50, 66).is_zero());
        assert!(g.sample(50, 90).is_zero());

        let mut prev = 1.0;
        for col in 50..=66 {
            let v = g.sample(50, col)[1];
            assert!(v <= prev);
            prev = v;
        }
    }
}

#[test]
fn queries_off_canvas_are_safe() {
    let shapes: [Shape<LinearRgb>; 3] = [
        Ring::new(SIZE, Point::new(0, 0), 5.0, 2.0, amber()).into(),
        SolidDisk::new(SIZE, Point::new(99, 99), 5.0, amber()).into(),
        GradientDisk::new(SIZE, Point::new(-20, 120), 30.0, amber(), 1.0).into(),
    ];
    for shape in &shapes {
        let coords = [
            (-1, -1),
            (-5, 3),
            (100, 100),
            (i64::MIN, i64::MAX),
            (1 << 40, -(1 << 40)),
        ];
        for &(row, col) in &coords {
            let c = shape.sample(row, col);
            assert!(c.is_finite());
        }
    }
    // ring centered at the corner still reaches (row 0, col 5)
    assert!(!shapes[0].sample(0, 5).is_zero());
}

#[test]
fn rendered_canvas_agrees_with_samples() {
    let color = amber();
    let shapes: Vec<Shape<LinearRgb>> = vec![
        Ring::new(SIZE, Point::new(30, 40), 12.0, 3.0, color).into(),
        SolidDisk::new(SIZE, Point::new(70, 60), 8.0, color).into(),
    ];
    let mut canvas: Canvas<LinearRgb> = Canvas::new(100, 100).unwrap();
    render(&mut canvas, &shapes, BlendMode::Add);

    for (row, col, px) in canvas.enumerate() {
        let expected = shapes[0].sample(row, col) + shapes[1].sample(row, col);
        for k in 0..3 {
            assert_abs_diff_eq!(px[k], expected[k], epsilon = 1e-6);
        }
    }
}
