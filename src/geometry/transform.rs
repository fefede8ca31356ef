//! Rigid 2D transforms - Rotate, Translate
//!
//! Points are stored column-wise in a `Matrix2xX`: row 0 holds X, row 1 holds Y.
//! Rotating a whole batch is a single 2×2 by 2×N matrix product.

use nalgebra::{Matrix2, Matrix2xX, Point2, Vector2};

/// Counter-clockwise rotation matrix for `theta` radians
///
/// ```text
/// | cos θ  -sin θ |
/// | sin θ   cos θ |
/// ```
pub fn rotation_matrix(theta: f64) -> Matrix2<f64> {
    let (sin_t, cos_t) = theta.sin_cos();
    Matrix2::new(cos_t, -sin_t, sin_t, cos_t)
}

/// Rotate a single point about the origin
pub fn rotate_point(point: &Point2<f64>, theta: f64) -> Point2<f64> {
    Point2::from(rotation_matrix(theta) * point.coords)
}

/// Rotate every column of a 2×N batch about the origin
pub fn rotate_points(points: &Matrix2xX<f64>, theta: f64) -> Matrix2xX<f64> {
    rotation_matrix(theta) * points
}

/// Offset every column of a 2×N batch by `offset`
pub fn translate(points: &Matrix2xX<f64>, offset: Vector2<f64>) -> Matrix2xX<f64> {
    let mut moved = points.clone();
    for mut column in moved.column_iter_mut() {
        column += offset;
    }
    moved
}

/// `n` evenly spaced samples over `[start, end]`, both endpoints included
///
/// A single sample yields `[start]`; zero samples yield an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Build a 2×N batch from a list of (x, y) pairs
pub fn points_from_pairs(pairs: &[(f64, f64)]) -> Matrix2xX<f64> {
    Matrix2xX::from_fn(pairs.len(), |row, col| {
        let (x, y) = pairs[col];
        if row == 0 { x } else { y }
    })
}

/// Unpack a 2×N batch into points, one per column
pub fn columns_to_points(points: &Matrix2xX<f64>) -> Vec<Point2<f64>> {
    points
        .column_iter()
        .map(|column| Point2::new(column[0], column[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_rotate_90_degrees() {
        let p = rotate_point(&Point2::new(1.0, 0.0), FRAC_PI_2);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 1.0));
    }

    #[test]
    fn test_rotate_180_degrees() {
        let p = rotate_point(&Point2::new(1.0, 0.0), PI);
        assert!(close(p.x, -1.0));
        assert!(close(p.y, 0.0));
    }

    #[test]
    fn test_rotate_zero_and_full_turn_are_identity() {
        let p = Point2::new(3.25, -7.5);
        let zero = rotate_point(&p, 0.0);
        let full = rotate_point(&p, TAU);
        assert!(close(zero.x, p.x) && close(zero.y, p.y));
        assert!(close(full.x, zero.x) && close(full.y, zero.y));
    }

    #[test]
    fn test_rotate_preserves_length() {
        let samples = [(1.0, 2.0), (-4.5, 0.25), (12.0, -9.0), (0.0, 0.0)];
        for &(x, y) in &samples {
            let p = Point2::new(x, y);
            for k in 0..16 {
                let theta = k as f64 * 0.7 - 3.0;
                let r = rotate_point(&p, theta);
                assert!(close(r.coords.norm(), p.coords.norm()));
            }
        }
    }

    #[test]
    fn test_batch_matches_single_point_rotation() {
        let batch = points_from_pairs(&[(1.0, 0.0), (0.0, 2.0), (-3.0, 4.0)]);
        let theta = 1.234;
        let rotated = rotate_points(&batch, theta);
        assert_eq!(rotated.ncols(), 3);

        for (col, p) in columns_to_points(&batch).iter().enumerate() {
            let single = rotate_point(p, theta);
            assert!(close(rotated[(0, col)], single.x));
            assert!(close(rotated[(1, col)], single.y));
        }
    }

    #[test]
    fn test_translate() {
        let batch = points_from_pairs(&[(0.0, 0.0), (1.0, -1.0)]);
        let moved = translate(&batch, Vector2::new(2.5, -0.5));
        assert!(close(moved[(0, 0)], 2.5));
        assert!(close(moved[(1, 0)], -0.5));
        assert!(close(moved[(0, 1)], 3.5));
        assert!(close(moved[(1, 1)], -1.5));
    }

    #[test]
    fn test_linspace_includes_both_endpoints() {
        let angles = linspace(0.0, TAU, 4);
        assert_eq!(angles.len(), 4);
        assert!(close(angles[0], 0.0));
        assert!(close(angles[1], TAU / 3.0));
        assert!(close(angles[2], 2.0 * TAU / 3.0));
        assert_eq!(angles[3], TAU);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }
}
