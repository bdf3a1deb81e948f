pub mod math {
    use glam::DVec4;

    /// Tolerance used when comparing floating point results.
    pub const EPSILON: f64 = 0.00001;

    /// A homogeneous point, `w = 1`.
    pub fn point(x: f64, y: f64, z: f64) -> DVec4 {
        DVec4::new(x, y, z, 1.0)
    }

    /// A homogeneous direction, `w = 0`.
    pub fn direction(x: f64, y: f64, z: f64) -> DVec4 {
        DVec4::new(x, y, z, 0.0)
    }

    /// Mirrors `r` around the normal `n`: `2n(n·r) - r`.
    pub fn reflect(r: DVec4, n: DVec4) -> DVec4 {
        n * 2.0 * n.dot(r) - r
    }

    pub fn f64_is_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_point_minus_point_is_a_direction() {
            let v = point(3.0, 2.0, 1.0) - point(5.0, 6.0, 7.0);

            assert_eq!(v, direction(-2.0, -4.0, -6.0));
        }

        #[test]
        fn test_point_plus_direction_is_a_point() {
            let p = point(3.0, -2.0, 5.0) + direction(-2.0, 3.0, 1.0);

            assert_eq!(p, point(1.0, 1.0, 6.0));
        }

        #[test]
        fn test_reflecting_a_direction_approaching_at_45_degrees() {
            let n = direction(0.0, 1.0, 0.0);
            let r = direction(1.0, 1.0, 0.0);

            assert_eq!(reflect(r, n), direction(-1.0, 1.0, 0.0));
        }

        #[test]
        fn test_reflect_keeps_directions_as_directions() {
            let n = direction(0.0, 0.0, -1.0);
            let r = direction(0.3, -0.2, 1.0);

            assert_eq!(reflect(r, n).w, 0.0);
        }
    }
}
