/// Maps `value` through the piecewise-linear curve described by `input`
/// control points and their `output` values, clamped to the first and last
/// input points.
///
/// Segments are searched left to right, so a curve whose control points are
/// not increasing still yields a value inside the `output` range instead of
/// extrapolating. A zero-length segment resolves to its end value.
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len().min(output.len());
    match len {
        0 => return 0.0,
        1 => return output[0],
        _ => {}
    }

    let (lo, hi) = (input[0], input[len - 1]);
    let v = if lo <= hi {
        value.max(lo).min(hi)
    } else {
        value.max(hi).min(lo)
    };

    let mut segment = 1;
    while segment < len - 1 && v >= input[segment] {
        segment += 1;
    }

    let (from, to) = (input[segment - 1], input[segment]);
    let t = progress(from, to, v).clamp(0.0, 1.0);
    mix(output[segment - 1], output[segment], t)
}

fn progress(from: f64, to: f64, value: f64) -> f64 {
    let span = to - from;
    if span == 0.0 {
        1.0
    } else {
        (value - from) / span
    }
}

fn mix(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_point_curve_is_linear() {
        assert!(close(interpolate(0.0, &[0.0, 100.0], &[0.0, -50.0]), 0.0));
        assert!(close(interpolate(50.0, &[0.0, 100.0], &[0.0, -50.0]), -25.0));
        assert!(close(interpolate(100.0, &[0.0, 100.0], &[0.0, -50.0]), -50.0));
    }

    #[test]
    fn clamps_outside_the_domain() {
        assert!(close(interpolate(-40.0, &[0.0, 100.0], &[10.0, 20.0]), 10.0));
        assert!(close(interpolate(4000.0, &[0.0, 100.0], &[10.0, 20.0]), 20.0));
    }

    #[test]
    fn three_point_curve_uses_middle_control_point() {
        let input = [0.0, 180.0, 520.0];
        let output = [0.30, 0.22, 0.0];
        assert!(close(interpolate(90.0, &input, &output), 0.26));
        assert!(close(interpolate(180.0, &input, &output), 0.22));
        assert!(close(interpolate(350.0, &input, &output), 0.11));
    }

    #[test]
    fn non_increasing_control_points_stay_in_range() {
        let input = [0.0, 180.0, 100.0];
        let output = [0.30, 0.22, 0.0];
        let at_end = interpolate(100.0, &input, &output);
        assert!(at_end <= 0.30 && at_end >= 0.22);
    }

    #[test]
    fn degenerate_domain_resolves_to_end_value() {
        assert!(close(interpolate(10.0, &[0.0, 0.0], &[1.0, 2.0]), 2.0));
        assert!(close(interpolate(f64::NAN, &[0.0, 10.0], &[1.0, 2.0]), 1.0));
    }
}
