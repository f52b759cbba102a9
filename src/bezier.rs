//! Scalar helpers shared by the bezier segments:
//! derivative roots for tight bounds and arc length integration.

use crate::vector::Float;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

/// Number of sub-intervals integrated separately by [`arc_length`].
pub const QUADRATURE_INTERVALS: usize = 16;

// below this share of the other coefficients, the quadratic term is noise
const DEGENERATE_EPSILON: Float = 1e-12;

// 5-point Gauss-Legendre rule on [-1; 1]
const GAUSS_NODES: [Float; 5] = [
    0.0,
    -0.538_469_310_105_683_1,
    0.538_469_310_105_683_1,
    -0.906_179_845_938_664_0,
    0.906_179_845_938_664_0,
];

const GAUSS_WEIGHTS: [Float; 5] = [
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
    0.236_926_885_056_189_1,
];

/// Integrates `speed` over `[0; 1]`.
///
/// `speed` is the magnitude of the curve derivative at `t`.
pub fn arc_length<F: Fn(Float) -> Float>(speed: F) -> Float {
    let step = 1.0 / (QUADRATURE_INTERVALS as Float);
    let half = step / 2.0;
    let mut length = 0.0;

    for i in 0..QUADRATURE_INTERVALS {
        let middle = (i as Float) * step + half;
        for (node, weight) in GAUSS_NODES.iter().zip(GAUSS_WEIGHTS.iter()) {
            length += weight * speed(middle + half * node);
        }
    }

    length * half
}

/// Extremum of a 1D quadratic bezier strictly inside `]0; 1[`.
pub fn quadratic_extremum(p0: Float, p1: Float, p2: Float) -> Option<Float> {
    let denominator = p0 - 2.0 * p1 + p2;
    match denominator != 0.0 {
        true => inside_unit((p0 - p1) / denominator),
        false => None,
    }
}

/// Extrema of a 1D cubic bezier strictly inside `]0; 1[`.
///
/// The derivative is `3 * (a*t² + b*t + c)`. A leading coefficient
/// which is only rounding noise leaves a linear equation; otherwise the
/// roots are computed without subtracting nearly equal values.
pub fn cubic_extrema(p0: Float, p1: Float, p2: Float, p3: Float) -> [Option<Float>; 2] {
    let d0 = p1 - p0;
    let d1 = p2 - p1;
    let d2 = p3 - p2;

    let a = d0 - 2.0 * d1 + d2;
    let b = 2.0 * (d1 - d0);
    let c = d0;

    if a.abs() <= DEGENERATE_EPSILON * (b.abs() + c.abs()) {
        return match b != 0.0 {
            true => [inside_unit(-c / b), None],
            false => [None, None],
        };
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return [None, None];
    }

    let sign = match b < 0.0 {
        true => -1.0,
        false => 1.0,
    };
    let q = -0.5 * (b + sign * discriminant.sqrt());

    match q != 0.0 {
        true => [inside_unit(q / a), inside_unit(c / q)],
        // b and the discriminant are both zero: double root at 0
        false => [None, None],
    }
}

fn inside_unit(t: Float) -> Option<Float> {
    match t > 0.0 && t < 1.0 {
        true => Some(t),
        false => None,
    }
}
