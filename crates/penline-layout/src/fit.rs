//! Uniform scale selection shared by the layout engines

/// The largest uniform scale that fits every `(target, measured)` pair.
///
/// Pairs whose measured dimension is zero (empty text, a single point)
/// impose no constraint. When nothing constrains the scale at all it is 1.
pub fn fit_scale(constraints: &[(f64, f64)]) -> f64 {
    let scale = constraints
        .iter()
        .map(|&(target, measured)| {
            if measured > 0.0 {
                target / measured
            } else {
                f64::INFINITY
            }
        })
        .fold(f64::INFINITY, f64::min);

    if scale.is_finite() {
        scale
    } else {
        1.0
    }
}
