/// Linearly map `v` from `[from_min, from_max)` onto `[to_min, to_max]`.
///
/// A zero-width input range maps everything to `to_min` instead of producing NaN.
pub fn scale(v: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let span = from_max - from_min;
    if span == 0.0 {
        return to_min;
    }
    (to_max - to_min) * (v - from_min) / span + to_min
}

/// `ceil(log2(n))` for integers; 0 and 1 both yield 0.
pub fn ceil_log2(n: u32) -> u32 {
    if n <= 1 {
        return 0;
    }
    u32::BITS - (n - 1).leading_zeros()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
