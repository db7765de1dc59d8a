/// Error-free sum of two doubles (Knuth's TwoSum).
///
/// Returns `(s, e)` with `s = fl(a + b)` and `a + b = s + e` exactly.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Rounds half away from zero, matching ERFA's `dnint`.
#[inline]
pub fn nearest_int(a: f64) -> f64 {
    if a.abs() < 0.5 {
        0.0
    } else if a < 0.0 {
        libm::ceil(a - 0.5)
    } else {
        libm::floor(a + 0.5)
    }
}
