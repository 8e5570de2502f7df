//! Small math helpers shared by the noise and spline code.

/// Floor division matching Java's `Math.floor` then cast to `i32`.
///
/// Distinct from Rust's `as i32` truncation: `floor(-0.5) == -1`, not `0`.
#[inline]
#[must_use]
pub fn floor(x: f64) -> i32 {
    let i = x as i32;
    if x < f64::from(i) { i - 1 } else { i }
}

/// Same as [`floor`] but returns `i64`, matching vanilla's `Mth.lfloor`.
#[inline]
#[must_use]
pub fn lfloor(x: f64) -> i64 {
    let i = x as i64;
    if x < i as f64 { i - 1 } else { i }
}

/// Quintic fade curve used by Perlin noise: `t^3 (6t^2 - 15t + 10)`.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation between `a` and `b` at parameter `t`.
#[inline]
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Bilinear interpolation of four corner values.
#[inline]
#[must_use]
pub fn lerp2(tx: f64, ty: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    lerp(ty, lerp(tx, a, b), lerp(tx, c, d))
}

/// Trilinear interpolation of eight corner values.
#[inline]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn lerp3(
    tx: f64,
    ty: f64,
    tz: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    g: f64,
    h: f64,
) -> f64 {
    lerp(tz, lerp2(tx, ty, a, b, c, d), lerp2(tx, ty, e, f, g, h))
}

/// Clamp `x` into `[lo, hi]`.
#[inline]
#[must_use]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// Truncate-toward-zero quantization used when packing a climate scalar into
/// the integer coordinates the biome tree is indexed by: `(i64) (10000 * f)`.
///
/// Must truncate, not round — see `PerlinNoise.d[256]` invariant notes in the
/// climate module for why a rounding quantizer silently shifts biome edges.
#[inline]
#[must_use]
pub fn quantize_coord(f: f64) -> i64 {
    (f * 10000.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_matches_negative_half() {
        assert_eq!(floor(-0.5), -1);
        assert_eq!(floor(0.5), 0);
        assert_eq!(floor(-1.0), -1);
        assert_eq!(floor(1.0), 1);
    }

    #[test]
    fn quantize_truncates_not_rounds() {
        assert_eq!(quantize_coord(0.12349), 1234);
        assert_eq!(quantize_coord(-0.12349), -1234);
    }
}
