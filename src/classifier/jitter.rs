use rand::Rng;

pub const JITTER_LOW: f64 = -0.05;
pub const JITTER_HIGH: f64 = 0.08;
pub const CONFIDENCE_FLOOR: f64 = 0.65;
pub const CONFIDENCE_CEILING: f64 = 0.98;

/// Adds a uniform offset in `[JITTER_LOW, JITTER_HIGH]` to the base
/// confidence and clamps the result to `[CONFIDENCE_FLOOR, CONFIDENCE_CEILING]`.
///
/// The noise is cosmetic; only the bounds are meaningful.
pub fn jitter_confidence<R: Rng + ?Sized>(base: f64, rng: &mut R) -> f64 {
    let offset = rng.random_range(JITTER_LOW..=JITTER_HIGH);
    clamp_confidence(base + offset)
}

pub fn clamp_confidence(confidence: f64) -> f64 {
    confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}
