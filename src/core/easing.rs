use glam::DVec2;

/// One step of a first-order exponential approach of `current` toward `target`.
///
/// `rate` is the fraction of the remaining gap closed per frame. For
/// `rate` in \[0, 1\] the result always lies between `current` and `target`.
#[inline]
pub fn ease_toward(current: f64, target: f64, rate: f64) -> f64 {
    current + (target - current) * rate
}

/// Vector form of [`ease_toward`], applied per component.
#[inline]
pub fn ease_vec_toward(current: DVec2, target: DVec2, rate: f64) -> DVec2 {
    current + (target - current) * rate
}

