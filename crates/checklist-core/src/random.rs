/// Uniform random numbers in `[0, 1)`.
///
/// Injected wherever the page wants a little jitter so that tests can pin it.
pub trait RandomSource {
    fn next_unit(&self) -> f64;

    /// Uniform value in `[low, high)`
    fn between(&self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}
