/// Relative breakpoint positions, in steps from a card's own center.
pub const BREAKPOINTS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

/// Interpolation contract for channel value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// One output channel sampled at the five [`BREAKPOINTS`].
///
/// Sampling is piecewise-linear between adjacent breakpoints and clamps to the
/// boundary values outside `[-2, 2]`; it never extrapolates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BreakpointTable<T> {
    pub values: [T; 5],
}

impl<T> BreakpointTable<T>
where
    T: Lerp + Clone,
{
    pub fn new(values: [T; 5]) -> Self {
        Self { values }
    }

    /// Sample at `u`, a displacement measured in steps.
    pub fn sample(&self, u: f64) -> T {
        if u.is_nan() {
            return self.values[2].clone();
        }
        if u <= BREAKPOINTS[0] {
            return self.values[0].clone();
        }
        if u >= BREAKPOINTS[4] {
            return self.values[4].clone();
        }

        // BREAKPOINTS[0] < u < BREAKPOINTS[4], so 1 <= idx <= 4.
        let idx = BREAKPOINTS.partition_point(|p| *p <= u);
        let a = idx - 1;
        let span = BREAKPOINTS[idx] - BREAKPOINTS[a];
        let t = (u - BREAKPOINTS[a]) / span;
        T::lerp(&self.values[a], &self.values[idx], t)
    }
}

impl BreakpointTable<f64> {
    /// `[edge, near, center, near, edge]`, for channels equal at `+k` and `-k`.
    pub fn symmetric(edge: f64, near: f64, center: f64) -> Self {
        Self::new([edge, near, center, near, edge])
    }

    /// `[edge, near, 0, -near, -edge]`, for channels that flip sign across the center.
    pub fn mirrored(edge: f64, near: f64) -> Self {
        Self::new([edge, near, 0.0, -near, -edge])
    }
}
