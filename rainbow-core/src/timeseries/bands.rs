use serde::Serialize;

use crate::types::BOUNDARY_COUNT;

/// Eight boundary curves, lowest first, each aligned point-for-point with the
/// series they were generated from.
///
/// Curve `k` at index `i` is `exp(fitted[i] + multipliers[k] · σ)`. With
/// strictly increasing multipliers and `σ > 0` the curves are strictly ordered
/// at every index; with `σ = 0` they coincide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandSet {
    multipliers: [f64; BOUNDARY_COUNT],
    curves: [Vec<f64>; BOUNDARY_COUNT],
}

impl BandSet {
    /// Build all boundary curves from fitted log values and the residual spread.
    #[must_use]
    pub fn generate(fitted: &[f64], std_dev: f64, multipliers: &[f64; BOUNDARY_COUNT]) -> Self {
        let curves = std::array::from_fn(|k| {
            let offset = multipliers[k] * std_dev;
            fitted.iter().map(|f| (f + offset).exp()).collect()
        });
        Self {
            multipliers: *multipliers,
            curves,
        }
    }

    /// Multipliers the curves were generated with.
    #[must_use]
    pub const fn multipliers(&self) -> &[f64; BOUNDARY_COUNT] {
        &self.multipliers
    }

    /// Boundary curve `k` (0 is the lowest), if in range.
    #[must_use]
    pub fn curve(&self, k: usize) -> Option<&[f64]> {
        self.curves.get(k).map(Vec::as_slice)
    }

    /// All curves, lowest first.
    #[must_use]
    pub const fn curves(&self) -> &[Vec<f64>; BOUNDARY_COUNT] {
        &self.curves
    }

    /// Number of points per curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves[0].len()
    }

    /// True when generated from an empty fit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The eight boundary values at index `i`, lowest first.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<[f64; BOUNDARY_COUNT]> {
        if i >= self.len() {
            return None;
        }
        Some(std::array::from_fn(|k| self.curves[k][i]))
    }

    /// Vertical extent of each band at index `i` (`boundary[k+1] - boundary[k]`).
    #[must_use]
    pub fn spans(&self, i: usize) -> Option<[f64; BOUNDARY_COUNT - 1]> {
        self.row(i).map(|row| spans_of(&row))
    }

    /// Smallest value of the lowest curve.
    #[must_use]
    pub fn lowest(&self) -> Option<f64> {
        self.curves[0].iter().copied().reduce(f64::min)
    }
}

pub(crate) fn spans_of(row: &[f64; BOUNDARY_COUNT]) -> [f64; BOUNDARY_COUNT - 1] {
    std::array::from_fn(|k| row[k + 1] - row[k])
}
