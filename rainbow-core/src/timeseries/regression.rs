use serde::{Deserialize, Serialize};

use crate::types::RainbowError;

/// Coefficients of `y = a·x² + b·x + c`, where `x` is the point index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticFit {
    /// Quadratic coefficient.
    pub a: f64,
    /// Linear coefficient.
    pub b: f64,
    /// Intercept.
    pub c: f64,
}

impl QuadraticFit {
    /// Fitted value at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Fitted values at indices `0..n`.
    #[must_use]
    pub fn fitted(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.eval(i as f64)).collect()
    }
}

/// Mean and population standard deviation of residuals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualStats {
    /// Mean residual; near zero for a least-squares fit.
    pub mean: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
}

#[derive(Default)]
struct PowerSums {
    n: f64,
    sx: f64,
    sx2: f64,
    sx3: f64,
    sx4: f64,
    sy: f64,
    sxy: f64,
    sx2y: f64,
}

impl PowerSums {
    fn accumulate(ys: &[f64]) -> Self {
        ys.iter().enumerate().fold(Self::default(), |mut s, (i, &y)| {
            let x = i as f64;
            let x2 = x * x;
            s.n += 1.0;
            s.sx += x;
            s.sx2 += x2;
            s.sx3 += x2 * x;
            s.sx4 += x2 * x2;
            s.sy += y;
            s.sxy += x * y;
            s.sx2y += x2 * y;
            s
        })
    }
}

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Least-squares quadratic fit of `ys` against their indices `0..n`.
///
/// Solves the 3×3 normal equations by Cramer's rule.
///
/// # Errors
/// Returns `SingularFit` when the determinant is zero or not finite, which is
/// always the case for fewer than three points.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(ys), fields(n = ys.len())))]
pub fn fit_quadratic(ys: &[f64]) -> Result<QuadraticFit, RainbowError> {
    let s = PowerSums::accumulate(ys);
    let m = [
        [s.sx4, s.sx3, s.sx2],
        [s.sx3, s.sx2, s.sx],
        [s.sx2, s.sx, s.n],
    ];
    let rhs = [s.sx2y, s.sxy, s.sy];

    let d = det3(m);
    if d == 0.0 || !d.is_finite() {
        return Err(RainbowError::SingularFit { points: ys.len() });
    }

    let replaced = |col: usize| {
        let mut mc = m;
        for (row, v) in mc.iter_mut().zip(rhs) {
            row[col] = v;
        }
        det3(mc) / d
    };
    let fit = QuadraticFit {
        a: replaced(0),
        b: replaced(1),
        c: replaced(2),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(a = fit.a, b = fit.b, c = fit.c, "quadratic fit");

    Ok(fit)
}

/// Mean and population standard deviation of `ys[i] - fit.eval(i)`.
///
/// Returns zeros for an empty slice.
#[must_use]
pub fn residual_stats(ys: &[f64], fit: &QuadraticFit) -> ResidualStats {
    if ys.is_empty() {
        return ResidualStats {
            mean: 0.0,
            std_dev: 0.0,
        };
    }
    let n = ys.len() as f64;
    let residuals: Vec<f64> = ys
        .iter()
        .enumerate()
        .map(|(i, &y)| y - fit.eval(i as f64))
        .collect();
    let mean = residuals.iter().sum::<f64>() / n;
    let var = residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    ResidualStats {
        mean,
        std_dev: var.sqrt(),
    }
}
