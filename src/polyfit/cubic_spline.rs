/*
    Satenv, space environment models for astrodynamics
    Copyright (C) 2021 Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use super::{NonFiniteOrdinateSnafu, SplineError, TooFewNodesSnafu, UnorderedNodesSnafu};
use snafu::ensure;

/// Boundary condition imposed at one end of a cubic spline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EndSlope {
    /// Zero second derivative at that end.
    Natural,
    /// Imposed first derivative at that end.
    Clamped(f64),
}

impl EndSlope {
    /// Slopes at or beyond this magnitude request a natural end.
    pub const NATURAL_THRESHOLD: f64 = 0.99e30;
}

impl From<f64> for EndSlope {
    fn from(slope: f64) -> Self {
        if slope.abs() >= Self::NATURAL_THRESHOLD {
            Self::Natural
        } else {
            Self::Clamped(slope)
        }
    }
}

/// A cubic spline through `N` nodes, stored as the nodes and the second derivatives at each node.
///
/// ```
/// use satenv::polyfit::{CubicSpline, EndSlope};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = xs.map(|x| 2.0 * x + 1.0);
/// let spline = CubicSpline::fit(xs, ys, EndSlope::Natural, EndSlope::Natural).unwrap();
///
/// assert!((spline.eval(1.5) - 4.0).abs() < 1e-12);
/// assert!((spline.integral(3.0) - 12.0).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicSpline<const N: usize> {
    xs: [f64; N],
    ys: [f64; N],
    y2: [f64; N],
}

impl<const N: usize> CubicSpline<N> {
    /// Fits the spline by solving the tridiagonal system for the second derivatives.
    /// The abscissas must be strictly increasing.
    pub fn fit(
        xs: [f64; N],
        ys: [f64; N],
        start: impl Into<EndSlope>,
        end: impl Into<EndSlope>,
    ) -> Result<Self, SplineError> {
        ensure!(N >= 2, TooFewNodesSnafu { count: N });

        for (i, pair) in xs.windows(2).enumerate() {
            // Written so that a NaN abscissa also fails
            ensure!(
                pair[1] > pair[0],
                UnorderedNodesSnafu {
                    index: i + 1,
                    prev: pair[0],
                    next: pair[1]
                }
            );
        }

        for (index, value) in ys.iter().copied().enumerate() {
            ensure!(value.is_finite(), NonFiniteOrdinateSnafu { index, value });
        }

        let mut u = [0.0; N];
        let mut y2 = [0.0; N];

        if let EndSlope::Clamped(yp1) = start.into() {
            y2[0] = -0.5;
            u[0] = (3.0 / (xs[1] - xs[0])) * ((ys[1] - ys[0]) / (xs[1] - xs[0]) - yp1);
        }

        // Forward elimination
        for i in 1..N - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            u[i] = (6.0
                * ((ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                    - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]))
                / (xs[i + 1] - xs[i - 1])
                - sig * u[i - 1])
                / p;
        }

        let (qn, un) = match end.into() {
            EndSlope::Natural => (0.0, 0.0),
            EndSlope::Clamped(ypn) => {
                let h = xs[N - 1] - xs[N - 2];
                (0.5, (3.0 / h) * (ypn - (ys[N - 1] - ys[N - 2]) / h))
            }
        };

        y2[N - 1] = (un - qn * u[N - 2]) / (qn * y2[N - 2] + 1.0);

        // Back substitution
        for k in (0..N - 1).rev() {
            y2[k] = y2[k] * y2[k + 1] + u[k];
        }

        Ok(Self { xs, ys, y2 })
    }

    /// Node abscissas
    pub fn xs(&self) -> &[f64; N] {
        &self.xs
    }

    /// Second derivatives of the spline at each node
    pub fn second_derivatives(&self) -> &[f64; N] {
        &self.y2
    }

    /// Evaluates the spline at `x`. Outside of the nodes, the closest end segment is extrapolated.
    pub fn eval(&self, x: f64) -> f64 {
        let mut klo = 0;
        let mut khi = N - 1;
        while khi - klo > 1 {
            let k = (khi + klo) / 2;
            if self.xs[k] > x {
                khi = k;
            } else {
                klo = k;
            }
        }

        let h = self.xs[khi] - self.xs[klo];
        let a = (self.xs[khi] - x) / h;
        let b = (x - self.xs[klo]) / h;

        a * self.ys[klo]
            + b * self.ys[khi]
            + ((a * a * a - a) * self.y2[klo] + (b * b * b - b) * self.y2[khi]) * h * h / 6.0
    }

    /// Integrates the spline from the first node up to `x`, segment by segment.
    /// Returns zero if `x` is at or before the first node.
    pub fn integral(&self, x: f64) -> f64 {
        let mut yi = 0.0;
        let mut klo = 0;
        let mut khi = 1;

        while x > self.xs[klo] && khi < N {
            // The last segment integrates up to x, even past the final node
            let xx = if khi < N - 1 && x >= self.xs[khi] {
                self.xs[khi]
            } else {
                x
            };

            let h = self.xs[khi] - self.xs[klo];
            let a = (self.xs[khi] - xx) / h;
            let b = (xx - self.xs[klo]) / h;
            let a2 = a * a;
            let b2 = b * b;

            yi += ((1.0 - a2) * self.ys[klo] / 2.0
                + b2 * self.ys[khi] / 2.0
                + ((-(1.0 + a2 * a2) / 4.0 + a2 / 2.0) * self.y2[klo]
                    + (b2 * b2 / 4.0 - b2 / 2.0) * self.y2[khi])
                    * h
                    * h
                    / 6.0)
                * h;

            klo += 1;
            khi += 1;
        }

        yi
    }
}

#[cfg(test)]
mod ut_cubic_spline {
    use super::{CubicSpline, EndSlope};
    use crate::polyfit::SplineError;

    use rstest::*;

    /// 2x^3 - x^2 + 3x + 1
    fn cubic(x: f64) -> f64 {
        2.0 * x.powi(3) - x.powi(2) + 3.0 * x + 1.0
    }

    fn cubic_slope(x: f64) -> f64 {
        6.0 * x.powi(2) - 2.0 * x + 3.0
    }

    fn cubic_antiderivative(x: f64) -> f64 {
        0.5 * x.powi(4) - x.powi(3) / 3.0 + 1.5 * x.powi(2) + x
    }

    #[fixture]
    fn clamped_cubic() -> CubicSpline<5> {
        let xs = [0.0, 0.5, 1.2, 2.0, 3.0];
        CubicSpline::fit(xs, xs.map(cubic), cubic_slope(0.0), cubic_slope(3.0)).unwrap()
    }

    #[rstest]
    #[case(0.25)]
    #[case(0.9)]
    #[case(1.7)]
    #[case(2.5)]
    fn reproduces_cubic(clamped_cubic: CubicSpline<5>, #[case] x: f64) {
        let err = (clamped_cubic.eval(x) - cubic(x)).abs();
        assert!(err < 1e-10, "error of {err:e} at x = {x}");
    }

    #[rstest]
    fn integrates_cubic(clamped_cubic: CubicSpline<5>) {
        let expected = cubic_antiderivative(3.0) - cubic_antiderivative(0.0);
        let got = clamped_cubic.integral(3.0);
        assert!(((got - expected) / expected).abs() < 1e-10);

        // Stops inside of the first segment
        let expected = cubic_antiderivative(0.3) - cubic_antiderivative(0.0);
        assert!((clamped_cubic.integral(0.3) - expected).abs() < 1e-12);

        // Mid-table, across several segments
        let expected = cubic_antiderivative(1.7) - cubic_antiderivative(0.0);
        assert!((clamped_cubic.integral(1.7) - expected).abs() < 1e-10);

        assert_eq!(clamped_cubic.integral(0.0), 0.0);
        assert_eq!(clamped_cubic.integral(-1.0), 0.0);
    }

    #[test]
    fn natural_ends() {
        let xs = [-1.0, 0.0, 2.0, 5.0];
        let spline = CubicSpline::fit(xs, xs.map(|x| 3.0 - 0.5 * x), 1e30, -1e31).unwrap();
        for y2 in spline.second_derivatives() {
            assert!(y2.abs() < 1e-14);
        }
        assert!((spline.eval(3.5) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn natural_threshold() {
        assert_eq!(EndSlope::from(0.99e30), EndSlope::Natural);
        assert_eq!(EndSlope::from(-2.0e30), EndSlope::Natural);
        assert_eq!(EndSlope::from(0.98e30), EndSlope::Clamped(0.98e30));
        assert_eq!(EndSlope::from(-1.5), EndSlope::Clamped(-1.5));
    }

    #[test]
    fn degenerate_nodes() {
        let err = CubicSpline::fit([1.0, 1.0, 1.0], [0.0, 1.0, 2.0], 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            SplineError::UnorderedNodes {
                index: 1,
                prev: 1.0,
                next: 1.0
            }
        );

        assert!(matches!(
            CubicSpline::fit([0.0, 2.0, 1.0], [0.0, 1.0, 2.0], 0.0, 0.0),
            Err(SplineError::UnorderedNodes { index: 2, .. })
        ));

        assert!(matches!(
            CubicSpline::fit([0.0, f64::NAN, 1.0], [0.0, 1.0, 2.0], 0.0, 0.0),
            Err(SplineError::UnorderedNodes { .. })
        ));

        assert!(matches!(
            CubicSpline::fit([0.0, 1.0], [0.0, f64::INFINITY], 0.0, 0.0),
            Err(SplineError::NonFiniteOrdinate { index: 1, .. })
        ));
    }
}
