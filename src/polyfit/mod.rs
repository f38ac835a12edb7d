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

use snafu::prelude::*;

/// Cubic spline fitting, evaluation and integration over small node tables.
pub mod cubic_spline;
pub use cubic_spline::{CubicSpline, EndSlope};

/// Errors raised when a spline cannot be built from the provided nodes.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SplineError {
    #[snafu(display("a cubic spline needs at least two nodes, got {count}"))]
    TooFewNodes { count: usize },
    #[snafu(display(
        "spline abscissas must be strictly increasing: x[{index}] = {next} follows {prev}"
    ))]
    UnorderedNodes { index: usize, prev: f64, next: f64 },
    #[snafu(display("spline ordinate y[{index}] = {value} is not finite"))]
    NonFiniteOrdinate { index: usize, value: f64 },
}
