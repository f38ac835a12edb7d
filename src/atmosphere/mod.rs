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

use crate::io::ConfigError;
use crate::polyfit::SplineError;
use crate::space_indices::SpaceWeatherError;
use crate::time::Epoch;
use snafu::prelude::*;

/// Exponential atmosphere of Vallado, from tabulated reference densities and scale heights.
pub mod exponential;
pub use exponential::ExponentialAtmosphere;

/// NRLMSISE-00 empirical model of the neutral atmosphere, from the ground to the exosphere.
pub mod nrlmsise00;
pub use nrlmsise00::Nrlmsise00;

/// Errors of the atmosphere models.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AtmosphereError {
    #[snafu(display("invalid {param} = {value}: {reason}"))]
    InvalidInput {
        param: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[snafu(display("{profile} temperature profile: {source}"))]
    SplineProfile {
        profile: &'static str,
        source: SplineError,
    },
    #[snafu(display("lower atmosphere coefficient table has selector {selector}, expected 2"))]
    CoefficientSet { selector: f64 },
    #[snafu(display("{source}"))]
    SpaceWeather { source: SpaceWeatherError },
    #[snafu(display("could not load the model configuration: {source}"))]
    LoadConfig { source: ConfigError },
}

/// An atmosphere model returning the total mass density at a geodetic location.
///
/// Implementations are shared between threads when evaluating densities in parallel.
pub trait AtmosphereModel: Send + Sync {
    /// Total mass density in kg/m^3 at the geodetic latitude and longitude (radians) and the
    /// altitude above the ellipsoid (meters).
    fn density(
        &self,
        epoch: Epoch,
        lat_rad: f64,
        lon_rad: f64,
        altitude_m: f64,
    ) -> Result<f64, AtmosphereError>;

    /// Model name, used in logs
    fn name(&self) -> &'static str;

    /// Whether this model reads solar and geomagnetic indices
    fn requires_space_weather(&self) -> bool {
        false
    }
}

impl<M: AtmosphereModel + ?Sized> AtmosphereModel for Box<M> {
    fn density(
        &self,
        epoch: Epoch,
        lat_rad: f64,
        lon_rad: f64,
        altitude_m: f64,
    ) -> Result<f64, AtmosphereError> {
        (**self).density(epoch, lat_rad, lon_rad, altitude_m)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn requires_space_weather(&self) -> bool {
        (**self).requires_space_weather()
    }
}
