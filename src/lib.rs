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

/*! # satenv

Space environment models for astrodynamics: the NRLMSISE-00 and exponential models of the neutral
atmosphere, and the space weather indices that drive them.

All of the models are pure functions of their inputs and may be evaluated from many threads at once.
*/

/// Atmospheric density models, all implementing [`atmosphere::AtmosphereModel`].
pub mod atmosphere;

/// Solar flux and geomagnetic indices, from tables of daily records or constant values.
pub mod space_indices;

/// Loading of configurations and data tables from YAML.
pub mod io;

/// Polynomial and fitting module
pub mod polyfit;

#[macro_use]
extern crate log;
extern crate hifitime;
extern crate nalgebra as na;

/// Re-export of hifitime
pub mod time {
    pub use hifitime::*;
}

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

pub use self::atmosphere::AtmosphereError;
