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

//! The NRLMSISE-00 model computes the temperature and the neutral densities of the atmosphere
//! from the ground to the exosphere.
//!
//! Reference: Picone, J. M., Hedin, A. E., Drob, D. P., and Aikin, A. C., "NRLMSISE-00 empirical
//! model of the atmosphere: Statistical comparisons and scientific issues", J. Geophys. Res.,
//! 107(A12), 1468, 2002.
//!
//! ```
//! use satenv::atmosphere::nrlmsise00::{evaluate_density, DensityRequest};
//! use satenv::space_indices::ConstantIndices;
//!
//! let request = DensityRequest::builder()
//!     .jd_utc(2_453_827.5)
//!     .altitude_m(400e3)
//!     .lat_rad(0.0)
//!     .lon_rad(0.0)
//!     .build();
//! let out = evaluate_density(&request, &ConstantIndices::default()).unwrap();
//! assert!(out.total > 0.0);
//! ```

mod coefficients;
mod flags;
mod harmonics;
mod input;
/// Correction factors and the temperature and density profiles of the model
pub mod profiles;
mod thermosphere;

pub use flags::MsisFlags;
pub use input::{build_config, ApIndex, Auxiliaries, MsisConfig, MsisInput, UNKNOWN_LONGITUDE};
pub use profiles::{ccor, ccor2, dnet, Geoid};
pub use thermosphere::{gtd7, gtd7d, MsisOutput, MESOPAUSE_KM};

use super::{AtmosphereError, AtmosphereModel, InvalidInputSnafu, SpaceWeatherSnafu};
use crate::io::ConfigRepr;
use crate::space_indices::{ConstantIndices, SpaceWeatherProvider};
use crate::time::Epoch;
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};
use snafu::prelude::*;
use typed_builder::TypedBuilder;

/// Below this altitude (m), the indices not provided are the moderate defaults of
/// [`ConstantIndices::MODERATE`] instead of being read from the space weather provider.
pub const LOW_ALTITUDE_M: f64 = 80e3;

/// Cumulative number of days at the start of each month of a common year
const MONTH_START: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

fn yes() -> bool {
    true
}

/// A density evaluation at a UTC Julian date and a geodetic location, in SI units.
///
/// The solar and geomagnetic indices not provided are read from the space weather provider.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct DensityRequest {
    pub jd_utc: f64,
    /// Altitude above the ellipsoid (m)
    pub altitude_m: f64,
    /// Geodetic latitude (rad)
    pub lat_rad: f64,
    /// Geodetic longitude (rad)
    pub lon_rad: f64,
    /// 81 day average of F10.7
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub f107a: Option<f64>,
    /// F10.7 of the previous day
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub f107: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub ap: Option<ApIndex>,
    /// Read the Ap history instead of the daily Ap when the Ap is not provided
    #[builder(default = false)]
    #[serde(default)]
    pub use_ap_history: bool,
    /// Output in m^-3 and kg/m^3 instead of cm^-3 and g/cm^3, overrides `flags.output_si`
    #[builder(default = true)]
    #[serde(default = "yes")]
    pub output_si: bool,
    /// Include the anomalous oxygen in the total mass density
    #[builder(default = true)]
    #[serde(default = "yes")]
    pub use_drag_variant: bool,
    #[builder(default)]
    #[serde(default)]
    pub flags: MsisFlags,
}

impl ConfigRepr for DensityRequest {}

/// Day of year of a Gregorian date
fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let month_idx = usize::from(month.clamp(1, 12)) - 1;
    MONTH_START[month_idx] + u16::from(day) + u16::from(leap && month > 2)
}

/// Builds the model input of a request, reading the missing indices from the provider.
pub fn request_input<P>(request: &DensityRequest, provider: &P) -> Result<MsisInput, AtmosphereError>
where
    P: SpaceWeatherProvider + ?Sized,
{
    let jd = request.jd_utc;
    ensure!(
        jd.is_finite(),
        InvalidInputSnafu {
            param: "jd_utc",
            value: jd,
            reason: "must be finite"
        }
    );
    ensure!(
        request.altitude_m.is_finite(),
        InvalidInputSnafu {
            param: "altitude_m",
            value: request.altitude_m,
            reason: "must be finite"
        }
    );

    let epoch = Epoch::from_jde_utc(jd);
    let (year, month, day, hours, minutes, seconds, nanos) = epoch.to_gregorian_utc();
    let sec = f64::from(hours) * 3600.0
        + f64::from(minutes) * 60.0
        + f64::from(seconds)
        + f64::from(nanos) * 1e-9;
    let lon_deg = request.lon_rad.to_degrees();

    let (f107a, f107, ap) = if request.altitude_m < LOW_ALTITUDE_M {
        let quiet = ConstantIndices::MODERATE;
        if request.f107a.is_none() || request.f107.is_none() || request.ap.is_none() {
            debug!(
                "{} m is below {LOW_ALTITUDE_M} m: using the default indices",
                request.altitude_m
            );
        }
        (
            request.f107a.unwrap_or(quiet.f107a),
            request.f107.unwrap_or(quiet.f107),
            request.ap.unwrap_or(ApIndex::Daily(quiet.ap)),
        )
    } else {
        let f107a = match request.f107a {
            Some(f107a) => f107a,
            None => provider.f107_avg81(jd).context(SpaceWeatherSnafu)?,
        };
        let f107 = match request.f107 {
            Some(f107) => f107,
            None => provider.f107(jd).context(SpaceWeatherSnafu)?,
        };
        let ap = match request.ap {
            Some(ap) => ap,
            None if request.use_ap_history => {
                ApIndex::History(provider.ap_history(jd).context(SpaceWeatherSnafu)?)
            }
            None => ApIndex::Daily(provider.ap_daily(jd).context(SpaceWeatherSnafu)?),
        };
        (f107a, f107, ap)
    };

    Ok(MsisInput::builder()
        .year(year)
        .doy(day_of_year(year, month, day))
        .sec(sec)
        .alt_km(request.altitude_m / 1e3)
        .lat_deg(request.lat_rad.to_degrees())
        .lon_deg(lon_deg)
        .lst_hours(sec / 3600.0 + lon_deg / 15.0)
        .f107a(f107a)
        .f107(f107)
        .ap(ap)
        .build())
}

/// Evaluates the model for a request in SI units.
///
/// Returns [`gtd7d`] when the drag variant is requested, [`gtd7`] otherwise.
pub fn evaluate_density<P>(
    request: &DensityRequest,
    provider: &P,
) -> Result<MsisOutput, AtmosphereError>
where
    P: SpaceWeatherProvider + ?Sized,
{
    let input = request_input(request, provider)?;
    let flags = MsisFlags {
        output_si: request.output_si,
        ..request.flags
    };
    let cfg = build_config(input, flags)?;
    trace!(
        "NRLMSISE-00 at JD {}: day {} {} s, {} km, F10.7A {} F10.7 {} {:?}",
        request.jd_utc,
        input.doy,
        input.sec,
        input.alt_km,
        input.f107a,
        input.f107,
        input.ap
    );

    if request.use_drag_variant {
        gtd7d(&cfg)
    } else {
        gtd7(&cfg)
    }
}

/// Evaluates the requests in parallel, preserving their order.
pub fn evaluate_many<P>(
    requests: &[DensityRequest],
    provider: &P,
) -> Vec<Result<MsisOutput, AtmosphereError>>
where
    P: SpaceWeatherProvider + ?Sized,
{
    requests
        .par_iter()
        .map(|request| evaluate_density(request, provider))
        .collect()
}

/// NRLMSISE-00 as an [`AtmosphereModel`], reading the indices from a space weather provider.
#[derive(Clone, Debug)]
pub struct Nrlmsise00<P: SpaceWeatherProvider> {
    pub provider: P,
    pub flags: MsisFlags,
    /// Include the anomalous oxygen in the total mass density, as needed for drag
    pub use_drag_variant: bool,
}

impl<P: SpaceWeatherProvider> Nrlmsise00<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            flags: MsisFlags::default(),
            use_drag_variant: true,
        }
    }

    /// Evaluates all of the outputs of the model at this epoch and location, in SI units.
    pub fn evaluate(
        &self,
        epoch: Epoch,
        lat_rad: f64,
        lon_rad: f64,
        altitude_m: f64,
    ) -> Result<MsisOutput, AtmosphereError> {
        let request = DensityRequest::builder()
            .jd_utc(epoch.to_jde_utc_days())
            .altitude_m(altitude_m)
            .lat_rad(lat_rad)
            .lon_rad(lon_rad)
            .use_drag_variant(self.use_drag_variant)
            .flags(self.flags)
            .build();
        evaluate_density(&request, &self.provider)
    }
}

impl<P: SpaceWeatherProvider> AtmosphereModel for Nrlmsise00<P> {
    fn density(
        &self,
        epoch: Epoch,
        lat_rad: f64,
        lon_rad: f64,
        altitude_m: f64,
    ) -> Result<f64, AtmosphereError> {
        Ok(self.evaluate(epoch, lat_rad, lon_rad, altitude_m)?.total)
    }

    fn name(&self) -> &'static str {
        "NRLMSISE-00"
    }

    fn requires_space_weather(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod ut_nrlmsise00 {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(2006, 1, 1, 1)]
    #[case(2006, 3, 1, 60)]
    #[case(2004, 3, 1, 61)]
    #[case(2000, 12, 31, 366)]
    #[case(1900, 12, 31, 365)]
    fn gregorian_day_of_year(
        #[case] year: i32,
        #[case] month: u8,
        #[case] day: u8,
        #[case] doy: u16,
    ) {
        assert_eq!(day_of_year(year, month, day), doy);
    }

    #[test]
    fn request_time_and_location() {
        let request = DensityRequest::builder()
            .jd_utc(2_453_827.5 + 0.25)
            .altitude_m(400e3)
            .lat_rad(30f64.to_radians())
            .lon_rad(90f64.to_radians())
            .build();
        let input = request_input(&request, &ConstantIndices::default()).unwrap();
        // JD 2453827.5 is 2006-04-02 at midnight UTC
        assert_eq!(input.year, 2006);
        assert_eq!(input.doy, 92);
        assert!((input.sec - 21_600.0).abs() < 1e-3);
        assert!((input.alt_km - 400.0).abs() < 1e-12);
        assert!((input.lat_deg - 30.0).abs() < 1e-12);
        assert!((input.lst_hours - 12.0).abs() < 1e-6);
    }

    #[test]
    fn request_yaml() {
        let yaml = "jd_utc: 2453827.5\naltitude_m: 300000\nlat_rad: 0.1\nlon_rad: -0.2\nap: !Daily 12\n";
        let request = DensityRequest::loads(yaml).unwrap();
        assert!(request.output_si);
        assert!(request.use_drag_variant);
        assert_eq!(request.ap, Some(ApIndex::Daily(12.0)));
        assert_eq!(request.flags, MsisFlags::default());
    }

    #[test]
    fn model_trait() {
        let model = Nrlmsise00::new(ConstantIndices::default());
        let epoch = Epoch::from_gregorian_utc_at_midnight(2006, 4, 2);
        let rho = model.density(epoch, 0.0, 0.0, 400e3).unwrap();
        assert!(rho > 0.0);
        assert!(model.requires_space_weather());
        assert!(matches!(
            model.density(epoch, f64::NAN, 0.0, 400e3),
            Err(AtmosphereError::InvalidInput {
                param: "latitude (deg)",
                ..
            })
        ));
    }
}
