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

use super::flags::MsisFlags;
use super::profiles::{Geoid, DGTR};
use crate::atmosphere::{AtmosphereError, InvalidInputSnafu};
use crate::linalg::SMatrix;
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use typed_builder::TypedBuilder;

/// Local time hours to radians, as truncated by the model
pub(crate) const HR: f64 = 0.2618;

/// Longitudes at or below this value are unknown, disabling the longitude terms
pub const UNKNOWN_LONGITUDE: f64 = -1000.0;

/// Magnetic activity index provided to the model
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ApIndex {
    /// Daily Ap
    Daily(f64),
    /// Ap history, in order:
    /// 0. daily Ap
    /// 1. 3 hour Ap for the current time
    /// 2. 3 hour Ap for 3 hours before the current time
    /// 3. 3 hour Ap for 6 hours before the current time
    /// 4. 3 hour Ap for 9 hours before the current time
    /// 5. average of the eight 3 hour Ap from 12 to 33 hours before the current time
    /// 6. average of the eight 3 hour Ap from 36 to 57 hours before the current time
    History([f64; 7]),
}

impl ApIndex {
    /// Returns the daily Ap
    pub fn daily(&self) -> f64 {
        match self {
            Self::Daily(ap) => *ap,
            Self::History(history) => history[0],
        }
    }

    /// Returns true if this index holds the Ap history
    pub fn is_history(&self) -> bool {
        matches!(self, Self::History(_))
    }
}

impl Default for ApIndex {
    fn default() -> Self {
        Self::Daily(4.0)
    }
}

/// Physical inputs of the model, in km, degrees and hours.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct MsisInput {
    /// Year, unused by the model
    #[builder(default)]
    pub year: i32,
    /// Day of year, starting at 1
    pub doy: u16,
    /// Seconds in the UT day
    pub sec: f64,
    /// Geodetic altitude in km
    pub alt_km: f64,
    /// Geodetic latitude in degrees
    pub lat_deg: f64,
    /// Geodetic longitude in degrees, see [`UNKNOWN_LONGITUDE`]
    pub lon_deg: f64,
    /// Local apparent solar time in hours
    pub lst_hours: f64,
    /// 81 day average of the F10.7 flux, centered on the day of year
    #[builder(default = 150.0)]
    pub f107a: f64,
    /// Daily F10.7 flux of the previous day
    #[builder(default = 150.0)]
    pub f107: f64,
    #[builder(default)]
    pub ap: ApIndex,
}

impl MsisInput {
    /// Returns true if the longitude is known
    pub fn longitude_known(&self) -> bool {
        self.lon_deg > UNKNOWN_LONGITUDE
    }
}

/// Quantities derived once from the inputs and shared by all of the harmonic expansions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Auxiliaries {
    pub geoid: Geoid,
    /// Associated Legendre functions of the sine of the latitude, indexed by (order, degree)
    pub plg: SMatrix<f64, 4, 8>,
    pub stloc: f64,
    pub ctloc: f64,
    pub s2tloc: f64,
    pub c2tloc: f64,
    pub s3tloc: f64,
    pub c3tloc: f64,
    /// Daily F10.7 departure from its 81 day average
    pub df: f64,
    /// 81 day average F10.7 departure from 150
    pub dfa: f64,
}

impl Auxiliaries {
    fn new(input: &MsisInput, flags: &MsisFlags) -> Self {
        let (c, s) = (input.lat_deg * DGTR).sin_cos();
        let c2 = c * c;
        let c4 = c2 * c2;
        let s2 = s * s;

        let mut plg = SMatrix::<f64, 4, 8>::zeros();
        plg[(0, 1)] = c;
        plg[(0, 2)] = 0.5 * (3.0 * c2 - 1.0);
        plg[(0, 3)] = 0.5 * (5.0 * c * c2 - 3.0 * c);
        plg[(0, 4)] = (35.0 * c4 - 30.0 * c2 + 3.0) / 8.0;
        plg[(0, 5)] = (63.0 * c2 * c2 * c - 70.0 * c2 * c + 15.0 * c) / 8.0;
        plg[(0, 6)] = (11.0 * c * plg[(0, 5)] - 5.0 * plg[(0, 4)]) / 6.0;

        plg[(1, 1)] = s;
        plg[(1, 2)] = 3.0 * c * s;
        plg[(1, 3)] = 1.5 * (5.0 * c2 - 1.0) * s;
        plg[(1, 4)] = 2.5 * (7.0 * c2 * c - 3.0 * c) * s;
        plg[(1, 5)] = 1.875 * (21.0 * c4 - 14.0 * c2 + 1.0) * s;
        plg[(1, 6)] = (11.0 * c * plg[(1, 5)] - 6.0 * plg[(1, 4)]) / 5.0;

        plg[(2, 2)] = 3.0 * s2;
        plg[(2, 3)] = 15.0 * s2 * c;
        plg[(2, 4)] = 7.5 * (7.0 * c2 - 1.0) * s2;
        plg[(2, 5)] = 3.0 * c * plg[(2, 4)] - 2.0 * plg[(2, 3)];
        plg[(2, 6)] = (11.0 * c * plg[(2, 5)] - 7.0 * plg[(2, 4)]) / 4.0;
        plg[(2, 7)] = (13.0 * c * plg[(2, 6)] - 8.0 * plg[(2, 5)]) / 5.0;

        plg[(3, 3)] = 15.0 * s2 * s;
        plg[(3, 4)] = 105.0 * s2 * s * c;
        plg[(3, 5)] = (9.0 * c * plg[(3, 4)] - 7.0 * plg[(3, 3)]) / 2.0;
        plg[(3, 6)] = (11.0 * c * plg[(3, 5)] - 8.0 * plg[(3, 4)]) / 3.0;

        let tloc = input.lst_hours;
        let (stloc, ctloc) = (HR * tloc).sin_cos();
        let (s2tloc, c2tloc) = (2.0 * HR * tloc).sin_cos();
        let (s3tloc, c3tloc) = (3.0 * HR * tloc).sin_cos();

        // Gravity and radius at 45 degrees unless the latitude terms are enabled
        let geoid_lat = if flags.time_independent {
            input.lat_deg
        } else {
            45.0
        };

        Self {
            geoid: Geoid::at_latitude(geoid_lat),
            plg,
            stloc,
            ctloc,
            s2tloc,
            c2tloc,
            s3tloc,
            c3tloc,
            df: input.f107 - input.f107a,
            dfa: input.f107a - 150.0,
        }
    }
}

/// Complete configuration of one model evaluation
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MsisConfig {
    pub input: MsisInput,
    pub flags: MsisFlags,
    pub aux: Auxiliaries,
}

impl MsisConfig {
    /// Returns a copy of this configuration at another altitude.
    /// None of the auxiliaries depend on the altitude.
    pub(crate) fn at_altitude(&self, alt_km: f64) -> Self {
        let mut me = *self;
        me.input.alt_km = alt_km;
        me
    }
}

/// Validates the inputs and computes the auxiliaries of the model.
///
/// The `use_ap_array` flag is set from the kind of [`ApIndex`] provided.
pub fn build_config(input: MsisInput, flags: MsisFlags) -> Result<MsisConfig, AtmosphereError> {
    let finite = [
        ("seconds of day", input.sec),
        ("altitude (km)", input.alt_km),
        ("latitude (deg)", input.lat_deg),
        ("longitude (deg)", input.lon_deg),
        ("local solar time (h)", input.lst_hours),
        ("F10.7 81 day average", input.f107a),
        ("F10.7", input.f107),
    ];
    for (param, value) in finite {
        ensure!(
            value.is_finite(),
            InvalidInputSnafu {
                param,
                value,
                reason: "must be finite"
            }
        );
    }

    ensure!(
        (1..=366).contains(&input.doy),
        InvalidInputSnafu {
            param: "day of year",
            value: f64::from(input.doy),
            reason: "must be within 1 and 366"
        }
    );
    ensure!(
        (0.0..=86_400.0).contains(&input.sec),
        InvalidInputSnafu {
            param: "seconds of day",
            value: input.sec,
            reason: "must be within 0 and 86400"
        }
    );
    ensure!(
        input.alt_km >= 0.0,
        InvalidInputSnafu {
            param: "altitude (km)",
            value: input.alt_km,
            reason: "must be at or above the surface"
        }
    );
    ensure!(
        (-90.0..=90.0).contains(&input.lat_deg),
        InvalidInputSnafu {
            param: "latitude (deg)",
            value: input.lat_deg,
            reason: "must be within -90 and 90"
        }
    );
    for (param, value) in [("F10.7 81 day average", input.f107a), ("F10.7", input.f107)] {
        ensure!(
            value > 0.0,
            InvalidInputSnafu {
                param,
                value,
                reason: "must be positive"
            }
        );
    }

    let ap_values = match &input.ap {
        ApIndex::Daily(ap) => std::slice::from_ref(ap),
        ApIndex::History(history) => &history[..],
    };
    for value in ap_values.iter().copied() {
        ensure!(
            value.is_finite() && value >= 0.0,
            InvalidInputSnafu {
                param: "Ap",
                value,
                reason: "must be finite and non negative"
            }
        );
    }

    let mut flags = flags;
    flags.use_ap_array = input.ap.is_history();

    Ok(MsisConfig {
        input,
        flags,
        aux: Auxiliaries::new(&input, &flags),
    })
}

#[cfg(test)]
mod ut_input {
    use super::*;
    use crate::atmosphere::AtmosphereError;

    use rstest::*;

    #[fixture]
    fn input() -> MsisInput {
        MsisInput::builder()
            .doy(172)
            .sec(29_000.0)
            .alt_km(400.0)
            .lat_deg(60.0)
            .lon_deg(-70.0)
            .lst_hours(16.0)
            .build()
    }

    #[rstest]
    fn legendre_table(input: MsisInput) {
        let cfg = build_config(input, MsisFlags::default()).unwrap();
        let plg = cfg.aux.plg;
        let c = (60.0 * DGTR).sin();
        let s = (60.0 * DGTR).cos();
        assert!((plg[(0, 1)] - c).abs() < 1e-15);
        assert!((plg[(0, 2)] - 0.5 * (3.0 * c * c - 1.0)).abs() < 1e-15);
        assert!((plg[(1, 1)] - s).abs() < 1e-15);
        assert!((plg[(2, 2)] - 3.0 * s * s).abs() < 1e-15);
        assert!((plg[(3, 3)] - 15.0 * s.powi(3)).abs() < 1e-14);
        // Degree six zonal term from its closed form
        let p6 = (231.0 * c.powi(6) - 315.0 * c.powi(4) + 105.0 * c * c - 5.0) / 16.0;
        assert!((plg[(0, 6)] - p6).abs() < 1e-14);
        // Unused entries stay zero
        assert_eq!(plg[(3, 7)], 0.0);
        assert_eq!(plg[(1, 0)], 0.0);
    }

    #[rstest]
    fn derived(input: MsisInput) {
        let cfg = build_config(input, MsisFlags::default()).unwrap();
        assert_eq!(cfg.aux.df, 0.0);
        assert_eq!(cfg.aux.dfa, 0.0);
        assert!((cfg.aux.ctloc - (HR * 16.0).cos()).abs() < 1e-15);
        assert!(!cfg.flags.use_ap_array);

        let mut with_history = input;
        with_history.ap = ApIndex::History([4.0; 7]);
        let flags = MsisFlags::builder().use_ap_array(false).build();
        assert!(build_config(with_history, flags).unwrap().flags.use_ap_array);
    }

    #[rstest]
    fn geoid_latitude(input: MsisInput) {
        let cfg = build_config(input, MsisFlags::default()).unwrap();
        assert_eq!(cfg.aux.geoid, Geoid::at_latitude(60.0));

        let flags = MsisFlags::builder().time_independent(false).build();
        let cfg = build_config(input, flags).unwrap();
        assert_eq!(cfg.aux.geoid, Geoid::at_latitude(45.0));
        // The Legendre functions still follow the true latitude
        assert!((cfg.aux.plg[(0, 1)] - (60.0 * DGTR).sin()).abs() < 1e-15);
    }

    #[rstest]
    #[case::nan_lat(|i: &mut MsisInput| i.lat_deg = f64::NAN, "latitude (deg)")]
    #[case::lat(|i: &mut MsisInput| i.lat_deg = 91.0, "latitude (deg)")]
    #[case::alt(|i: &mut MsisInput| i.alt_km = -1.0, "altitude (km)")]
    #[case::doy(|i: &mut MsisInput| i.doy = 0, "day of year")]
    #[case::sec(|i: &mut MsisInput| i.sec = 90_000.0, "seconds of day")]
    #[case::flux(|i: &mut MsisInput| i.f107 = 0.0, "F10.7")]
    #[case::ap(|i: &mut MsisInput| i.ap = ApIndex::History([4.0, 4.0, f64::NAN, 4.0, 4.0, 4.0, 4.0]), "Ap")]
    fn rejects(input: MsisInput, #[case] tweak: fn(&mut MsisInput), #[case] expected: &str) {
        let mut input = input;
        tweak(&mut input);
        match build_config(input, MsisFlags::default()) {
            Err(AtmosphereError::InvalidInput { param, .. }) => assert_eq!(param, expected),
            other => panic!("expected an invalid input error, got {other:?}"),
        }
    }
}
