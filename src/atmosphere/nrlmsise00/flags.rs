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

use crate::io::ConfigRepr;
use serde_derive::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Selects which terms of the NRLMSISE-00 harmonic expansion are evaluated, and the output units.
///
/// Every physics term is enabled by default. The magnetic activity term uses the 7-element Ap
/// history when `use_ap_array` is set, which is derived from the [`super::ApIndex`] provided
/// when building the model configuration.
///
/// ```
/// use satenv::atmosphere::nrlmsise00::MsisFlags;
///
/// let flags = MsisFlags::builder().diurnal(false).output_si(false).build();
/// assert!(!flags.diurnal);
/// assert!(flags.semidiurnal);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
#[serde(default)]
pub struct MsisFlags {
    /// Output in m^-3 and kg/m^3 instead of cm^-3 and g/cm^3
    #[builder(default = true)]
    pub output_si: bool,
    /// F10.7 effect on the mean
    #[builder(default = true)]
    pub f107_mean: bool,
    #[builder(default = true)]
    pub time_independent: bool,
    #[builder(default = true)]
    pub sym_annual: bool,
    #[builder(default = true)]
    pub sym_semiannual: bool,
    #[builder(default = true)]
    pub asym_annual: bool,
    #[builder(default = true)]
    pub asym_semiannual: bool,
    #[builder(default = true)]
    pub diurnal: bool,
    #[builder(default = true)]
    pub semidiurnal: bool,
    /// Magnetic activity term, from the daily Ap or from the Ap history
    #[builder(default = true)]
    pub daily_ap: bool,
    /// Master switch of the three longitude and universal time terms below
    #[builder(default = true)]
    pub all_ut_long_effects: bool,
    #[builder(default = true)]
    pub longitudinal: bool,
    /// Universal time and mixed universal time and longitude
    #[builder(default = true)]
    pub ut_mixed_long: bool,
    /// Mixed Ap, universal time and longitude
    #[builder(default = true)]
    pub mixed_ap_ut_long: bool,
    #[builder(default = true)]
    pub terdiurnal: bool,
    /// Departures from diffusive equilibrium below the turbopause
    #[builder(default = true)]
    pub departures_from_eq: bool,
    #[builder(default = true)]
    pub all_tinf_var: bool,
    #[builder(default = true)]
    pub all_tlb_var: bool,
    #[builder(default = true)]
    pub all_tn1_var: bool,
    #[builder(default = true)]
    pub all_s_var: bool,
    #[builder(default = true)]
    pub all_tn2_var: bool,
    #[builder(default = true)]
    pub all_nlb_var: bool,
    #[builder(default = true)]
    pub all_tn3_var: bool,
    /// Use the 7-element Ap history in the magnetic activity term
    #[builder(default = false)]
    pub use_ap_array: bool,
}

impl Default for MsisFlags {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConfigRepr for MsisFlags {}

/// Numeric view of a flag, used as a multiplicative gate of a term
#[inline]
pub(crate) fn gate(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}
