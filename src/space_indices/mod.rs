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

//! Space weather indices needed by the empirical atmosphere models.
//!
//! The models only need the solar radio flux F10.7 and the geomagnetic Ap index. They are
//! provided through the [`SpaceWeatherProvider`] trait, either from a table of daily records
//! (typically loaded from a YAML file) or from constant values.

use crate::io::{ConfigError, ConfigRepr};
use serde_derive::{Deserialize, Serialize};
use snafu::prelude::*;
use std::path::Path;

/// Half width of the centered F10.7 averaging window, in days
pub const F107_AVG_HALF_WINDOW: usize = 40;

/// Errors when retrieving space weather indices
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SpaceWeatherError {
    #[snafu(display(
        "space weather data unavailable for JD {jd}: records span JD {first} to {last}"
    ))]
    DataUnavailable { jd: f64, first: f64, last: f64 },
    #[snafu(display("no three hourly Ap for the day starting at JD {day}"))]
    MissingThreeHourly { day: f64 },
    #[snafu(display("space weather table has no records"))]
    EmptyTable,
    #[snafu(display("invalid space weather record for JD {jd}: {reason}"))]
    InvalidRecord { jd: f64, reason: &'static str },
    #[snafu(display("could not load space weather records: {source}"))]
    LoadRecords { source: ConfigError },
}

/// Supplier of the solar and geomagnetic indices at a given UTC Julian date.
pub trait SpaceWeatherProvider: Send + Sync {
    /// 81 day average of F10.7, centered on the day of `jd_utc`
    fn f107_avg81(&self, jd_utc: f64) -> Result<f64, SpaceWeatherError>;

    /// F10.7 of the day before `jd_utc`
    fn f107(&self, jd_utc: f64) -> Result<f64, SpaceWeatherError>;

    /// Daily Ap of the day of `jd_utc`
    fn ap_daily(&self, jd_utc: f64) -> Result<f64, SpaceWeatherError>;

    /// Ap history in the order of [`crate::atmosphere::nrlmsise00::ApIndex::History`].
    ///
    /// By default, every element is the daily Ap.
    fn ap_history(&self, jd_utc: f64) -> Result<[f64; 7], SpaceWeatherError> {
        Ok([self.ap_daily(jd_utc)?; 7])
    }
}

/// Indices of one day
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyIndices {
    /// Julian date (UTC) at the start of the day, i.e. ending in .5
    pub jd: f64,
    /// Observed F10.7 (sfu)
    pub f107: f64,
    /// Daily Ap
    pub ap: f64,
    /// Eight 3 hour Ap, from 00h UTC
    #[serde(default)]
    pub ap_3h: Option<[f64; 8]>,
}

impl ConfigRepr for DailyIndices {}

/// Space weather indices from a table of consecutive days.
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceWeatherTable {
    records: Vec<DailyIndices>,
}

/// Returns the Julian date at the start of the UTC day of `jd`
fn day_start(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

impl SpaceWeatherTable {
    /// Builds a table from daily records, in any order. The records must cover consecutive days.
    pub fn from_records(mut records: Vec<DailyIndices>) -> Result<Self, SpaceWeatherError> {
        ensure!(!records.is_empty(), EmptyTableSnafu);

        for rec in &records {
            ensure!(
                rec.jd.is_finite() && day_start(rec.jd) == rec.jd,
                InvalidRecordSnafu {
                    jd: rec.jd,
                    reason: "must be the Julian date at the start of a day"
                }
            );
            ensure!(
                rec.f107.is_finite() && rec.f107 > 0.0,
                InvalidRecordSnafu {
                    jd: rec.jd,
                    reason: "F10.7 must be positive"
                }
            );
            ensure!(
                rec.ap.is_finite() && rec.ap >= 0.0,
                InvalidRecordSnafu {
                    jd: rec.jd,
                    reason: "Ap must be non-negative"
                }
            );
            if let Some(ap_3h) = rec.ap_3h {
                ensure!(
                    ap_3h.iter().all(|ap| ap.is_finite() && *ap >= 0.0),
                    InvalidRecordSnafu {
                        jd: rec.jd,
                        reason: "3 hour Ap must be non-negative"
                    }
                );
            }
        }

        records.sort_by(|a, b| a.jd.total_cmp(&b.jd));
        for pair in records.windows(2) {
            ensure!(
                pair[1].jd - pair[0].jd == 1.0,
                InvalidRecordSnafu {
                    jd: pair[1].jd,
                    reason: "records must cover consecutive days"
                }
            );
        }

        debug!(
            "space weather table from JD {} to JD {}",
            records[0].jd,
            records[records.len() - 1].jd
        );

        Ok(Self { records })
    }

    /// Loads a sequence of daily records from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SpaceWeatherError> {
        let records = DailyIndices::load_many(path).context(LoadRecordsSnafu)?;
        Self::from_records(records)
    }

    /// Loads a sequence of daily records from a YAML string.
    pub fn loads(data: &str) -> Result<Self, SpaceWeatherError> {
        let records = DailyIndices::loads_many(data).context(LoadRecordsSnafu)?;
        Self::from_records(records)
    }

    pub fn records(&self) -> &[DailyIndices] {
        &self.records
    }

    /// First and last day of the table
    pub fn span(&self) -> (f64, f64) {
        // The constructor guarantees at least one record
        (
            self.records[0].jd,
            self.records[self.records.len() - 1].jd,
        )
    }

    /// Index of the record of the day of `jd` shifted by `offset` days
    fn index(&self, jd: f64, offset: i64) -> Result<usize, SpaceWeatherError> {
        let (first, last) = self.span();
        let unavailable = DataUnavailableSnafu { jd, first, last };
        ensure!(jd.is_finite(), unavailable);
        let day = (day_start(jd) - first) as i64 + offset;
        ensure!(day >= 0 && day < self.records.len() as i64, unavailable);
        Ok(day as usize)
    }

    /// 3 hour Ap values up to and including the 3 hour interval of `jd`, latest first
    fn ap_3h_back(&self, jd: f64, count: usize) -> Result<Vec<f64>, SpaceWeatherError> {
        let today = self.index(jd, 0)?;
        let slot = (((jd - day_start(jd)) * 8.0).floor() as usize).min(7);
        let days_back = (count.saturating_sub(slot + 1)).div_ceil(8);
        let first = self.index(jd, -(days_back as i64))?;

        let mut series = Vec::with_capacity((days_back + 1) * 8);
        for rec in &self.records[first..=today] {
            let ap_3h = rec
                .ap_3h
                .context(MissingThreeHourlySnafu { day: rec.jd })?;
            series.extend_from_slice(&ap_3h);
        }
        series.truncate(days_back * 8 + slot + 1);
        Ok(series.into_iter().rev().take(count).collect())
    }
}

impl SpaceWeatherProvider for SpaceWeatherTable {
    fn f107_avg81(&self, jd_utc: f64) -> Result<f64, SpaceWeatherError> {
        let half = F107_AVG_HALF_WINDOW as i64;
        let start = self.index(jd_utc, -half)?;
        let end = self.index(jd_utc, half)?;
        let window = &self.records[start..=end];
        Ok(window.iter().map(|rec| rec.f107).sum::<f64>() / window.len() as f64)
    }

    fn f107(&self, jd_utc: f64) -> Result<f64, SpaceWeatherError> {
        Ok(self.records[self.index(jd_utc, -1)?].f107)
    }

    fn ap_daily(&self, jd_utc: f64) -> Result<f64, SpaceWeatherError> {
        Ok(self.records[self.index(jd_utc, 0)?].ap)
    }

    /// Builds the Ap history from the 3 hour Ap values of the last three days.
    fn ap_history(&self, jd_utc: f64) -> Result<[f64; 7], SpaceWeatherError> {
        let back = self.ap_3h_back(jd_utc, 20)?;
        let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
        Ok([
            self.ap_daily(jd_utc)?,
            back[0],
            back[1],
            back[2],
            back[3],
            mean(&back[4..12]),
            mean(&back[12..20]),
        ])
    }
}

/// Constant indices, e.g. the quiet conditions used by default below 80 km.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantIndices {
    pub f107a: f64,
    pub f107: f64,
    pub ap: f64,
}

impl ConstantIndices {
    /// Moderate solar activity with a quiet magnetic field
    pub const MODERATE: Self = Self {
        f107a: 150.0,
        f107: 150.0,
        ap: 4.0,
    };
}

impl Default for ConstantIndices {
    fn default() -> Self {
        Self::MODERATE
    }
}

impl ConfigRepr for ConstantIndices {}

impl SpaceWeatherProvider for ConstantIndices {
    fn f107_avg81(&self, _jd_utc: f64) -> Result<f64, SpaceWeatherError> {
        Ok(self.f107a)
    }

    fn f107(&self, _jd_utc: f64) -> Result<f64, SpaceWeatherError> {
        Ok(self.f107)
    }

    fn ap_daily(&self, _jd_utc: f64) -> Result<f64, SpaceWeatherError> {
        Ok(self.ap)
    }
}
