// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Sampling frequencies and their annualization scales.

use std::str::FromStr;

use portmetrics_core::datetime::TRADING_DAYS_IN_YEAR;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::AnalysisError;

/// The sampling frequency of a value series.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    Day,
    Week,
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl Frequency {
    /// Parses a frequency from its label (`day`, `week`, `month`, `quarter`, `half-year`, `year`).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidFrequency`] for any other label.
    pub fn from_label(label: &str) -> Result<Self, AnalysisError> {
        Self::from_str(label).map_err(|_| AnalysisError::InvalidFrequency(label.to_string()))
    }

    /// Returns the number of observation periods per year.
    #[must_use]
    pub const fn annualization_scale(self) -> u32 {
        match self {
            Self::Day => 252,
            Self::Week => 52,
            Self::Month => 12,
            Self::Quarter => 4,
            Self::HalfYear => 2,
            Self::Year => 1,
        }
    }

    /// Returns the number of trading days covered by one period, truncated.
    #[must_use]
    pub const fn trading_days_per_period(self) -> u32 {
        TRADING_DAYS_IN_YEAR / self.annualization_scale()
    }

    /// Converts a lookback expressed in years into a number of periods, truncating
    /// fractional period counts toward zero.
    #[must_use]
    pub fn lookback_periods(self, years: f64) -> usize {
        lookback_periods(years, self.annualization_scale())
    }
}

/// Converts a lookback expressed in years into a number of periods for `scale` periods per year.
///
/// Negative or non-finite lookbacks yield zero periods.
#[must_use]
pub fn lookback_periods(years: f64, scale: u32) -> usize {
    let periods = (years * f64::from(scale)).trunc();
    if periods.is_finite() && periods > 0.0 {
        periods as usize
    } else {
        0
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
