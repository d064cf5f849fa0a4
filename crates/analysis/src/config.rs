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

//! Configuration for the metrics engine.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{error::AnalysisError, periodization::Frequency};

/// Configuration for [`crate::Metrics`] instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// The sampling frequency of the input series.
    #[serde(default)]
    pub frequency: Frequency,
    /// The lower-tail probability used by VaR and CVaR statistics.
    #[serde(default = "default_delta")]
    pub delta: f64,
    /// The trailing window of rolling statistics, in years.
    #[serde(default = "default_lookback")]
    pub lookback: f64,
    /// The trailing window of the rolling maximum drawdown used by the Calmar ratio, in years.
    #[serde(default = "default_mdd_lookback")]
    pub mdd_lookback: f64,
    /// The yearly risk-free rate used by the Sharpe ratio.
    #[serde(default = "default_sharpe_risk_free_rate")]
    pub sharpe_risk_free_rate: f64,
    /// The yearly risk-free rate used by the Sortino ratio.
    #[serde(default = "default_sortino_risk_free_rate")]
    pub sortino_risk_free_rate: f64,
}

const fn default_delta() -> f64 {
    0.01
}

const fn default_lookback() -> f64 {
    1.0
}

const fn default_mdd_lookback() -> f64 {
    3.0
}

const fn default_sharpe_risk_free_rate() -> f64 {
    0.04
}

const fn default_sortino_risk_free_rate() -> f64 {
    0.03
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            frequency: Frequency::Day,
            delta: default_delta(),
            lookback: default_lookback(),
            mdd_lookback: default_mdd_lookback(),
            sharpe_risk_free_rate: default_sharpe_risk_free_rate(),
            sortino_risk_free_rate: default_sortino_risk_free_rate(),
        }
    }
}

impl MetricsConfig {
    /// Parses a config from TOML, filling absent fields with their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not valid TOML for this config, or if `delta` lies
    /// outside `[0, 1]`.
    pub fn from_toml_str(input: &str) -> Result<Self, AnalysisError> {
        let config: Self =
            toml::from_str(input).map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let input = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&input)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Checks that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] if `delta` lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(0.0..=1.0).contains(&self.delta) {
            return Err(AnalysisError::InvalidConfig(format!(
                "delta must lie within [0, 1], was {}",
                self.delta
            )));
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
