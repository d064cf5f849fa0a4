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

pub mod portvals;
pub mod rebalance;
pub mod report;

use portmetrics_analysis::{Frequency, MetricsConfig};

use crate::opt::MetricsArgs;

/// Loads the metrics config named by `args`, then applies the flag overrides.
pub(crate) fn resolve_config(args: &MetricsArgs) -> anyhow::Result<MetricsConfig> {
    let mut config = match &args.config {
        Some(path) => MetricsConfig::from_toml_file(path)?,
        None => MetricsConfig::default(),
    };

    if let Some(label) = &args.frequency {
        config.frequency = Frequency::from_label(label)?;
    }
    if let Some(delta) = args.delta {
        config.delta = delta;
    }
    config.validate()?;

    log::debug!("Using {config:?}");
    Ok(config)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
