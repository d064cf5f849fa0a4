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

//! Return, risk and ratio statistics.

pub mod annualized_return;
pub mod annualized_volatility;
pub mod calmar_ratio;
pub mod cvar_ratio;
pub mod gain_to_pain;
pub mod hit_ratio;
pub mod sharpe_ratio;
pub mod sortino_ratio;
pub mod total_return;
pub mod value_at_risk;
pub mod var_ratio;
