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

//! The trait implemented by every return-based statistic.

/// A statistic computed from a slice of periodic simple returns.
///
/// Undefined results (empty input, zero denominators) are reported as `Some(f64::NAN)`
/// rather than errors, so rolling callers can mask them uniformly.
pub trait ReturnStatistic {
    /// The type of the calculated value.
    type Item;

    /// Returns the display name of the statistic.
    fn name(&self) -> String;

    /// Calculates the statistic over `returns`.
    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item>;

    /// Returns whether `returns` holds enough observations to calculate anything.
    fn check_valid_returns(&self, returns: &[f64]) -> bool {
        !returns.is_empty()
    }
}
