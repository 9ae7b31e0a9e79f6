/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

//! Seeded truncated-normal sampling.
//!
//! Every function takes the seed explicitly and builds a fresh generator from
//! it, so calls are side-effect-free and repeatable. Correlated-but-distinct
//! draws are obtained by offsetting the base seed at the call site rather
//! than by sharing generator state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Integer sample in `[min, max]`, mean `(min+max)/2`, stddev `(max-min)/8`.
pub fn bounded_long(seed: u64, min: i64, max: i64) -> i64 {
    let mean = (min + max) as f32 / 2.0;
    let stddev = (max - min) as f32 / 8.0;

    bounded_long_with(seed, min, max, mean, stddev)
}

/// Integer sample in `[min, max]` from a normal with the given mean and
/// stddev, by rejection: gaussian draws are rounded and retried until one
/// lands inside the bounds.
///
/// Bounds with `min > max` are a caller contract violation; debug builds
/// assert, release builds spin on an unsatisfiable rejection loop.
pub fn bounded_long_with(seed: u64, min: i64, max: i64, mean: f32, stddev: f32) -> i64 {
    debug_assert!(min <= max, "sampling bounds out of order: [{min}, {max}]");

    let mut rng = StdRng::seed_from_u64(seed);
    loop {
        let draw: f64 = rng.sample(StandardNormal);
        let value = (f64::from(stddev) * draw + f64::from(mean)).round() as i64;
        if value >= min && value <= max {
            return value;
        }
    }
}

/// Float sample in `[min, max]`, mean `(min+max)/2`, stddev `(max-min)/8`.
pub fn bounded_float(seed: u64, min: f32, max: f32) -> f32 {
    let mean = (min + max) / 2.0;
    let stddev = (max - min) / 8.0;

    bounded_float_with(seed, min, max, mean, stddev)
}

/// Float sample in `[min, max]` from a normal with the given mean and
/// stddev, by rejection. Same bounds contract as [`bounded_long_with`].
pub fn bounded_float_with(seed: u64, min: f32, max: f32, mean: f32, stddev: f32) -> f32 {
    debug_assert!(min <= max, "sampling bounds out of order: [{min}, {max}]");

    let mut rng = StdRng::seed_from_u64(seed);
    loop {
        let draw: f32 = rng.sample(StandardNormal);
        let value = stddev * draw + mean;
        if value >= min && value <= max {
            return value;
        }
    }
}
