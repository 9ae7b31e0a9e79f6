/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

//! Uniform coordinate helpers for callers that need extra points strictly
//! inside the region, e.g. to place synthetic fleets. Unlike the ride
//! generator these take the caller's generator, so distinct draws come from
//! advancing it rather than from reseeding.

use rand::Rng;

use crate::common::grid::{LAT_HEIGHT, LAT_SOUTH, LON_EAST, LON_WIDTH};
use crate::common::types::{Latitude, Longitude, Point};

pub fn random_region_lon<R: Rng>(rng: &mut R) -> Longitude {
    Longitude((LON_EAST - LON_WIDTH * f64::from(rng.gen::<f32>())) as f32)
}

pub fn random_region_lat<R: Rng>(rng: &mut R) -> Latitude {
    Latitude((LAT_SOUTH + LAT_HEIGHT * f64::from(rng.gen::<f32>())) as f32)
}

pub fn random_region_point<R: Rng>(rng: &mut R) -> Point {
    Point {
        lat: random_region_lat(rng),
        lon: random_region_lon(rng),
    }
}
