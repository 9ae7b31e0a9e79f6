/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

//! Fixed lattice over the service region.
//!
//! Cells are roughly 100 x 100 m and numbered sequentially from the
//! north-west corner towards the south-east, starting at zero. The bounds,
//! cell pitch and lattice dimensions below are part of the deterministic
//! contract shared with downstream consumers; they are literals, not
//! configuration.

use crate::common::types::{CellId, Latitude, Longitude, Point};
use crate::tools::error::AppError;
use tracing::debug;

pub const LON_EAST: f64 = -73.7;
pub const LON_WEST: f64 = -74.05;
pub const LAT_NORTH: f64 = 41.0;
pub const LAT_SOUTH: f64 = 40.5;

pub const LON_WIDTH: f64 = 74.05 - 73.7;
pub const LAT_HEIGHT: f64 = 41.0 - 40.5;

pub const DELTA_LON: f64 = 0.0014;
pub const DELTA_LAT: f64 = 0.00125;

pub const GRID_COLUMNS: i64 = 250;
pub const GRID_ROWS: i64 = 400;

/// Kilometres per degree, for the planar distance approximation.
pub const DEGREE_LENGTH: f64 = 110.25;

// Keeps near-vertical segments from dividing by zero.
const SLOPE_EPSILON: f64 = 0.00000001;
// Predicted rows this close to the current row step both axes at once.
const DIAGONAL_STEP_WINDOW: f64 = 0.05;

/// Inclusive rectangle test against the region bounds.
pub fn is_within_region(point: &Point) -> bool {
    let Longitude(lon) = point.lon;
    let Latitude(lat) = point.lat;

    !(lon > LON_EAST as f32 || lon < LON_WEST as f32)
        && !(lat > LAT_NORTH as f32 || lat < LAT_SOUTH as f32)
}

fn column_of(Longitude(lon): Longitude) -> i64 {
    (((LON_WEST as f32).abs() - lon.abs()) / DELTA_LON as f32).floor() as i64
}

fn row_of(Latitude(lat): Latitude) -> i64 {
    ((LAT_NORTH as f32 - lat) / DELTA_LAT as f32).floor() as i64
}

/// Maps a coordinate to its lattice cell.
///
/// Never fails: coordinates outside the region still produce an index, which
/// is then negative or beyond the lattice. Callers that care must check
/// [`is_within_region`] first (or use [`region_cell_for_point`]).
pub fn cell_for_point(point: &Point) -> CellId {
    CellId(column_of(point.lon) + row_of(point.lat) * GRID_COLUMNS)
}

/// Checked variant of [`cell_for_point`] for coordinates that must lie
/// inside the region.
pub fn region_cell_for_point(point: &Point) -> Result<CellId, AppError> {
    if !is_within_region(point) {
        let (Latitude(lat), Longitude(lon)) = (point.lat, point.lon);
        debug!(tag = "[Unserviceable Location]", lat = %lat, lon = %lon);
        return Err(AppError::Unserviceable(f64::from(lat), f64::from(lon)));
    }

    Ok(cell_for_point(point))
}

/// Center coordinate of a lattice cell.
pub fn cell_center(cell: CellId) -> Point {
    let CellId(id) = cell;
    let column = id % GRID_COLUMNS;
    let row = (id - column) / GRID_COLUMNS;

    Point {
        lat: Latitude((LAT_NORTH - row as f64 * DELTA_LAT - DELTA_LAT / 2.0) as f32),
        lon: Longitude(
            ((LON_WEST.abs() - column as f64 * DELTA_LON - DELTA_LON / 2.0) as f32) * -1.0,
        ),
    }
}

/// Rasterizes the straight segment between two coordinates into the ordered
/// sequence of cells it crosses, both endpoint cells included.
///
/// The walk is normalized to increasing column order, so the returned order
/// follows the normalized direction, not necessarily the argument order. At
/// each step the segment's slope predicts the row under the next column
/// boundary; a prediction within the diagonal window advances column and row
/// together, otherwise whichever axis the prediction crosses first advances.
pub fn cells_along_path(from: &Point, to: &Point) -> Vec<CellId> {
    let (x1, y1) = (column_of(from.lon), row_of(from.lat));
    let (x2, y2) = (column_of(to.lon), row_of(to.lat));

    let (start_x, start_y, end_x, end_y) = if x1 <= x2 {
        (x1, y1, x2, y2)
    } else {
        (x2, y2, x1, y1)
    };

    let slope = (end_y - start_y) as f64 / ((end_x - start_x) as f64 + SLOPE_EPSILON);

    let mut cur_x = start_x;
    let mut cur_y = start_y;

    let mut cells = Vec::with_capacity(64);
    cells.push(CellId(cur_x + cur_y * GRID_COLUMNS));

    while cur_x < end_x || cur_y != end_y {
        if slope > 0.0 {
            let y = ((cur_x - start_x) as f64 + 0.5) * slope + start_y as f64 - 0.5;

            if y > cur_y as f64 - DIAGONAL_STEP_WINDOW && y < cur_y as f64 + DIAGONAL_STEP_WINDOW {
                cur_x += 1;
                cur_y += 1;
            } else if y < cur_y as f64 {
                cur_x += 1;
            } else {
                cur_y += 1;
            }
        } else {
            let y = ((cur_x - start_x) as f64 + 0.5) * slope + start_y as f64 + 0.5;

            if y > cur_y as f64 - DIAGONAL_STEP_WINDOW && y < cur_y as f64 + DIAGONAL_STEP_WINDOW {
                cur_x += 1;
                cur_y -= 1;
            } else if y > cur_y as f64 {
                cur_x += 1;
            } else {
                cur_y -= 1;
            }
        }

        cells.push(CellId(cur_x + cur_y * GRID_COLUMNS));
    }

    debug!(tag = "[Rasterized Path]", cells = cells.len());

    cells
}

/// Planar distance between two coordinates, in kilometres.
///
/// Cheap approximation: Euclidean norm of the degree deltas with the
/// longitude delta scaled by `cos` of the destination latitude, multiplied
/// by [`DEGREE_LENGTH`]. Not geodesically exact.
pub fn euclidean_distance(from: &Point, to: &Point) -> f64 {
    let x = f64::from(from.lat.inner() - to.lat.inner());
    let y = f64::from(from.lon.inner() - to.lon.inner()) * f64::from(to.lat.inner()).cos();

    DEGREE_LENGTH * (x * x + y * y).sqrt()
}

const DIRECTION_OFFSET: i32 = 179;

/// Whole-degree angle of the vector from `from` to `to`, shifted so the
/// result is non-negative.
pub fn direction_angle(from: &Point, to: &Point) -> i32 {
    let x = f64::from(to.lat.inner() - from.lat.inner());
    let y = f64::from(to.lon.inner() - from.lon.inner()) * f64::from(from.lat.inner()).cos();

    x.atan2(y).to_degrees() as i32 + DIRECTION_OFFSET
}
