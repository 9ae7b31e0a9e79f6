/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::tools::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[macros::impl_getter]
pub struct RideId(pub u64);
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[macros::impl_getter]
pub struct DriverId(pub u64);
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[macros::impl_getter]
pub struct VehicleId(pub u64);
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
#[macros::impl_getter]
pub struct Latitude(pub f32);
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
#[macros::impl_getter]
pub struct Longitude(pub f32);
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Hash, Ord)]
#[macros::impl_getter]
pub struct TimeStamp(pub DateTime<Utc>);

/// Index of one lattice cell. Non-negative inside the lattice; coordinates
/// outside the region bounds map to negative or out-of-lattice values.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[macros::impl_getter]
pub struct CellId(pub i64);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub lat: Latitude,
    pub lon: Longitude,
}

impl Point {
    pub fn new(lat: Latitude, lon: Longitude) -> Self {
        Self { lat, lon }
    }

    /// Constructor for coordinates of external origin; rejects non-finite
    /// components instead of letting them poison downstream grid math.
    pub fn validated(lat: Latitude, lon: Longitude) -> Result<Self, AppError> {
        let (Latitude(lat_value), Longitude(lon_value)) = (lat, lon);
        if !lat_value.is_finite() || !lon_value.is_finite() {
            return Err(AppError::InvalidGpsData(format!(
                "(Lat : {lat_value}, Lon : {lon_value})"
            )));
        }
        Ok(Self { lat, lon })
    }
}

#[derive(Debug, Clone, EnumString, EnumIter, Display, Serialize, Deserialize, Eq, Hash, PartialEq, Copy)]
pub enum PaymentType {
    CARD,
    CASH,
}

/// One synthetic ride, fully determined by its `ride_id`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Ride {
    pub ride_id: RideId,
    pub start_time: TimeStamp,
    pub end_time: TimeStamp,
    pub driver_id: DriverId,
    pub vehicle_id: VehicleId,
    pub start: Point,
    pub end: Point,
    pub passenger_count: u8,
}

/// The fare breakdown matching a [`Ride`] with the same `ride_id`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Fare {
    pub ride_id: RideId,
    pub driver_id: DriverId,
    pub vehicle_id: VehicleId,
    pub start_time: TimeStamp,
    pub payment_type: PaymentType,
    pub tip: f32,
    pub tolls: f32,
    pub total_fare: f32,
}
