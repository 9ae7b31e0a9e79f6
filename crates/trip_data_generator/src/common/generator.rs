/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

//! Derives every field of a synthetic ride from its ride id.
//!
//! The ride id (plus, for end coordinates, a fixed seed offset) is the only
//! entropy source, so two generators built from the same id agree on every
//! field across processes and runs. Apart from the end time and the total
//! fare, which consume the sampled duration, no derivation reads another
//! field's value.

use chrono::{Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::grid::{LAT_NORTH, LAT_SOUTH, LON_EAST, LON_WEST};
use crate::common::sampling::{bounded_float, bounded_long, bounded_long_with};
use crate::common::types::*;

const SECONDS_BETWEEN_RIDES: i64 = 20;
const NUMBER_OF_DRIVERS: u64 = 200;
const DRIVER_ID_BASE: u64 = 2013000000;

// End coordinates reuse the ride id with this offset, keeping them
// deterministic while decorrelating them from the start coordinates.
const END_POINT_SEED_OFFSET: u64 = 42;

// Generated coordinates pad the region by this much on every side, so a
// controlled fraction of rides starts or ends just outside it.
const COORDINATE_PADDING: f64 = 0.1;

const BASE_FARE: f32 = 3.0;
const FARE_PER_MINUTE: f32 = 1.0;

static BEGIN_TIME: Lazy<TimeStamp> = Lazy::new(|| {
    TimeStamp(
        Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0)
            .single()
            .expect("fixed ride epoch is a valid instant"),
    )
});

/// Field generator for one ride id.
pub struct RideGenerator {
    ride_id: RideId,
}

impl RideGenerator {
    pub fn new(ride_id: RideId) -> Self {
        Self { ride_id }
    }

    /// Rides start a fixed interval apart, ordered by ride id.
    pub fn start_time(&self) -> TimeStamp {
        let RideId(id) = self.ride_id;
        TimeStamp(BEGIN_TIME.inner() + Duration::seconds(SECONDS_BETWEEN_RIDES * id as i64))
    }

    pub fn end_time(&self) -> TimeStamp {
        TimeStamp(self.start_time().inner() + Duration::seconds(60 * self.ride_duration_minutes()))
    }

    /// Biased short, occasionally multi-hour.
    pub fn ride_duration_minutes(&self) -> i64 {
        bounded_long_with(self.ride_id.inner(), 0, 600, 20.0, 40.0)
    }

    /// Drawn uniformly from a fixed pool, so aggregations by driver see
    /// repeat drivers.
    pub fn driver_id(&self) -> DriverId {
        let mut rng = StdRng::seed_from_u64(self.ride_id.inner());
        DriverId(DRIVER_ID_BASE + rng.gen_range(0..NUMBER_OF_DRIVERS))
    }

    pub fn vehicle_id(&self) -> VehicleId {
        VehicleId(self.driver_id().inner())
    }

    pub fn start_lat(&self) -> Latitude {
        Latitude(bounded_float(
            self.ride_id.inner(),
            (LAT_SOUTH - COORDINATE_PADDING) as f32,
            (LAT_NORTH + COORDINATE_PADDING) as f32,
        ))
    }

    pub fn start_lon(&self) -> Longitude {
        Longitude(bounded_float(
            self.ride_id.inner(),
            (LON_WEST - COORDINATE_PADDING) as f32,
            (LON_EAST + COORDINATE_PADDING) as f32,
        ))
    }

    pub fn end_lat(&self) -> Latitude {
        Latitude(bounded_float(
            self.ride_id.inner().wrapping_add(END_POINT_SEED_OFFSET),
            (LAT_SOUTH - COORDINATE_PADDING) as f32,
            (LAT_NORTH + COORDINATE_PADDING) as f32,
        ))
    }

    pub fn end_lon(&self) -> Longitude {
        Longitude(bounded_float(
            self.ride_id.inner().wrapping_add(END_POINT_SEED_OFFSET),
            (LON_WEST - COORDINATE_PADDING) as f32,
            (LON_EAST + COORDINATE_PADDING) as f32,
        ))
    }

    pub fn start_point(&self) -> Point {
        Point {
            lat: self.start_lat(),
            lon: self.start_lon(),
        }
    }

    pub fn end_point(&self) -> Point {
        Point {
            lat: self.end_lat(),
            lon: self.end_lon(),
        }
    }

    pub fn passenger_count(&self) -> u8 {
        bounded_long(self.ride_id.inner(), 1, 4) as u8
    }

    pub fn payment_type(&self) -> PaymentType {
        if self.ride_id.inner() % 2 == 0 {
            PaymentType::CARD
        } else {
            PaymentType::CASH
        }
    }

    /// Wide variation on purpose.
    pub fn tip(&self) -> f32 {
        bounded_long_with(self.ride_id.inner(), 0, 60, 10.0, 15.0) as f32
    }

    /// Tolls are rare: every tenth ride id pays any at all.
    pub fn tolls(&self) -> f32 {
        if self.ride_id.inner() % 10 == 0 {
            bounded_long(self.ride_id.inner(), 0, 5) as f32
        } else {
            0.0
        }
    }

    pub fn total_fare(&self) -> f32 {
        BASE_FARE + FARE_PER_MINUTE * self.ride_duration_minutes() as f32 + self.tip() + self.tolls()
    }

    pub fn ride(&self) -> Ride {
        Ride {
            ride_id: self.ride_id,
            start_time: self.start_time(),
            end_time: self.end_time(),
            driver_id: self.driver_id(),
            vehicle_id: self.vehicle_id(),
            start: self.start_point(),
            end: self.end_point(),
            passenger_count: self.passenger_count(),
        }
    }

    pub fn fare(&self) -> Fare {
        Fare {
            ride_id: self.ride_id,
            driver_id: self.driver_id(),
            vehicle_id: self.vehicle_id(),
            start_time: self.start_time(),
            payment_type: self.payment_type(),
            tip: self.tip(),
            tolls: self.tolls(),
            total_fare: self.total_fare(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn generator(id: u64) -> RideGenerator {
        RideGenerator::new(RideId(id))
    }

    #[test]
    fn start_times_are_spaced_twenty_seconds_from_the_epoch() {
        let epoch = Utc
            .with_ymd_and_hms(2020, 1, 1, 12, 0, 0)
            .single()
            .expect("valid instant");
        assert_eq!(generator(0).start_time(), TimeStamp(epoch));
        assert_eq!(
            generator(1).start_time(),
            TimeStamp(epoch + Duration::seconds(20))
        );

        for id in 0..500 {
            let gap = generator(id + 1).start_time().inner() - generator(id).start_time().inner();
            assert_eq!(gap, Duration::seconds(20));
        }
    }

    #[test]
    fn every_field_is_reproducible() {
        for id in (0..2000).step_by(13) {
            let first = generator(id);
            let second = generator(id);
            assert_eq!(first.ride(), second.ride());
            assert_eq!(first.fare(), second.fare());
        }
    }

    #[test]
    fn rides_never_end_before_they_start() {
        let mut strictly_longer = 0;
        for id in 0..2000 {
            let g = generator(id);
            assert!(g.end_time() >= g.start_time());
            if g.end_time() > g.start_time() {
                strictly_longer += 1;
            }
        }
        // Zero-minute rides are legal but rare.
        assert!(strictly_longer > 1900);
    }

    #[test]
    fn driver_pool_is_bounded_and_reused() {
        let mut drivers = HashSet::new();
        for id in 0..1000 {
            let DriverId(driver) = generator(id).driver_id();
            assert!((DRIVER_ID_BASE..DRIVER_ID_BASE + NUMBER_OF_DRIVERS).contains(&driver));
            drivers.insert(driver);
        }
        assert!(drivers.len() <= NUMBER_OF_DRIVERS as usize);
        assert!(drivers.len() > 100, "pool barely sampled: {}", drivers.len());
    }

    #[test]
    fn vehicle_always_matches_driver() {
        for id in 0..200 {
            let g = generator(id);
            assert_eq!(g.vehicle_id().inner(), g.driver_id().inner());
        }
    }

    #[test]
    fn payment_type_follows_ride_id_parity() {
        for id in 0..100 {
            let expected = if id % 2 == 0 {
                PaymentType::CARD
            } else {
                PaymentType::CASH
            };
            assert_eq!(generator(id).payment_type(), expected);
        }
    }

    #[test]
    fn tolls_are_rare_and_bounded() {
        for id in 0..1000 {
            let tolls = generator(id).tolls();
            if id % 10 == 0 {
                assert!((0.0..=5.0).contains(&tolls));
            } else {
                assert_eq!(tolls, 0.0);
            }
        }
    }

    #[test]
    fn tips_and_passenger_counts_stay_in_bounds() {
        for id in 0..1000 {
            let g = generator(id);
            assert!((0.0..=60.0).contains(&g.tip()));
            assert!((1..=4).contains(&g.passenger_count()));
        }
    }

    #[test]
    fn fare_is_base_plus_minutes_tip_and_tolls() {
        for id in 0..500 {
            let g = generator(id);
            let expected = 3.0 + g.ride_duration_minutes() as f32 + g.tip() + g.tolls();
            assert_eq!(g.total_fare(), expected);
        }
    }

    #[test]
    fn generated_points_stay_in_the_padded_region() {
        let lon_bounds = (LON_WEST - COORDINATE_PADDING) as f32..=(LON_EAST + COORDINATE_PADDING) as f32;
        let lat_bounds = (LAT_SOUTH - COORDINATE_PADDING) as f32..=(LAT_NORTH + COORDINATE_PADDING) as f32;

        for id in 0..1000 {
            let g = generator(id);
            for point in [g.start_point(), g.end_point()] {
                assert!(lon_bounds.contains(&point.lon.inner()));
                assert!(lat_bounds.contains(&point.lat.inner()));
            }
        }
    }

    #[test]
    fn start_and_end_points_differ() {
        for id in 0..1000 {
            let g = generator(id);
            let (start, end) = (g.start_point(), g.end_point());
            let same_lat = start.lat.inner().to_bits() == end.lat.inner().to_bits();
            let same_lon = start.lon.inner().to_bits() == end.lon.inner().to_bits();
            assert!(!(same_lat && same_lon), "ride {id} never moved");
        }
    }
}
