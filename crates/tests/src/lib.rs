#[test]
fn ride_and_fare_survive_a_json_round_trip() {
    use trip_data_generator::{Fare, PaymentType, Ride, RideGenerator, RideId};

    let generator = RideGenerator::new(RideId(12));

    let ride = generator.ride();
    let encoded = serde_json::to_string(&ride).expect("ride serializes");
    let decoded: Ride = serde_json::from_str(&encoded).expect("ride deserializes");
    assert_eq!(ride, decoded);

    let fare = generator.fare();
    let encoded = serde_json::to_string(&fare).expect("fare serializes");
    assert!(encoded.contains("\"CARD\""), "even ride ids pay by card");
    let decoded: Fare = serde_json::from_str(&encoded).expect("fare deserializes");
    assert_eq!(fare, decoded);
    assert_eq!(decoded.payment_type, PaymentType::CARD);
}

#[test]
fn two_generations_of_the_same_ride_serialize_identically() {
    use trip_data_generator::{RideGenerator, RideId};

    let first = serde_json::to_string(&RideGenerator::new(RideId(99)).ride()).expect("serializes");
    let second = serde_json::to_string(&RideGenerator::new(RideId(99)).ride()).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn ride_epoch_matches_the_published_schedule() {
    use chrono::{Duration, TimeZone, Utc};
    use trip_data_generator::{RideGenerator, RideId, TimeStamp};

    let epoch = Utc
        .with_ymd_and_hms(2020, 1, 1, 12, 0, 0)
        .single()
        .expect("valid instant");

    assert_eq!(RideGenerator::new(RideId(0)).start_time(), TimeStamp(epoch));
    assert_eq!(
        RideGenerator::new(RideId(180)).start_time(),
        TimeStamp(epoch + Duration::hours(1))
    );
}

#[test]
fn generated_rides_map_onto_the_grid() {
    use trip_data_generator::common::grid;
    use trip_data_generator::{RideGenerator, RideId};

    for id in 0..200u64 {
        let generator = RideGenerator::new(RideId(id));
        let (start, end) = (generator.start_point(), generator.end_point());

        let cells = grid::cells_along_path(&start, &end);
        assert!(!cells.is_empty());
        assert!(cells.contains(&grid::cell_for_point(&start)));
        assert!(cells.contains(&grid::cell_for_point(&end)));

        if grid::is_within_region(&start) {
            let cell = grid::region_cell_for_point(&start).expect("in-region point maps");
            assert_eq!(cell, grid::cell_for_point(&start));
        } else {
            assert!(grid::region_cell_for_point(&start).is_err());
        }

        assert!(grid::euclidean_distance(&start, &end) >= 0.0);
    }
}

#[test]
fn uniform_points_always_map_inside_the_region() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use trip_data_generator::common::{grid, utils};
    use trip_data_generator::CellId;

    let mut rng = StdRng::seed_from_u64(2020);
    for _ in 0..500 {
        let point = utils::random_region_point(&mut rng);
        assert!(grid::is_within_region(&point));

        let CellId(cell) = grid::region_cell_for_point(&point).expect("uniform point is in region");
        assert!(cell >= 0);
    }
}

#[test]
fn tracing_pipeline_boots() {
    use trip_data_generator::tools::logger::{info, setup_tracing, LogLevel, LoggerConfig};

    let _guard = setup_tracing(LoggerConfig {
        level: LogLevel::INFO,
        log_to_file: false,
    });

    info!(tag = "[Integration]", "logger initialised");
}
