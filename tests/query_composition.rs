//! Query Composition Tests
//!
//! - Absent filters never narrow a result
//! - Present filters combine as a conjunction
//! - Range bounds are inclusive and apply to their own field
//! - Paging partitions the matching set; count agrees with the pages

use std::num::NonZeroUsize;

use chrono::{TimeZone, Utc};
use shipyard::executor::{FilterParams, PageRequest};
use shipyard::model::{Ship, ShipOrder, ShipPayload, ShipType};
use shipyard::service::ShipService;
use shipyard::storage::InMemoryShipStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn millis(year: i32) -> i64 {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}

fn payload(
    name: &str,
    planet: &str,
    ship_type: &str,
    year: i32,
    speed: f64,
    crew_size: i64,
    is_used: bool,
) -> ShipPayload {
    ShipPayload::new()
        .name(name)
        .planet(planet)
        .ship_type(ship_type)
        .prod_date(millis(year))
        .speed(speed)
        .crew_size(crew_size)
        .is_used(is_used)
}

/// Seven ships with varied fields
fn fleet() -> ShipService<InMemoryShipStore> {
    let service = ShipService::new(InMemoryShipStore::new());

    for p in [
        payload("Eagle One", "Earth", "MILITARY", 3010, 0.5, 100, false),
        payload("Silver Eagle", "Mars", "TRANSPORT", 2990, 0.9, 12, true),
        payload("Falcon", "Mars", "MERCHANT", 3000, 0.49, 40, false),
        payload("eagle", "Venus", "MILITARY", 2900, 0.91, 7, false),
        payload("Nomad", "Jupiter", "TRANSPORT", 2850, 0.7, 9999, true),
        payload("Starling", "Earth", "MERCHANT", 3019, 0.2, 1, false),
        payload("Eagle Prime", "Saturn", "MILITARY", 3015, 0.75, 250, true),
    ] {
        service.create(&p).unwrap();
    }

    service
}

fn page(number: usize, size: usize, order: ShipOrder) -> PageRequest {
    PageRequest::new(number, NonZeroUsize::new(size).unwrap(), order)
}

fn list_all(service: &ShipService<InMemoryShipStore>, params: &FilterParams) -> Vec<Ship> {
    service
        .list(params, &page(0, 100, ShipOrder::Id))
        .unwrap()
        .into_content()
}

fn names(ships: &[Ship]) -> Vec<&str> {
    ships.iter().map(|s| s.name.as_str()).collect()
}

// =============================================================================
// Filter Tests
// =============================================================================

/// Name filter is a case-sensitive substring match.
#[test]
fn test_name_substring_filter() {
    let service = fleet();
    let params = FilterParams {
        name: Some("Eagle".to_string()),
        ..Default::default()
    };

    let ships = list_all(&service, &params);

    assert_eq!(names(&ships), vec!["Eagle One", "Silver Eagle", "Eagle Prime"]);
    assert!(ships.iter().all(|s| s.name.contains("Eagle")));
}

/// No filters returns the whole fleet.
#[test]
fn test_absent_filters_match_everything() {
    let service = fleet();
    assert_eq!(list_all(&service, &FilterParams::default()).len(), 7);
    assert_eq!(service.count(&FilterParams::default()).unwrap(), 7);
}

/// Speed bounds include both endpoints.
#[test]
fn test_speed_bounds_inclusive() {
    let service = fleet();
    let params = FilterParams {
        min_speed: Some(0.5),
        max_speed: Some(0.9),
        ..Default::default()
    };

    let ships = list_all(&service, &params);

    assert!(ships.iter().all(|s| s.speed >= 0.5 && s.speed <= 0.9));
    assert_eq!(
        names(&ships),
        vec!["Eagle One", "Silver Eagle", "Nomad", "Eagle Prime"]
    );
}

/// Crew size bounds filter crew size, not speed.
#[test]
fn test_crew_size_filter_uses_crew_size() {
    let service = fleet();
    let params = FilterParams {
        min_crew_size: Some(10),
        max_crew_size: Some(100),
        ..Default::default()
    };

    let ships = list_all(&service, &params);
    assert_eq!(names(&ships), vec!["Eagle One", "Silver Eagle", "Falcon"]);
}

/// Date bounds filter production date.
#[test]
fn test_date_range_filter() {
    let service = fleet();
    let params = FilterParams {
        after: Utc.with_ymd_and_hms(2990, 1, 1, 0, 0, 0).single(),
        before: Utc.with_ymd_and_hms(3010, 1, 1, 0, 0, 0).single(),
        ..Default::default()
    };

    let ships = list_all(&service, &params);
    assert_eq!(names(&ships), vec!["Eagle One", "Silver Eagle", "Falcon"]);
}

/// `after` alone keeps ships produced on or after the bound.
#[test]
fn test_date_after_only_filter() {
    let service = fleet();
    let params = FilterParams {
        after: Utc.with_ymd_and_hms(3010, 1, 1, 0, 0, 0).single(),
        ..Default::default()
    };

    let ships = list_all(&service, &params);
    assert_eq!(names(&ships), vec!["Eagle One", "Starling", "Eagle Prime"]);
}

/// `maxRating` alone keeps ships rated at or below the bound.
#[test]
fn test_rating_max_only_filter() {
    let service = fleet();
    let params = FilterParams {
        max_rating: Some(4.0),
        ..Default::default()
    };

    let ships = list_all(&service, &params);

    assert!(ships.iter().all(|s| s.rating <= 4.0));
    assert!(names(&ships).contains(&"Eagle One"));
    assert!(!names(&ships).contains(&"Starling"));
    assert!(!names(&ships).contains(&"Eagle Prime"));
}

/// Rating bounds filter the stored rating.
#[test]
fn test_rating_filter() {
    let service = fleet();
    let params = FilterParams {
        min_rating: Some(5.0),
        ..Default::default()
    };

    let ships = list_all(&service, &params);

    assert!(!ships.is_empty());
    assert!(ships.iter().all(|s| s.rating >= 5.0));
    assert!(names(&ships).contains(&"Starling"));
}

/// Several filters narrow together.
#[test]
fn test_filters_combine_as_conjunction() {
    let service = fleet();
    let params = FilterParams {
        name: Some("Eagle".to_string()),
        ship_type: Some(ShipType::Military),
        is_used: Some(true),
        ..Default::default()
    };

    let ships = list_all(&service, &params);
    assert_eq!(names(&ships), vec!["Eagle Prime"]);
}

#[test]
fn test_planet_and_used_filters() {
    let service = fleet();
    let params = FilterParams {
        planet: Some("Mars".to_string()),
        is_used: Some(false),
        ..Default::default()
    };

    assert_eq!(names(&list_all(&service, &params)), vec!["Falcon"]);
}

// =============================================================================
// Paging Tests
// =============================================================================

/// Walking pages until an empty one yields exactly `count` ships, no repeats.
#[test]
fn test_count_equals_sum_of_pages() {
    let service = fleet();

    for params in [
        FilterParams::default(),
        FilterParams {
            name: Some("Eagle".to_string()),
            ..Default::default()
        },
        FilterParams {
            ship_type: Some(ShipType::Merchant),
            ..Default::default()
        },
    ] {
        let count = service.count(&params).unwrap();

        let mut seen = Vec::new();
        let mut number = 0;
        loop {
            let content = service
                .list(&params, &page(number, 3, ShipOrder::Speed))
                .unwrap()
                .into_content();
            if content.is_empty() {
                break;
            }
            seen.extend(content.into_iter().map(|s| s.id));
            number += 1;
        }

        assert_eq!(seen.len(), count);
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), seen.len());
    }
}

/// Page 5 of size 3 over four matches is empty, not an error.
#[test]
fn test_page_past_end_is_empty() {
    let service = fleet();
    let four = FilterParams {
        min_speed: Some(0.5),
        max_speed: Some(0.9),
        ..Default::default()
    };
    assert_eq!(service.count(&four).unwrap(), 4);

    let result = service.list(&four, &page(5, 3, ShipOrder::Id)).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.total_elements, 4);
    assert_eq!(result.total_pages, 2);
}

/// Default page is the first three ships by id.
#[test]
fn test_default_page_request() {
    let service = fleet();
    let ships = service
        .list(&FilterParams::default(), &PageRequest::default())
        .unwrap()
        .into_content();

    assert_eq!(names(&ships), vec!["Eagle One", "Silver Eagle", "Falcon"]);
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_order_by_speed() {
    let service = fleet();
    let ships = service
        .list(&FilterParams::default(), &page(0, 3, ShipOrder::Speed))
        .unwrap()
        .into_content();

    assert_eq!(names(&ships), vec!["Starling", "Falcon", "Eagle One"]);
}

#[test]
fn test_order_by_crew_size_second_page() {
    let service = fleet();
    let ships = service
        .list(&FilterParams::default(), &page(1, 3, ShipOrder::CrewSize))
        .unwrap()
        .into_content();

    // crew sizes ascending: 1, 7, 12 | 40, 100, 250 | 9999
    assert_eq!(names(&ships), vec!["Falcon", "Eagle One", "Eagle Prime"]);
}

#[test]
fn test_order_by_date() {
    let service = fleet();
    let ships = list_ordered(&service, ShipOrder::Date);

    assert_eq!(ships.first().map(|s| s.name.as_str()), Some("Nomad"));
    assert_eq!(ships.last().map(|s| s.name.as_str()), Some("Starling"));
}

#[test]
fn test_order_by_rating_is_ascending() {
    let service = fleet();
    let ships = list_ordered(&service, ShipOrder::Rating);

    assert!(ships.windows(2).all(|w| w[0].rating <= w[1].rating));
}

fn list_ordered(service: &ShipService<InMemoryShipStore>, order: ShipOrder) -> Vec<Ship> {
    service
        .list(&FilterParams::default(), &page(0, 100, order))
        .unwrap()
        .into_content()
}
