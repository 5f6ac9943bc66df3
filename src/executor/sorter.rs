//! Result sorting for ship queries
//!
//! Sorts ascending by the requested field; ties are broken by id so the
//! order is total and pages never overlap.

use std::cmp::Ordering;

use crate::model::{Ship, ShipOrder};

/// Sorts ships
pub struct ResultSorter;

impl ResultSorter {
    pub fn sort(ships: &mut [Ship], order: ShipOrder) {
        ships.sort_by(|a, b| Self::compare(a, b, order));
    }

    /// Compares by the order field, then by id
    pub fn compare(a: &Ship, b: &Ship, order: ShipOrder) -> Ordering {
        let by_field = match order {
            ShipOrder::Id => Ordering::Equal,
            ShipOrder::Name => a.name.cmp(&b.name),
            ShipOrder::Planet => a.planet.cmp(&b.planet),
            ShipOrder::Date => a.prod_date.cmp(&b.prod_date),
            ShipOrder::Speed => a.speed.total_cmp(&b.speed),
            ShipOrder::CrewSize => a.crew_size.cmp(&b.crew_size),
            ShipOrder::Rating => a.rating.total_cmp(&b.rating),
        };

        by_field.then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShipId, ShipType};
    use chrono::{TimeZone, Utc};

    fn make_ship(id: u64, name: &str, speed: f64) -> Ship {
        Ship {
            id: ShipId::new(id).unwrap(),
            name: name.to_string(),
            planet: "Earth".to_string(),
            ship_type: ShipType::Transport,
            prod_date: Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap(),
            is_used: false,
            speed,
            crew_size: 5,
            rating: 1.0,
        }
    }

    fn ids(ships: &[Ship]) -> Vec<u64> {
        ships.iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn test_sort_by_id() {
        let mut ships = vec![make_ship(3, "c", 0.1), make_ship(1, "a", 0.2), make_ship(2, "b", 0.3)];
        ResultSorter::sort(&mut ships, ShipOrder::Id);
        assert_eq!(ids(&ships), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_speed() {
        let mut ships = vec![make_ship(1, "a", 0.9), make_ship(2, "b", 0.1), make_ship(3, "c", 0.5)];
        ResultSorter::sort(&mut ships, ShipOrder::Speed);
        assert_eq!(ids(&ships), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let mut ships = vec![
            make_ship(9, "same", 0.5),
            make_ship(4, "same", 0.5),
            make_ship(6, "same", 0.5),
        ];
        ResultSorter::sort(&mut ships, ShipOrder::Name);
        assert_eq!(ids(&ships), vec![4, 6, 9]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut ships = vec![
            make_ship(1, "charlie", 0.5),
            make_ship(2, "alice", 0.5),
            make_ship(3, "bob", 0.5),
        ];
        ResultSorter::sort(&mut ships, ShipOrder::Name);
        assert_eq!(ids(&ships), vec![2, 3, 1]);
    }
}
