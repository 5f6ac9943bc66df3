//! Ship rating
//!
//! `rating = round2(80 * speed * k / (CURRENT_YEAR - prod_year + 1))`
//! where `k` is 0.5 for used ships and 1.0 otherwise.

use crate::model::Ship;

/// The fixed "current year" of the ship universe. Not wall-clock time.
pub const CURRENT_YEAR: i32 = 3019;

const SPEED_FACTOR: f64 = 80.0;
const USED_COEFFICIENT: f64 = 0.5;

/// Computes a rating from already-validated inputs.
pub fn calculate(speed: f64, prod_year: i32, is_used: bool) -> f64 {
    let k = if is_used { USED_COEFFICIENT } else { 1.0 };
    let age = f64::from(CURRENT_YEAR - prod_year + 1);

    round2(SPEED_FACTOR * speed * k / age)
}

/// Rating for the current field values of a ship
pub fn of(ship: &Ship) -> f64 {
    calculate(ship.speed, ship.prod_year(), ship.is_used)
}

/// Rounds to two decimal places, half away from zero (half-up for the
/// non-negative values ratings take).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ship_rating() {
        // 80 * 0.5 * 1 / 20
        assert_eq!(calculate(0.5, 3000, false), 2.0);
    }

    #[test]
    fn test_used_ship_halves_rating() {
        assert_eq!(calculate(0.5, 3000, true), 1.0);
    }

    #[test]
    fn test_current_year_divides_by_one() {
        assert_eq!(calculate(0.99, CURRENT_YEAR, false), 79.2);
    }

    #[test]
    fn test_oldest_ship() {
        // 80 * 0.01 / 220 = 0.003636..
        assert_eq!(calculate(0.01, 2800, false), 0.0);
        // 80 * 0.99 / 220 = 0.36
        assert_eq!(calculate(0.99, 2800, false), 0.36);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round2(1.125), 1.13);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_deterministic() {
        let first = calculate(0.37, 2950, true);
        for _ in 0..100 {
            assert_eq!(calculate(0.37, 2950, true), first);
        }
    }
}
