//! Predicate fragments for ship queries
//!
//! Every optional query parameter becomes either a `Fragment` or nothing.
//! A missing parameter never produces a fragment, so it cannot reject
//! records. `ShipFilter` is the conjunction of the fragments that exist;
//! with no fragments it matches every ship.

use chrono::{DateTime, Utc};

use crate::model::{Ship, ShipType};

/// Inclusive bound on an ordered field
#[derive(Debug, Clone, PartialEq)]
pub enum Range<T> {
    AtLeast(T),
    AtMost(T),
    Between(T, T),
}

impl<T: PartialOrd> Range<T> {
    /// min-only, max-only, both, or neither (`None`)
    pub fn from_bounds(min: Option<T>, max: Option<T>) -> Option<Self> {
        match (min, max) {
            (None, None) => None,
            (Some(min), None) => Some(Range::AtLeast(min)),
            (None, Some(max)) => Some(Range::AtMost(max)),
            (Some(min), Some(max)) => Some(Range::Between(min, max)),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        match self {
            Range::AtLeast(min) => value >= min,
            Range::AtMost(max) => value <= max,
            Range::Between(min, max) => value >= min && value <= max,
        }
    }
}

/// One filter condition over a ship
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Case-sensitive substring of `name`
    NameContains(String),
    /// Case-sensitive substring of `planet`
    PlanetContains(String),
    ShipTypeIs(ShipType),
    UsedIs(bool),
    ProdDate(Range<DateTime<Utc>>),
    Speed(Range<f64>),
    CrewSize(Range<i64>),
    Rating(Range<f64>),
}

impl Fragment {
    pub fn matches(&self, ship: &Ship) -> bool {
        match self {
            Fragment::NameContains(needle) => ship.name.contains(needle.as_str()),
            Fragment::PlanetContains(needle) => ship.planet.contains(needle.as_str()),
            Fragment::ShipTypeIs(ship_type) => ship.ship_type == *ship_type,
            Fragment::UsedIs(is_used) => ship.is_used == *is_used,
            Fragment::ProdDate(range) => range.contains(&ship.prod_date),
            Fragment::Speed(range) => range.contains(&ship.speed),
            Fragment::CrewSize(range) => range.contains(&i64::from(ship.crew_size)),
            Fragment::Rating(range) => range.contains(&ship.rating),
        }
    }
}

pub fn name_filter(name: Option<&str>) -> Option<Fragment> {
    name.map(|n| Fragment::NameContains(n.to_string()))
}

pub fn planet_filter(planet: Option<&str>) -> Option<Fragment> {
    planet.map(|p| Fragment::PlanetContains(p.to_string()))
}

pub fn type_filter(ship_type: Option<ShipType>) -> Option<Fragment> {
    ship_type.map(Fragment::ShipTypeIs)
}

pub fn used_filter(is_used: Option<bool>) -> Option<Fragment> {
    is_used.map(Fragment::UsedIs)
}

pub fn date_filter(
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
) -> Option<Fragment> {
    Range::from_bounds(after, before).map(Fragment::ProdDate)
}

pub fn speed_filter(min: Option<f64>, max: Option<f64>) -> Option<Fragment> {
    Range::from_bounds(min, max).map(Fragment::Speed)
}

pub fn crew_size_filter(min: Option<i64>, max: Option<i64>) -> Option<Fragment> {
    Range::from_bounds(min, max).map(Fragment::CrewSize)
}

pub fn rating_filter(min: Option<f64>, max: Option<f64>) -> Option<Fragment> {
    Range::from_bounds(min, max).map(Fragment::Rating)
}

/// Conjunction of fragments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    fragments: Vec<Fragment>,
}

impl ShipFilter {
    /// Matches every ship
    pub fn all() -> Self {
        Self::default()
    }

    /// Folds optional fragments, skipping the absent ones
    pub fn from_fragments<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = Option<Fragment>>,
    {
        fragments
            .into_iter()
            .fold(Self::all(), |filter, fragment| filter.and(fragment))
    }

    pub fn and(mut self, fragment: Option<Fragment>) -> Self {
        if let Some(fragment) = fragment {
            self.fragments.push(fragment);
        }
        self
    }

    pub fn matches(&self, ship: &Ship) -> bool {
        self.fragments.iter().all(|f| f.matches(ship))
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

/// Optional filter parameters of a list or count request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i64>,
    pub max_crew_size: Option<i64>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl FilterParams {
    pub fn to_filter(&self) -> ShipFilter {
        ShipFilter::from_fragments([
            name_filter(self.name.as_deref()),
            planet_filter(self.planet.as_deref()),
            type_filter(self.ship_type),
            date_filter(self.after, self.before),
            used_filter(self.is_used),
            speed_filter(self.min_speed, self.max_speed),
            crew_size_filter(self.min_crew_size, self.max_crew_size),
            rating_filter(self.min_rating, self.max_rating),
        ])
    }
}
