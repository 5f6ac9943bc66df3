//! # Query Parameter Parser
//!
//! Parses listing query parameters into filter parameters and a page
//! request. Unknown parameter names are ignored; malformed values are
//! rejected.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};

use super::errors::{RestError, RestResult};
use crate::executor::{FilterParams, PageRequest};
use crate::model::{ShipOrder, ShipType};

/// Parsed listing parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filters: FilterParams,
    pub page: PageRequest,
}

impl ListQuery {
    /// Parse filters plus `order`, `pageNumber` and `pageSize`
    pub fn parse(
        params: &HashMap<String, String>,
        default_page_size: NonZeroUsize,
    ) -> RestResult<Self> {
        let filters = parse_filters(params)?;
        let mut page = PageRequest {
            page_size: default_page_size,
            ..Default::default()
        };

        for (key, value) in params {
            match key.as_str() {
                "order" => page.order = parse_value::<ShipOrder>(key, value)?,
                "pageNumber" => page.page_number = parse_value(key, value)?,
                "pageSize" => page.page_size = parse_value(key, value)?,
                _ => {}
            }
        }

        Ok(Self { filters, page })
    }
}

/// Parse only the filter parameters (used by count)
pub fn parse_filters(params: &HashMap<String, String>) -> RestResult<FilterParams> {
    let mut filters = FilterParams::default();

    for (key, value) in params {
        match key.as_str() {
            "name" => filters.name = Some(value.clone()),
            "planet" => filters.planet = Some(value.clone()),
            "shipType" => filters.ship_type = Some(parse_value::<ShipType>(key, value)?),
            "after" => filters.after = Some(parse_millis(key, value)?),
            "before" => filters.before = Some(parse_millis(key, value)?),
            "isUsed" => filters.is_used = Some(parse_value(key, value)?),
            "minSpeed" => filters.min_speed = Some(parse_float(key, value)?),
            "maxSpeed" => filters.max_speed = Some(parse_float(key, value)?),
            "minCrewSize" => filters.min_crew_size = Some(parse_value(key, value)?),
            "maxCrewSize" => filters.max_crew_size = Some(parse_value(key, value)?),
            "minRating" => filters.min_rating = Some(parse_float(key, value)?),
            "maxRating" => filters.max_rating = Some(parse_float(key, value)?),
            _ => {}
        }
    }

    Ok(filters)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> RestResult<T> {
    value
        .parse()
        .map_err(|_| RestError::InvalidQueryParam(format!("Invalid {}: {}", key, value)))
}

/// Finite floats only
fn parse_float(key: &str, value: &str) -> RestResult<f64> {
    let parsed: f64 = parse_value(key, value)?;
    if !parsed.is_finite() {
        return Err(RestError::InvalidQueryParam(format!(
            "Invalid {}: {}",
            key, value
        )));
    }
    Ok(parsed)
}

/// Milliseconds since the Unix epoch
fn parse_millis(key: &str, value: &str) -> RestResult<DateTime<Utc>> {
    let millis: i64 = parse_value(key, value)?;
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| RestError::InvalidQueryParam(format!("Invalid {}: {}", key, value)))
}
