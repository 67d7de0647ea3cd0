//! Poster input data
//!
//! Field names follow the camelCase JSON the transit data tooling writes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use penline_core::{Color, PenlineError, Result};

/// Everything the bus route poster shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRouteData {
    /// Route label drawn in the pill, e.g. "SL4"
    pub route: String,
    /// Origin and destination, e.g. "Nubian Station - South Station via Tremont Street"
    #[serde(default)]
    pub description: String,
    /// Google-encoded polylines of the route's shapes
    #[serde(default)]
    pub encoded_polylines: Vec<String>,
}

impl BusRouteData {
    pub fn validate(&self) -> Result<()> {
        if self.route.trim().is_empty() {
            return Err(PenlineError::Config("route label is empty".to_string()));
        }
        Ok(())
    }
}

/// Everything the subway route poster shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubwayRouteData {
    /// Line identifier such as "Red" or "Green-B"; falls back to `route`
    #[serde(default)]
    pub route_id: String,
    /// Label drawn in the pill
    pub route: String,
    /// Line colour, `RRGGBB` with or without `#`
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub encoded_polylines: Vec<String>,
}

impl SubwayRouteData {
    pub fn id(&self) -> &str {
        if self.route_id.trim().is_empty() {
            &self.route
        } else {
            &self.route_id
        }
    }

    /// A Green Line branch such as "Green-B", but not the trunk itself
    pub fn is_branch(&self) -> bool {
        let id = self.id();
        id.contains("Green") && id != "Green"
    }

    pub fn validate(&self) -> Result<()> {
        if self.route.trim().is_empty() {
            return Err(PenlineError::Config("route label is empty".to_string()));
        }
        Color::from_str(&self.color)?;
        Ok(())
    }
}

/// Every bus route in an area, for the grid poster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusPosterData {
    /// Drawn in the header as "Bus Routes of {area_name}"
    pub area_name: String,
    pub buses: Vec<BusRouteData>,
}

impl BusPosterData {
    pub fn validate(&self) -> Result<()> {
        if self.area_name.trim().is_empty() {
            return Err(PenlineError::Config("area name is empty".to_string()));
        }
        if self.buses.is_empty() {
            return Err(PenlineError::Config("bus poster has no routes".to_string()));
        }
        self.buses.iter().try_for_each(BusRouteData::validate)
    }
}

/// One route served at a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePill {
    pub label: String,
    /// `RRGGBB`, with or without `#`
    pub color: String,
}

/// A route shape on the station map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPolyline {
    pub polyline: String,
    pub color: String,
}

/// Map centre and the shapes around it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub lat: f64,
    pub long: f64,
    #[serde(default)]
    pub polylines: Vec<MapPolyline>,
}

/// Everything the station poster shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationData {
    pub stop_name: String,
    #[serde(default)]
    pub route_pills: Vec<RoutePill>,
    pub map_data: MapData,
}

impl StationData {
    /// Checks colours and the map centre up front so rendering never has to
    pub fn validate(&self) -> Result<()> {
        if self.stop_name.trim().is_empty() {
            return Err(PenlineError::Config("stop name is empty".to_string()));
        }
        for pill in &self.route_pills {
            Color::from_str(&pill.color)?;
        }
        for line in &self.map_data.polylines {
            Color::from_str(&line.color)?;
        }

        let MapData { lat, long, .. } = self.map_data;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&long) {
            return Err(PenlineError::Config(format!(
                "map centre ({lat}, {long}) is not a coordinate"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station() -> StationData {
        StationData {
            stop_name: "Harvard".to_string(),
            route_pills: vec![RoutePill {
                label: "1".to_string(),
                color: "FFC72C".to_string(),
            }],
            map_data: MapData {
                lat: 42.3734,
                long: -71.1189,
                polylines: Vec::new(),
            },
        }
    }

    #[test]
    fn test_station_validates() {
        assert!(station().validate().is_ok());
    }

    #[test]
    fn test_station_rejects_bad_pill_color() {
        let mut data = station();
        data.route_pills[0].color = "yellow".to_string();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_station_rejects_centre_off_the_globe() {
        let mut data = station();
        data.map_data.lat = 142.0;
        assert!(data.validate().is_err());

        let mut data = station();
        data.map_data.long = f64::NAN;
        assert!(data.validate().is_err());
    }

    fn subway(route_id: &str) -> SubwayRouteData {
        SubwayRouteData {
            route_id: route_id.to_string(),
            route: "GL".to_string(),
            color: "00843D".to_string(),
            description: String::new(),
            encoded_polylines: Vec::new(),
        }
    }

    #[test]
    fn test_subway_branch_detection() {
        assert!(subway("Green-B").is_branch());
        assert!(!subway("Green").is_branch());
        assert!(!subway("Red").is_branch());
        // No id falls back to the pill label
        assert_eq!(subway("").id(), "GL");
    }

    #[test]
    fn test_subway_rejects_bad_color() {
        let mut data = subway("Red");
        data.color = "red".to_string();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_bus_poster_needs_routes_and_an_area() {
        let bus = BusRouteData {
            route: "1".to_string(),
            description: String::new(),
            encoded_polylines: Vec::new(),
        };
        let mut data = BusPosterData {
            area_name: "Cambridge".to_string(),
            buses: vec![bus.clone()],
        };
        assert!(data.validate().is_ok());

        data.buses[0].route.clear();
        assert!(data.validate().is_err());

        data.buses.clear();
        assert!(data.validate().is_err());

        data.buses.push(bus);
        data.area_name = " ".to_string();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_bus_route_needs_a_label() {
        let data = BusRouteData {
            route: "  ".to_string(),
            description: String::new(),
            encoded_polylines: Vec::new(),
        };
        assert!(data.validate().is_err());
    }
}
