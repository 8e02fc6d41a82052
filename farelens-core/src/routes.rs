use serde::{Deserialize, Serialize};

/// Duration substituted when a city pair has no entry in the table.
pub const DEFAULT_DURATION_HOURS: f64 = 1.0;

/// One row of the route reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub source_city: String,
    pub destination_city: String,
    pub min_duration_hours: f64,
}

/// Outcome of a duration lookup. `fallback` marks the degraded path where
/// no matching row existed and the default duration was substituted; the
/// pipeline continues and surfaces it as a warning, never as a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDuration {
    pub hours: f64,
    pub fallback: bool,
}

/// The route reference table, loaded once at startup and read-only for
/// the life of the process.
#[derive(Debug, Clone)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }

    /// Look up the minimum duration for a (source, destination) pair.
    ///
    /// Pairs are assumed unique; if duplicates slipped into the table,
    /// the first match wins.
    pub fn duration_for(&self, source: &str, destination: &str) -> ResolvedDuration {
        match self
            .records
            .iter()
            .find(|r| r.source_city == source && r.destination_city == destination)
        {
            Some(record) => ResolvedDuration {
                hours: record.min_duration_hours,
                fallback: false,
            },
            None => {
                tracing::debug!(source, destination, "route not in reference table");
                ResolvedDuration {
                    hours: DEFAULT_DURATION_HOURS,
                    fallback: true,
                }
            }
        }
    }

    /// Distinct source cities, sorted for stable selector ordering.
    pub fn source_cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.records.iter().map(|r| r.source_city.clone()).collect();
        cities.sort();
        cities.dedup();
        cities
    }

    /// Distinct destination cities, sorted.
    pub fn destination_cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self
            .records
            .iter()
            .map(|r| r.destination_city.clone())
            .collect();
        cities.sort();
        cities.dedup();
        cities
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RouteTable {
        RouteTable::new(vec![
            RouteRecord {
                source_city: "Delhi".to_string(),
                destination_city: "Mumbai".to_string(),
                min_duration_hours: 2.0,
            },
            RouteRecord {
                source_city: "Delhi".to_string(),
                destination_city: "Kolkata".to_string(),
                min_duration_hours: 2.25,
            },
            RouteRecord {
                source_city: "Mumbai".to_string(),
                destination_city: "Delhi".to_string(),
                min_duration_hours: 2.17,
            },
        ])
    }

    #[test]
    fn test_known_pair_returns_table_value() {
        let resolved = sample_table().duration_for("Delhi", "Mumbai");
        assert_eq!(resolved.hours, 2.0);
        assert!(!resolved.fallback);
    }

    #[test]
    fn test_lookup_is_directional() {
        let resolved = sample_table().duration_for("Mumbai", "Delhi");
        assert_eq!(resolved.hours, 2.17);
    }

    #[test]
    fn test_absent_pair_falls_back_to_default() {
        let resolved = sample_table().duration_for("Delhi", "Chennai");
        assert_eq!(resolved.hours, DEFAULT_DURATION_HOURS);
        assert!(resolved.fallback);
    }

    #[test]
    fn test_duplicate_pair_first_match_wins() {
        let mut records = sample_table().records;
        records.push(RouteRecord {
            source_city: "Delhi".to_string(),
            destination_city: "Mumbai".to_string(),
            min_duration_hours: 9.0,
        });
        let table = RouteTable::new(records);
        assert_eq!(table.duration_for("Delhi", "Mumbai").hours, 2.0);
    }

    #[test]
    fn test_city_lists_are_sorted_and_deduped() {
        let table = sample_table();
        assert_eq!(table.source_cities(), vec!["Delhi", "Mumbai"]);
        assert_eq!(
            table.destination_cities(),
            vec!["Delhi", "Kolkata", "Mumbai"]
        );
    }
}
