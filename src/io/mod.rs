//! VRP problem-file parsing.
//!
//! Reads the row-oriented text format used by the classic CVRP benchmark
//! instances: `KEY : VALUE` metadata lines (of which `CAPACITY` is
//! consumed), a `NODE_COORD_SECTION` of `id x y` rows, a `DEMAND_SECTION`
//! of `id demand` rows, a `DEPOT_SECTION` naming the 1-based depot row and
//! terminated by `-1`, and a final `EOF` marker. The depot row is pulled
//! out of the coordinate list; the remaining rows become customers.
//!
//! Parsing is a convenience layer on top of
//! [`CvrpProblem`](crate::models::CvrpProblem); the model and the search
//! strategies never depend on it.

use std::fs;
use std::path::Path;

use crate::error::DataError;
use crate::models::{CvrpProblem, Location};

/// Capacity assumed when the `CAPACITY` metadata line is absent.
const DEFAULT_CAPACITY: i32 = 100;

/// Parses VRP-format text into a problem instance.
///
/// # Errors
///
/// Returns [`DataError::MissingSection`] when the coordinate or demand
/// section is absent or empty, [`DataError::Malformed`] for rows that fail
/// numeric parsing or a depot index pointing outside the coordinate list,
/// and [`DataError::DemandMismatch`] when the two sections disagree on
/// length.
///
/// # Examples
///
/// ```
/// use cvrp_search::io::parse_vrp;
///
/// let text = "\
/// NAME : tiny
/// CAPACITY : 30
/// NODE_COORD_SECTION
/// 1 0 0
/// 2 1 0
/// 3 2 0
/// DEMAND_SECTION
/// 1 0
/// 2 10
/// 3 10
/// DEPOT_SECTION
/// 1
/// -1
/// EOF
/// ";
/// let problem = parse_vrp(text).expect("well-formed instance");
/// assert_eq!(problem.num_customers(), 2);
/// assert_eq!(problem.capacity(), 30);
/// ```
pub fn parse_vrp(input: &str) -> Result<CvrpProblem, DataError> {
    enum Section {
        None,
        Coords,
        Demands,
        Depot,
    }

    let mut coords: Vec<Location> = Vec::new();
    let mut demands: Vec<i32> = Vec::new();
    let mut depot_index = 0usize;
    let mut depot_line = 0usize;
    let mut capacity = DEFAULT_CAPACITY;
    let mut section = Section::None;

    for (number, raw) in input.lines().enumerate() {
        let line = raw.trim();
        let number = number + 1;
        if line.is_empty() {
            continue;
        }

        if line.starts_with("NODE_COORD_SECTION") {
            section = Section::Coords;
            continue;
        } else if line.starts_with("DEMAND_SECTION") {
            section = Section::Demands;
            continue;
        } else if line.starts_with("DEPOT_SECTION") {
            section = Section::Depot;
            continue;
        } else if line == "EOF" {
            break;
        }

        match section {
            Section::Coords => {
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() < 3 {
                    continue;
                }
                let x = parse_field::<f64>(parts[1], number, "x coordinate")?;
                let y = parse_field::<f64>(parts[2], number, "y coordinate")?;
                coords.push(Location::new(x, y));
            }
            Section::Demands => {
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() < 2 {
                    continue;
                }
                demands.push(parse_field::<i32>(parts[1], number, "demand")?);
            }
            Section::Depot => {
                // The section lists the 1-based depot row, then -1.
                if line != "-1" {
                    if let Ok(id) = line.parse::<usize>() {
                        depot_index = id.saturating_sub(1);
                        depot_line = number;
                    }
                }
            }
            Section::None => {
                if let Some((key, value)) = line.split_once(':') {
                    if key.trim() == "CAPACITY" {
                        capacity = parse_field::<i32>(value.trim(), number, "capacity")?;
                    }
                }
            }
        }
    }

    if coords.is_empty() {
        return Err(DataError::MissingSection("NODE_COORD_SECTION"));
    }
    if demands.is_empty() {
        return Err(DataError::MissingSection("DEMAND_SECTION"));
    }
    if coords.len() != demands.len() {
        return Err(DataError::DemandMismatch {
            customers: coords.len(),
            demands: demands.len(),
        });
    }
    if depot_index >= coords.len() {
        return Err(DataError::Malformed {
            line: depot_line,
            reason: format!(
                "depot index {} out of range for {} nodes",
                depot_index + 1,
                coords.len()
            ),
        });
    }

    let depot = coords.remove(depot_index);
    demands.remove(depot_index);

    CvrpProblem::new(depot, coords, demands, capacity)
}

/// Reads and parses a VRP file from disk.
///
/// # Errors
///
/// [`DataError::Io`] when the file cannot be read, otherwise whatever
/// [`parse_vrp`] reports.
pub fn load_vrp_file<P: AsRef<Path>>(path: P) -> Result<CvrpProblem, DataError> {
    let text = fs::read_to_string(path)?;
    parse_vrp(&text)
}

fn parse_field<T: std::str::FromStr>(
    field: &str,
    line: usize,
    what: &str,
) -> Result<T, DataError> {
    field.parse::<T>().map_err(|_| DataError::Malformed {
        line,
        reason: format!("invalid {what}: {field:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
NAME : sample
COMMENT : five customers
TYPE : CVRP
CAPACITY : 20
NODE_COORD_SECTION
1 0 0
2 1 0
3 2 0
4 0 1
5 0 2
DEMAND_SECTION
1 0
2 10
3 10
4 5
5 5
DEPOT_SECTION
1
-1
EOF
";

    #[test]
    fn test_parse_sample() {
        let problem = parse_vrp(SAMPLE).expect("well-formed instance");
        assert_eq!(problem.num_customers(), 4);
        assert_eq!(problem.capacity(), 20);
        assert_eq!(problem.depot(), Location::new(0.0, 0.0));
        assert_eq!(problem.demand(1), 10);
        assert_eq!(problem.demand(4), 5);
    }

    #[test]
    fn test_parse_capacity_default() {
        let text = "\
NODE_COORD_SECTION
1 0 0
2 3 4
DEMAND_SECTION
1 0
2 5
DEPOT_SECTION
1
-1
EOF
";
        let problem = parse_vrp(text).expect("well-formed instance");
        assert_eq!(problem.capacity(), 100);
    }

    #[test]
    fn test_parse_depot_not_first() {
        let text = "\
NODE_COORD_SECTION
1 5 5
2 0 0
DEMAND_SECTION
1 7
2 0
DEPOT_SECTION
2
-1
EOF
";
        let problem = parse_vrp(text).expect("well-formed instance");
        assert_eq!(problem.depot(), Location::new(0.0, 0.0));
        assert_eq!(problem.num_customers(), 1);
        assert_eq!(problem.demand(1), 7);
    }

    #[test]
    fn test_parse_missing_coords() {
        let text = "\
DEMAND_SECTION
1 0
EOF
";
        assert!(matches!(
            parse_vrp(text),
            Err(DataError::MissingSection("NODE_COORD_SECTION"))
        ));
    }

    #[test]
    fn test_parse_missing_demands() {
        let text = "\
NODE_COORD_SECTION
1 0 0
EOF
";
        assert!(matches!(
            parse_vrp(text),
            Err(DataError::MissingSection("DEMAND_SECTION"))
        ));
    }

    #[test]
    fn test_parse_malformed_coordinate() {
        let text = "\
NODE_COORD_SECTION
1 zero 0
DEMAND_SECTION
1 0
EOF
";
        assert!(matches!(
            parse_vrp(text),
            Err(DataError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_section_length_mismatch() {
        let text = "\
NODE_COORD_SECTION
1 0 0
2 1 1
DEMAND_SECTION
1 0
EOF
";
        assert!(matches!(
            parse_vrp(text),
            Err(DataError::DemandMismatch { customers: 2, demands: 1 })
        ));
    }

    #[test]
    fn test_parse_depot_out_of_range() {
        let text = "\
NODE_COORD_SECTION
1 0 0
DEMAND_SECTION
1 0
DEPOT_SECTION
9
-1
EOF
";
        assert!(matches!(parse_vrp(text), Err(DataError::Malformed { .. })));
    }

    #[test]
    fn test_parse_stops_at_eof_marker() {
        let text = "\
NODE_COORD_SECTION
1 0 0
2 1 0
DEMAND_SECTION
1 0
2 5
EOF
NODE_COORD_SECTION
3 9 9
";
        let problem = parse_vrp(text).expect("well-formed instance");
        assert_eq!(problem.num_customers(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_vrp_file("/nonexistent/instance.vrp"),
            Err(DataError::Io(_))
        ));
    }
}
