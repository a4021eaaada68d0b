//! Up-front checks for line registration.
//!
//! `add_line` touches the store only after every route of the line has
//! passed these checks, so a rejected line leaves no partial state behind.

use std::collections::HashSet;

use crate::graph::{GraphStore, NodeIndex};
use crate::models::{Line, NetworkError, Result, Route};

/// Validate `line` against the current store and resolve every stop of
/// every route to its node, in route order.
pub(crate) fn resolve_line(store: &GraphStore, line: &Line) -> Result<Vec<Vec<NodeIndex>>> {
    if store.find_line(line.id.as_str()).is_some() {
        return Err(NetworkError::DuplicateLine(line.id.clone()));
    }

    if line.routes.is_empty() {
        return Err(NetworkError::EmptyLine(line.id.clone()));
    }

    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(line.routes.len());

    for route in &line.routes {
        if !seen.insert(route.id.as_str()) || store.find_route_anywhere(route.id.as_str()).is_some() {
            return Err(NetworkError::DuplicateRoute(route.id.clone()));
        }

        check_route_shape(line, route)?;

        let stops = route
            .stops
            .iter()
            .map(|stop| {
                store
                    .find_node(stop.as_str())
                    .ok_or_else(|| NetworkError::StationNotFound(stop.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        resolved.push(stops);
    }

    Ok(resolved)
}

fn check_route_shape(line: &Line, route: &Route) -> Result<()> {
    let invalid = |reason: String| NetworkError::InvalidRoute {
        route: route.id.clone(),
        reason,
    };

    if route.line_id != line.id {
        return Err(invalid(format!(
            "belongs to line {} but was listed under line {}",
            route.line_id, line.id
        )));
    }

    let (Some(first), Some(last)) = (route.stops.first(), route.stops.last()) else {
        return Err(invalid("has no stops".into()));
    };

    if route.stops.len() < 2 {
        return Err(invalid(format!("has {} stop, needs at least 2", route.stops.len())));
    }

    if *first != route.start_station_id {
        return Err(invalid(format!(
            "first stop {} does not match start station {}",
            first, route.start_station_id
        )));
    }

    if *last != route.end_station_id {
        return Err(invalid(format!(
            "last stop {} does not match end station {}",
            last, route.end_station_id
        )));
    }

    Ok(())
}
