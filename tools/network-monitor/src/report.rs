use std::str::FromStr;

use network_monitor_core::transit::prelude::*;

/// A `LINE/ROUTE` pair given on the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteQuery {
    pub line: LineIdentifier,
    pub route: RouteIdentifier,
}

impl FromStr for RouteQuery {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((line, route)) if !line.is_empty() && !route.is_empty() => Ok(Self {
                line: line.into(),
                route: route.into(),
            }),
            _ => Err(format!("expected LINE/ROUTE, got {s:?}")),
        }
    }
}

pub fn print_report(network: &TransportNetwork, stations: &[String], routes: &[RouteQuery]) {
    println!(
        "Network: {} stations, {} lines, {} routes",
        network.station_count(),
        network.line_count(),
        network.route_count()
    );

    for station in stations {
        println!();
        print_station(network, &StationIdentifier::new(station));
    }

    for query in routes {
        println!();
        print_route(network, query);
    }
}

fn print_station(network: &TransportNetwork, id: &StationIdentifier) {
    let Some(station) = network.station(id) else {
        println!("Station {id}: not in the network");
        return;
    };

    println!("Station {} ({})", station.name, station.id);
    match network.passenger_count(id) {
        Ok(count) => println!("  passengers: {count}"),
        Err(err) => println!("  passengers: {err}"),
    }

    let routes = network.routes_serving_station(id);
    if routes.is_empty() {
        println!("  served by no route");
    }
    for route in routes {
        let line = network.line_of_route(&route);
        let line_name = line
            .as_ref()
            .and_then(|line| network.line_name(line))
            .unwrap_or("?");
        println!("  route {route} ({line_name})");
    }
}

fn print_route(network: &TransportNetwork, query: &RouteQuery) {
    let stops = match network.route_stops(&query.line, &query.route) {
        Ok(stops) => stops,
        Err(err) => {
            println!("Route {}/{}: {err}", query.line, query.route);
            return;
        }
    };

    println!(
        "Route {}/{} ({} stops)",
        query.line,
        query.route,
        stops.len()
    );
    let Some(first) = stops.first() else {
        return;
    };
    println!("  {:>5}  {first}", 0);
    for stop in stops.iter().skip(1) {
        match network.route_travel_time(&query.line, &query.route, first, stop) {
            Ok(minutes) => println!("  {minutes:>5}  {stop}"),
            Err(err) => println!("  {:>5}  {stop} ({err})", "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_query() {
        let query: RouteQuery = "line_000/route_001".parse().unwrap();
        assert_eq!(query.line.as_str(), "line_000");
        assert_eq!(query.route.as_str(), "route_001");

        assert!("line_000".parse::<RouteQuery>().is_err());
        assert!("/route_001".parse::<RouteQuery>().is_err());
    }
}
