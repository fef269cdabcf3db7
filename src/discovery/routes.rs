//! Route table reduction.
//!
//! Resolves which route table a subnet uses and reduces route tables to the
//! [`RouteCharacteristics`] the classifier needs.

use super::snapshot::{SnapshotRoute, SnapshotRouteTable};
use crate::models::RouteCharacteristics;
use regex::Regex;
use std::sync::OnceLock;

/// Regex capturing the resource prefix of a route target id, e.g. `igw` in `igw-0abc`.
static TARGET_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_target_regex() -> &'static Regex {
    TARGET_REGEX.get_or_init(|| Regex::new(r"^([a-z]+)-[0-9A-Za-z]+$").expect("Invalid Regex"))
}

/// What a route sends traffic to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    InternetGateway,
    NatDevice,
    TransitGateway,
    /// Local routes, peering, endpoints, VPN and egress-only gateways.
    Other,
}

/// Classify a route target id by its prefix.
pub fn route_target(target: &str) -> RouteTarget {
    let prefix = get_target_regex()
        .captures(target.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    match prefix {
        Some("igw") => RouteTarget::InternetGateway,
        Some("nat") | Some("i") | Some("eni") => RouteTarget::NatDevice,
        Some("tgw") => RouteTarget::TransitGateway,
        _ => RouteTarget::Other,
    }
}

/// Reduce a route table's routes to its characteristics.
pub fn route_characteristics(routes: &[SnapshotRoute]) -> RouteCharacteristics {
    routes
        .iter()
        .fold(RouteCharacteristics::default(), |mut acc, route| {
            match route_target(&route.target) {
                RouteTarget::InternetGateway => acc.internet_gateway = true,
                RouteTarget::NatDevice => acc.nat_device = true,
                RouteTarget::TransitGateway => acc.transit_gateway = true,
                RouteTarget::Other => {}
            }
            acc
        })
}

/// Route table id for a subnet without an explicit one.
///
/// An explicit association wins; otherwise the VPC's main route table applies.
pub fn resolve_route_table_id<'a>(
    subnet_id: &str,
    route_tables: &'a [SnapshotRouteTable],
) -> Option<&'a str> {
    if let Some(table) = route_tables
        .iter()
        .find(|t| t.associations.iter().any(|a| a == subnet_id))
    {
        return Some(&table.route_table_id);
    }

    let main = route_tables.iter().find(|t| t.main)?;
    log::warn!(
        "subnet {subnet_id} has no explicit route table association, using main table {}",
        main.route_table_id
    );
    Some(&main.route_table_id)
}
