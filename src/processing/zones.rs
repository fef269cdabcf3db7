//! Availability zone ordering.

use crate::models::SubnetGroup;
use itertools::Itertools;

/// The union of availability zones used by any group member.
///
/// Zones listed in `zone_order` come first, in that order. Any other zone
/// follows in lexicographic order, which matches the provider's zone naming.
pub fn availability_zones(groups: &[SubnetGroup], zone_order: Option<&[String]>) -> Vec<String> {
    let zone_order = zone_order.unwrap_or_default();
    groups
        .iter()
        .flat_map(|g| g.subnets.iter())
        .map(|s| s.availability_zone.as_str())
        .unique()
        .sorted_by_key(|zone| {
            let rank = zone_order
                .iter()
                .position(|z| z == zone)
                .unwrap_or(zone_order.len());
            (rank, *zone)
        })
        .map(str::to_string)
        .collect()
}
