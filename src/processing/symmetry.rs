//! Symmetry projection.
//!
//! Derives the legacy flat subnet arrays from subnet groups. The flat shape is
//! only valid when every group of a type has exactly one subnet in every
//! availability zone, so that is checked here rather than assumed.
//!
//! Flat arrays are zone-major: all groups for the first zone, then all groups
//! for the second zone, and so on. Within a zone, groups keep their discovery
//! order.

use crate::error::{Result, VpcContextError};
use crate::models::{GroupType, Subnet, SubnetGroup};
use std::collections::BTreeMap;

/// Flat arrays for one group type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatSubnets {
    /// `zones · groups` subnet ids, zone-major.
    pub ids: Vec<String>,
    /// One name per group.
    pub names: Vec<String>,
    /// `zones · groups` route table ids, parallel to `ids`.
    pub route_table_ids: Vec<String>,
}

impl FlatSubnets {
    /// Rebuild group membership from the flat arrays.
    ///
    /// Returns `(group name, subnet ids in zone order)` per group. Returns
    /// `None` when the arrays do not have the `zones · groups` shape.
    pub fn regroup(&self, zones: &[String]) -> Option<Vec<(String, Vec<String>)>> {
        let g = self.names.len();
        if self.ids.len() != zones.len() * g || self.route_table_ids.len() != self.ids.len() {
            return None;
        }
        Some(
            self.names
                .iter()
                .enumerate()
                .map(|(j, name)| {
                    let ids = (0..zones.len())
                        .map(|zone| self.ids[zone * g + j].clone())
                        .collect();
                    (name.clone(), ids)
                })
                .collect(),
        )
    }
}

/// Flat arrays for every group type that could be projected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymmetricProjection {
    by_type: BTreeMap<GroupType, FlatSubnets>,
}

impl SymmetricProjection {
    pub fn get(&self, group_type: GroupType) -> Option<&FlatSubnets> {
        self.by_type.get(&group_type)
    }

    /// Projected types in response order, with their arrays.
    pub fn iter(&self) -> impl Iterator<Item = (GroupType, &FlatSubnets)> {
        self.by_type.iter().map(|(t, flat)| (*t, flat))
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// Output of the projector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubnetLayout {
    /// Every group type was verified symmetric.
    Symmetric(SymmetricProjection),
    /// Asymmetric subnets were requested: flat arrays only for types that
    /// happen to be symmetric, plus the raw groups.
    Asymmetric {
        projection: SymmetricProjection,
        groups: Vec<SubnetGroup>,
    },
}

impl SubnetLayout {
    pub fn projection(&self) -> &SymmetricProjection {
        match self {
            SubnetLayout::Symmetric(projection) => projection,
            SubnetLayout::Asymmetric { projection, .. } => projection,
        }
    }

    pub fn groups(&self) -> Option<&[SubnetGroup]> {
        match self {
            SubnetLayout::Symmetric(_) => None,
            SubnetLayout::Asymmetric { groups, .. } => Some(groups),
        }
    }
}

/// Project groups onto the flat, zone-major layout.
///
/// With `return_asymmetric_subnets` unset, any group missing a subnet in a
/// zone (or holding more than one) fails the lookup. With it set, such group
/// types are left out of the flat arrays and the groups are attached instead.
///
/// # Arguments
/// * `groups` - Aggregated subnet groups
/// * `zones` - Availability zones in canonical order
/// * `return_asymmetric_subnets` - Whether asymmetric groups are tolerated
///
/// # Returns
/// * `Ok(SubnetLayout)` - Symmetric projection, or projection plus raw groups
pub fn project_subnets(
    groups: Vec<SubnetGroup>,
    zones: &[String],
    return_asymmetric_subnets: bool,
) -> Result<SubnetLayout> {
    let mut projection = SymmetricProjection::default();

    for group_type in GroupType::ALL {
        let of_type: Vec<&SubnetGroup> = groups
            .iter()
            .filter(|g| g.group_type == group_type)
            .collect();
        if of_type.is_empty() {
            continue;
        }

        match project_type(&of_type, zones) {
            Ok(flat) => {
                projection.by_type.insert(group_type, flat);
            }
            Err(e) if return_asymmetric_subnets => {
                log::debug!("omitting flat {group_type} subnets: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    if return_asymmetric_subnets {
        Ok(SubnetLayout::Asymmetric { projection, groups })
    } else {
        Ok(SubnetLayout::Symmetric(projection))
    }
}

/// Project the groups of a single type, verifying symmetry.
fn project_type(groups: &[&SubnetGroup], zones: &[String]) -> Result<FlatSubnets> {
    // zone-major grid: cells[zone][group]
    let mut cells: Vec<Vec<&Subnet>> = Vec::with_capacity(zones.len());
    for zone in zones {
        let mut row = Vec::with_capacity(groups.len());
        for group in groups {
            let mut in_zone = group.subnets_in(zone);
            match (in_zone.next(), in_zone.count()) {
                (Some(subnet), 0) => row.push(subnet),
                (first, rest) => {
                    return Err(asymmetric(group, zone, first.map_or(0, |_| 1) + rest));
                }
            }
        }
        cells.push(row);
    }

    // A member outside the zone list cannot be placed in the grid.
    for group in groups {
        if let Some(stray) = group
            .subnets
            .iter()
            .find(|s| !zones.contains(&s.availability_zone))
        {
            return Err(asymmetric(group, &stray.availability_zone, 1));
        }
    }

    let (ids, route_table_ids): (Vec<String>, Vec<String>) = cells
        .into_iter()
        .flatten()
        .map(|s| (s.subnet_id.clone(), s.route_table_id.clone()))
        .unzip();

    Ok(FlatSubnets {
        ids,
        names: groups.iter().map(|g| g.name.clone()).collect(),
        route_table_ids,
    })
}

fn asymmetric(group: &SubnetGroup, zone: &str, found: usize) -> VpcContextError {
    VpcContextError::AsymmetricSubnetsUnsupported {
        group: group.name.clone(),
        group_type: group.group_type,
        availability_zone: zone.to_string(),
        found,
    }
}
