//! Group aggregation.
//!
//! Collects classified subnets into [`SubnetGroup`]s. Groups appear in the
//! order their name was first seen and members keep discovery order, so the
//! same input always yields the same groups.

use super::ClassifiedSubnet;
use crate::error::{Result, VpcContextError};
use crate::models::SubnetGroup;
use std::collections::HashMap;

/// Group classified subnets by name.
///
/// Fails when one name is seen with two group types, or when a subnet id is
/// reported twice.
///
/// # Arguments
/// * `classified` - Classified subnets in discovery order
///
/// # Returns
/// * `Ok(Vec<SubnetGroup>)` - Groups in first-seen order
pub fn aggregate_groups<I>(classified: I) -> Result<Vec<SubnetGroup>>
where
    I: IntoIterator<Item = ClassifiedSubnet>,
{
    let mut groups: Vec<SubnetGroup> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    // subnet id -> owning group name
    let mut seen_subnets: HashMap<String, String> = HashMap::new();

    for c in classified {
        if let Some(first_group) = seen_subnets.get(&c.subnet.subnet_id) {
            return Err(VpcContextError::DuplicateSubnet {
                subnet_id: c.subnet.subnet_id,
                first_group: first_group.clone(),
                second_group: c.group_name,
            });
        }
        seen_subnets.insert(c.subnet.subnet_id.clone(), c.group_name.clone());

        match group_index.get(&c.group_name).copied() {
            Some(i) => {
                let group = &mut groups[i];
                if group.group_type != c.group_type {
                    return Err(VpcContextError::InconsistentGroupType {
                        group: c.group_name,
                        existing: group.group_type,
                        conflicting: c.group_type,
                        subnet_id: c.subnet.subnet_id,
                    });
                }
                group.subnets.push(c.subnet);
            }
            None => {
                group_index.insert(c.group_name.clone(), groups.len());
                groups.push(SubnetGroup {
                    name: c.group_name,
                    group_type: c.group_type,
                    subnets: vec![c.subnet],
                });
            }
        }
    }

    log::debug!(
        "aggregated {} subnet(s) into {} group(s)",
        seen_subnets.len(),
        groups.len()
    );
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupType, Subnet};

    fn classified(id: &str, az: &str, group: &str, group_type: GroupType) -> ClassifiedSubnet {
        ClassifiedSubnet {
            subnet: Subnet {
                subnet_id: id.to_string(),
                availability_zone: az.to_string(),
                route_table_id: format!("rtb-{id}"),
                cidr: None,
            },
            group_name: group.to_string(),
            group_type,
        }
    }

    #[test]
    fn test_first_seen_order() {
        let groups = aggregate_groups(vec![
            classified("s1", "a", "Private", GroupType::Private),
            classified("s2", "a", "Public", GroupType::Public),
            classified("s3", "b", "Private", GroupType::Private),
            classified("s4", "b", "Public", GroupType::Public),
        ])
        .unwrap();

        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Private", "Public"]);
        let members: Vec<&str> = groups[0]
            .subnets
            .iter()
            .map(|s| s.subnet_id.as_str())
            .collect();
        assert_eq!(members, vec!["s1", "s3"]);
    }

    #[test]
    fn test_asymmetry_is_allowed() {
        let groups = aggregate_groups(vec![
            classified("s1", "a", "Web", GroupType::Public),
            classified("s2", "a", "Web", GroupType::Public),
            classified("s3", "b", "Db", GroupType::Isolated),
        ])
        .unwrap();
        assert_eq!(groups[0].subnets.len(), 2);
        assert_eq!(groups[1].subnets.len(), 1);
    }

    #[test]
    fn test_inconsistent_group_type() {
        let err = aggregate_groups(vec![
            classified("s1", "a", "App", GroupType::Public),
            classified("s2", "b", "App", GroupType::Private),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            VpcContextError::InconsistentGroupType {
                group: "App".to_string(),
                existing: GroupType::Public,
                conflicting: GroupType::Private,
                subnet_id: "s2".to_string(),
            }
        );
    }

    #[test]
    fn test_outpost_variant_is_a_different_type() {
        let err = aggregate_groups(vec![
            classified("s1", "a", "App", GroupType::Private),
            classified("s2", "b", "App", GroupType::PrivateOutpost),
        ])
        .unwrap_err();
        assert!(matches!(err, VpcContextError::InconsistentGroupType { .. }));
    }

    #[test]
    fn test_duplicate_subnet() {
        let err = aggregate_groups(vec![
            classified("s1", "a", "App", GroupType::Private),
            classified("s1", "a", "Stale", GroupType::Private),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            VpcContextError::DuplicateSubnet {
                subnet_id: "s1".to_string(),
                first_group: "App".to_string(),
                second_group: "Stale".to_string(),
            }
        );
    }
}
