//! Response assembly.

use super::{FlatSubnets, SubnetLayout};
use crate::models::{GroupType, VpcContextQuery, VpcContextResponse, VpcMetadata};

/// Merge VPC metadata, zones and the projected layout into a response.
///
/// The query's region wins over the collaborator's; the collaborator's owner
/// account wins over the query's account.
pub fn assemble_response(
    metadata: &VpcMetadata,
    query: &VpcContextQuery,
    availability_zones: Vec<String>,
    layout: SubnetLayout,
) -> VpcContextResponse {
    let mut response = VpcContextResponse {
        vpc_id: metadata.vpc_id.clone(),
        vpc_cidr_block: metadata.cidr_block.clone(),
        availability_zones,
        vpn_gateway_id: metadata.vpn_gateway_id.clone(),
        region: query.region.clone().or_else(|| metadata.region.clone()),
        owner_account_id: metadata
            .owner_account_id
            .clone()
            .or_else(|| query.account.clone()),
        ..Default::default()
    };

    for (group_type, flat) in layout.projection().iter() {
        set_flat_subnets(&mut response, group_type, flat.clone());
    }

    if let SubnetLayout::Asymmetric { groups, .. } = layout {
        response.subnet_groups = Some(groups);
    }

    response
}

fn set_flat_subnets(response: &mut VpcContextResponse, group_type: GroupType, flat: FlatSubnets) {
    let (ids, names, route_table_ids) = match group_type {
        GroupType::Public => (
            &mut response.public_subnet_ids,
            &mut response.public_subnet_names,
            &mut response.public_subnet_route_table_ids,
        ),
        GroupType::Private => (
            &mut response.private_subnet_ids,
            &mut response.private_subnet_names,
            &mut response.private_subnet_route_table_ids,
        ),
        GroupType::Isolated => (
            &mut response.isolated_subnet_ids,
            &mut response.isolated_subnet_names,
            &mut response.isolated_subnet_route_table_ids,
        ),
        GroupType::PublicOutpost => (
            &mut response.public_outpost_subnet_ids,
            &mut response.public_outpost_subnet_names,
            &mut response.public_outpost_subnet_route_table_ids,
        ),
        GroupType::PrivateOutpost => (
            &mut response.private_outpost_subnet_ids,
            &mut response.private_outpost_subnet_names,
            &mut response.private_outpost_subnet_route_table_ids,
        ),
        GroupType::IsolatedOutpost => (
            &mut response.isolated_outpost_subnet_ids,
            &mut response.isolated_outpost_subnet_names,
            &mut response.isolated_outpost_subnet_route_table_ids,
        ),
    };
    *ids = Some(flat.ids);
    *names = Some(flat.names);
    *route_table_ids = Some(flat.route_table_ids);
}
