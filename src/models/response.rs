//! The response returned to the infrastructure-definition tool.

use super::SubnetGroup;
use serde::{Deserialize, Serialize};

/// Properties of a discovered VPC.
///
/// For a group type with `g` groups across `z` availability zones, the
/// `*SubnetIds` and `*SubnetRouteTableIds` arrays hold `z·g` elements ordered
/// zone-major, and `*SubnetNames` holds `g` elements.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VpcContextResponse {
    pub vpc_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_cidr_block: Option<String>,
    pub availability_zones: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_subnet_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_subnet_route_table_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_subnet_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_subnet_route_table_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_subnet_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_subnet_route_table_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_outpost_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_outpost_subnet_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_outpost_subnet_route_table_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_outpost_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_outpost_subnet_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_outpost_subnet_route_table_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_outpost_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_outpost_subnet_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_outpost_subnet_route_table_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_gateway_id: Option<String>,
    /// Only populated when the query asked for asymmetric subnets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_groups: Option<Vec<SubnetGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_account_id: Option<String>,
}
