//! Lookup request and the discovery collaborator's result contract.

use super::RawSubnetRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A request to describe one VPC.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VpcContextQuery {
    /// Id of the VPC to describe.
    pub vpc_id: String,
    /// Region override; the collaborator's region is used otherwise.
    pub region: Option<String>,
    /// Account override, used when the collaborator does not report an owner.
    pub account: Option<String>,
    /// Attach raw subnet groups and tolerate asymmetric topologies.
    #[serde(default)]
    pub return_asymmetric_subnets: bool,
    /// Tag holding the subnet group name. Defaults to [`crate::config::SUBNET_NAME_TAG`].
    pub subnet_group_name_tag: Option<String>,
}

impl VpcContextQuery {
    pub fn new(vpc_id: impl Into<String>) -> Self {
        VpcContextQuery {
            vpc_id: vpc_id.into(),
            ..Default::default()
        }
    }

    pub fn with_asymmetric_subnets(mut self, enabled: bool) -> Self {
        self.return_asymmetric_subnets = enabled;
        self
    }
}

/// VPC-level scalars reported by the collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VpcMetadata {
    pub vpc_id: String,
    pub cidr_block: Option<String>,
    pub vpn_gateway_id: Option<String>,
    pub owner_account_id: Option<String>,
    pub region: Option<String>,
    /// Canonical availability zone order for the region, if the collaborator knows it.
    pub zone_order: Option<Vec<String>>,
}

/// Where a route table can send traffic, reduced to what classification needs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteCharacteristics {
    /// Has a route to an internet gateway.
    pub internet_gateway: bool,
    /// Has a route to a NAT gateway or NAT instance.
    pub nat_device: bool,
    /// Has a route to a transit gateway.
    pub transit_gateway: bool,
}

impl RouteCharacteristics {
    /// True when traffic can leave the VPC through something other than an internet gateway.
    pub fn has_private_egress(&self) -> bool {
        self.nat_device || self.transit_gateway
    }
}

/// Everything the collaborator reports about one VPC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredVpc {
    pub metadata: VpcMetadata,
    /// Raw subnet records in discovery order.
    pub subnets: Vec<RawSubnetRecord>,
    /// Routing characteristics keyed by route table id.
    pub routes: BTreeMap<String, RouteCharacteristics>,
}
