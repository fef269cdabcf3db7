//! Subnet data models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag map attached to a raw subnet record. Ordered so output is deterministic.
pub type Tags = BTreeMap<String, String>;

/// A subnet as reported by the discovery collaborator, before any validation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawSubnetRecord {
    /// Provider-assigned subnet id.
    pub subnet_id: Option<String>,
    /// Availability zone code, e.g. `us-east-1a`.
    pub availability_zone: Option<String>,
    /// Route table the subnet is associated with (explicitly or via the main table).
    pub route_table_id: Option<String>,
    /// CIDR block, when the provider reported one.
    pub cidr: Option<String>,
    /// Raw tags.
    #[serde(default)]
    pub tags: Tags,
    /// Set when the subnet lives on an on-premises outpost.
    pub outpost_arn: Option<String>,
}

/// One physical subnet, validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    /// Identifier of the subnet.
    pub subnet_id: String,
    /// The availability zone this subnet is in (for example `us-west-2a`).
    pub availability_zone: String,
    /// Identifier of the route table for this subnet.
    pub route_table_id: String,
    /// CIDR range of the subnet, absent when not reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
}
