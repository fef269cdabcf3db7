//! Error types for VPC context lookups.
//!
//! Every variant is terminal for the lookup that raised it: the pipeline never
//! returns a partially normalized topology.

use crate::models::GroupType;
use thiserror::Error;

/// Errors raised while discovering and normalizing a VPC's subnet topology.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VpcContextError {
    /// A raw subnet record is missing one of id, availability zone or route table id.
    #[error("Malformed subnet record #{index} ({subnet}): missing {field}", subnet = .subnet_id.as_deref().unwrap_or("unknown id"))]
    MalformedSubnetRecord {
        index: usize,
        subnet_id: Option<String>,
        field: &'static str,
    },

    /// A subnet cannot be given a group name or group type.
    #[error("Cannot classify subnet {subnet_id}: {reason}")]
    UnclassifiableSubnet { subnet_id: String, reason: String },

    /// Members of one logical group disagree on the group type.
    #[error(
        "Subnet group '{group}' is {existing} but subnet {subnet_id} classifies it as {conflicting}"
    )]
    InconsistentGroupType {
        group: String,
        existing: GroupType,
        conflicting: GroupType,
        subnet_id: String,
    },

    /// The same subnet id was reported more than once.
    #[error("Subnet {subnet_id} reported more than once (groups '{first_group}' and '{second_group}')")]
    DuplicateSubnet {
        subnet_id: String,
        first_group: String,
        second_group: String,
    },

    /// A group does not have exactly one subnet per availability zone.
    #[error(
        "Subnet group '{group}' ({group_type}) has {found} subnet(s) in {availability_zone}, expected 1; \
         set returnAsymmetricSubnets to look up asymmetric VPCs"
    )]
    AsymmetricSubnetsUnsupported {
        group: String,
        group_type: GroupType,
        availability_zone: String,
        found: usize,
    },

    /// The discovery source has no VPC with the requested id.
    #[error("VPC not found: {0}")]
    VpcNotFound(String),

    /// The discovery snapshot could not be read or parsed.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// A response could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An environment setting is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, VpcContextError>;
