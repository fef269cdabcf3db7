//! Domain models for VPC context lookups.
//!
//! - [`RawSubnetRecord`] and [`Subnet`] - subnets before and after validation
//! - [`GroupType`] and [`SubnetGroup`] - logical subnet groups
//! - [`VpcContextQuery`], [`DiscoveredVpc`] - lookup request and collaborator result
//! - [`VpcContextResponse`] - the assembled response
//! - [`Ipv4`] - CIDR helpers for summaries

mod group;
mod ipv4;
mod response;
mod subnet;
mod vpc;

// Re-export public types
pub use group::{GroupType, SubnetGroup, SubnetKind};
pub use ipv4::{num_usable_hosts, Ipv4};
pub use response::VpcContextResponse;
pub use subnet::{RawSubnetRecord, Subnet, Tags};
pub use vpc::{DiscoveredVpc, RouteCharacteristics, VpcContextQuery, VpcMetadata};
