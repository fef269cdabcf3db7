//! Discovery collaborators.
//!
//! This module provides what the pipeline consumes:
//! - [`DiscoverySource`] - the collaborator contract
//! - [`snapshot`] - a source backed by a JSON snapshot of provider data
//! - [`routes`] - route table resolution and reduction

mod routes;
mod snapshot;

use crate::error::Result;
use crate::models::{DiscoveredVpc, VpcContextQuery};

// Re-export public types and functions
pub use routes::{resolve_route_table_id, route_characteristics, route_target, RouteTarget};
pub use snapshot::{
    Snapshot, SnapshotRoute, SnapshotRouteTable, SnapshotSource, SnapshotSubnet, SnapshotVpc,
};

/// Something that can report a VPC's subnets, tags and routing.
pub trait DiscoverySource {
    fn discover(&self, query: &VpcContextQuery) -> Result<DiscoveredVpc>;
}
