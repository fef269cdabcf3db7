//! Subnet topology normalization.
//!
//! The pipeline stages, in the order data flows through them:
//! - [`normalize`] - validate raw collaborator records
//! - [`classify`] - assign group names and types
//! - [`aggregate`] - collect subnets into groups
//! - [`zones`] - order the availability zones
//! - [`symmetry`] - project groups onto the flat legacy arrays
//! - [`assemble`] - build the response

mod aggregate;
mod assemble;
mod classify;
mod normalize;
mod symmetry;
mod zones;

// Re-export public functions
pub use aggregate::aggregate_groups;
pub use assemble::assemble_response;
pub use classify::{
    ClassifiedSubnet, GroupClassifier, GroupTypePolicy, RoutesOnly, SubnetFacts, TagThenRoutes,
};
pub use normalize::normalize_subnet;
pub use symmetry::{project_subnets, FlatSubnets, SubnetLayout, SymmetricProjection};
pub use zones::availability_zones;
