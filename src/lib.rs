//! Normalized VPC subnet topology for infrastructure-definition tools.
//!
//! Given the raw subnets, tags and routing a discovery collaborator reports for
//! one VPC, [`build_vpc_context`] produces a [`VpcContextResponse`] holding both
//! the legacy symmetric flat arrays and, on request, the raw subnet groups.

pub mod config;
pub mod discovery;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use discovery::{DiscoverySource, SnapshotSource};
pub use error::{Result, VpcContextError};
pub use models::{DiscoveredVpc, VpcContextQuery, VpcContextResponse};

use processing::{
    aggregate_groups, assemble_response, availability_zones, normalize_subnet, project_subnets,
    GroupClassifier, GroupTypePolicy, SubnetFacts, TagThenRoutes,
};

/// Run the normalization pipeline over one discovered VPC.
///
/// Returns the first error raised by any stage, unchanged.
///
/// # Arguments
/// * `discovered` - Metadata, subnet records and route facts from discovery
/// * `query` - The lookup request
/// * `classifier` - Group classifier to assign names and types
///
/// # Returns
/// * `Ok(VpcContextResponse)` - The assembled response
pub fn build_vpc_context<P: GroupTypePolicy>(
    discovered: &DiscoveredVpc,
    query: &VpcContextQuery,
    classifier: &GroupClassifier<P>,
) -> Result<VpcContextResponse> {
    let classified = discovered
        .subnets
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let subnet = normalize_subnet(index, record)?;
            let facts = SubnetFacts {
                tags: &record.tags,
                routes: discovered.routes.get(&subnet.route_table_id),
                outpost: record.outpost_arn.is_some(),
            };
            classifier.classify(subnet, facts)
        })
        .collect::<Result<Vec<_>>>()?;

    let groups = aggregate_groups(classified)?;
    let zones = availability_zones(&groups, discovered.metadata.zone_order.as_deref());
    log::debug!(
        "{}: {} group(s) across {} zone(s)",
        discovered.metadata.vpc_id,
        groups.len(),
        zones.len()
    );

    let layout = project_subnets(groups, &zones, query.return_asymmetric_subnets)?;
    Ok(assemble_response(&discovered.metadata, query, zones, layout))
}

/// Discover a VPC and normalize it with the default classifier.
///
/// The classifier reads group names from the query's name tag when one is set.
pub fn lookup_vpc_context(
    source: &dyn DiscoverySource,
    query: &VpcContextQuery,
) -> Result<VpcContextResponse> {
    log::info!(
        "#Start lookup vpc={} return_asymmetric_subnets={}",
        query.vpc_id,
        query.return_asymmetric_subnets
    );
    let discovered = source.discover(query)?;

    let classifier = match &query.subnet_group_name_tag {
        Some(tag) => GroupClassifier::new(tag.as_str(), TagThenRoutes::default()),
        None => GroupClassifier::default(),
    };
    let response = build_vpc_context(&discovered, query, &classifier)?;

    log::info!(
        "#End lookup vpc={} zones={} subnet_groups={}",
        response.vpc_id,
        response.availability_zones.len(),
        response
            .subnet_groups
            .as_ref()
            .map_or("-".to_string(), |g| g.len().to_string())
    );
    Ok(response)
}
