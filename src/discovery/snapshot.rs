//! JSON discovery snapshots.
//!
//! A snapshot holds what the provider reported about one or more VPCs at some
//! point in time: subnets, tags and route tables.

use super::routes::{resolve_route_table_id, route_characteristics};
use super::DiscoverySource;
use crate::error::{Result, VpcContextError};
use crate::models::{DiscoveredVpc, RawSubnetRecord, Tags, VpcContextQuery, VpcMetadata};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top level of a snapshot document.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub vpcs: Vec<SnapshotVpc>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotVpc {
    pub vpc_id: String,
    pub cidr_block: Option<String>,
    pub owner_id: Option<String>,
    pub region: Option<String>,
    pub vpn_gateway_id: Option<String>,
    /// Canonical zone order for the region.
    pub availability_zones: Option<Vec<String>>,
    #[serde(default)]
    pub subnets: Vec<SnapshotSubnet>,
    #[serde(default)]
    pub route_tables: Vec<SnapshotRouteTable>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSubnet {
    pub subnet_id: Option<String>,
    pub availability_zone: Option<String>,
    pub cidr_block: Option<String>,
    /// Explicit route table id; resolved from the route tables when absent.
    pub route_table_id: Option<String>,
    pub outpost_arn: Option<String>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRouteTable {
    pub route_table_id: String,
    #[serde(default)]
    pub main: bool,
    /// Ids of subnets explicitly associated with this table.
    #[serde(default)]
    pub associations: Vec<String>,
    #[serde(default)]
    pub routes: Vec<SnapshotRoute>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRoute {
    pub destination: Option<String>,
    /// Target resource id, e.g. `igw-0abc` or `local`.
    pub target: String,
}

/// A [`DiscoverySource`] backed by a parsed snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    pub fn new(snapshot: Snapshot) -> Self {
        SnapshotSource { snapshot }
    }

    /// Parse a snapshot document, reporting the JSON path of any error.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let snapshot: Snapshot = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| {
                VpcContextError::Snapshot(format!(
                    "Error parsing snapshot JSON: path={} error={}",
                    e.path(),
                    e.inner()
                ))
            })?;
        log::debug!("parsed snapshot with {} VPC(s)", snapshot.vpcs.len());
        Ok(SnapshotSource::new(snapshot))
    }

    /// Read and parse a snapshot file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VpcContextError::Snapshot(format!(
                "Snapshot file does not exist: {}",
                path.display()
            )));
        }
        log::info!("Reading snapshot file: {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|e| {
            VpcContextError::Snapshot(format!("Error reading {}: {e}", path.display()))
        })?;
        SnapshotSource::from_json(&json)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl DiscoverySource for SnapshotSource {
    fn discover(&self, query: &VpcContextQuery) -> Result<DiscoveredVpc> {
        let vpc = self
            .snapshot
            .vpcs
            .iter()
            .find(|v| v.vpc_id == query.vpc_id)
            .ok_or_else(|| VpcContextError::VpcNotFound(query.vpc_id.clone()))?;
        Ok(discovered_vpc(vpc))
    }
}

/// Convert one snapshot VPC into the collaborator contract.
fn discovered_vpc(vpc: &SnapshotVpc) -> DiscoveredVpc {
    let subnets = vpc
        .subnets
        .iter()
        .map(|s| {
            let route_table_id = s.route_table_id.clone().or_else(|| {
                s.subnet_id
                    .as_deref()
                    .and_then(|id| resolve_route_table_id(id, &vpc.route_tables))
                    .map(str::to_string)
            });
            RawSubnetRecord {
                subnet_id: s.subnet_id.clone(),
                availability_zone: s.availability_zone.clone(),
                route_table_id,
                cidr: s.cidr_block.clone(),
                tags: s.tags.clone(),
                outpost_arn: s.outpost_arn.clone(),
            }
        })
        .collect();

    let routes = vpc
        .route_tables
        .iter()
        .map(|t| (t.route_table_id.clone(), route_characteristics(&t.routes)))
        .collect();

    DiscoveredVpc {
        metadata: VpcMetadata {
            vpc_id: vpc.vpc_id.clone(),
            cidr_block: vpc.cidr_block.clone(),
            vpn_gateway_id: vpc.vpn_gateway_id.clone(),
            owner_account_id: vpc.owner_id.clone(),
            region: vpc.region.clone(),
            zone_order: vpc.availability_zones.clone(),
        },
        subnets,
        routes,
    }
}
