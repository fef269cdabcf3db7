//! Settings and well-known constants.
//!
//! The binary loads `.env` with dotenv before calling [`Settings::from_env`].

use crate::error::{Result, VpcContextError};
use crate::models::VpcContextQuery;
use std::env;

/// Tag holding the logical subnet group name.
pub const SUBNET_NAME_TAG: &str = "aws-cdk:subnet-name";

/// Tag holding an explicit subnet type (Public, Private or Isolated).
pub const SUBNET_TYPE_TAG: &str = "aws-cdk:subnet-type";

/// Snapshot file used when `VPC_SNAPSHOT_FILE` is not set.
pub const DEFAULT_SNAPSHOT_FILE: &str = "vpc_snapshot.json";

/// How the binary prints responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub snapshot_file: String,
    pub vpc_ids: Vec<String>,
    pub region: Option<String>,
    pub account: Option<String>,
    pub return_asymmetric_subnets: bool,
    pub subnet_group_name_tag: Option<String>,
    pub output: OutputFormat,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings> {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let vpc_ids: Vec<String> = get("VPC_IDS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        if vpc_ids.is_empty() {
            return Err(VpcContextError::Config(
                "VPC_IDS must name at least one VPC".to_string(),
            ));
        }

        let return_asymmetric_subnets = match get("VPC_RETURN_ASYMMETRIC_SUBNETS") {
            None => false,
            Some(v) => parse_bool(&v).ok_or_else(|| {
                VpcContextError::Config(format!(
                    "VPC_RETURN_ASYMMETRIC_SUBNETS must be true or false, got '{v}'"
                ))
            })?,
        };

        let output = match get("VPC_OUTPUT").as_deref().map(str::to_ascii_lowercase) {
            None => OutputFormat::Json,
            Some(v) if v == "json" => OutputFormat::Json,
            Some(v) if v == "table" => OutputFormat::Table,
            Some(v) => {
                return Err(VpcContextError::Config(format!(
                    "VPC_OUTPUT must be json or table, got '{v}'"
                )))
            }
        };

        Ok(Settings {
            snapshot_file: get("VPC_SNAPSHOT_FILE")
                .unwrap_or_else(|| DEFAULT_SNAPSHOT_FILE.to_string()),
            vpc_ids,
            region: get("VPC_REGION"),
            account: get("VPC_ACCOUNT"),
            return_asymmetric_subnets,
            subnet_group_name_tag: get("VPC_SUBNET_GROUP_NAME_TAG"),
            output,
        })
    }

    /// One query per configured VPC id, in configured order.
    pub fn queries(&self) -> Vec<VpcContextQuery> {
        self.vpc_ids
            .iter()
            .map(|vpc_id| VpcContextQuery {
                vpc_id: vpc_id.clone(),
                region: self.region.clone(),
                account: self.account.clone(),
                return_asymmetric_subnets: self.return_asymmetric_subnets,
                subnet_group_name_tag: self.subnet_group_name_tag.clone(),
            })
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[("VPC_IDS", "vpc-1")]).unwrap();
        assert_eq!(s.snapshot_file, DEFAULT_SNAPSHOT_FILE);
        assert_eq!(s.vpc_ids, vec!["vpc-1"]);
        assert!(!s.return_asymmetric_subnets);
        assert_eq!(s.output, OutputFormat::Json);
        assert_eq!(s.region, None);
    }

    #[test]
    fn test_multiple_ids_and_flags() {
        let s = settings(&[
            ("VPC_IDS", " vpc-1, ,vpc-2 "),
            ("VPC_RETURN_ASYMMETRIC_SUBNETS", "TRUE"),
            ("VPC_OUTPUT", "Table"),
            ("VPC_REGION", "eu-west-1"),
            ("VPC_ACCOUNT", "  "),
        ])
        .unwrap();
        assert_eq!(s.vpc_ids, vec!["vpc-1", "vpc-2"]);
        assert!(s.return_asymmetric_subnets);
        assert_eq!(s.output, OutputFormat::Table);
        assert_eq!(s.account, None);

        let queries = s.queries();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].vpc_id, "vpc-2");
        assert_eq!(queries[1].region.as_deref(), Some("eu-west-1"));
        assert!(queries[0].return_asymmetric_subnets);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(settings(&[]), Err(VpcContextError::Config(_))));
        assert!(matches!(
            settings(&[("VPC_IDS", "vpc-1"), ("VPC_RETURN_ASYMMETRIC_SUBNETS", "maybe")]),
            Err(VpcContextError::Config(_))
        ));
        assert!(matches!(
            settings(&[("VPC_IDS", "vpc-1"), ("VPC_OUTPUT", "csv")]),
            Err(VpcContextError::Config(_))
        ));
    }
}
