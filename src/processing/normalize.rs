//! Subnet record normalization.
//!
//! Turns raw collaborator records into validated [`Subnet`] values.

use crate::error::{Result, VpcContextError};
use crate::models::{RawSubnetRecord, Subnet};

/// Validate one raw record.
///
/// `index` is the record's position in discovery order and is only used for
/// error reporting.
pub fn normalize_subnet(index: usize, record: &RawSubnetRecord) -> Result<Subnet> {
    let subnet_id = record.subnet_id.as_deref().and_then(non_blank);
    let missing = |field: &'static str| VpcContextError::MalformedSubnetRecord {
        index,
        subnet_id: subnet_id.map(str::to_string),
        field,
    };

    let id = subnet_id.ok_or_else(|| missing("subnetId"))?;
    let availability_zone = record
        .availability_zone
        .as_deref()
        .and_then(non_blank)
        .ok_or_else(|| missing("availabilityZone"))?;
    let route_table_id = record
        .route_table_id
        .as_deref()
        .and_then(non_blank)
        .ok_or_else(|| missing("routeTableId"))?;

    Ok(Subnet {
        subnet_id: id.to_string(),
        availability_zone: availability_zone.to_string(),
        route_table_id: route_table_id.to_string(),
        cidr: record
            .cidr
            .as_deref()
            .and_then(non_blank)
            .map(str::to_string),
    })
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RawSubnetRecord {
        RawSubnetRecord {
            subnet_id: Some("subnet-0a1".to_string()),
            availability_zone: Some("us-east-1a".to_string()),
            route_table_id: Some("rtb-01".to_string()),
            cidr: Some("10.0.0.0/24".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_passes_fields_through() {
        let subnet = normalize_subnet(0, &record()).unwrap();
        assert_eq!(subnet.subnet_id, "subnet-0a1");
        assert_eq!(subnet.availability_zone, "us-east-1a");
        assert_eq!(subnet.route_table_id, "rtb-01");
        assert_eq!(subnet.cidr.as_deref(), Some("10.0.0.0/24"));
    }

    #[test]
    fn test_normalize_missing_cidr_is_absent() {
        let mut raw = record();
        raw.cidr = None;
        assert_eq!(normalize_subnet(0, &raw).unwrap().cidr, None);

        raw.cidr = Some(String::new());
        assert_eq!(normalize_subnet(0, &raw).unwrap().cidr, None);
    }

    #[test]
    fn test_normalize_missing_route_table() {
        let mut raw = record();
        raw.route_table_id = None;
        let err = normalize_subnet(3, &raw).unwrap_err();
        assert_eq!(
            err,
            VpcContextError::MalformedSubnetRecord {
                index: 3,
                subnet_id: Some("subnet-0a1".to_string()),
                field: "routeTableId",
            }
        );
        assert_eq!(
            err.to_string(),
            "Malformed subnet record #3 (subnet-0a1): missing routeTableId"
        );
    }

    #[test]
    fn test_normalize_missing_id_and_zone() {
        let mut raw = record();
        raw.subnet_id = Some("  ".to_string());
        assert!(matches!(
            normalize_subnet(0, &raw),
            Err(VpcContextError::MalformedSubnetRecord { field: "subnetId", subnet_id: None, .. })
        ));

        let mut raw = record();
        raw.availability_zone = None;
        assert!(matches!(
            normalize_subnet(0, &raw),
            Err(VpcContextError::MalformedSubnetRecord {
                field: "availabilityZone",
                ..
            })
        ));
    }
}
