//! Terminal summary of lookup responses.

use crate::models::{GroupType, Ipv4, SubnetGroup, VpcContextResponse};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Flat arrays of one group type, borrowed from a response.
fn flat_arrays(
    response: &VpcContextResponse,
    group_type: GroupType,
) -> Option<(&[String], &[String], &[String])> {
    let (ids, names, rtbs) = match group_type {
        GroupType::Public => (
            &response.public_subnet_ids,
            &response.public_subnet_names,
            &response.public_subnet_route_table_ids,
        ),
        GroupType::Private => (
            &response.private_subnet_ids,
            &response.private_subnet_names,
            &response.private_subnet_route_table_ids,
        ),
        GroupType::Isolated => (
            &response.isolated_subnet_ids,
            &response.isolated_subnet_names,
            &response.isolated_subnet_route_table_ids,
        ),
        GroupType::PublicOutpost => (
            &response.public_outpost_subnet_ids,
            &response.public_outpost_subnet_names,
            &response.public_outpost_subnet_route_table_ids,
        ),
        GroupType::PrivateOutpost => (
            &response.private_outpost_subnet_ids,
            &response.private_outpost_subnet_names,
            &response.private_outpost_subnet_route_table_ids,
        ),
        GroupType::IsolatedOutpost => (
            &response.isolated_outpost_subnet_ids,
            &response.isolated_outpost_subnet_names,
            &response.isolated_outpost_subnet_route_table_ids,
        ),
    };
    Some((ids.as_deref()?, names.as_deref()?, rtbs.as_deref()?))
}

/// Summary lines for a response: one block per flat group type, one row per
/// zone, then the raw groups when present.
pub fn summary_lines(response: &VpcContextResponse) -> Vec<String> {
    let mut lines = vec![format!(
        "VPC: '{vpc}' {cidr} region={region} owner={owner} zones=[{zones}]",
        vpc = response.vpc_id,
        cidr = response.vpc_cidr_block.as_deref().unwrap_or("None"),
        region = response.region.as_deref().unwrap_or("None"),
        owner = response.owner_account_id.as_deref().unwrap_or("None"),
        zones = response.availability_zones.join(", ")
    )];

    let zones = &response.availability_zones;
    for group_type in GroupType::ALL {
        let Some((ids, names, rtbs)) = flat_arrays(response, group_type) else {
            continue;
        };
        lines.push(format!("  {group_type}: [{}]", names.join(", ")));
        let g = names.len();
        for (z, zone) in zones.iter().enumerate() {
            let row: Vec<String> = (0..g)
                .filter_map(|j| {
                    let k = z * g + j;
                    Some(format!("{}/{}", ids.get(k)?, rtbs.get(k)?))
                })
                .collect();
            lines.push(format!("    {} {}", format_field(zone, 14), row.join(" ")));
        }
    }

    if let Some(groups) = &response.subnet_groups {
        lines.push(format!("  subnetGroups: {}", groups.len()));
        for group in groups {
            lines.extend(group_lines(group));
        }
    }
    lines
}

fn group_lines(group: &SubnetGroup) -> Vec<String> {
    let mut lines = vec![format!(
        "    {} {} ({} subnet(s))",
        format_field(&group.name, 14),
        group.group_type,
        group.subnets.len()
    )];
    for s in &group.subnets {
        let hosts = s
            .cidr
            .as_deref()
            .and_then(|cidr| Ipv4::new(cidr).ok())
            .and_then(|ip| ip.usable_hosts().ok())
            .map(|h| format!("{h}_hosts"))
            .unwrap_or_else(|| "None".to_string());
        lines.push(format!(
            "      {},{},{},{},{}",
            format_field(&s.subnet_id, 26),
            format_field(&s.availability_zone, 14),
            format_field(s.cidr.as_deref().unwrap_or("None"), 20),
            format_field(hosts, 14),
            format_field(&s.route_table_id, 24)
        ));
    }
    lines
}

/// Print the summary of a response to stdout.
pub fn print_summary(response: &VpcContextResponse) {
    for (i, line) in summary_lines(response).iter().enumerate() {
        if i == 0 {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
    if response.subnet_groups.is_some() {
        println!(
            "#{}# asymmetric subnets requested, flat arrays may be partial",
            "NOTE".on_red()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_summary_rows_follow_zones() {
        let response = VpcContextResponse {
            vpc_id: "vpc-1".to_string(),
            availability_zones: vec!["a".to_string(), "b".to_string()],
            public_subnet_ids: Some(vec!["s1".into(), "s2".into(), "s3".into(), "s4".into()]),
            public_subnet_names: Some(vec!["g1".into(), "g2".into()]),
            public_subnet_route_table_ids: Some(vec![
                "r1".into(),
                "r2".into(),
                "r3".into(),
                "r4".into(),
            ]),
            ..Default::default()
        };
        let lines = summary_lines(&response);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "  Public: [g1, g2]");
        assert!(lines[2].ends_with("s1/r1 s2/r2"));
        assert!(lines[3].ends_with("s3/r3 s4/r4"));
    }

    #[test]
    fn test_summary_groups_show_hosts() {
        let response = VpcContextResponse {
            vpc_id: "vpc-1".to_string(),
            subnet_groups: Some(vec![SubnetGroup {
                name: "Db".to_string(),
                group_type: GroupType::Isolated,
                subnets: vec![Subnet {
                    subnet_id: "subnet-1".to_string(),
                    availability_zone: "a".to_string(),
                    route_table_id: "rtb-1".to_string(),
                    cidr: Some("10.0.0.0/24".to_string()),
                }],
            }]),
            ..Default::default()
        };
        let lines = summary_lines(&response);
        assert_eq!(lines[1], "  subnetGroups: 1");
        assert!(lines[2].contains("Isolated (1 subnet(s))"));
        assert!(lines[3].contains("\"251_hosts\""));
    }
}
