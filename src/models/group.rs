//! Subnet group types.

use super::Subnet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base routing role of a subnet, before outpost placement is considered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubnetKind {
    Public,
    Private,
    Isolated,
}

impl FromStr for SubnetKind {
    type Err = String;

    /// Parses the value of a subnet type tag, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(SubnetKind::Public),
            "private" => Ok(SubnetKind::Private),
            "isolated" => Ok(SubnetKind::Isolated),
            other => Err(format!("unknown subnet type '{other}'")),
        }
    }
}

/// The type of a subnet group.
///
/// Variant order is the order groups are reported in the response.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupType {
    Public,
    Private,
    Isolated,
    PublicOutpost,
    PrivateOutpost,
    IsolatedOutpost,
}

impl GroupType {
    /// All group types, in response order.
    pub const ALL: [GroupType; 6] = [
        GroupType::Public,
        GroupType::Private,
        GroupType::Isolated,
        GroupType::PublicOutpost,
        GroupType::PrivateOutpost,
        GroupType::IsolatedOutpost,
    ];

    /// Combine a base kind with the subnet's placement.
    pub fn new(kind: SubnetKind, outpost: bool) -> Self {
        match (kind, outpost) {
            (SubnetKind::Public, false) => GroupType::Public,
            (SubnetKind::Private, false) => GroupType::Private,
            (SubnetKind::Isolated, false) => GroupType::Isolated,
            (SubnetKind::Public, true) => GroupType::PublicOutpost,
            (SubnetKind::Private, true) => GroupType::PrivateOutpost,
            (SubnetKind::Isolated, true) => GroupType::IsolatedOutpost,
        }
    }

    pub fn kind(self) -> SubnetKind {
        match self {
            GroupType::Public | GroupType::PublicOutpost => SubnetKind::Public,
            GroupType::Private | GroupType::PrivateOutpost => SubnetKind::Private,
            GroupType::Isolated | GroupType::IsolatedOutpost => SubnetKind::Isolated,
        }
    }

    pub fn is_outpost(self) -> bool {
        matches!(
            self,
            GroupType::PublicOutpost | GroupType::PrivateOutpost | GroupType::IsolatedOutpost
        )
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupType::Public => "Public",
            GroupType::Private => "Private",
            GroupType::Isolated => "Isolated",
            GroupType::PublicOutpost => "PublicOutpost",
            GroupType::PrivateOutpost => "PrivateOutpost",
            GroupType::IsolatedOutpost => "IsolatedOutpost",
        };
        f.write_str(name)
    }
}

/// A named, typed group of subnets. Members need not be symmetric across zones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetGroup {
    /// Group name, taken from the subnets' name tag.
    pub name: String,
    /// Type shared by every member.
    #[serde(rename = "type")]
    pub group_type: GroupType,
    /// Members in discovery order.
    pub subnets: Vec<Subnet>,
}

impl SubnetGroup {
    /// Members located in the given availability zone.
    pub fn subnets_in<'a>(&'a self, zone: &'a str) -> impl Iterator<Item = &'a Subnet> + 'a {
        self.subnets
            .iter()
            .filter(move |s| s.availability_zone == zone)
    }
}
