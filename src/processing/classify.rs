//! Subnet group classification.
//!
//! A subnet's group name always comes from a tag. Its base [`SubnetKind`] is
//! decided by a [`GroupTypePolicy`], and the outpost variant is picked from the
//! subnet's placement.

use crate::config;
use crate::error::{Result, VpcContextError};
use crate::models::{GroupType, RouteCharacteristics, Subnet, SubnetKind, Tags};

/// Decides the base kind of a subnet from its tags and routing.
///
/// Returns a human readable reason when the subnet cannot be classified.
pub trait GroupTypePolicy {
    fn subnet_kind(
        &self,
        tags: &Tags,
        routes: Option<&RouteCharacteristics>,
    ) -> std::result::Result<SubnetKind, String>;
}

/// Honour an explicit subnet type tag, otherwise fall back to routing.
#[derive(Debug, Clone)]
pub struct TagThenRoutes {
    pub type_tag: String,
}

impl Default for TagThenRoutes {
    fn default() -> Self {
        TagThenRoutes {
            type_tag: config::SUBNET_TYPE_TAG.to_string(),
        }
    }
}

impl GroupTypePolicy for TagThenRoutes {
    fn subnet_kind(
        &self,
        tags: &Tags,
        routes: Option<&RouteCharacteristics>,
    ) -> std::result::Result<SubnetKind, String> {
        match tags.get(&self.type_tag) {
            Some(value) => value
                .parse::<SubnetKind>()
                .map_err(|e| format!("tag {}: {e}", self.type_tag)),
            None => RoutesOnly.subnet_kind(tags, routes),
        }
    }
}

/// Classify purely by routing: internet gateway means Public, NAT or transit
/// gateway egress means Private, no egress means Isolated.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutesOnly;

impl GroupTypePolicy for RoutesOnly {
    fn subnet_kind(
        &self,
        _tags: &Tags,
        routes: Option<&RouteCharacteristics>,
    ) -> std::result::Result<SubnetKind, String> {
        let routes = routes.ok_or("no routing information for its route table")?;
        Ok(if routes.internet_gateway {
            SubnetKind::Public
        } else if routes.has_private_egress() {
            SubnetKind::Private
        } else {
            SubnetKind::Isolated
        })
    }
}

/// Everything the classifier looks at for one subnet.
#[derive(Debug, Clone, Copy)]
pub struct SubnetFacts<'a> {
    pub tags: &'a Tags,
    pub routes: Option<&'a RouteCharacteristics>,
    pub outpost: bool,
}

/// A subnet together with its group assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedSubnet {
    pub subnet: Subnet,
    pub group_name: String,
    pub group_type: GroupType,
}

/// Assigns subnets to named, typed groups.
#[derive(Debug, Clone)]
pub struct GroupClassifier<P = TagThenRoutes> {
    name_tag: String,
    policy: P,
}

impl Default for GroupClassifier<TagThenRoutes> {
    fn default() -> Self {
        GroupClassifier::new(config::SUBNET_NAME_TAG, TagThenRoutes::default())
    }
}

impl<P: GroupTypePolicy> GroupClassifier<P> {
    pub fn new(name_tag: impl Into<String>, policy: P) -> Self {
        GroupClassifier {
            name_tag: name_tag.into(),
            policy,
        }
    }

    /// Classify one validated subnet.
    pub fn classify(&self, subnet: Subnet, facts: SubnetFacts<'_>) -> Result<ClassifiedSubnet> {
        let unclassifiable = |reason: String| VpcContextError::UnclassifiableSubnet {
            subnet_id: subnet.subnet_id.clone(),
            reason,
        };

        let group_name = facts
            .tags
            .get(&self.name_tag)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| unclassifiable(format!("missing group name tag {}", self.name_tag)))?
            .clone();

        let kind = self
            .policy
            .subnet_kind(facts.tags, facts.routes)
            .map_err(unclassifiable)?;
        let group_type = GroupType::new(kind, facts.outpost);

        log::trace!(
            "classified {} ({}) as '{group_name}' {group_type}",
            subnet.subnet_id,
            subnet.availability_zone
        );

        Ok(ClassifiedSubnet {
            subnet,
            group_name,
            group_type,
        })
    }
}
