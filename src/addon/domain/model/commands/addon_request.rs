use serde::{Deserialize, Serialize};

use crate::addon::domain::model::value_objects::addon_property::AddonProperty;

/// Request handed over by the hosting platform. Provision, deprovision and test
/// requests share this shape.
///
/// Fields stay unvalidated here: every failure, including a malformed alias,
/// has to come back as a failed result rather than a construction error.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AddonRequest {
    team_alias: String,
    instance_alias: String,
    properties: Vec<AddonProperty>,
}

impl AddonRequest {
    pub fn new(
        team_alias: impl Into<String>,
        instance_alias: impl Into<String>,
        properties: Vec<AddonProperty>,
    ) -> Self {
        Self {
            team_alias: team_alias.into(),
            instance_alias: instance_alias.into(),
            properties,
        }
    }

    pub fn team_alias(&self) -> &str {
        &self.team_alias
    }

    pub fn instance_alias(&self) -> &str {
        &self.instance_alias
    }

    pub fn properties(&self) -> &[AddonProperty] {
        &self.properties
    }
}
