use crate::addon::domain::model::{
    enums::addon_domain_error::AddonDomainError, value_objects::tenant_alias::TenantAlias,
};

pub const MAX_DATABASE_NAME_LENGTH: usize = 64;
pub const MAX_USER_NAME_LENGTH: usize = 32;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TenantIdentity {
    team_alias: TenantAlias,
    instance_alias: TenantAlias,
}

impl TenantIdentity {
    pub fn new(team_alias: String, instance_alias: String) -> Result<Self, AddonDomainError> {
        let team_alias = TenantAlias::new(team_alias)?;
        let instance_alias = TenantAlias::new(instance_alias)?;

        // "<team>__<instance>" has to fit a MySQL identifier.
        let database_name_length = team_alias.value().len() + 2 + instance_alias.value().len();
        if database_name_length > MAX_DATABASE_NAME_LENGTH {
            return Err(AddonDomainError::InvalidTenantIdentity(format!(
                "database name for '{}' and '{}' would be {database_name_length} characters; \
                 at most {MAX_DATABASE_NAME_LENGTH} are allowed",
                team_alias.value(),
                instance_alias.value()
            )));
        }

        // "DB_<team>__<instance>" has to fit a MySQL user name.
        let user_name_length = 3 + database_name_length;
        if user_name_length > MAX_USER_NAME_LENGTH {
            return Err(AddonDomainError::InvalidTenantIdentity(format!(
                "user name for '{}' and '{}' would be {user_name_length} characters; \
                 at most {MAX_USER_NAME_LENGTH} are allowed",
                team_alias.value(),
                instance_alias.value()
            )));
        }

        Ok(Self {
            team_alias,
            instance_alias,
        })
    }

    pub fn team_alias(&self) -> &TenantAlias {
        &self.team_alias
    }

    pub fn instance_alias(&self) -> &TenantAlias {
        &self.instance_alias
    }
}
