use crate::addon::domain::model::value_objects::tenant_identity::TenantIdentity;

/// Database name and account derived from a tenant identity.
///
/// Derivation is pure: the same identity always yields the same names.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DerivedDatabase {
    database_name: String,
    login_name: String,
    database_user: String,
}

impl DerivedDatabase {
    pub fn derive(tenant: &TenantIdentity) -> Self {
        let team_alias = tenant.team_alias().value();
        let instance_alias = tenant.instance_alias().value();

        let database_name = format!("{team_alias}__{instance_alias}");
        let login_name = format!("DB_{team_alias}__{instance_alias}");
        let database_user = format!("'{login_name}'@'%'");

        Self {
            database_name,
            login_name,
            database_user,
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Quoted account identifier with wildcard host, as used in DDL.
    pub fn database_user(&self) -> &str {
        &self.database_user
    }

    /// Bare user name a client authenticates with.
    pub fn login_name(&self) -> &str {
        &self.login_name
    }
}
