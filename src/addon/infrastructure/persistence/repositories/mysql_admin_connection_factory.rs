use async_trait::async_trait;

use crate::addon::{
    domain::model::{
        enums::addon_domain_error::AddonDomainError,
        value_objects::connection_string::ConnectionString,
    },
    infrastructure::persistence::repositories::mysql_schema_administration_repository::MySqlSchemaAdministrationRepository,
};

#[async_trait]
pub trait MySqlAdminConnectionFactory: Send + Sync {
    /// Opens one connection and hands it out as a schema administration session.
    /// The caller must `close` the session on every path.
    async fn open(
        &self,
        connection_string: &ConnectionString,
    ) -> Result<Box<dyn MySqlSchemaAdministrationRepository>, AddonDomainError>;
}
