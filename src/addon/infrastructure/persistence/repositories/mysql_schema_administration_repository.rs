use async_trait::async_trait;

use crate::addon::domain::model::{
    enums::addon_domain_error::AddonDomainError,
    value_objects::generated_password::GeneratedPassword,
};

/// Schema statements executed over a single open admin connection.
#[async_trait]
pub trait MySqlSchemaAdministrationRepository: Send {
    async fn create_user(
        &mut self,
        database_user: &str,
        password: &GeneratedPassword,
    ) -> Result<(), AddonDomainError>;

    async fn create_database(&mut self, database_name: &str) -> Result<(), AddonDomainError>;

    async fn grant_all_privileges(
        &mut self,
        database_name: &str,
        database_user: &str,
    ) -> Result<(), AddonDomainError>;

    /// No-op when the database does not exist.
    async fn drop_database(&mut self, database_name: &str) -> Result<(), AddonDomainError>;

    /// No-op when the user does not exist.
    async fn drop_user(&mut self, database_user: &str) -> Result<(), AddonDomainError>;

    async fn close(self: Box<Self>) -> Result<(), AddonDomainError>;
}
