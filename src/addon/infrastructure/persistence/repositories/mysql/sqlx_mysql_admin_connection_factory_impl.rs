use async_trait::async_trait;
use sqlx::{
    ConnectOptions, Connection,
    mysql::{MySqlConnectOptions, MySqlConnection},
};
use tracing::debug;

use crate::addon::{
    domain::model::{
        enums::addon_domain_error::AddonDomainError,
        value_objects::connection_string::ConnectionString,
    },
    infrastructure::persistence::repositories::{
        mysql::sqlx_mysql_schema_administration_repository_impl::SqlxMySqlSchemaAdministrationRepositoryImpl,
        mysql_admin_connection_factory::MySqlAdminConnectionFactory,
        mysql_schema_administration_repository::MySqlSchemaAdministrationRepository,
    },
};

#[derive(Clone, Copy, Debug, Default)]
pub struct SqlxMySqlAdminConnectionFactoryImpl;

impl SqlxMySqlAdminConnectionFactoryImpl {
    pub fn new() -> Self {
        Self
    }

    fn connect_options(connection_string: &ConnectionString) -> MySqlConnectOptions {
        // CREATE USER carries a password literal; keep statements out of the log.
        MySqlConnectOptions::new()
            .host(connection_string.host())
            .port(connection_string.port())
            .username(connection_string.user())
            .password(connection_string.password())
            .database(connection_string.database())
            .disable_statement_logging()
    }
}

#[async_trait]
impl MySqlAdminConnectionFactory for SqlxMySqlAdminConnectionFactoryImpl {
    async fn open(
        &self,
        connection_string: &ConnectionString,
    ) -> Result<Box<dyn MySqlSchemaAdministrationRepository>, AddonDomainError> {
        debug!(
            host = connection_string.host(),
            port = connection_string.port(),
            user = connection_string.user(),
            "opening MySQL admin connection"
        );

        let connection =
            MySqlConnection::connect_with(&Self::connect_options(connection_string))
                .await
                .map_err(|e| AddonDomainError::ConnectionError(e.to_string()))?;

        Ok(Box::new(SqlxMySqlSchemaAdministrationRepositoryImpl::new(
            connection,
        )))
    }
}
