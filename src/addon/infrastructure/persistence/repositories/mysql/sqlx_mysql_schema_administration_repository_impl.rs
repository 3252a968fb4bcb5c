use async_trait::async_trait;
use sqlx::{Connection, mysql::MySqlConnection};
use tracing::debug;

use crate::addon::{
    domain::model::{
        enums::addon_domain_error::AddonDomainError,
        value_objects::generated_password::GeneratedPassword,
    },
    infrastructure::persistence::repositories::{
        mysql::mysql_statements,
        mysql_schema_administration_repository::MySqlSchemaAdministrationRepository,
    },
};

pub struct SqlxMySqlSchemaAdministrationRepositoryImpl {
    connection: MySqlConnection,
}

impl SqlxMySqlSchemaAdministrationRepositoryImpl {
    pub fn new(connection: MySqlConnection) -> Self {
        Self { connection }
    }

    async fn run_statement(
        &mut self,
        operation: &'static str,
        statement: &str,
    ) -> Result<(), AddonDomainError> {
        debug!(operation, "executing schema statement");

        let connection: &mut MySqlConnection = &mut self.connection;
        sqlx::Executor::execute(connection, sqlx::raw_sql(statement))
            .await
            .map_err(|e| AddonDomainError::ExecutionError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl MySqlSchemaAdministrationRepository for SqlxMySqlSchemaAdministrationRepositoryImpl {
    async fn create_user(
        &mut self,
        database_user: &str,
        password: &GeneratedPassword,
    ) -> Result<(), AddonDomainError> {
        self.run_statement(
            "create_user",
            &mysql_statements::create_user(database_user, password),
        )
        .await
    }

    async fn create_database(&mut self, database_name: &str) -> Result<(), AddonDomainError> {
        self.run_statement(
            "create_database",
            &mysql_statements::create_database(database_name),
        )
        .await
    }

    async fn grant_all_privileges(
        &mut self,
        database_name: &str,
        database_user: &str,
    ) -> Result<(), AddonDomainError> {
        self.run_statement(
            "grant_all_privileges",
            &mysql_statements::grant_all_privileges(database_name, database_user),
        )
        .await
    }

    async fn drop_database(&mut self, database_name: &str) -> Result<(), AddonDomainError> {
        self.run_statement(
            "drop_database",
            &mysql_statements::drop_database(database_name),
        )
        .await
    }

    async fn drop_user(&mut self, database_user: &str) -> Result<(), AddonDomainError> {
        self.run_statement("drop_user", &mysql_statements::drop_user(database_user))
            .await
    }

    async fn close(self: Box<Self>) -> Result<(), AddonDomainError> {
        let this = *self;
        this.connection
            .close()
            .await
            .map_err(|e| AddonDomainError::ConnectionError(e.to_string()))
    }
}
