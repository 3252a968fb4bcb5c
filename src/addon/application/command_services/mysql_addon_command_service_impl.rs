use std::sync::Arc;

use async_trait::async_trait;
use tracing::{Instrument, Span, debug, error, info, info_span, warn};

use crate::addon::{
    domain::{
        model::{
            commands::addon_request::AddonRequest,
            enums::{addon_domain_error::AddonDomainError, addon_operation::AddonOperation},
            results::{
                operation_result::OperationResult, provision_addon_result::ProvisionAddonResult,
            },
            value_objects::{
                admin_credentials::AdminCredentials, connection_string::ConnectionString,
                derived_database::DerivedDatabase, generated_password::GeneratedPassword,
                tenant_identity::TenantIdentity,
            },
        },
        services::mysql_addon_command_service::MySqlAddonCommandService,
    },
    infrastructure::persistence::repositories::{
        mysql_admin_connection_factory::MySqlAdminConnectionFactory,
        mysql_schema_administration_repository::MySqlSchemaAdministrationRepository,
    },
};

pub struct MySqlAddonCommandServiceImpl {
    connection_factory: Arc<dyn MySqlAdminConnectionFactory>,
    logger: Span,
}

/// Resources this request created and has not dropped again.
#[derive(Default)]
struct CreatedResources {
    user: bool,
    database: bool,
}

impl MySqlAddonCommandServiceImpl {
    /// `logger` is the parent span for every request handled by this service.
    pub fn new(connection_factory: Arc<dyn MySqlAdminConnectionFactory>, logger: Span) -> Self {
        Self {
            connection_factory,
            logger,
        }
    }

    fn request_span(&self, operation: AddonOperation, request: &AddonRequest) -> Span {
        let team_alias = request.team_alias();
        let instance_alias = request.instance_alias();

        match operation {
            AddonOperation::Provision => info_span!(
                parent: &self.logger,
                "mysql_addon.provision",
                team_alias,
                instance_alias
            ),
            AddonOperation::Deprovision => info_span!(
                parent: &self.logger,
                "mysql_addon.deprovision",
                team_alias,
                instance_alias
            ),
            AddonOperation::Test => info_span!(
                parent: &self.logger,
                "mysql_addon.test",
                team_alias,
                instance_alias
            ),
        }
    }

    async fn provision(&self, request: &AddonRequest) -> Result<ConnectionString, AddonDomainError> {
        let derived = derive_database(request)?;
        let password = GeneratedPassword::generate();
        let credentials = AdminCredentials::resolve(request.properties())?;

        info!(database = derived.database_name(), "creating MySQL database");

        let mut session = self
            .connection_factory
            .open(&credentials.connection_string())
            .await?;

        let mut created = CreatedResources::default();
        let outcome =
            create_database_stack(session.as_mut(), &derived, &password, &mut created).await;
        if outcome.is_err() {
            roll_back(session.as_mut(), &derived, &created).await;
        }
        close_session(session).await;
        outcome?;

        info!(
            database = derived.database_name(),
            "successfully created MySQL database"
        );

        Ok(ConnectionString::new(
            credentials.host(),
            credentials.port(),
            derived.login_name(),
            password.value(),
            derived.database_name(),
        ))
    }

    async fn deprovision(&self, request: &AddonRequest) -> Result<(), AddonDomainError> {
        let derived = derive_database(request)?;
        let credentials = AdminCredentials::resolve(request.properties())?;

        info!(database = derived.database_name(), "removing MySQL database");

        let mut session = self
            .connection_factory
            .open(&credentials.connection_string())
            .await?;

        let outcome = drop_database_stack(session.as_mut(), &derived).await;
        close_session(session).await;
        outcome?;

        info!(
            database = derived.database_name(),
            "successfully removed MySQL database"
        );

        Ok(())
    }

    async fn test(&self, request: &AddonRequest) -> Result<(), AddonDomainError> {
        let derived = derive_database(request)?;
        let password = GeneratedPassword::generate();
        let credentials = AdminCredentials::resolve(request.properties())?;

        info!(
            database = derived.database_name(),
            "creating and removing MySQL database"
        );

        let mut session = self
            .connection_factory
            .open(&credentials.connection_string())
            .await?;

        let mut created = CreatedResources::default();
        let outcome = async {
            create_database_stack(session.as_mut(), &derived, &password, &mut created).await?;

            session.drop_database(derived.database_name()).await?;
            created.database = false;

            session.drop_user(derived.database_user()).await?;
            created.user = false;

            Ok::<(), AddonDomainError>(())
        }
        .await;
        if outcome.is_err() {
            roll_back(session.as_mut(), &derived, &created).await;
        }
        close_session(session).await;
        outcome?;

        info!(
            database = derived.database_name(),
            "successfully created and removed MySQL database"
        );

        Ok(())
    }
}

#[async_trait]
impl MySqlAddonCommandService for MySqlAddonCommandServiceImpl {
    async fn handle_provision(&self, request: AddonRequest) -> ProvisionAddonResult {
        let operation = AddonOperation::Provision;

        async {
            match self.provision(&request).await {
                Ok(connection_string) => ProvisionAddonResult::succeeded(
                    operation.success_message(),
                    connection_string.to_string(),
                ),
                Err(error) => {
                    log_failure(operation, &error);
                    ProvisionAddonResult::failed(error.to_string())
                }
            }
        }
        .instrument(self.request_span(operation, &request))
        .await
    }

    async fn handle_deprovision(&self, request: AddonRequest) -> OperationResult {
        let operation = AddonOperation::Deprovision;

        async {
            match self.deprovision(&request).await {
                Ok(()) => OperationResult::succeeded(operation.success_message()),
                Err(error) => {
                    log_failure(operation, &error);
                    OperationResult::failed(error.to_string())
                }
            }
        }
        .instrument(self.request_span(operation, &request))
        .await
    }

    async fn handle_test(&self, request: AddonRequest) -> OperationResult {
        let operation = AddonOperation::Test;

        async {
            match self.test(&request).await {
                Ok(()) => OperationResult::succeeded(operation.success_message()),
                Err(error) => {
                    log_failure(operation, &error);
                    OperationResult::failed(error.to_string())
                }
            }
        }
        .instrument(self.request_span(operation, &request))
        .await
    }
}

fn derive_database(request: &AddonRequest) -> Result<DerivedDatabase, AddonDomainError> {
    let tenant = TenantIdentity::new(
        request.team_alias().to_string(),
        request.instance_alias().to_string(),
    )?;

    Ok(DerivedDatabase::derive(&tenant))
}

async fn create_database_stack(
    session: &mut dyn MySqlSchemaAdministrationRepository,
    derived: &DerivedDatabase,
    password: &GeneratedPassword,
    created: &mut CreatedResources,
) -> Result<(), AddonDomainError> {
    session
        .create_user(derived.database_user(), password)
        .await?;
    created.user = true;

    session.create_database(derived.database_name()).await?;
    created.database = true;

    session
        .grant_all_privileges(derived.database_name(), derived.database_user())
        .await
}

async fn drop_database_stack(
    session: &mut dyn MySqlSchemaAdministrationRepository,
    derived: &DerivedDatabase,
) -> Result<(), AddonDomainError> {
    session.drop_database(derived.database_name()).await?;
    session.drop_user(derived.database_user()).await
}

/// Best-effort teardown of what this request created; anything that existed
/// before the request is left alone.
async fn roll_back(
    session: &mut dyn MySqlSchemaAdministrationRepository,
    derived: &DerivedDatabase,
    created: &CreatedResources,
) {
    if created.database {
        match session.drop_database(derived.database_name()).await {
            Ok(()) => info!(
                database = derived.database_name(),
                "rolled back MySQL database"
            ),
            Err(error) => warn!(
                database = derived.database_name(),
                error = %error,
                "failed to roll back MySQL database"
            ),
        }
    }

    if created.user {
        match session.drop_user(derived.database_user()).await {
            Ok(()) => info!(user = derived.database_user(), "rolled back MySQL user"),
            Err(error) => warn!(
                user = derived.database_user(),
                error = %error,
                "failed to roll back MySQL user"
            ),
        }
    }
}

async fn close_session(session: Box<dyn MySqlSchemaAdministrationRepository>) {
    if let Err(error) = session.close().await {
        warn!(error = %error, "failed to close MySQL admin connection");
    }
}

fn log_failure(operation: AddonOperation, error: &AddonDomainError) {
    error!(
        error = %error,
        "failed to complete MySQL add-on {}",
        operation.as_str()
    );
    debug!(error = ?error, "MySQL add-on failure detail");
}
