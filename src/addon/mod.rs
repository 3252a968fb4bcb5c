use std::sync::Arc;

use tracing::Span;

use crate::addon::{
    application::command_services::mysql_addon_command_service_impl::MySqlAddonCommandServiceImpl,
    domain::services::mysql_addon_command_service::MySqlAddonCommandService,
    infrastructure::persistence::repositories::mysql::sqlx_mysql_admin_connection_factory_impl::SqlxMySqlAdminConnectionFactoryImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;

pub fn build_mysql_addon_service(logger: Span) -> Arc<dyn MySqlAddonCommandService> {
    let connection_factory = Arc::new(SqlxMySqlAdminConnectionFactoryImpl::new());

    Arc::new(MySqlAddonCommandServiceImpl::new(connection_factory, logger))
}
