pub mod mysql_statements;
pub mod sqlx_mysql_admin_connection_factory_impl;
pub mod sqlx_mysql_schema_administration_repository_impl;
