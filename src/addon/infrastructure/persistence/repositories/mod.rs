pub mod mysql;
pub mod mysql_admin_connection_factory;
pub mod mysql_schema_administration_repository;
