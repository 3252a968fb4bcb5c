pub mod addon_property;
pub mod admin_credentials;
pub mod connection_string;
pub mod derived_database;
pub mod generated_password;
pub mod tenant_alias;
pub mod tenant_identity;
