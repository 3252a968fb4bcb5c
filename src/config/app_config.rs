use crate::addon::domain::model::value_objects::{
    addon_property::AddonProperty,
    admin_credentials::{
        MYSQL_ADMIN_DATABASE_KEY, MYSQL_ADMIN_PASSWORD_KEY, MYSQL_ADMIN_USER_KEY,
        MYSQL_SERVER_KEY, MYSQL_SERVER_PORT_KEY,
    },
};

/// Settings for the self-check binary. The port stays a string so that the
/// add-on's own property resolver is what validates it.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub mysql_server: String,
    pub mysql_server_port: String,
    pub mysql_admin_database: String,
    pub mysql_admin_user: String,
    pub mysql_admin_password: String,
    pub team_alias: String,
    pub instance_alias: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            mysql_server: std::env::var("MYSQL_SERVER").unwrap_or_else(|_| "127.0.0.1".to_string()),
            mysql_server_port: std::env::var("MYSQL_SERVER_PORT")
                .unwrap_or_else(|_| "3306".to_string()),
            mysql_admin_database: std::env::var("MYSQL_ADMIN_DATABASE")
                .unwrap_or_else(|_| "mysql".to_string()),
            mysql_admin_user: std::env::var("MYSQL_ADMIN_USER")
                .unwrap_or_else(|_| "root".to_string()),
            mysql_admin_password: std::env::var("MYSQL_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            team_alias: std::env::var("ADDON_TEAM_ALIAS")
                .unwrap_or_else(|_| "selfcheck".to_string()),
            instance_alias: std::env::var("ADDON_INSTANCE_ALIAS")
                .unwrap_or_else(|_| "probe".to_string()),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn addon_properties(&self) -> Vec<AddonProperty> {
        vec![
            AddonProperty::new(MYSQL_SERVER_KEY, self.mysql_server.as_str()),
            AddonProperty::new(MYSQL_SERVER_PORT_KEY, self.mysql_server_port.as_str()),
            AddonProperty::new(MYSQL_ADMIN_DATABASE_KEY, self.mysql_admin_database.as_str()),
            AddonProperty::new(MYSQL_ADMIN_USER_KEY, self.mysql_admin_user.as_str()),
            AddonProperty::new(MYSQL_ADMIN_PASSWORD_KEY, self.mysql_admin_password.as_str()),
        ]
    }
}
