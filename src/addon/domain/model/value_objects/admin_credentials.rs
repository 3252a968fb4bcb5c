use std::fmt;

use crate::addon::domain::model::{
    enums::addon_domain_error::AddonDomainError,
    value_objects::{addon_property::AddonProperty, connection_string::ConnectionString},
};

pub const MYSQL_SERVER_KEY: &str = "mysqlServer";
pub const MYSQL_SERVER_PORT_KEY: &str = "mysqlServerPort";
pub const MYSQL_ADMIN_DATABASE_KEY: &str = "mysqlAdminDatabase";
pub const MYSQL_ADMIN_USER_KEY: &str = "mysqlAdminUser";
pub const MYSQL_ADMIN_PASSWORD_KEY: &str = "mysqlAdminPassword";

/// Platform-level account used to run provisioning statements. Lives for one request.
#[derive(Clone, Eq, PartialEq)]
pub struct AdminCredentials {
    host: String,
    port: u16,
    admin_user: String,
    admin_password: String,
    admin_database: String,
}

impl AdminCredentials {
    /// Builds credentials from the request's property bag.
    ///
    /// Keys match exactly and the first occurrence of a key wins; unknown keys are
    /// ignored. The admin password may be empty, every other value must be non-blank.
    pub fn resolve(properties: &[AddonProperty]) -> Result<Self, AddonDomainError> {
        let host = required_non_blank(properties, MYSQL_SERVER_KEY)?;
        let raw_port = required_non_blank(properties, MYSQL_SERVER_PORT_KEY)?;
        let admin_database = required_non_blank(properties, MYSQL_ADMIN_DATABASE_KEY)?;
        let admin_user = required_non_blank(properties, MYSQL_ADMIN_USER_KEY)?;
        let admin_password = required(properties, MYSQL_ADMIN_PASSWORD_KEY)?;

        let port = raw_port.trim().parse::<u16>().map_err(|_| {
            AddonDomainError::ConfigurationError(format!(
                "property '{MYSQL_SERVER_PORT_KEY}' is not a valid port: '{raw_port}'"
            ))
        })?;

        Ok(Self {
            host: host.to_string(),
            port,
            admin_user: admin_user.to_string(),
            admin_password: admin_password.to_string(),
            admin_database: admin_database.to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn admin_user(&self) -> &str {
        &self.admin_user
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn admin_database(&self) -> &str {
        &self.admin_database
    }

    pub fn connection_string(&self) -> ConnectionString {
        ConnectionString::new(
            self.host.as_str(),
            self.port,
            self.admin_user.as_str(),
            self.admin_password.as_str(),
            self.admin_database.as_str(),
        )
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("admin_user", &self.admin_user)
            .field("admin_password", &"***")
            .field("admin_database", &self.admin_database)
            .finish()
    }
}

fn required<'a>(properties: &'a [AddonProperty], key: &str) -> Result<&'a str, AddonDomainError> {
    properties
        .iter()
        .find(|property| property.key == key)
        .map(|property| property.value.as_str())
        .ok_or_else(|| {
            AddonDomainError::ConfigurationError(format!("missing required property '{key}'"))
        })
}

fn required_non_blank<'a>(
    properties: &'a [AddonProperty],
    key: &str,
) -> Result<&'a str, AddonDomainError> {
    let value = required(properties, key)?;

    if value.trim().is_empty() {
        return Err(AddonDomainError::ConfigurationError(format!(
            "property '{key}' must not be blank"
        )));
    }

    Ok(value)
}
