use std::{fmt, str::FromStr};

use crate::addon::domain::model::enums::addon_domain_error::AddonDomainError;

/// `Server=<host>;Port=<port>;Uid=<user>;Pwd=<password>;Database=<database>;`
///
/// Values are not quoted, so none of them may contain `;`.
#[derive(Clone, Eq, PartialEq)]
pub struct ConnectionString {
    host: String,
    port: u16,
    user: String,
    password: String,
    database: String,
}

impl ConnectionString {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Server={};Port={};Uid={};Pwd={};Database={};",
            self.host, self.port, self.user, self.password, self.database
        )
    }
}

impl fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionString")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

impl FromStr for ConnectionString {
    type Err = AddonDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut host = None;
        let mut port = None;
        let mut user = None;
        let mut password = None;
        let mut database = None;

        for segment in value.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, raw) = segment.split_once('=').ok_or_else(|| {
                AddonDomainError::ConfigurationError(format!(
                    "connection string segment '{segment}' is not a key=value pair"
                ))
            })?;

            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "server" => &mut host,
                "port" => &mut port,
                "uid" => &mut user,
                "pwd" => &mut password,
                "database" => &mut database,
                _ => continue,
            };
            *slot = Some(raw.to_string());
        }

        let require = |slot: Option<String>, key: &str| {
            slot.ok_or_else(|| {
                AddonDomainError::ConfigurationError(format!(
                    "connection string is missing '{key}'"
                ))
            })
        };

        let raw_port = require(port, "Port")?;
        let port = raw_port.trim().parse::<u16>().map_err(|_| {
            AddonDomainError::ConfigurationError(format!(
                "connection string port '{raw_port}' is not a valid port"
            ))
        })?;

        Ok(Self {
            host: require(host, "Server")?,
            port,
            user: require(user, "Uid")?,
            password: require(password, "Pwd")?,
            database: require(database, "Database")?,
        })
    }
}
