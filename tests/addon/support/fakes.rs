use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use mysql_addon::addon::{
    domain::model::{
        enums::addon_domain_error::AddonDomainError,
        value_objects::{
            connection_string::ConnectionString, generated_password::GeneratedPassword,
        },
    },
    infrastructure::persistence::repositories::{
        mysql_admin_connection_factory::MySqlAdminConnectionFactory,
        mysql_schema_administration_repository::MySqlSchemaAdministrationRepository,
    },
};

#[derive(Default)]
struct FakeMySqlServerState {
    users: HashSet<String>,
    databases: HashSet<String>,
    grants: HashSet<(String, String)>,
    executed: Vec<String>,
    passwords: Vec<String>,
    opened_with: Vec<ConnectionString>,
    open_calls: usize,
    close_calls: usize,
    failing_operation: Option<String>,
    refuse_connections: bool,
}

/// In-memory stand-in for a MySQL server, shared between the connection
/// factory and every session it opens.
#[derive(Clone, Default)]
pub struct FakeMySqlServer {
    state: Arc<Mutex<FakeMySqlServerState>>,
}

impl FakeMySqlServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing_user(self, user: &str) -> Self {
        self.state
            .lock()
            .expect("mutex poisoned")
            .users
            .insert(user.to_string());
        self
    }

    pub fn with_existing_database(self, database: &str) -> Self {
        self.state
            .lock()
            .expect("mutex poisoned")
            .databases
            .insert(database.to_string());
        self
    }

    pub fn failing_on(self, operation: &str) -> Self {
        self.state.lock().expect("mutex poisoned").failing_operation = Some(operation.to_string());
        self
    }

    pub fn refusing_connections(self) -> Self {
        self.state.lock().expect("mutex poisoned").refuse_connections = true;
        self
    }

    pub fn has_user(&self, user: &str) -> bool {
        self.state.lock().expect("mutex poisoned").users.contains(user)
    }

    pub fn has_database(&self, database: &str) -> bool {
        self.state
            .lock()
            .expect("mutex poisoned")
            .databases
            .contains(database)
    }

    pub fn has_grant(&self, database: &str, user: &str) -> bool {
        self.state
            .lock()
            .expect("mutex poisoned")
            .grants
            .contains(&(database.to_string(), user.to_string()))
    }

    pub fn executed(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").executed.clone()
    }

    pub fn passwords(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").passwords.clone()
    }

    pub fn opened_with(&self) -> Vec<ConnectionString> {
        self.state.lock().expect("mutex poisoned").opened_with.clone()
    }

    /// `(open_calls, close_calls)`
    pub fn connection_stats(&self) -> (usize, usize) {
        let state = self.state.lock().expect("mutex poisoned");
        (state.open_calls, state.close_calls)
    }

    pub fn connection_factory(&self) -> Arc<FakeMySqlAdminConnectionFactory> {
        Arc::new(FakeMySqlAdminConnectionFactory {
            server: self.clone(),
        })
    }

    fn execute(
        &self,
        operation: &str,
        apply: impl FnOnce(&mut FakeMySqlServerState) -> Result<(), String>,
    ) -> Result<(), AddonDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.executed.push(operation.to_string());

        if state.failing_operation.as_deref() == Some(operation) {
            return Err(AddonDomainError::ExecutionError(format!(
                "{operation} failed"
            )));
        }

        apply(&mut state).map_err(AddonDomainError::ExecutionError)
    }
}

pub struct FakeMySqlAdminConnectionFactory {
    server: FakeMySqlServer,
}

#[async_trait]
impl MySqlAdminConnectionFactory for FakeMySqlAdminConnectionFactory {
    async fn open(
        &self,
        connection_string: &ConnectionString,
    ) -> Result<Box<dyn MySqlSchemaAdministrationRepository>, AddonDomainError> {
        let mut state = self.server.state.lock().expect("mutex poisoned");
        state.open_calls += 1;
        state.opened_with.push(connection_string.clone());

        if state.refuse_connections {
            return Err(AddonDomainError::ConnectionError(
                "Unable to connect to any of the specified MySQL hosts.".to_string(),
            ));
        }

        Ok(Box::new(FakeSchemaSession {
            server: self.server.clone(),
        }))
    }
}

struct FakeSchemaSession {
    server: FakeMySqlServer,
}

#[async_trait]
impl MySqlSchemaAdministrationRepository for FakeSchemaSession {
    async fn create_user(
        &mut self,
        database_user: &str,
        password: &GeneratedPassword,
    ) -> Result<(), AddonDomainError> {
        self.server.execute("create_user", |state| {
            if !state.users.insert(database_user.to_string()) {
                return Err(format!("Operation CREATE USER failed for {database_user}"));
            }
            state.passwords.push(password.value().to_string());
            Ok(())
        })
    }

    async fn create_database(&mut self, database_name: &str) -> Result<(), AddonDomainError> {
        self.server.execute("create_database", |state| {
            if !state.databases.insert(database_name.to_string()) {
                return Err(format!(
                    "Can't create database '{database_name}'; database exists"
                ));
            }
            Ok(())
        })
    }

    async fn grant_all_privileges(
        &mut self,
        database_name: &str,
        database_user: &str,
    ) -> Result<(), AddonDomainError> {
        self.server.execute("grant_all_privileges", |state| {
            if !state.users.contains(database_user) {
                return Err(format!(
                    "You are not allowed to create a user with GRANT: {database_user}"
                ));
            }
            state
                .grants
                .insert((database_name.to_string(), database_user.to_string()));
            Ok(())
        })
    }

    async fn drop_database(&mut self, database_name: &str) -> Result<(), AddonDomainError> {
        self.server.execute("drop_database", |state| {
            state.databases.remove(database_name);
            state.grants.retain(|(database, _)| database != database_name);
            Ok(())
        })
    }

    async fn drop_user(&mut self, database_user: &str) -> Result<(), AddonDomainError> {
        self.server.execute("drop_user", |state| {
            state.users.remove(database_user);
            state.grants.retain(|(_, user)| user != database_user);
            Ok(())
        })
    }

    async fn close(self: Box<Self>) -> Result<(), AddonDomainError> {
        self.server.state.lock().expect("mutex poisoned").close_calls += 1;
        Ok(())
    }
}
