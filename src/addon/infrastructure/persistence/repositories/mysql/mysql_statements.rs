//! DDL templates. Identifiers are substituted unquoted; they come from
//! `DerivedDatabase`, whose aliases are restricted to `[A-Za-z0-9_]`.

use crate::addon::domain::model::value_objects::generated_password::GeneratedPassword;

pub fn create_user(database_user: &str, password: &GeneratedPassword) -> String {
    format!(
        "CREATE USER {database_user} IDENTIFIED BY '{}';",
        escape_string_literal(password.value())
    )
}

pub fn create_database(database_name: &str) -> String {
    format!("CREATE DATABASE {database_name};")
}

pub fn grant_all_privileges(database_name: &str, database_user: &str) -> String {
    format!("GRANT ALL ON {database_name}.* TO {database_user};")
}

pub fn drop_database(database_name: &str) -> String {
    format!("DROP DATABASE IF EXISTS {database_name};")
}

pub fn drop_user(database_user: &str) -> String {
    format!("DROP USER IF EXISTS {database_user};")
}

fn escape_string_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "''")
}
