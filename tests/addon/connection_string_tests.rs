use mysql_addon::addon::domain::model::{
    enums::addon_domain_error::AddonDomainError,
    value_objects::connection_string::ConnectionString,
};

#[test]
fn display_renders_the_connection_string_template() {
    let connection_string =
        ConnectionString::new("db.local", 3307, "DB_acme__prod1", "abc123", "acme__prod1");

    assert_eq!(
        connection_string.to_string(),
        "Server=db.local;Port=3307;Uid=DB_acme__prod1;Pwd=abc123;Database=acme__prod1;"
    );
}

#[test]
fn parse_reads_the_rendered_form() {
    let parsed: ConnectionString =
        "Server=db.local;Port=3307;Uid=DB_acme__prod1;Pwd=abc123;Database=acme__prod1;"
            .parse()
            .expect("valid connection string");

    assert_eq!(parsed.host(), "db.local");
    assert_eq!(parsed.port(), 3307);
    assert_eq!(parsed.user(), "DB_acme__prod1");
    assert_eq!(parsed.password(), "abc123");
    assert_eq!(parsed.database(), "acme__prod1");
}

#[test]
fn parse_ignores_key_case_and_unknown_keys() {
    let parsed: ConnectionString =
        "server=db.local; port=3306; uid=root; pwd=; database=mysql; SslMode=Required"
            .parse()
            .expect("valid connection string");

    assert_eq!(parsed.host(), "db.local");
    assert_eq!(parsed.password(), "");
    assert_eq!(parsed.database(), "mysql");
}

#[test]
fn parse_reports_missing_keys_and_bad_ports() {
    let missing = "Server=db.local;Port=3306;Uid=root;Database=mysql;".parse::<ConnectionString>();
    assert!(matches!(
        missing,
        Err(AddonDomainError::ConfigurationError(message)) if message.contains("Pwd")
    ));

    let bad_port = "Server=db.local;Port=abc;Uid=root;Pwd=x;Database=mysql;"
        .parse::<ConnectionString>();
    assert!(matches!(
        bad_port,
        Err(AddonDomainError::ConfigurationError(message)) if message.contains("abc")
    ));

    let malformed = "Server=db.local;Port".parse::<ConnectionString>();
    assert!(matches!(
        malformed,
        Err(AddonDomainError::ConfigurationError(_))
    ));
}

#[test]
fn debug_output_redacts_the_password() {
    let connection_string =
        ConnectionString::new("db.local", 3306, "root", "hunter2", "mysql");

    assert!(!format!("{connection_string:?}").contains("hunter2"));
}
