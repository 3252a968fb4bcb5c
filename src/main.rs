use dotenvy::dotenv;
use mysql_addon::{
    addon::{
        build_mysql_addon_service,
        domain::{
            model::commands::addon_request::AddonRequest,
            services::mysql_addon_command_service::MySqlAddonCommandService,
        },
    },
    config::app_config::AppConfig,
};
use tracing::info_span;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let service = build_mysql_addon_service(info_span!("mysql_addon"));

    let request = AddonRequest::new(
        config.team_alias.as_str(),
        config.instance_alias.as_str(),
        config.addon_properties(),
    );
    let result = service.handle_test(request).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("failed to serialize test result")
    );

    if !result.success {
        std::process::exit(1);
    }
}
