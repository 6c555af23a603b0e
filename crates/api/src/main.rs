#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gratitude_observability::init();

    let config = gratitude_infra::AppConfig::from_env()?;
    gratitude_api::server::run(config).await
}
