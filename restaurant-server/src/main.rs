use restaurant_server::{Config, Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    print_banner();
    tracing::info!("Restaurant server starting...");

    // 2. 加载配置
    let config = Config::from_env()?;
    tracing::info!(
        environment = %config.environment,
        http_port = config.http_port,
        in_memory = config.database_in_memory,
        "Configuration loaded"
    );

    if config.is_production() && config.database_in_memory {
        tracing::warn!("DATABASE_IN_MEMORY is set in production, data will not persist");
    }

    // 3. 启动 HTTP 服务器
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
