use negcycle_apsp::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [max_sessions]
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let config = ServerConfig {
        port: args.get(1).and_then(|p| p.parse().ok()).unwrap_or(defaults.port),
        max_sessions: args
            .get(2)
            .and_then(|m| m.parse().ok())
            .unwrap_or(defaults.max_sessions),
        ..defaults
    };

    println!("Starting shortest path web server...");
    println!("Configuration:");
    println!("   Address: {}", config.addr());
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!("   Max generated nodes: {}", config.max_generated_nodes);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
