//! Admin server example with a few internal subscribers
//!
//! Run with: cargo run --example admin_server [BIND_ADDR]
//!
//! Examples:
//!   cargo run --example admin_server                    # binds to 0.0.0.0:8080
//!   cargo run --example admin_server localhost          # binds to 127.0.0.1:8080
//!   cargo run --example admin_server 127.0.0.1:9090     # binds to 127.0.0.1:9090
//!
//! Then open http://localhost:8080/pubsub, or:
//!   curl 'http://localhost:8080/pubsub?topic=CONFIG_REFRESH&message=reload'

use std::net::SocketAddr;

use notify_bus::admin::{AdminConfig, AdminServer};
use notify_bus::registry::{init_global, subscriber_fn, RegistryConfig, SubscriberError, Topic};

/// Parse bind address from command line argument.
///
/// Accepts formats:
/// - "localhost" -> 127.0.0.1:8080
/// - "localhost:9090" -> 127.0.0.1:9090
/// - "127.0.0.1" -> 127.0.0.1:8080
/// - "0.0.0.0:8080" -> 0.0.0.0:8080
fn parse_bind_addr(arg: &str) -> Result<SocketAddr, String> {
    const DEFAULT_PORT: u16 = 8080;

    let normalized = arg.replace("localhost", "127.0.0.1");

    if let Ok(addr) = normalized.parse::<SocketAddr>() {
        return Ok(addr);
    }

    if let Ok(ip) = normalized.parse::<std::net::IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_PORT));
    }

    Err(format!(
        "Invalid bind address: '{}'. Expected format: IP:PORT or IP or 'localhost'",
        arg
    ))
}

fn print_usage() {
    eprintln!("Usage: admin_server [BIND_ADDR]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  BIND_ADDR    Address to bind to (default: 0.0.0.0:8080)");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let config = match args.get(1) {
        Some(addr_str) => match parse_bind_addr(addr_str) {
            Ok(addr) => AdminConfig::with_addr(addr),
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        },
        None => AdminConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notify_bus=debug".parse()?)
                .add_directive("admin_server=debug".parse()?),
        )
        .init();

    let registry = init_global(RegistryConfig::default())?;

    registry
        .subscribe(
            Topic::ConfigRefresh,
            subscriber_fn(|topic, message| {
                tracing::info!(%topic, text = message, "Reloading configuration");
            }),
        )
        .await;

    registry
        .subscribe_fn(Topic::CacheInvalidate, |_, message| {
            if message.is_empty() {
                return Err(SubscriberError::new("cache name required"));
            }
            tracing::info!(cache = message, "Invalidating cache");
            Ok(())
        })
        .await;

    // Path sync work runs on its own task
    let (_handle, mut sync_rx) = registry.subscribe_channel(Topic::HdfsSyncHms).await;
    tokio::spawn(async move {
        while let Some(notification) = sync_rx.recv().await {
            tracing::info!(text = %notification.message, "Running path sync");
        }
    });

    println!("Admin form on http://{}{}", config.bind_addr, config.path);

    let server = AdminServer::new(config, registry);
    server
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
