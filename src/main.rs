//! Hotel Booking CLI server
//!
//! ```sh
//! # Run with default config (~/.config/hotel-booking/config.toml)
//! hotel-booking
//!
//! # Custom config path and port
//! hotel-booking --config /etc/hotel-booking/config.toml --port 8080
//!
//! # Validate config without starting
//! hotel-booking --check
//!
//! # Mint a bearer token for local testing
//! hotel-booking token --user-id 1
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{error, info};

use hotel_booking::config::AppConfig;
use hotel_booking::infrastructure::crypto::jwt::create_token;
use hotel_booking::server::{init_tracing, ServerHandle, ServerOptions};

/// Hotel booking REST service.
#[derive(Parser, Debug)]
#[command(
    name = "hotel-booking",
    version,
    about = "Hotel room booking service for event attendees",
    long_about = "REST API for booking, viewing and changing a hotel room.\n\n\
                  Default config: ~/.config/hotel-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BOOKING_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve(ServeArgs),
    /// Print a signed bearer token for a user id.
    Token {
        #[arg(long)]
        user_id: i32,
    },
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

impl ServeArgs {
    fn apply_to(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(hotel_booking::default_config_path);

    match cli.command {
        Some(Command::Token { user_id }) => {
            println!("{}", mint_token(&config_path, user_id)?);
            Ok(())
        }
        Some(Command::Serve(args)) => serve(config_path, args).await,
        None => serve(config_path, cli.serve).await,
    }
}

fn mint_token(config_path: &Path, user_id: i32) -> Result<String, Box<dyn std::error::Error>> {
    let config = AppConfig::load(config_path)?;
    Ok(create_token(user_id, &config.jwt_config())?)
}

async fn serve(config_path: PathBuf, args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if args.check => {
            eprintln!("❌ Invalid configuration: {}", e);
            return Err(e.into());
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            return Err(e.into());
        }
    };

    args.apply_to(&mut config);

    // ── Config validation mode ─────────────────────────────────
    if args.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.listen_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !args.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::CommandFactory;
    use hotel_booking::infrastructure::crypto::jwt::verify_token;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_flags_configure_the_default_serve() {
        let cli = Cli::try_parse_from(["hotel-booking", "--check", "--port", "8080"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.serve.check);
        assert!(!cli.serve.no_migrate);

        let mut config = AppConfig::default();
        cli.serve.apply_to(&mut config);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn serve_subcommand_takes_the_same_flags() {
        let cli = Cli::try_parse_from([
            "hotel-booking",
            "serve",
            "--no-migrate",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert!(args.no_migrate);

        let mut config = AppConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn token_requires_a_numeric_user_id() {
        let cli = Cli::try_parse_from(["hotel-booking", "token", "--user-id", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Token { user_id: 3 })));

        assert!(Cli::try_parse_from(["hotel-booking", "token"]).is_err());
        assert!(Cli::try_parse_from(["hotel-booking", "token", "--user-id", "abc"]).is_err());
    }

    #[test]
    fn minted_token_verifies_with_the_configured_secret() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[security]\njwt_secret = \"cli-test-secret\"\njwt_issuer = \"cli-test\""
        )
        .unwrap();

        let token = mint_token(file.path(), 42).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        let claims = verify_token(&token, &config.jwt_config()).unwrap();
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.iss, "cli-test");
    }
}
