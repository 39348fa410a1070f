use std::path::PathBuf;

use clap::{Parser, Subcommand};
use token_service::error::{AppResult, run_with_error_handler};
use token_service::model::{IssuedToken, TokenUser};
use token_service::utils::sensitive::SensitiveLogger;
use token_service::{Config, sensitive_debug};

#[derive(Parser, Debug)]
#[command(about = "Token primitives of the token service", long_about = None)]
pub struct Cli {
    /// Read ./config.toml instead of the user config
    #[arg(long, default_value_t = false)]
    pub local: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random hex token
    Nonce {
        #[arg(long)]
        length: Option<usize>,
    },

    /// Generate a random base64 token
    Base64 {
        #[arg(long)]
        length: Option<usize>,
        /// Keep the standard base64 alphabet (`+`, `/`, `=`)
        #[arg(long, default_value_t = false)]
        raw: bool,
    },

    /// Print the SHA-256 hex digest of the input
    Sha256 { input: String },

    /// Check that all requested scopes were granted
    Scopes {
        #[arg(long, value_delimiter = ',')]
        requested: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        granted: Vec<String>,
    },

    /// Check whether a path is a unix socket
    IsSock { path: PathBuf },

    /// Build the redirect URL for an issued token
    Redirect {
        #[arg(long)]
        base_url: String,
        #[arg(long)]
        access_token: String,
        #[arg(long)]
        uid: String,
        #[arg(long)]
        user_name: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
    },
}

fn run(args: Cli) -> AppResult<()> {
    let config = Config::load_or_default(args.local)?;
    let logger = SensitiveLogger::from_config(&config);

    match args.command {
        Commands::Nonce { length } => {
            let length = length.unwrap_or(config.tokens().nonce_length());
            let token = token_service::generate_hex_token(length)?;
            sensitive_debug!(logger, "generated hex token {}", token);
            println!("{token}");
        }

        Commands::Base64 { length, raw } => {
            let length = length.unwrap_or(config.tokens().base64_length());
            let mut token = token_service::generate_base64_token(length)?;
            if !raw && config.tokens().url_safe() {
                token = token_service::sanitize_base64(&token);
            }
            sensitive_debug!(logger, "generated base64 token {}", token);
            println!("{token}");
        }

        Commands::Sha256 { input } => {
            println!("{}", token_service::hash_sha256(&input));
        }

        Commands::Scopes { requested, granted } => {
            println!("{}", token_service::is_subset(&requested, &granted));
        }

        Commands::IsSock { path } => {
            println!("{}", token_service::is_socket_file(&path));
        }

        Commands::Redirect {
            base_url,
            access_token,
            uid,
            user_name,
            name,
            email,
        } => {
            let token = IssuedToken::new(
                access_token,
                TokenUser {
                    sub: uid,
                    user_name,
                    name,
                    email,
                },
            );
            let url = token_service::build_redirect_url(&base_url, &token);
            sensitive_debug!(logger, "redirect url {}", url);
            println!("{url}");
        }
    }

    Ok(())
}

fn main() {
    token_service::setup_trace();
    let args = Cli::parse();
    run_with_error_handler(|| run(args));
}
