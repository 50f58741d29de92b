use anyhow::Result;
use authc::config::AuthConfig;
use clap::Parser;

/// authc - backend login client
///
/// Posts a credential pair to the backend login endpoint and prints the
/// session token on success. Every failure is reported as one normalized
/// message: the backend's own rejection message, a network error, or a
/// request-configuration error.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend API base URL (also via AUTHC_API_URL)
    #[arg(
        long = "api-url",
        env = "AUTHC_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Log in to the backend
    Login(LoginArgs),
}

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Account name
    #[arg(long, short = 'u')]
    pub username: String,

    /// Account password (also via AUTHC_PASSWORD)
    #[arg(long, short = 'p', env = "AUTHC_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Login(args) => {
            let config = AuthConfig::new(cli.api_url);
            let auth = config.build_auth_client()?;
            authc::commands::login(&auth, &args.username, &args.password).await?
        }
    }
    Ok(())
}
