use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
use commands::{execute_activities_command, execute_serve_command, ActivitiesArgs, ServeArgs};

#[derive(Parser)]
#[command(name = "mergington")]
#[command(about = "Mergington High School extracurricular activities API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the activities API over HTTP
    Serve(ServeCommandArgs),
    /// Print the seed activity catalogue
    Activities(ActivitiesCommandArgs),
}

#[derive(Args)]
pub struct ServeCommandArgs {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    pub port: u16,
    /// Directory served under /static
    #[arg(long, default_value = "static")]
    pub static_dir: String,
    /// Do not serve static files
    #[arg(long, conflicts_with = "static_dir")]
    pub no_static: bool,
    /// Allow cross-origin requests from any origin
    #[arg(long)]
    pub cors: bool,
    /// Tracing filter directive (overridden by RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Args)]
pub struct ActivitiesCommandArgs {
    /// Print the catalogue as JSON
    #[arg(long)]
    pub json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            let serve_args = ServeArgs {
                host: args.host,
                port: args.port,
                static_dir: args.static_dir,
                no_static: args.no_static,
                cors: args.cors,
                log_level: args.log_level,
            };
            execute_serve_command(serve_args).await
        }
        Commands::Activities(args) => execute_activities_command(ActivitiesArgs { json: args.json }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["mergington", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };

        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8000);
        assert_eq!(args.static_dir, "static");
        assert!(!args.no_static);
        assert!(!args.cors);
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "mergington",
            "serve",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--no-static",
            "--cors",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };

        assert_eq!(args.port, 9000);
        assert!(args.no_static);
        assert!(args.cors);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["mergington", "serve", "--port", "99999"]).is_err());
    }
}
