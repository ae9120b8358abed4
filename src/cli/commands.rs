use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use http::Method;
use std::io::Write;
use std::path::PathBuf;

use crate::error::RouteResult;
use crate::route::{RequestTarget, Route};
use crate::router::RouteCollection;
use crate::runtime_config::RouterConfig;

/// Command-line interface for routemap
#[derive(Parser, Debug)]
#[command(name = "routemap")]
#[command(about = "Match requests and generate URLs against a route table", long_about = None)]
pub struct Cli {
    /// YAML router configuration (defaults to ROUTEMAP_* environment variables)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the route that services a request
    Match {
        /// HTTP method, compared exactly (case-sensitive)
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request path; any query string is ignored
        #[arg(short, long)]
        path: String,
    },
    /// Generate a URL for a named route
    Url {
        /// Route name
        #[arg(short, long)]
        name: String,

        /// Placeholder value as key=value (repeatable)
        #[arg(short = 'P', long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Prefix the configured base URL
        #[arg(long, default_value_t = false)]
        absolute: bool,
    },
    /// List routes in priority order
    Routes,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

/// The table served by the binary. Handlers are handler names.
///
/// # Errors
///
/// Returns an error if the configured base URL or base path is invalid, or a
/// template is malformed.
pub fn demo_routes(config: &RouterConfig) -> RouteResult<RouteCollection<&'static str>> {
    let routes = RouteCollection::from_config(config)?
        .add(Route::new(Method::GET, "/", "root_handler").with_name("home"))
        .add(Route::new(Method::GET, "/health", "health_check").with_name("health"))
        .add(Route::new(Method::GET, "/users", "list_users").with_name("user_index"))
        .add(Route::new(Method::POST, "/users", "create_user").with_name("user_create"))
        .add(Route::new(Method::GET, "/users/me", "current_user").with_name("user_me"))
        .add(Route::new(Method::GET, "/users/{id}", "get_user").with_name("user_show"))
        .add(Route::new(Method::PUT, "/users/{id}", "update_user").with_name("user_update"))
        .add(Route::new(Method::DELETE, "/users/{id}", "delete_user").with_name("user_delete"))
        .add(
            Route::new(Method::GET, "/users/{user_id}/posts/{post_id}", "get_post")
                .with_name("post_show"),
        )
        .add(Route::new(Method::GET, "/files/{name}.json", "get_file").with_name("file_json"))
        .add(Route::new(Method::POST, "/checkout", "checkout").with_name("checkout"));
    routes.validate()?;
    Ok(routes)
}

/// Execute a parsed command, writing results to `out`.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the method token is invalid,
/// or URL generation fails.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RouterConfig::from_yaml_file(path)?,
        None => RouterConfig::from_env(),
    };
    let routes = demo_routes(&config).context("Failed to build route table")?;

    match &cli.command {
        Commands::Match { method, path } => {
            let path = path.split('?').next().unwrap_or("");
            let request = RequestTarget::parse(method, path)
                .map_err(|e| anyhow!("invalid HTTP method '{method}': {e}"))?;
            match routes.match_with_params(&request)? {
                Some(hit) => {
                    let params: Vec<String> = hit
                        .path_params
                        .iter()
                        .map(|(k, v)| format!("{k}={v}"))
                        .collect();
                    writeln!(
                        out,
                        "{} {} -> {} [{}] params: {{{}}}",
                        method,
                        path,
                        hit.route.handler(),
                        hit.route.name().unwrap_or("-"),
                        params.join(", ")
                    )?;
                }
                None => writeln!(out, "{method} {path} -> no match")?,
            }
        }
        Commands::Url {
            name,
            params,
            absolute,
        } => {
            let pairs: Vec<(&str, &str)> = params
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            let url = routes.url_for(name, pairs.as_slice(), *absolute)?;
            writeln!(out, "{url}")?;
        }
        Commands::Routes => {
            for (position, route) in routes.iter().enumerate() {
                writeln!(
                    out,
                    "{position:>3} {:<7} {:<40} {:<14} {}",
                    route.method().as_str(),
                    route.uri(),
                    route.name().unwrap_or("-"),
                    route.handler()
                )?;
            }
        }
    }
    Ok(())
}

/// Parse the process arguments and run.
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
