//! # CLI Module
//!
//! Command-line front end for exploring a route table.
//!
//! ## Commands
//!
//! ### `match`
//!
//! Dispatch a method and path against the table and print the winning route:
//!
//! ```bash
//! routemap match --method GET --path /users/42
//! ```
//!
//! ### `url`
//!
//! Generate a path or absolute URL for a named route:
//!
//! ```bash
//! routemap url --name user_show --param id=42 --absolute
//! ```
//!
//! ### `routes`
//!
//! List the table in registration (priority) order.
//!
//! ## Configuration
//!
//! `--config <FILE>` loads a YAML [`RouterConfig`](crate::runtime_config::RouterConfig);
//! without it the `ROUTEMAP_*` environment variables apply.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{demo_routes, run, run_cli, Cli, Commands};
