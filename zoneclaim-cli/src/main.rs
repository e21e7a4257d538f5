//! zoneclaim command-line entry point
//!
//! Re-claims a dangling Route 53 delegation: resolves the delegated name
//! servers, checks the domain no longer resolves, then creates hosted zones
//! until Route 53 assigns one on an overlapping delegation set.
//!
//! # Usage
//! ```bash
//! # Name servers from WHOIS, credentials from a profile
//! zoneclaim -d victim.example.com -p security-audit
//!
//! # Explicit name servers, static keys from the environment
//! zoneclaim -d victim.example.com -n ns-1.awsdns-00.com ns-2.awsdns-01.net -y
//! ```
//!
//! Exit status is 0 only when a zone was claimed.

mod cli;
mod console;
mod report;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zoneclaim_core::services::CredentialConnector;
use zoneclaim_core::{CancellationFlag, ClaimWorkflow, ServiceContext};

use cli::{Cli, usage_exit_status};
use console::{ConsoleDecisions, ConsoleProgress};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap 自带 help/version 输出与错误格式
            let _ = e.print();
            return ExitCode::from(usage_exit_status(&e));
        }
    };
    init_tracing(cli.verbose);

    let request = match cli.claim_request() {
        Ok(request) => request,
        Err(e) => return ExitCode::from(report::render(&Err(e), cli.json)),
    };

    let cancel = CancellationFlag::new();
    spawn_interrupt_handler(cancel.clone());

    let ctx = ServiceContext::with_network_lookups(
        Arc::new(CredentialConnector::new(cli.credential_options())),
        Arc::new(ConsoleDecisions),
        Arc::new(ConsoleProgress::new(cli.verbose)),
    );

    let result = ClaimWorkflow::new(Arc::new(ctx))
        .run(&request, cancel)
        .await;
    ExitCode::from(report::render(&result, cli.json))
}

/// Logs go to stderr; `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

/// First Ctrl-C asks the acquisition loop to stop at the next iteration.
/// A second one exits immediately.
fn spawn_interrupt_handler(cancel: CancellationFlag) {
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Cannot listen for Ctrl-C: {e}");
                return;
            }
            if cancel.is_cancelled() {
                tracing::warn!("Second interrupt, exiting without cleanup");
                std::process::exit(i32::from(report::EXIT_FAILURE));
            }
            tracing::warn!("Interrupt received, stopping after the current step (Ctrl-C again to exit now)");
            cancel.cancel();
        }
    });
}
