//! Command-line definition

use std::time::Duration;

use clap::{ArgAction, Parser};
use zoneclaim_core::services::CredentialOptions;
use zoneclaim_core::types::{
    AcquisitionSettings, DEFAULT_CLEANUP_ROUNDS, DEFAULT_ZONE_COMMENT, Domain,
};
use zoneclaim_core::{ClaimRequest, CoreResult};

use crate::report::{EXIT_FAILURE, EXIT_SUCCESS};

#[derive(Debug, Parser)]
#[command(name = "zoneclaim")]
#[command(
    about = "Re-claim a dangling Route 53 delegation by creating hosted zones until one lands on the delegated name servers"
)]
#[command(version)]
pub struct Cli {
    /// Domain whose delegation should be claimed
    #[arg(short, long)]
    pub domain: String,

    /// Named profile from the shared AWS credentials file (wins over static keys)
    #[arg(short, long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS access key ID
    #[arg(short, long = "access", env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    /// AWS secret access key
    #[arg(short, long = "secret", env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// AWS session token for temporary credentials
    #[arg(short = 't', long = "token", env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: Option<String>,

    /// Target name servers; skips the WHOIS lookup
    #[arg(short, long = "nameserver", value_name = "HOST", num_args = 1.., action = ArgAction::Append)]
    pub nameservers: Vec<String>,

    /// Show every candidate delegation set and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Proceed even if the domain still resolves NS records
    #[arg(short, long)]
    pub force: bool,

    /// Do not ask for confirmation before creating zones
    #[arg(short, long)]
    pub yes: bool,

    /// Give up after this many zones (default: unbounded)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Pause after a throttled delete, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 3)]
    pub backoff_secs: u64,

    /// Deletion passes during cleanup before zones are reported stale
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_CLEANUP_ROUNDS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub cleanup_rounds: u32,

    /// Comment stored on every created zone
    #[arg(long, default_value = DEFAULT_ZONE_COMMENT)]
    pub comment: String,

    /// Print the final result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// `--help` and `--version` succeed; any other usage error is a failed run.
pub fn usage_exit_status(error: &clap::Error) -> u8 {
    if error.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

impl Cli {
    pub fn claim_request(&self) -> CoreResult<ClaimRequest> {
        Ok(ClaimRequest {
            domain: Domain::parse(&self.domain)?,
            name_servers: self.nameservers.clone(),
            force: self.force,
            assume_yes: self.yes,
            settings: self.settings(),
        })
    }

    pub fn settings(&self) -> AcquisitionSettings {
        AcquisitionSettings {
            throttle_backoff: Duration::from_secs(self.backoff_secs),
            cleanup_rounds: self.cleanup_rounds,
            max_attempts: self.max_attempts,
            comment: self.comment.clone(),
        }
    }

    pub fn credential_options(&self) -> CredentialOptions {
        CredentialOptions {
            profile: self.profile.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            session_token: self.session_token.clone(),
        }
    }
}
