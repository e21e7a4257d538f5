//! Final result output and exit status

use serde_json::{Value, json};
use zoneclaim_core::types::ClaimedZone;
use zoneclaim_core::{CoreError, CoreResult};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Only a claimed zone counts as success.
pub fn exit_status(result: &CoreResult<ClaimedZone>) -> u8 {
    if result.is_ok() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

/// Print the outcome and return the exit status.
pub fn render(result: &CoreResult<ClaimedZone>, json: bool) -> u8 {
    match result {
        Ok(claimed) => {
            tracing::info!(
                "Claimed hosted zone {} after {} attempt(s)",
                claimed.zone.id,
                claimed.attempts
            );
            if json {
                println!("{}", success_json(claimed));
            } else {
                println!("{}", success_text(claimed));
            }
        }
        Err(e) => {
            if e.is_expected() {
                tracing::warn!("{e}");
            } else {
                tracing::error!("{e}");
            }
            if json {
                println!("{}", failure_json(e));
            } else if !e.outstanding().is_empty() {
                eprintln!(
                    "Hosted zones left in the account, delete them manually: {}",
                    e.outstanding().join(" ")
                );
            }
        }
    }
    exit_status(result)
}

fn success_text(claimed: &ClaimedZone) -> String {
    let mut text = format!(
        "Claimed {} as hosted zone {} after {} attempt(s)\nMatched: {}\nDelegation: {}",
        claimed.zone.name,
        claimed.zone.id,
        claimed.attempts,
        claimed.matched,
        claimed.zone.delegation
    );
    if !claimed.stale.is_empty() {
        text.push_str(&format!(
            "\nNot deleted, remove manually: {}",
            claimed.stale.join(" ")
        ));
    }
    text
}

fn success_json(claimed: &ClaimedZone) -> Value {
    json!({
        "status": "claimed",
        "result": claimed,
    })
}

fn failure_json(e: &CoreError) -> Value {
    json!({
        "status": "failed",
        "message": e.to_string(),
        "error": e,
        "outstanding": e.outstanding(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use zoneclaim_core::types::{HostedZone, NameserverSet};

    use super::*;

    fn claimed(stale: &[&str]) -> ClaimedZone {
        ClaimedZone {
            zone: HostedZone {
                id: "Z0ABC".to_string(),
                name: "victim.example.com".to_string(),
                delegation: NameserverSet::from_names(["ns-1.awsdns-00.com", "ns-2.awsdns-01.net"]),
                reference: "zoneclaim-victim.example.com-20240115T080000.000000Z-4".to_string(),
            },
            matched: NameserverSet::from_names(["ns-1.awsdns-00.com"]),
            attempts: 4,
            stale: stale.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&Ok(claimed(&[]))), EXIT_SUCCESS);
        assert_eq!(exit_status(&Err(CoreError::OperatorDeclined)), EXIT_FAILURE);
        assert_eq!(
            exit_status(&Err(CoreError::Interrupted {
                outstanding: vec![]
            })),
            EXIT_FAILURE
        );
    }

    #[test]
    fn test_success_text() {
        let text = success_text(&claimed(&["Z0OLD"]));
        assert!(text.starts_with("Claimed victim.example.com as hosted zone Z0ABC after 4 attempt(s)"));
        assert!(text.contains("Matched: ns-1.awsdns-00.com"));
        assert!(text.ends_with("remove manually: Z0OLD"));
    }

    #[test]
    fn test_success_json() {
        let value = success_json(&claimed(&[]));
        assert_eq!(value["status"], "claimed");
        assert_eq!(value["result"]["zone"]["id"], "Z0ABC");
        assert_eq!(value["result"]["matched"][0], "ns-1.awsdns-00.com");
        assert_eq!(value["result"]["attempts"], 4);
    }

    #[test]
    fn test_failure_json_lists_outstanding() {
        let value = failure_json(&CoreError::Interrupted {
            outstanding: vec!["Z1".to_string(), "Z2".to_string()],
        });
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"]["code"], "Interrupted");
        assert_eq!(value["outstanding"][1], "Z2");
    }
}
