//! Terminal adapters: operator prompts and progress output
//!
//! Everything here writes to stderr; stdout carries only the final result.

use std::io::{BufRead, Write};

use async_trait::async_trait;
use zoneclaim_core::types::{AttemptOutcome, DelegationState, NameserverSource, ProgressEvent};
use zoneclaim_core::{CoreError, CoreResult, DecisionProvider, ProgressSink};

/// Reads answers from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDecisions;

#[async_trait]
impl DecisionProvider for ConsoleDecisions {
    async fn ask(&self, prompt: &str) -> CoreResult<String> {
        let prompt = prompt.to_string();
        // stdin 读取是阻塞的
        tokio::task::spawn_blocking(move || {
            read_answer(&prompt, &mut std::io::stdin().lock(), &mut std::io::stderr())
        })
        .await
        .map_err(|e| CoreError::Operator(e.to_string()))?
    }
}

fn read_answer(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> CoreResult<String> {
    write!(output, "{prompt}")
        .and_then(|()| output.flush())
        .map_err(|e| CoreError::Operator(e.to_string()))?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Err(CoreError::Operator("input closed".to_string())),
        Ok(_) => Ok(line.trim().to_string()),
        Err(e) => Err(CoreError::Operator(e.to_string())),
    }
}

/// Human-readable progress on stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProgress {
    verbose: bool,
}

impl ConsoleProgress {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// One display line per event. `None` for events hidden at this verbosity.
    fn render(self, event: &ProgressEvent) -> Option<String> {
        match event {
            ProgressEvent::NameserversResolved {
                source,
                name_servers,
            } => {
                let source = match source {
                    NameserverSource::Explicit => "command line",
                    NameserverSource::Whois => "WHOIS",
                };
                Some(format!("Target name servers (from {source}): {name_servers}"))
            }
            ProgressEvent::DelegationChecked { state } if self.verbose => Some(match state {
                DelegationState::Delegated { name_servers } => {
                    format!("Live NS records: {name_servers}")
                }
                DelegationState::Dangling { response_code }
                | DelegationState::Unresolvable { response_code } => {
                    format!("Live NS query: {response_code}")
                }
            }),
            ProgressEvent::ZoneCreated {
                ordinal,
                zone_id,
                delegation,
            } if self.verbose => Some(format!("[{ordinal}] {zone_id}: {delegation}")),
            ProgressEvent::AttemptFinished { attempt } => Some(match attempt.outcome {
                AttemptOutcome::Claimed => {
                    format!("[{}] {} matches", attempt.ordinal, attempt.zone_id)
                }
                AttemptOutcome::Failed => {
                    format!("[{}] {} no match, deleted", attempt.ordinal, attempt.zone_id)
                }
                AttemptOutcome::Throttled => format!(
                    "[{}] {} no match, delete pending",
                    attempt.ordinal, attempt.zone_id
                ),
            }),
            ProgressEvent::ZoneDeleted { zone_id } if self.verbose => {
                Some(format!("Deleted {zone_id}"))
            }
            ProgressEvent::DeleteThrottled { zone_id, backoff } => Some(format!(
                "Delete of {zone_id} throttled, waiting {}s",
                backoff.as_secs_f64()
            )),
            ProgressEvent::StaleZones { zone_ids } => Some(format!(
                "Could not delete {} zone(s): {}",
                zone_ids.len(),
                zone_ids.join(" ")
            )),
            // 警告已经通过日志输出
            _ => None,
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_event(&self, event: &ProgressEvent) {
        if let Some(line) = self.render(event) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use zoneclaim_core::types::{AcquisitionAttempt, NameserverSet};

    use super::*;

    #[test]
    fn test_read_answer_trims() {
        let mut output = Vec::new();
        let answer = read_answer("Go? ", &mut Cursor::new(" y \n"), &mut output).unwrap();
        assert_eq!(answer, "y");
        assert_eq!(String::from_utf8(output).unwrap(), "Go? ");
    }

    #[test]
    fn test_read_answer_eof() {
        let result = read_answer("Go? ", &mut Cursor::new(""), &mut Vec::new());
        assert!(matches!(result, Err(CoreError::Operator(_))));
    }

    #[test]
    fn test_candidate_sets_only_when_verbose() {
        let event = ProgressEvent::ZoneCreated {
            ordinal: 2,
            zone_id: "Z2".to_string(),
            delegation: NameserverSet::from_names(["ns-9.awsdns-09.net", "ns-1.awsdns-00.com"]),
        };
        assert_eq!(ConsoleProgress::new(false).render(&event), None);
        assert_eq!(
            ConsoleProgress::new(true).render(&event).unwrap(),
            "[2] Z2: ns-1.awsdns-00.com ns-9.awsdns-09.net"
        );
    }

    #[test]
    fn test_attempt_lines() {
        let event = ProgressEvent::AttemptFinished {
            attempt: AcquisitionAttempt {
                ordinal: 7,
                zone_id: "Z7".to_string(),
                outcome: AttemptOutcome::Throttled,
                delegation: NameserverSet::default(),
            },
        };
        assert_eq!(
            ConsoleProgress::new(false).render(&event).unwrap(),
            "[7] Z7 no match, delete pending"
        );

        let throttled = ProgressEvent::DeleteThrottled {
            zone_id: "Z7".to_string(),
            backoff: Duration::from_secs(3),
        };
        assert_eq!(
            ConsoleProgress::new(false).render(&throttled).unwrap(),
            "Delete of Z7 throttled, waiting 3s"
        );
    }
}
