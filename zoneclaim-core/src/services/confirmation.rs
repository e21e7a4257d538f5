//! 运营者确认

use crate::error::{CoreError, CoreResult};
use crate::traits::DecisionProvider;
use crate::types::{Domain, NameserverSet};

/// Ask before the first zone is created. Re-prompts until the answer is Y/y or N/n.
pub async fn confirm_start(
    decisions: &dyn DecisionProvider,
    domain: &Domain,
    target: &NameserverSet,
) -> CoreResult<()> {
    let prompt = format!(
        "Create hosted zones for {domain} until one is delegated to [{target}]? [Y/N] "
    );
    loop {
        match decisions.ask(&prompt).await?.trim() {
            "Y" | "y" => return Ok(()),
            "N" | "n" => return Err(CoreError::OperatorDeclined),
            other => log::debug!("Unrecognised answer {other:?}, asking again"),
        }
    }
}

/// Ask whether to clean up pending zones after an interrupt. Only Y/y means yes.
///
/// A failed prompt counts as no.
pub async fn confirm_cleanup(decisions: &dyn DecisionProvider, pending: usize) -> bool {
    let prompt = format!("Interrupted. Delete the {pending} pending hosted zone(s) now? [Y/N] ");
    match decisions.ask(&prompt).await {
        Ok(answer) => matches!(answer.trim(), "Y" | "y"),
        Err(e) => {
            log::warn!("{e}; leaving pending zones in place");
            false
        }
    }
}
