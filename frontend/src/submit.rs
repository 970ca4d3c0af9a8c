use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use shared::{Error, RegistrationDraft, Result};
use crate::config::CONFIG;

/// Sends a completed registration somewhere. Resolves once the outcome is known.
pub trait Submitter {
    fn submit(&self, draft: RegistrationDraft) -> LocalBoxFuture<'static, Result<()>>;
}

/// Stand-in for a registration service: logs the payload and succeeds after a short pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(CONFIG.submit_delay_ms)
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, draft: RegistrationDraft) -> LocalBoxFuture<'static, Result<()>> {
        let delay_ms = self.delay_ms;
        async move {
            let body = payload(&draft)?;
            web_sys::console::log_1(&format!("Submitting registration: {}", body).into());
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

pub fn payload(draft: &RegistrationDraft) -> Result<String> {
    serde_json::to_string(draft).map_err(|e| Error::submission(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Division, DraftEdit, Field};

    #[test]
    fn payload_carries_draft_fields() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEdit::Text(Field::TeamName, "Ion Storm".into()));
        draft.apply(DraftEdit::Division(Division::Veteran));

        let body = payload(&draft).unwrap();
        assert!(body.contains(r#""teamName":"Ion Storm""#));
        assert!(body.contains(r#""division":"veteran""#));
        assert!(body.contains(r#""newsletter":true"#));
    }

    #[test]
    fn default_delay_comes_from_config() {
        assert_eq!(SimulatedSubmitter::default(), SimulatedSubmitter::new(CONFIG.submit_delay_ms));
    }
}
