//! Three-step intake wizard.
//!
//! Owns the draft, the error map, the current step and the in-flight flag
//! for one form session. Every transition is a plain method call; the only
//! asynchronous part is [`ComplaintWizard::submit`], which is also exposed
//! as the [`begin_submit`](ComplaintWizard::begin_submit) /
//! [`finish_submit`](ComplaintWizard::finish_submit) pair so a UI can keep
//! the wizard in a reactive cell and await outside of it.
//!
//! ```text
//! PersonalData --advance--> BankInfo --advance--> Description
//!      ^                        |                     |
//!      +--------retreat---------+<------retreat-------+
//!      ^                                              | begin_submit
//!      |                                         [submitting]
//!      +------------- finish_submit(Ok) -------------+
//!                     finish_submit(Err) stays on Description
//! ```

use crate::draft::ComplaintDraft;
use crate::error::SubmitError;
use crate::field::{Field, Step};
use crate::format::apply_mask;
use crate::notification::{Notification, Notifier};
use crate::submission::{Receipt, Submitter};
use crate::validation::{validate_field, validate_fields, FieldErrors};

/// State of one complaint form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintWizard {
    draft: ComplaintDraft,
    errors: FieldErrors,
    step: Step,
    submitting: bool,
}

impl ComplaintWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ComplaintDraft {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Completion of the wizard in percent, derived from the step.
    pub fn progress(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(Step::COUNT) * 100.0
    }

    /// Characters typed in the description, for the counter
    pub fn description_len(&self) -> usize {
        self.draft.description.chars().count()
    }

    /// Input-change handler.
    ///
    /// Masks CPF and phone input, stores the value and clears the field's
    /// error without re-validating. Returns `false` when the masked value
    /// is over the field's cap; nothing changes in that case.
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        let Some(masked) = apply_mask(field, value) else {
            tracing::debug!(%field, "Input rejected by mask");
            return false;
        };
        self.draft.set(field, masked);
        if self.errors.clear(field) {
            tracing::debug!(%field, "Cleared error on edit");
        }
        true
    }

    /// Blur handler: validate one field and record the outcome.
    pub fn blur(&mut self, field: Field) -> Option<&str> {
        let outcome = validate_field(field, self.draft.get(field));
        self.errors.record(field, outcome);
        self.errors.get(field)
    }

    /// Validate the fields of `step`, updating exactly those entries in the
    /// error map.
    fn validate_step(&mut self, step: Step) -> bool {
        let failures = validate_fields(&self.draft, step.fields());
        for &field in step.fields() {
            self.errors.record(field, failures.get(field));
        }
        if !failures.is_empty() {
            tracing::debug!(
                step = step.number(),
                failed = ?failures.fields().map(|f| f.key()).collect::<Vec<_>>(),
                "Step validation failed"
            );
        }
        failures.is_empty()
    }

    /// Move to the next step if the current one validates.
    pub fn advance(&mut self) -> bool {
        if !self.validate_step(self.step) {
            return false;
        }
        let Some(next) = self.step.next() else {
            return false;
        };
        tracing::info!(from = self.step.number(), to = next.number(), "Advancing step");
        self.step = next;
        true
    }

    /// Go back one step. No validation runs; refused on the first step and
    /// while a submission is in flight.
    pub fn retreat(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        let Some(prev) = self.step.prev() else {
            return false;
        };
        tracing::info!(from = self.step.number(), to = prev.number(), "Retreating step");
        self.step = prev;
        true
    }

    /// First half of a submission.
    ///
    /// Only on the last step and with no submission in flight. Re-validates
    /// the step; on success marks the wizard as submitting and returns a
    /// snapshot of the draft to hand to a [`Submitter`].
    pub fn begin_submit(&mut self) -> Option<ComplaintDraft> {
        if self.submitting {
            tracing::debug!("Submission already in flight");
            return None;
        }
        if !self.step.is_last() {
            tracing::debug!(step = self.step.number(), "Submit outside the last step ignored");
            return None;
        }
        if !self.validate_step(self.step) {
            return None;
        }
        self.submitting = true;
        tracing::info!("Submitting complaint");
        Some(self.draft.clone())
    }

    /// Second half of a submission: apply the outcome and build the
    /// notification to show.
    ///
    /// Success resets the form to an empty draft on the first step. Failure
    /// leaves draft and step alone so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<Receipt, SubmitError>) -> Notification {
        self.submitting = false;
        match outcome {
            Ok(receipt) => {
                tracing::info!(protocol = %receipt.protocol, "Complaint submitted, resetting form");
                self.reset();
                Notification::submitted(&receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Complaint submission failed");
                Notification::submission_failed()
            }
        }
    }

    /// Run a whole submission and deliver its notification.
    ///
    /// Returns `false` without notifying when the wizard refuses to submit,
    /// otherwise whether the submission succeeded.
    pub async fn submit<S, N>(&mut self, submitter: &S, notifier: &N) -> bool
    where
        S: Submitter,
        N: Notifier,
    {
        let Some(draft) = self.begin_submit() else {
            return false;
        };
        let outcome = submitter.submit(&draft).await;
        let notification = self.finish_submit(outcome);
        let succeeded = !notification.is_error();
        notifier.notify(notification);
        succeeded
    }

    /// Back to an empty draft on the first step.
    pub fn reset(&mut self) {
        self.draft = ComplaintDraft::new();
        self.errors.clear_all();
        self.step = Step::default();
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::Protocol;

    fn on_step(step: Step) -> ComplaintWizard {
        let mut wizard = ComplaintWizard::new();
        wizard.step = step;
        wizard
    }

    #[test]
    fn starts_empty_on_first_step() {
        let wizard = ComplaintWizard::new();
        assert_eq!(wizard.step(), Step::PersonalData);
        assert!(wizard.draft().is_empty());
        assert!(wizard.errors().is_empty());
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn progress_tracks_step() {
        assert!((on_step(Step::PersonalData).progress() - 100.0 / 3.0).abs() < 1e-9);
        assert!((on_step(Step::BankInfo).progress() - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(on_step(Step::Description).progress(), 100.0);
    }

    #[test]
    fn set_field_masks_and_clears_error() {
        let mut wizard = ComplaintWizard::new();
        assert_eq!(wizard.blur(Field::TaxId), Some("CPF inválido"));

        assert!(wizard.set_field(Field::TaxId, "12345678909"));
        assert_eq!(wizard.value(Field::TaxId), "123.456.789-09");
        assert_eq!(wizard.error(Field::TaxId), None);
    }

    #[test]
    fn rejected_mask_keeps_value_and_error() {
        let mut wizard = ComplaintWizard::new();
        wizard.set_field(Field::Phone, "11912345678");
        wizard.errors.set(Field::Phone, "Telefone inválido");

        assert!(!wizard.set_field(Field::Phone, "(11) 91234-56789"));
        assert_eq!(wizard.value(Field::Phone), "(11) 91234-5678");
        assert_eq!(wizard.error(Field::Phone), Some("Telefone inválido"));
    }

    #[test]
    fn blur_clears_fixed_field() {
        let mut wizard = ComplaintWizard::new();
        wizard.blur(Field::Name);
        wizard.draft.set(Field::Name, "Ana");
        assert_eq!(wizard.blur(Field::Name), None);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn advance_only_touches_current_step_errors() {
        let mut wizard = ComplaintWizard::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::PersonalData);
        let failed: Vec<_> = wizard.errors().fields().collect();
        assert_eq!(failed, Step::PersonalData.fields().to_vec());
    }

    #[test]
    fn advance_never_passes_last_step() {
        let mut wizard = on_step(Step::Description);
        wizard.set_field(Field::Description, "descrição suficiente");
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::Description);
    }

    #[test]
    fn retreat_is_unconditional_but_bounded() {
        let mut wizard = on_step(Step::BankInfo);
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), Step::PersonalData);
        assert!(wizard.errors().is_empty());
        assert!(!wizard.retreat());
    }

    #[test]
    fn begin_submit_refuses_reentry() {
        let mut wizard = on_step(Step::Description);
        wizard.set_field(Field::Description, "cobrança em dobro");
        assert!(wizard.begin_submit().is_some());
        assert!(wizard.is_submitting());
        assert!(wizard.begin_submit().is_none());
        assert!(!wizard.retreat());
    }

    #[test]
    fn finish_submit_success_resets() {
        let mut wizard = on_step(Step::Description);
        wizard.set_field(Field::Name, "Ana Silva");
        wizard.set_field(Field::Description, "cobrança em dobro");
        wizard.begin_submit();

        let note = wizard.finish_submit(Ok(Receipt::new(Protocol::new(2026, 1234))));

        assert!(!note.is_error());
        assert!(note.description.contains("#20261234"));
        assert_eq!(wizard, ComplaintWizard::new());
    }

    #[test]
    fn finish_submit_failure_keeps_draft() {
        let mut wizard = on_step(Step::Description);
        wizard.set_field(Field::Description, "cobrança em dobro");
        let before = wizard.draft().clone();
        wizard.begin_submit();

        let note = wizard.finish_submit(Err(SubmitError::Unavailable("offline".into())));

        assert!(note.is_error());
        assert_eq!(wizard.step(), Step::Description);
        assert_eq!(wizard.draft(), &before);
        assert!(!wizard.is_submitting());
    }
}
