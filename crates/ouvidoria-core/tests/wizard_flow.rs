//! End-to-end wizard scenarios
//!
//! Walk a complaint through all three steps, the way the form component
//! drives the wizard, with tokio's paused clock standing in for the browser
//! timer.

use std::cell::RefCell;
use std::time::Duration;

use ouvidoria_core::{
    ComplaintWizard, Field, FormConfig, Notification, Receipt, SimulatedSubmitter, Step,
    SubmitError, Submitter,
};

// ============================================================================
// Helpers
// ============================================================================

/// Submitter double for the failure branch the simulated backend never takes
struct FailingSubmitter;

impl Submitter for FailingSubmitter {
    async fn submit(
        &self,
        _draft: &ouvidoria_core::ComplaintDraft,
    ) -> Result<Receipt, SubmitError> {
        Err(SubmitError::Unavailable("connection refused".to_string()))
    }
}

type Sleep = fn(Duration) -> tokio::time::Sleep;

fn simulated() -> SimulatedSubmitter<Sleep> {
    SimulatedSubmitter::new(
        FormConfig::default().submit_delay(),
        tokio::time::sleep as Sleep,
    )
}

fn fill_personal_data(wizard: &mut ComplaintWizard) {
    wizard.set_field(Field::Name, "Ana Silva");
    wizard.set_field(Field::TaxId, "12345678909");
    wizard.set_field(Field::Email, "ana@ex.com");
    wizard.set_field(Field::Phone, "11912345678");
}

fn fill_bank_info(wizard: &mut ComplaintWizard) {
    wizard.set_field(Field::AgencyCode, "001");
    wizard.set_field(Field::AccountCode, "12345");
    wizard.set_field(Field::ComplaintCategory, "Cobrança indevida");
}

fn wizard_on_description() -> ComplaintWizard {
    let mut wizard = ComplaintWizard::new();
    fill_personal_data(&mut wizard);
    assert!(wizard.advance());
    fill_bank_info(&mut wizard);
    assert!(wizard.advance());
    wizard
}

// ============================================================================
// Step transitions
// ============================================================================

#[test]
fn personal_data_advances_to_bank_info() {
    let mut wizard = ComplaintWizard::new();
    fill_personal_data(&mut wizard);

    assert_eq!(wizard.value(Field::TaxId), "123.456.789-09");
    assert_eq!(wizard.value(Field::Phone), "(11) 91234-5678");
    assert!(wizard.advance());
    assert_eq!(wizard.step(), Step::BankInfo);
    assert!(wizard.errors().is_empty());
}

#[test]
fn bank_info_advances_to_description() {
    let wizard = wizard_on_description();
    assert_eq!(wizard.step(), Step::Description);
    assert_eq!(
        wizard.draft().category(),
        Some(ouvidoria_core::ComplaintCategory::UndueCharge)
    );
}

#[test]
fn failed_advance_marks_exactly_the_failing_fields() {
    let mut wizard = ComplaintWizard::new();
    wizard.set_field(Field::Name, "Ana Silva");
    wizard.set_field(Field::TaxId, "123456");
    wizard.set_field(Field::Email, "ana@ex.com");
    wizard.set_field(Field::Phone, "119123");

    assert!(!wizard.advance());

    assert_eq!(wizard.step(), Step::PersonalData);
    let failed: Vec<_> = wizard.errors().fields().collect();
    assert_eq!(failed, vec![Field::TaxId, Field::Phone]);
    assert_eq!(wizard.error(Field::TaxId), Some("CPF inválido"));
    assert_eq!(wizard.error(Field::Phone), Some("Telefone inválido"));
}

#[test]
fn retreat_keeps_entered_values() {
    let mut wizard = wizard_on_description();
    assert!(wizard.retreat());
    assert_eq!(wizard.step(), Step::BankInfo);
    assert_eq!(wizard.value(Field::AgencyCode), "001");
    assert!(wizard.retreat());
    assert_eq!(wizard.value(Field::Name), "Ana Silva");
}

#[test]
fn editing_clears_error_before_revalidation() {
    let mut wizard = ComplaintWizard::new();
    wizard.set_field(Field::Email, "ana");
    assert_eq!(wizard.blur(Field::Email), Some("E-mail inválido"));

    // Still invalid, but edits clear optimistically.
    wizard.set_field(Field::Email, "ana@");
    assert_eq!(wizard.error(Field::Email), None);

    assert_eq!(wizard.blur(Field::Email), Some("E-mail inválido"));
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test(start_paused = true)]
async fn submit_outside_last_step_is_a_no_op() {
    let mut wizard = ComplaintWizard::new();
    fill_personal_data(&mut wizard);
    let before = wizard.clone();
    let seen = RefCell::new(Vec::<Notification>::new());

    let submitted = wizard
        .submit(&simulated(), &|n: Notification| seen.borrow_mut().push(n))
        .await;

    assert!(!submitted);
    assert_eq!(wizard, before);
    assert!(seen.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn submit_with_short_description_is_refused() {
    let mut wizard = wizard_on_description();
    wizard.set_field(Field::Description, "curta");
    let seen = RefCell::new(Vec::<Notification>::new());

    let submitted = wizard
        .submit(&simulated(), &|n: Notification| seen.borrow_mut().push(n))
        .await;

    assert!(!submitted);
    assert!(!wizard.is_submitting());
    assert_eq!(wizard.step(), Step::Description);
    assert_eq!(
        wizard.error(Field::Description),
        Some("Descrição deve ter pelo menos 10 caracteres")
    );
    assert!(seen.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn successful_submission_resets_after_delay() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut wizard = wizard_on_description();
    wizard.set_field(Field::Description, "cobrado 2 vezes");
    assert_eq!(wizard.description_len(), 15);

    let draft = wizard.begin_submit().expect("description is long enough");
    assert!(wizard.is_submitting());
    assert_eq!(draft.name, "Ana Silva");

    let start = tokio::time::Instant::now();
    let outcome = simulated().submit(&draft).await;
    assert!(start.elapsed() >= Duration::from_secs(2));

    let notification = wizard.finish_submit(outcome);

    assert!(!notification.is_error());
    assert_eq!(notification.title, "Reclamação enviada com sucesso!");
    assert!(notification.description.contains("Protocolo: #"));
    assert_eq!(wizard.step(), Step::PersonalData);
    assert!(wizard.draft().is_empty());
    assert!(!wizard.is_submitting());
}

#[tokio::test(start_paused = true)]
async fn submit_delivers_one_notification() {
    let mut wizard = wizard_on_description();
    wizard.set_field(Field::Description, "cobrado 2 vezes");
    let seen = RefCell::new(Vec::<Notification>::new());

    assert!(
        wizard
            .submit(&simulated(), &|n: Notification| seen.borrow_mut().push(n))
            .await
    );

    let seen = seen.into_inner();
    assert_eq!(seen.len(), 1);
    assert!(!seen[0].is_error());
    assert_eq!(wizard, ComplaintWizard::new());
}

#[tokio::test]
async fn failed_submission_keeps_draft_for_retry() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut wizard = wizard_on_description();
    wizard.set_field(Field::Description, "cobrado 2 vezes");
    let before = wizard.draft().clone();
    let seen = RefCell::new(Vec::<Notification>::new());

    let submitted = wizard
        .submit(&FailingSubmitter, &|n: Notification| seen.borrow_mut().push(n))
        .await;

    assert!(!submitted);
    let seen = seen.into_inner();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].is_error());
    assert_eq!(seen[0].title, "Erro ao enviar reclamação");
    assert_eq!(wizard.step(), Step::Description);
    assert_eq!(wizard.draft(), &before);
    assert!(!wizard.is_submitting());

    // Retry goes through once the backend recovers.
    assert!(wizard.begin_submit().is_some());
}
