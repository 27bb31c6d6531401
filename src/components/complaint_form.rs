//! Complaint Form
//!
//! Three-step intake wizard. All rules live in [`ComplaintWizard`]; this
//! component only maps its state to controls and its events to wizard calls.
//!
//! Submission runs in two halves so the signal is never borrowed across the
//! simulated delay: `begin_submit` under a short write, the await in a
//! spawned task, then `finish_submit` under a second write.

use dioxus::prelude::*;
use ouvidoria_core::{
    ComplaintCategory, ComplaintWizard, Field, Notifier, SimulatedSubmitter, Step, Submitter,
    PHONE_MAX_LEN, TAX_ID_MAX_LEN,
};
use ouvidoria_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Icon, IconKind, ProgressBar,
    Select, TextArea, TextField,
};

use crate::content::anchor;
use crate::context::{sleep, use_form_config, use_toasts};

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    }
}

/// Rendered-length cap for masked inputs
fn max_length(field: Field) -> Option<usize> {
    match field {
        Field::TaxId => Some(TAX_ID_MAX_LEN),
        Field::Phone => Some(PHONE_MAX_LEN),
        _ => None,
    }
}

/// Apply one input event to the wizard.
///
/// Returns the stored value when it differs from what the browser shows
/// (masked, stripped or rejected edit). A rejected edit leaves the signal
/// unchanged, so the virtual DOM never patches the input by itself.
fn apply_edit(wizard: &mut ComplaintWizard, field: Field, typed: &str) -> Option<String> {
    wizard.set_field(field, typed);
    let stored = wizard.value(field);
    (stored != typed).then(|| stored.to_string())
}

/// Overwrite the live `<input>` value with what the draft holds.
fn restore_input(id: &'static str, value: String) {
    let eval = document::eval(
        r#"
        const [id, value] = await dioxus.recv();
        const el = document.getElementById(id);
        if (el) { el.value = value; }
        "#,
    );
    if let Err(e) = eval.send((id, value)) {
        tracing::debug!(%id, error = ?e, "Could not restore input value");
    }
}

/// One wizard field rendered with the control its kind needs.
#[component]
fn StepField(wizard: Signal<ComplaintWizard>, field: Field, soft_limit: usize) -> Element {
    let mut wizard = wizard;

    let value = wizard.read().value(field).to_string();
    let error = wizard.read().error(field).map(str::to_string);
    let placeholder = field.placeholder().map(str::to_string);
    let id = field.key().to_string();
    let label = field.label().to_string();

    let oninput = move |typed: String| {
        let restored = apply_edit(&mut wizard.write(), field, &typed);
        if let Some(stored) = restored {
            restore_input(field.key(), stored);
        }
    };
    let onblur = move |_: ()| {
        wizard.write().blur(field);
    };

    match field {
        Field::ComplaintCategory => rsx! {
            Select {
                id,
                label,
                options: ComplaintCategory::labels().map(str::to_string).collect::<Vec<_>>(),
                value,
                placeholder,
                error,
                onchange: oninput,
                onblur,
            }
        },
        Field::Description => rsx! {
            TextArea {
                id,
                label,
                value,
                placeholder,
                error,
                counter_limit: soft_limit,
                oninput,
                onblur,
            }
        },
        _ => rsx! {
            TextField {
                id,
                label,
                value,
                placeholder,
                error,
                input_type: input_type(field).to_string(),
                max_length: max_length(field),
                oninput,
                onblur,
            }
        },
    }
}

/// The `#formulario` section.
#[component]
pub fn ComplaintForm() -> Element {
    let config = use_form_config();
    let toasts = use_toasts();
    let mut wizard = use_signal(ComplaintWizard::new);
    let submitter = use_hook(|| SimulatedSubmitter::new(config.submit_delay(), sleep));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(draft) = wizard.write().begin_submit() else {
            return;
        };
        let submitter = submitter.clone();
        spawn(async move {
            let outcome = submitter.submit(&draft).await;
            let notification = wizard.write().finish_submit(outcome);
            toasts.notify(notification);
        });
    };

    let step = wizard.read().step();
    let submitting = wizard.read().is_submitting();
    let progress = wizard.read().progress();
    let total = Step::COUNT;
    let soft_limit = config.description_soft_limit;

    rsx! {
        section { id: anchor::FORM, class: "form-section",
            div { class: "container container-narrow",
                div { class: "section-heading",
                    h2 { "Nova Reclamação" }
                    p { "Preencha os dados abaixo para registrar sua reclamação" }
                }

                Card { class: "form-card".to_string(),
                    CardHeader {
                        CardTitle {
                            span { class: "step-heading",
                                span { "Etapa {step.number()} de {total}" }
                                span { class: "step-title", "{step.title()}" }
                            }
                        }
                        ProgressBar { value: progress }
                    }

                    CardContent {
                        form { class: "complaint-form", novalidate: true, onsubmit: onsubmit,
                            div { class: "step-fields",
                                for field in step.fields().iter().copied() {
                                    div { key: "{field.key()}", class: "field-slot field-{field.key()}",
                                        StepField { wizard, field, soft_limit }
                                    }
                                }
                            }

                            div { class: "form-actions",
                                if !step.is_first() {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        disabled: submitting,
                                        onclick: move |_| {
                                            wizard.write().retreat();
                                        },
                                        "Voltar"
                                    }
                                }

                                div { class: "form-actions-end",
                                    if step.is_last() {
                                        Button {
                                            button_type: "submit".to_string(),
                                            disabled: submitting,
                                            if submitting {
                                                Icon { kind: IconKind::Loader, size: 16, class: "spin".to_string() }
                                                "Enviando..."
                                            } else {
                                                Icon { kind: IconKind::Send, size: 16 }
                                                "Enviar Reclamação"
                                            }
                                        }
                                    } else {
                                        Button {
                                            onclick: move |_| {
                                                wizard.write().advance();
                                            },
                                            "Próximo"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
