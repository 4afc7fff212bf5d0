use lead_capture::{Crop, Field, ModalState, PropertySize};
use leptos::ev;
use leptos::prelude::*;

use crate::dialog::{LeadDialog, use_lead_dialog};

/// Free-trial request form. Rendered once at page level; the sections open
/// it through [`LeadDialog`].
#[component]
pub fn LeadModal() -> impl IntoView {
    let dialog = use_lead_dialog();
    let controller = dialog.controller;

    let listener = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && controller.with_untracked(|c| c.is_open()) {
            dialog.close();
        }
    });
    on_cleanup(move || listener.remove());

    let state = move || controller.with(|c| c.state());
    // also true when a request from before a close/reopen is still pending
    let busy = move || controller.with(|c| c.is_busy());

    view! {
        <Show when=move || controller.with(|c| c.is_open())>
            <div class="modal-overlay" on:click=move |_| dialog.close()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|e| e.stop_propagation()
                >
                    <div class="modal-header">
                        <div>
                            <h2 class="modal-title">"Teste Gratuito"</h2>
                            <p class="modal-subtitle">"Terra Precision"</p>
                        </div>
                        <button class="modal-close" aria-label="Fechar" on:click=move |_| dialog.close()>
                            "✕"
                        </button>
                    </div>

                    <Show
                        when=move || state() != ModalState::Success
                        fallback=|| {
                            view! {
                                <div class="modal-success">
                                    <p class="modal-success-title">"Solicitação enviada!"</p>
                                    <p>"Nossa equipe entrará em contato em breve."</p>
                                </div>
                            }
                        }
                    >
                        <form
                            class="modal-form"
                            novalidate=true
                            on:submit=move |e: ev::SubmitEvent| {
                                e.prevent_default();
                                dialog.submit();
                            }
                        >
                            <p class="modal-intro">
                                "Preencha os dados abaixo e nossa equipe entrará em contato para agendar uma demonstração gratuita."
                            </p>

                            <TextField dialog=dialog field=Field::Email kind="email" placeholder="seu@email.com" />
                            <div class="form-row">
                                <TextField dialog=dialog field=Field::FirstName kind="text" placeholder="Seu nome" />
                                <TextField dialog=dialog field=Field::LastName kind="text" placeholder="Seu sobrenome" />
                            </div>
                            <TextField
                                dialog=dialog
                                field=Field::Company
                                kind="text"
                                placeholder="Nome da sua empresa/propriedade (opcional)"
                            />
                            <TextField dialog=dialog field=Field::Phone kind="tel" placeholder="(11) 99999-9999" />
                            <CropSelect dialog=dialog />
                            <SizeRadios dialog=dialog />
                            <PrivacyCheckbox dialog=dialog />

                            <button type="submit" class="btn btn-primary modal-submit" disabled=busy>
                                {move || if busy() { "Enviando..." } else { "Solicitar Teste Gratuito" }}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

fn field_error(dialog: LeadDialog, field: Field) -> impl IntoView {
    move || {
        dialog
            .controller
            .with(|c| c.errors().get(field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
fn FieldLabel(field: Field) -> impl IntoView {
    view! {
        <label for=field.name() class="field-label">
            {field.label()}
            {field.is_required().then(|| view! { <span class="field-required">" *"</span> })}
        </label>
    }
}

#[component]
fn TextField(
    dialog: LeadDialog,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let invalid = move || dialog.controller.with(|c| c.errors().contains(field));
    view! {
        <div class="form-field">
            <FieldLabel field=field />
            <input
                id=field.name()
                name=field.name()
                type=kind
                placeholder=placeholder
                class=move || if invalid() { "field-input invalid" } else { "field-input" }
                prop:value=move || dialog.controller.with(|c| c.draft().text(field).to_string())
                on:input=move |e| dialog.set_text(field, event_target_value(&e))
            />
            {field_error(dialog, field)}
        </div>
    }
}

#[component]
fn CropSelect(dialog: LeadDialog) -> impl IntoView {
    let field = Field::Crop;
    view! {
        <div class="form-field">
            <FieldLabel field=field />
            <select
                id=field.name()
                name=field.name()
                class="field-input"
                prop:value=move || dialog.controller.with(|c| c.draft().crop.clone())
                on:change=move |e| dialog.set_text(field, event_target_value(&e))
            >
                <option value="" disabled=true>"Selecione a principal cultura"</option>
                {Crop::ALL
                    .iter()
                    .map(|crop| view! { <option value=crop.value()>{crop.label()}</option> })
                    .collect_view()}
            </select>
            {field_error(dialog, field)}
        </div>
    }
}

#[component]
fn SizeRadios(dialog: LeadDialog) -> impl IntoView {
    let field = Field::PropertySize;
    view! {
        <fieldset class="form-field">
            <FieldLabel field=field />
            {PropertySize::ALL
                .iter()
                .map(|size| {
                    let token = size.token();
                    view! {
                        <label class="radio-option">
                            <input
                                type="radio"
                                name=field.name()
                                value=token
                                prop:checked=move || dialog.controller.with(|c| c.draft().property_size == token)
                                on:change=move |_| dialog.set_text(field, token.to_string())
                            />
                            {size.label()}
                        </label>
                    }
                })
                .collect_view()}
            {field_error(dialog, field)}
        </fieldset>
    }
}

#[component]
fn PrivacyCheckbox(dialog: LeadDialog) -> impl IntoView {
    let field = Field::Privacy;
    view! {
        <div class="form-field privacy">
            <label class="checkbox-option">
                <input
                    id=field.name()
                    type="checkbox"
                    prop:checked=move || dialog.controller.with(|c| c.draft().privacy_accepted)
                    on:change=move |e| dialog.set_privacy(event_target_checked(&e))
                />
                "Aceito receber comunicações da Terra Precision sobre produtos e serviços. "
                "Posso cancelar o recebimento a qualquer momento. Consulte nossa "
                <a href="#privacidade">"Política de Privacidade"</a>
                "."
            </label>
            {field_error(dialog, field)}
        </div>
    }
}
