use leptos::prelude::*;
use leptos::task::spawn_local;
use pronto::contact::{
    ContactFlow, ContactForm, Dispatch, Field, STATUS_DISPLAY, Settled, StatusEvent,
    SubmissionStatus, ValidationErrors,
};
use pronto::contact::relay::HONEYPOT_FIELD;
use pronto::links;
use pronto::routes::Route;
use web_sys::SubmitEvent;

use crate::browser;
use crate::relay::FetchRelay;
use crate::sections::PageMetaTags;
use crate::use_config;

const CHAT_MESSAGE: &str = "Hola, vengo de la web y quiero cotizar productos. ¿Me ayudas?";
const POLICY_PDF: &str = "/POL%C3%8DTICA%20DE%20TRATAMIENTO%20DE%20DATOS%20PERSONALES.pdf";
const MESSAGE_MAX: &str = "1500";

#[component]
pub fn ContactoPage() -> impl IntoView {
    let config = use_config();
    let flow = ContactFlow::new(&config, FetchRelay);
    let chat = links::chat_link(config.chat_phone(), CHAT_MESSAGE);

    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let status = RwSignal::new(SubmissionStatus::default());
    // Bumped per outcome so an older timer cannot hide a newer banner.
    let round = StoredValue::new(0_u64);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(SubmissionStatus::is_loading) {
            return;
        }

        let request = match flow.prepare(&form.get_untracked()) {
            Err(found) => {
                errors.set(found);
                return;
            }
            Ok(Dispatch::Handoff(href)) => {
                errors.set(ValidationErrors::default());
                browser::open_href(&href);
                return;
            }
            Ok(Dispatch::Relay(request)) => request,
        };

        errors.set(ValidationErrors::default());
        status.update(|s| s.apply(StatusEvent::Started));

        let flow = flow.clone();
        spawn_local(async move {
            let settled = Settled::from_delivery(flow.deliver(&request).await);
            if settled.clear_form {
                form.update(ContactForm::reset);
            }
            status.update(|s| s.apply(settled.event));

            round.update_value(|r| *r += 1);
            let ticket = round.get_value();
            set_timeout(
                move || {
                    if round.get_value() == ticket {
                        status.update(|s| s.apply(StatusEvent::Expired));
                    }
                },
                STATUS_DISPLAY,
            );
        });
    };

    let edit = move |field: Field, value: String| {
        form.update(|f| f.set_text(field, value));
        errors.update(|e| e.clear(field));
    };

    view! {
        <PageMetaTags route=Route::Contacto />
        <section class="contact">
            <div class="container contact-inner">
                <header class="contact-header">
                    <h1>"Hablemos de tu proyecto"</h1>
                    <p class="contact-subtitle">
                        "Respuesta en menos de 24 horas. También puedes escribirnos por WhatsApp."
                    </p>
                </header>

                <div role="status" aria-live="polite">
                    <StatusBanner status />
                </div>

                <form class="contact-form" on:submit=on_submit novalidate=true>
                    <div class="form-group">
                        <label for="contactName">"Nombre"</label>
                        <input
                            id="contactName"
                            name="name"
                            placeholder="Tu nombre"
                            autocomplete="name"
                            aria-invalid=invalid(errors, Field::Name)
                            aria-describedby="nameError"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| edit(Field::Name, event_target_value(&ev))
                        />
                        <FieldError errors field=Field::Name id="nameError" />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="contactPhone">"Teléfono"</label>
                            <input
                                id="contactPhone"
                                name="phone"
                                placeholder="+57 300 000 0000"
                                inputmode="tel"
                                autocomplete="tel"
                                aria-invalid=invalid(errors, Field::Phone)
                                aria-describedby="phoneError"
                                prop:value=move || form.with(|f| f.phone.clone())
                                on:input=move |ev| edit(Field::Phone, event_target_value(&ev))
                            />
                            <FieldError errors field=Field::Phone id="phoneError" />
                        </div>
                        <div class="form-group">
                            <label for="contactEmail">"E-mail"</label>
                            <input
                                id="contactEmail"
                                type="email"
                                name="email"
                                placeholder="tu@correo.com"
                                autocomplete="email"
                                aria-invalid=invalid(errors, Field::Email)
                                aria-describedby="emailError"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| edit(Field::Email, event_target_value(&ev))
                            />
                            <FieldError errors field=Field::Email id="emailError" />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="contactMessage">"Mensaje"</label>
                        <textarea
                            id="contactMessage"
                            name="message"
                            rows="5"
                            maxlength=MESSAGE_MAX
                            placeholder="Cuéntanos qué necesitas (medidas, cantidades, plazos)…"
                            aria-invalid=invalid(errors, Field::Message)
                            aria-describedby="messageError"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| edit(Field::Message, event_target_value(&ev))
                        ></textarea>
                        <FieldError errors field=Field::Message id="messageError" />
                    </div>

                    // Hidden from people; bots tend to fill it.
                    <input type="text" name=HONEYPOT_FIELD class="honeypot" tabindex="-1" autocomplete="off" />

                    <div class="form-group form-check">
                        <input
                            id="acceptPolicy"
                            type="checkbox"
                            aria-required="true"
                            aria-invalid=invalid(errors, Field::Policy)
                            prop:checked=move || form.with(|f| f.accepted_policy)
                            on:change=move |ev| {
                                form.update(|f| f.set_consent(event_target_checked(&ev)));
                                errors.update(|e| e.clear(Field::Policy));
                            }
                        />
                        <label for="acceptPolicy">
                            "Acepto la "
                            <a href=POLICY_PDF target="_blank" rel="noopener noreferrer" class="policy-link">
                                "Política de Tratamiento de Datos Personales"
                            </a>
                        </label>
                        <FieldError errors field=Field::Policy id="policyError" />
                    </div>

                    <div class="form-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || status.with(SubmissionStatus::is_loading)
                        >
                            {move || if status.with(SubmissionStatus::is_loading) { "Enviando…" } else { "Enviar" }}
                        </button>
                        <a
                            href=chat
                            target="_blank"
                            rel="noopener noreferrer"
                            class="contact-chat"
                            aria-label="Escribir por WhatsApp"
                        >
                            "Escríbenos por WhatsApp"
                        </a>
                    </div>
                </form>
            </div>
        </section>
    }
}

fn invalid(errors: RwSignal<ValidationErrors>, field: Field) -> impl Fn() -> &'static str {
    move || if errors.with(|e| e.contains(field)) { "true" } else { "false" }
}

#[component]
fn FieldError(errors: RwSignal<ValidationErrors>, field: Field, id: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field)).map(|message| {
            view! {
                <div id=id class="form-error" role="alert">
                    {message}
                </div>
            }
        })
    }
}

#[component]
fn StatusBanner(status: RwSignal<SubmissionStatus>) -> impl IntoView {
    move || match status.get() {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Loading => Some(view! {
            <div class="alert alert-info">
                <span class="spinner" aria-hidden="true"></span>
                "Enviando…"
            </div>
        }.into_any()),
        SubmissionStatus::Success(message) => Some(view! {
            <div class="alert alert-success">{message}</div>
        }.into_any()),
        SubmissionStatus::Error(message) => Some(view! {
            <div class="alert alert-danger">{message}</div>
        }.into_any()),
    }
}
