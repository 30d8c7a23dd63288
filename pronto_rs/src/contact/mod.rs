//! Contact form: validation, relay submission and mailto hand-off.
//!
//! The flow is split so the browser can drive it without holding borrows
//! across an await point:
//!
//! 1. [`ContactFlow::prepare`] validates and decides between the relay and
//!    a `mailto:` hand-off.
//! 2. [`ContactFlow::deliver`] performs the single relay POST.
//!
//! [`Settled::from_delivery`] turns the result into a form reset and a
//! status event. [`ContactFlow::submit`] chains all three.

pub mod relay;
pub mod status;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::links;
pub use relay::{RelayReply, RelayRequest, RelayTransport, TransportError};
pub use status::{STATUS_DISPLAY, StatusEvent, SubmissionStatus};

/// Banner shown after the relay accepted the message.
pub const SUCCESS_MESSAGE: &str = "¡Gracias! Hemos recibido tu mensaje y te contactaremos pronto.";
const TRANSPORT_FALLBACK: &str = "Ocurrió un error al enviar el mensaje.";

const NAME_MIN: usize = 2;
const MESSAGE_MIN: usize = 10;

// Optional '+', a digit, then six or more digits/spaces/dashes/parens/dots.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s\-().]{6,}$").expect("phone pattern compiles"));

/// What the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    /// Data-treatment policy checkbox (mandatory).
    pub accepted_policy: bool,
}

impl ContactForm {
    /// Back to a blank form with consent unchecked.
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }

    /// Store a text input. `Field::Policy` is a checkbox, see
    /// [`ContactForm::set_consent`].
    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
            Field::Policy => {}
        }
    }

    pub fn set_consent(&mut self, accepted: bool) {
        self.accepted_policy = accepted;
    }
}

/// Form inputs that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
    Policy,
}

impl Field {
    /// Input `name` attribute / relay field name.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
            Field::Policy => "acceptedPolicy",
        }
    }
}

/// Per-field messages from the last submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop one field's message, used when the visitor edits that field.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Check every rule; an empty result means the form may be sent.
pub fn validate(form: &ContactForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.name.trim().chars().count() < NAME_MIN {
        errors.insert(Field::Name, "Escribe tu nombre (mínimo 2 caracteres).");
    }
    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "El email es obligatorio.");
    }
    if !PHONE_RE.is_match(form.phone.trim()) {
        errors.insert(Field::Phone, "Ingresa un teléfono válido.");
    }
    if form.message.trim().chars().count() < MESSAGE_MIN {
        errors.insert(Field::Message, "Cuéntanos más detalles (mínimo 10 caracteres).");
    }
    if !form.accepted_policy {
        errors.insert(
            Field::Policy,
            "Debes aceptar la Política de Tratamiento de Datos Personales.",
        );
    }

    errors
}

/// `mailto:` hand-off used when no relay is configured.
pub fn mailto_for(form: &ContactForm, to: &str) -> String {
    let name = match form.name.trim() {
        "" => "Sin nombre",
        name => name,
    };
    let subject = format!("Contacto desde la web - {name}");
    let body = format!(
        "Nombre: {}\nEmail: {}\nTeléfono: {}\n\nMensaje:\n{}",
        form.name, form.email, form.phone, form.message
    );
    links::mailto(to, &subject, &body)
}

/// A relay submission that did not go through. The display text is what
/// the banner shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The relay answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// The relay could not be reached.
    #[error("{0}")]
    Transport(String),
}

/// What [`ContactFlow::prepare`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Relay(RelayRequest),
    /// Navigate to this `mailto:` link instead of posting.
    Handoff(String),
}

/// Result of one press of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Invalid(ValidationErrors),
    Failed(String),
    Handoff(String),
}

/// Contact flow bound to a relay endpoint (if any) and a transport.
#[derive(Debug, Clone)]
pub struct ContactFlow<T> {
    endpoint: Option<String>,
    contact_email: String,
    transport: T,
}

impl<T> ContactFlow<T> {
    pub fn new(config: &SiteConfig, transport: T) -> Self {
        Self {
            endpoint: config.relay_endpoint(),
            contact_email: config.contact_email.clone(),
            transport,
        }
    }

    pub fn has_relay(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Validate and pick the delivery path. Nothing is sent here.
    pub fn prepare(&self, form: &ContactForm) -> Result<Dispatch, ValidationErrors> {
        let errors = validate(form);
        if !errors.is_empty() {
            debug!(count = errors.len(), "contact form failed validation");
            return Err(errors);
        }

        Ok(match &self.endpoint {
            Some(endpoint) => Dispatch::Relay(RelayRequest::from_form(endpoint.as_str(), form)),
            None => Dispatch::Handoff(mailto_for(form, &self.contact_email)),
        })
    }
}

impl<T: RelayTransport> ContactFlow<T> {
    /// Send one request. No retries.
    pub async fn deliver(&self, request: &RelayRequest) -> Result<(), ContactError> {
        let reply = match self.transport.post_form(request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "contact relay unreachable");
                let message = match err.0.trim() {
                    "" => TRANSPORT_FALLBACK.to_string(),
                    msg => msg.to_string(),
                };
                return Err(ContactError::Transport(message));
            }
        };

        if reply.is_success() {
            info!(status = reply.status, "contact form delivered");
            Ok(())
        } else {
            let message = reply.error_message();
            warn!(status = reply.status, %message, "contact relay rejected submission");
            Err(ContactError::Rejected(message))
        }
    }

    /// Full submit: validate, send or hand off, then update `form` and
    /// `status`. Resetting the status to idle after [`STATUS_DISPLAY`] is
    /// left to the caller's timer.
    pub async fn submit(&self, form: &mut ContactForm, status: &mut SubmissionStatus) -> SubmitOutcome {
        let request = match self.prepare(form) {
            Err(errors) => return SubmitOutcome::Invalid(errors),
            Ok(Dispatch::Handoff(href)) => return SubmitOutcome::Handoff(href),
            Ok(Dispatch::Relay(request)) => request,
        };

        status.apply(StatusEvent::Started);
        let settled = Settled::from_delivery(self.deliver(&request).await);
        if settled.clear_form {
            form.reset();
        }
        let outcome = match &settled.event {
            StatusEvent::Failed(message) => SubmitOutcome::Failed(message.clone()),
            _ => SubmitOutcome::Delivered,
        };
        status.apply(settled.event);
        outcome
    }
}

/// What a finished relay attempt does to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    /// Only a delivered message empties the form.
    pub clear_form: bool,
    pub event: StatusEvent,
}

impl Settled {
    pub fn from_delivery(result: Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => Self {
                clear_form: true,
                event: StatusEvent::Delivered(SUCCESS_MESSAGE.to_string()),
            },
            Err(err) => Self {
                clear_form: false,
                event: StatusEvent::Failed(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid() -> ContactForm {
        ContactForm {
            name: "Ana".into(),
            phone: "+57 (300) 000-0000".into(),
            email: "ana@example.com".into(),
            message: "Quiero cotizar dos tableros".into(),
            accepted_policy: true,
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn short_name_is_rejected_after_trim() {
        let form = ContactForm { name: "  A  ".into(), ..valid() };
        let errors = validate(&form);
        assert_eq!(errors.get(Field::Name), Some("Escribe tu nombre (mínimo 2 caracteres)."));
        assert_eq!(errors.len(), 1);

        let accented = ContactForm { name: "Ñu".into(), ..valid() };
        assert!(validate(&accented).is_empty());
    }

    #[test]
    fn email_only_needs_content() {
        let form = ContactForm { email: "no-at-sign".into(), ..valid() };
        assert!(validate(&form).is_empty());

        let form = ContactForm { email: "   ".into(), ..valid() };
        assert!(validate(&form).contains(Field::Email));
    }

    #[test]
    fn phone_pattern() {
        for ok in ["3001234567", "+573001234567", "300 123 4567", "1 (234) 567-8", "601.234.5678"] {
            let form = ContactForm { phone: ok.into(), ..valid() };
            assert!(validate(&form).is_empty(), "{ok} should pass");
        }
        for bad in ["", "123456", "+", "abc1234567", "+ 3001234567", "300-123-456x"] {
            let form = ContactForm { phone: bad.into(), ..valid() };
            assert!(validate(&form).contains(Field::Phone), "{bad} should fail");
        }
    }

    #[test]
    fn message_needs_ten_characters() {
        let form = ContactForm { message: "  corto   ".into(), ..valid() };
        assert!(validate(&form).contains(Field::Message));
        let form = ContactForm { message: "diez letra".into(), ..valid() };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn consent_is_mandatory() {
        let form = ContactForm { accepted_policy: false, ..valid() };
        let errors = validate(&form);
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![(Field::Policy, "Debes aceptar la Política de Tratamiento de Datos Personales.")]
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&ContactForm::default());
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Phone, Field::Email, Field::Message, Field::Policy]
        );
    }

    #[test]
    fn editing_clears_one_field() {
        let mut errors = validate(&ContactForm::default());
        errors.clear(Field::Email);
        assert!(!errors.contains(Field::Email));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn set_text_targets_one_field() {
        let mut form = ContactForm::default();
        form.set_text(Field::Phone, "3001234567".into());
        form.set_text(Field::Policy, "ignored".into());
        form.set_consent(true);
        assert_eq!(form.phone, "3001234567");
        assert!(form.name.is_empty());
        assert!(form.accepted_policy);

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn mailto_contains_the_submission() {
        let href = mailto_for(&valid(), "pronto2012@hotmail.com");
        assert!(href.starts_with("mailto:pronto2012@hotmail.com?subject=Contacto%20desde%20la%20web%20-%20Ana&body="));
        assert!(href.contains("Nombre%3A%20Ana"));
        assert!(href.contains("ana%40example.com"));
        assert!(href.contains("%2B57%20%28300%29%20000-0000"));
        assert!(href.contains("%0D%0A%0D%0AMensaje%3A%0D%0A"));
    }

    #[test]
    fn prepare_without_relay_hands_off() {
        let flow = ContactFlow::new(&SiteConfig::default(), relay::NoRelay);
        assert!(!flow.has_relay());
        match flow.prepare(&valid()) {
            Ok(Dispatch::Handoff(href)) => assert!(href.starts_with("mailto:")),
            other => panic!("expected hand-off, got {other:?}"),
        }
    }

    #[test]
    fn prepare_with_relay_builds_request() {
        let config = SiteConfig {
            relay_id: Some("mzzbqkrw".into()),
            ..Default::default()
        };
        let flow = ContactFlow::new(&config, relay::NoRelay);
        match flow.prepare(&valid()) {
            Ok(Dispatch::Relay(request)) => {
                assert_eq!(request.endpoint, "https://formspree.io/f/mzzbqkrw");
                assert_eq!(request.field("name"), Some("Ana"));
            }
            other => panic!("expected relay request, got {other:?}"),
        }
    }

    #[test]
    fn delivery_clears_form_and_shows_thanks() {
        let settled = Settled::from_delivery(Ok(()));
        assert!(settled.clear_form);
        assert_eq!(settled.event, StatusEvent::Delivered(SUCCESS_MESSAGE.to_string()));
    }

    #[test]
    fn failed_delivery_keeps_form_and_shows_reason() {
        let rejected = Settled::from_delivery(Err(ContactError::Rejected("Correo inválido".into())));
        assert_eq!(
            rejected,
            Settled {
                clear_form: false,
                event: StatusEvent::Failed("Correo inválido".into()),
            }
        );

        let offline = Settled::from_delivery(Err(ContactError::Transport("Failed to fetch".into())));
        assert!(!offline.clear_form);
        assert_eq!(offline.event, StatusEvent::Failed("Failed to fetch".into()));
    }

    #[test]
    fn settled_event_drives_status_out_of_loading() {
        let mut status = SubmissionStatus::default();
        status.apply(StatusEvent::Started);
        status.apply(Settled::from_delivery(Ok(())).event);
        assert_eq!(status, SubmissionStatus::Success(SUCCESS_MESSAGE.to_string()));
    }

    #[test]
    fn prepare_rejects_invalid_form() {
        let flow = ContactFlow::new(&SiteConfig::default(), relay::NoRelay);
        let err = flow
            .prepare(&ContactForm { accepted_policy: false, ..valid() })
            .unwrap_err();
        assert!(err.contains(Field::Policy));
    }
}
