//! # pronto
//!
//! Content and behaviour behind the Pronto Office website: the route table,
//! the static product galleries, outbound deep links (chat, email, maps) and
//! the contact form flow that talks to a Formspree-style relay.
//!
//! Nothing in here touches the browser. The `pronto-site` crate renders the
//! views with Leptos and plugs browser APIs into the seams this crate exposes
//! (most notably [`contact::RelayTransport`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use pronto::config::SiteConfig;
//! use pronto::contact::{ContactFlow, ContactForm, Dispatch};
//! use pronto::contact::relay::NoRelay;
//!
//! let config = SiteConfig::default();
//! let flow = ContactFlow::new(&config, NoRelay);
//!
//! let form = ContactForm {
//!     name: "Ana".into(),
//!     phone: "+57 300 000 0000".into(),
//!     email: "ana@example.com".into(),
//!     message: "Necesito un tablero de 120x240".into(),
//!     accepted_policy: true,
//! };
//!
//! // Without a relay id the flow hands off to the user's mail client.
//! match flow.prepare(&form) {
//!     Ok(Dispatch::Handoff(href)) => assert!(href.starts_with("mailto:")),
//!     other => panic!("unexpected dispatch: {other:?}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - site configuration (embedded TOML + build-time env)
//! - [`routes`] - path → page resolution and scroll behaviour
//! - [`catalog`] - gallery data and the lightbox preview state
//! - [`links`] - chat / mailto / maps URL builders
//! - [`contact`] - validation, relay request/reply, submission status
//! - [`seo`] - page metadata and schema.org JSON-LD
//! - [`motion`] - tilt and parallax math

pub mod catalog;
pub mod config;
pub mod contact;
pub mod links;
pub mod motion;
pub mod routes;
pub mod seo;

pub use catalog::{Gallery, GalleryItem, ItemTag, Preview};
pub use config::{ConfigError, SiteConfig};
pub use contact::{
    ContactError, ContactFlow, ContactForm, Settled, SubmissionStatus, SubmitOutcome,
};
pub use routes::{Route, ScrollBehavior};
