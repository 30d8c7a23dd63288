// Shared building blocks of the Pronto Office pages

mod floating_chat;
mod footer;
mod lightbox;
mod map_embed;
mod meta;
mod nav;
mod page_hero;
mod product_card;
mod tilt;

pub use floating_chat::FloatingChat;
pub use footer::Footer;
pub use lightbox::Lightbox;
pub use map_embed::MapEmbed;
pub use meta::{JsonLd, PageMetaTags};
pub use nav::Nav;
pub use page_hero::PageHero;
pub use product_card::ProductCard;
pub use tilt::Tilt;
