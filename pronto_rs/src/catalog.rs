//! Product galleries and the lightbox preview state.
//!
//! All data is authored here and compiled in; nothing is fetched or mutated
//! at runtime. Galleries always show their whole list, there is no filter,
//! search or sort.

use crate::config::SiteConfig;
use crate::links;
use crate::routes::Route;

/// Secondary badge on a gallery card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemTag {
    Estandar,
    Personalizadas,
    Mixtas,
    Rodachines,
    Pano,
    Otros,
}

impl ItemTag {
    pub fn label(self) -> &'static str {
        match self {
            ItemTag::Estandar => "Estándar",
            ItemTag::Personalizadas => "Personalizadas",
            ItemTag::Mixtas => "Mixtas",
            ItemTag::Rodachines => "Con rodachines",
            ItemTag::Pano => "En paño",
            ItemTag::Otros => "Otros",
        }
    }
}

/// One card in a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    /// Unique within its gallery.
    pub id: u32,
    pub name: &'static str,
    /// Printed dimensions; some products have none.
    pub size: Option<&'static str>,
    pub tag: ItemTag,
    /// Site-relative image path.
    pub image: &'static str,
    pub alt: &'static str,
}

/// Where the "quote" buttons of a gallery lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteTarget {
    /// Chat deep link (mailto when no phone is configured).
    Chat,
    /// The contact page.
    ContactPage,
}

/// A gallery page: hero copy plus its fixed list of items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gallery {
    pub route: Route,
    pub title: &'static str,
    pub lead: &'static str,
    pub note: Option<&'static str>,
    /// Pre-filled quote message.
    pub quote_message: &'static str,
    /// Subject used when the quote falls back to mail.
    pub mail_subject: &'static str,
    pub quote_target: QuoteTarget,
    pub seo_title: &'static str,
    pub seo_description: &'static str,
    /// Parallax travel of the hero background, in viewport heights.
    pub parallax_vh: f64,
    pub items: &'static [GalleryItem],
}

impl Gallery {
    /// Every item, in authored order.
    pub fn cards(&self) -> &'static [GalleryItem] {
        self.items
    }

    pub fn find(&self, id: u32) -> Option<&'static GalleryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Gallery for a route, if that route is a gallery page.
    pub fn for_route(route: Route) -> Option<&'static Gallery> {
        GALLERIES.iter().find(|g| g.route == route)
    }

    /// Chat (or mailto) link carrying this gallery's quote message.
    pub fn chat_quote_link(&self, config: &SiteConfig) -> String {
        links::quote_link(
            config.whatsapp_phone.as_deref(),
            &config.contact_email,
            self.mail_subject,
            self.quote_message,
        )
    }

    /// Href behind the card-level "Cotizar" buttons.
    pub fn quote_href(&self, config: &SiteConfig) -> String {
        match self.quote_target {
            QuoteTarget::Chat => self.chat_quote_link(config),
            QuoteTarget::ContactPage => Route::Contacto
                .path()
                .unwrap_or("/contacto")
                .to_string(),
        }
    }
}

/// Lightbox state: closed, or open on exactly one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    Closed,
    Open(&'static GalleryItem),
}

impl Preview {
    pub fn open(&mut self, item: &'static GalleryItem) {
        *self = Preview::Open(item);
    }

    pub fn close(&mut self) {
        *self = Preview::Closed;
    }

    pub fn item(&self) -> Option<&'static GalleryItem> {
        match self {
            Preview::Open(item) => Some(item),
            Preview::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Preview::Open(_))
    }
}

pub const TABLEROS_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        name: "Tablero Acrílico",
        size: Some("120×240 cm"),
        tag: ItemTag::Estandar,
        image: "/img/tableros/tablero_acrilico_1.jpg",
        alt: "Tablero Acrílico 120×240 cm",
    },
    GalleryItem {
        id: 2,
        name: "Tablero Acrílico",
        size: Some("120×160 cm"),
        tag: ItemTag::Estandar,
        image: "/img/tableros/tablero_acrilico_2.jpg",
        alt: "Tablero Acrílico 120×160 cm",
    },
    GalleryItem {
        id: 3,
        name: "Tablero Acrílico",
        size: Some("80×120 cm"),
        tag: ItemTag::Estandar,
        image: "/img/tableros/tablero_acrilico_3.jpg",
        alt: "Tablero Acrílico 80×120 cm",
    },
    GalleryItem {
        id: 4,
        name: "Tablero Acrílico",
        size: Some("60×80 cm"),
        tag: ItemTag::Estandar,
        image: "/img/tableros/tablero_acrilico_4.jpg",
        alt: "Tablero Acrílico 60×80 cm",
    },
    GalleryItem {
        id: 5,
        name: "Caballete",
        size: None,
        tag: ItemTag::Estandar,
        image: "/img/tableros/caballete_1.png",
        alt: "Caballete",
    },
    GalleryItem {
        id: 6,
        name: "Caballete",
        size: None,
        tag: ItemTag::Estandar,
        image: "/img/tableros/caballete_2.png",
        alt: "Caballete",
    },
];

pub const CORCHO_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        name: "Cartelera de Corcho",
        size: Some("90×120 cm"),
        tag: ItemTag::Estandar,
        image: "/img/carteleras_corcho/cartelera_corcho1.jpg",
        alt: "Cartelera de Corcho 90×120 cm",
    },
    GalleryItem {
        id: 2,
        name: "Cartelera de Corcho",
        size: Some("30×40 cm"),
        tag: ItemTag::Estandar,
        image: "/img/carteleras_corcho/cartelera_corcho2.jpg",
        alt: "Cartelera de Corcho 30×40 cm",
    },
    GalleryItem {
        id: 3,
        name: "Cartelera Personalizada",
        size: Some("60×90 cm"),
        tag: ItemTag::Personalizadas,
        image: "/img/carteleras_corcho/cartelera_corcho3.png",
        alt: "Cartelera Personalizada 60×90 cm",
    },
    GalleryItem {
        id: 4,
        name: "Cartelera Con Rodachines",
        size: Some("Personalizada"),
        tag: ItemTag::Mixtas,
        image: "/img/carteleras_corcho/cartelera_corcho4.jpg",
        alt: "Cartelera Con Rodachines",
    },
    GalleryItem {
        id: 5,
        name: "Cartelera de Corcho extra",
        size: Some("Personalizada"),
        tag: ItemTag::Rodachines,
        image: "/img/carteleras_corcho/cartelera_corcho5.jpg",
        alt: "Cartelera de Corcho extra",
    },
    GalleryItem {
        id: 6,
        name: "Cartelera Mixta (Corcho + Acrílico)",
        size: Some("Personalizada"),
        tag: ItemTag::Estandar,
        image: "/img/carteleras_corcho/cartelera_corcho6.jpg",
        alt: "Cartelera Mixta (Corcho + Acrílico)",
    },
];

pub const CORPORATIVAS_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        name: "Cartelera corporativa en paño rojo",
        size: None,
        tag: ItemTag::Pano,
        image: "/img/suministros/cartelera_pano1.jpg",
        alt: "Cartelera tapizada en paño rojo",
    },
    GalleryItem {
        id: 2,
        name: "Cartelera corporativa en paño azul",
        size: None,
        tag: ItemTag::Pano,
        image: "/img/suministros/cartelera_pano2.jpg",
        alt: "Cartelera tapizada en paño azul",
    },
];

pub const OTROS_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        name: "Papelógrafo",
        size: None,
        tag: ItemTag::Otros,
        image: "/img/otros_productos/otros_1.png",
        alt: "Papelógrafo",
    },
    GalleryItem {
        id: 2,
        name: "Borradores",
        size: None,
        tag: ItemTag::Otros,
        image: "/img/otros_productos/otros_2.jpg",
        alt: "Borradores",
    },
    GalleryItem {
        id: 3,
        name: "Murales",
        size: None,
        tag: ItemTag::Otros,
        image: "/img/otros_productos/otros_3.jpg",
        alt: "Murales",
    },
    GalleryItem {
        id: 4,
        name: "Tablero de Vidrio",
        size: None,
        tag: ItemTag::Otros,
        image: "/img/otros_productos/otros_4.png",
        alt: "Tablero de Vidrio",
    },
    GalleryItem {
        id: 5,
        name: "Tablero de Vidrio",
        size: None,
        tag: ItemTag::Otros,
        image: "/img/otros_productos/otros_5.png",
        alt: "Tablero de Vidrio, vista alterna",
    },
];

pub const TABLEROS: Gallery = Gallery {
    route: Route::Tableros,
    title: "Tableros acrílicos en Bogotá",
    lead: "Tableros en acrílico borrables para oficinas, educación y hogar en Bogotá. \
           En color blanco o cuadriculados; marcos de aluminio o madera; medidas estándares y personalizadas.",
    note: Some("Ofrecemos trípodes en madera y metálicos. Tableros con rodachines."),
    quote_message: "Hola, me interesa cotizar tableros acrílicos en Bogotá.",
    mail_subject: "Cotización Tableros Acrílicos",
    quote_target: QuoteTarget::Chat,
    seo_title: "Tableros acrílicos en Bogotá | Pronto Office",
    seo_description: "Tableros acrílicos en Bogotá: estándar y personalizados. Marcos en aluminio o madera, \
                      trípodes y rodachines. Fabricación a medida e instalación profesional.",
    parallax_vh: 25.0,
    items: TABLEROS_ITEMS,
};

pub const CARTELERAS_CORCHO: Gallery = Gallery {
    route: Route::CartelerasCorcho,
    title: "Carteleras de corcho",
    lead: "Carteleras de corcho de excelente calidad, medidas estándares ó especiales.",
    note: Some("También podemos personalizarlas"),
    quote_message: "Hola, me interesa cotizar carteleras de corcho.",
    mail_subject: "Cotización Carteleras de corcho",
    quote_target: QuoteTarget::Chat,
    seo_title: "Carteleras de corcho | Pronto Office",
    seo_description: "Carteleras de corcho estándar, personalizadas, mixtas y con rodachines. \
                      Calidad premium e instalación profesional.",
    parallax_vh: 20.0,
    items: CORCHO_ITEMS,
};

pub const CARTELERAS_CORPORATIVAS: Gallery = Gallery {
    route: Route::CartelerasCorporativas,
    title: "Carteleras corporativas",
    lead: "Carteleras corporativas en paño y con el logo de su empresa ó Colegio. \
           Medidas especiales de acuerdo a sus necesidades.",
    note: None,
    quote_message: "Hola, quiero cotizar carteleras corporativas. Vengo de la web.",
    mail_subject: "Cotización Carteleras corporativas",
    quote_target: QuoteTarget::ContactPage,
    seo_title: "Carteleras corporativas | En paño",
    seo_description: "Carteleras corporativas elegantes en paño. Personalización con logo y medidas \
                      especiales. Acabados premium e instalación profesional.",
    parallax_vh: 20.0,
    items: CORPORATIVAS_ITEMS,
};

pub const OTROS: Gallery = Gallery {
    route: Route::Otros,
    title: "Otros productos",
    lead: "Otros productos complementarios, papelógrafos, Borradores y Murales.",
    note: None,
    quote_message: "Hola, vengo del sitio PRONTO OFFICE. Me interesan otros productos. ¿Podemos hablar?",
    mail_subject: "Cotización Otros productos",
    quote_target: QuoteTarget::Chat,
    seo_title: "Otros productos | Pronto Office",
    seo_description: "Otros productos complementarios para tu proyecto. Solicita tu cotización sin compromiso.",
    parallax_vh: 20.0,
    items: OTROS_ITEMS,
};

pub static GALLERIES: [Gallery; 4] = [TABLEROS, CARTELERAS_CORCHO, CARTELERAS_CORPORATIVAS, OTROS];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn galleries_render_their_fixed_counts() {
        assert_eq!(TABLEROS.cards().len(), 6);
        assert_eq!(CARTELERAS_CORCHO.cards().len(), 6);
        assert_eq!(CARTELERAS_CORPORATIVAS.cards().len(), 2);
        assert_eq!(OTROS.cards().len(), 5);
    }

    #[test]
    fn ids_are_unique_per_gallery() {
        for gallery in GALLERIES {
            let ids: HashSet<u32> = gallery.items.iter().map(|i| i.id).collect();
            assert_eq!(ids.len(), gallery.items.len(), "{}", gallery.title);
        }
    }

    #[test]
    fn every_gallery_route_resolves_back() {
        for gallery in GALLERIES {
            let path = gallery.route.path().expect("gallery routes have paths");
            assert_eq!(Route::resolve(path), gallery.route);
            assert_eq!(Gallery::for_route(gallery.route).map(|g| g.title), Some(gallery.title));
        }
        assert!(Gallery::for_route(Route::Contacto).is_none());
    }

    #[test]
    fn preview_opens_and_closes() {
        let mut preview = Preview::default();
        assert_eq!(preview.item(), None);

        let item = CARTELERAS_CORCHO.find(3).expect("item 3");
        preview.open(item);
        assert!(preview.is_open());
        assert_eq!(preview.item().map(|i| i.id), Some(3));

        let other = CARTELERAS_CORCHO.find(5).expect("item 5");
        preview.open(other);
        assert_eq!(preview.item().map(|i| i.id), Some(5));

        preview.close();
        assert_eq!(preview, Preview::Closed);
        assert!(!preview.is_open());
    }

    #[test]
    fn quote_links_follow_config() {
        let mut config = SiteConfig::default();
        assert!(TABLEROS.quote_href(&config).starts_with("mailto:pronto2012@hotmail.com?"));

        config.whatsapp_phone = Some("573001112233".into());
        assert!(TABLEROS.quote_href(&config).starts_with("https://wa.me/573001112233?text="));
        assert_eq!(CARTELERAS_CORPORATIVAS.quote_href(&config), "/contacto");
        assert!(
            CARTELERAS_CORPORATIVAS
                .chat_quote_link(&config)
                .starts_with("https://wa.me/")
        );
    }

    #[test]
    fn tag_labels() {
        assert_eq!(ItemTag::Rodachines.label(), "Con rodachines");
        assert_eq!(ItemTag::Pano.label(), "En paño");
    }
}
