//! Page metadata: title, description, canonical URL and JSON-LD.

use serde::Serialize;

use crate::catalog::Gallery;
use crate::config::SiteConfig;
use crate::routes::Route;

/// Head tags for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    /// Absent for the not-found page.
    pub canonical: Option<String>,
}

impl PageMeta {
    pub fn for_route(route: Route, config: &SiteConfig) -> Self {
        if let Some(gallery) = Gallery::for_route(route) {
            return Self {
                title: gallery.seo_title,
                description: gallery.seo_description,
                canonical: route.path().map(|p| config.absolute_url(p)),
            };
        }

        let (title, description) = match route {
            Route::Home => (
                "Pronto Office – Tableros y soluciones confiables",
                "Tableros que inspiran y organizan tus ideas. Fabricación a medida, instalaciones \
                 profesionales y entregas a nivel nacional. Confía en Pronto Office.",
            ),
            Route::Nosotros => (
                "Nosotros – Pronto Office",
                "Empresa colombiana con más de 20 años fabricando tableros en acrílico y carteleras \
                 de corcho. Conoce nuestra misión, trayectoria y valores: Servicio, Sostenibilidad e Innovación.",
            ),
            Route::Contacto => (
                "Contacto | Pronto Office",
                "Contáctanos para cotizar tableros, carteleras y soluciones corporativas. Atención \
                 rápida por email o WhatsApp.",
            ),
            _ => ("Página no encontrada | Pronto Office", "La ruta no existe."),
        };

        Self {
            title,
            description,
            canonical: route.path().map(|p| config.absolute_url(p)),
        }
    }
}

#[derive(Serialize)]
struct ItemList {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "itemListElement")]
    elements: Vec<ListItem>,
}

#[derive(Serialize)]
struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    position: usize,
    name: &'static str,
    image: String,
    url: String,
}

/// schema.org `ItemList` listing every item of a gallery, in order.
pub fn item_list_json_ld(gallery: &Gallery, config: &SiteConfig) -> String {
    let url = gallery
        .route
        .path()
        .map(|p| config.absolute_url(p))
        .unwrap_or_else(|| config.site_url.clone());

    let list = ItemList {
        context: "https://schema.org",
        kind: "ItemList",
        name: gallery.title,
        elements: gallery
            .cards()
            .iter()
            .enumerate()
            .map(|(idx, item)| ListItem {
                kind: "ListItem",
                position: idx + 1,
                name: item.name,
                image: config.absolute_url(item.image),
                url: url.clone(),
            })
            .collect(),
    };

    // Only strings and integers: serialization cannot fail.
    serde_json::to_string(&list).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OTROS;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn json_ld_lists_every_item() {
        let config = SiteConfig::default();
        let value: Value = serde_json::from_str(&item_list_json_ld(&OTROS, &config)).expect("json");

        assert_eq!(value["@type"], "ItemList");
        let elements = value["itemListElement"].as_array().expect("array");
        assert_eq!(elements.len(), OTROS.cards().len());
        assert_eq!(
            elements[0],
            json!({
                "@type": "ListItem",
                "position": 1,
                "name": "Papelógrafo",
                "image": "https://www.pronto-office.com/img/otros_productos/otros_1.png",
                "url": "https://www.pronto-office.com/otros"
            })
        );
        assert_eq!(elements[4]["position"], 5);
    }

    #[test]
    fn page_meta_canonical() {
        let config = SiteConfig::default();
        let meta = PageMeta::for_route(Route::Tableros, &config);
        assert_eq!(meta.title, "Tableros acrílicos en Bogotá | Pronto Office");
        assert_eq!(meta.canonical.as_deref(), Some("https://www.pronto-office.com/tableros"));

        let home = PageMeta::for_route(Route::Home, &config);
        assert_eq!(home.canonical.as_deref(), Some("https://www.pronto-office.com/"));

        let missing = PageMeta::for_route(Route::NotFound, &config);
        assert_eq!(missing.canonical, None);
    }
}
