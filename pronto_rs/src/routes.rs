//! Route table for the site shell.

/// Every page the shell knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Tableros,
    CartelerasCorcho,
    CartelerasCorporativas,
    Nosotros,
    Contacto,
    Otros,
    NotFound,
}

impl Route {
    /// Routes in navigation order (header menu).
    pub const NAV: [Route; 7] = [
        Route::Home,
        Route::Tableros,
        Route::CartelerasCorcho,
        Route::CartelerasCorporativas,
        Route::Otros,
        Route::Nosotros,
        Route::Contacto,
    ];

    /// Map a URL path to a page. Query string and fragment are ignored,
    /// a single trailing slash is tolerated, anything else is `NotFound`.
    pub fn resolve(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path {
            "" | "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };

        match path {
            "/" => Route::Home,
            "/tableros" => Route::Tableros,
            "/carteleras/corcho" => Route::CartelerasCorcho,
            "/carteleras/corporativas" => Route::CartelerasCorporativas,
            "/nosotros" => Route::Nosotros,
            "/contacto" => Route::Contacto,
            "/otros" => Route::Otros,
            _ => Route::NotFound,
        }
    }

    /// Canonical path. `NotFound` has none.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::Tableros => Some("/tableros"),
            Route::CartelerasCorcho => Some("/carteleras/corcho"),
            Route::CartelerasCorporativas => Some("/carteleras/corporativas"),
            Route::Nosotros => Some("/nosotros"),
            Route::Contacto => Some("/contacto"),
            Route::Otros => Some("/otros"),
            Route::NotFound => None,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Tableros => "Tableros en Acrílico",
            Route::CartelerasCorcho => "Carteleras de corcho",
            Route::CartelerasCorporativas => "Carteleras corporativas",
            Route::Nosotros => "Nosotros",
            Route::Contacto => "Contáctanos",
            Route::Otros => "Otros productos",
            Route::NotFound => "404",
        }
    }
}

/// How the shell scrolls back to the top after navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

impl ScrollBehavior {
    /// Jump instantly when the user asked for reduced motion.
    pub fn for_motion(prefers_reduced: bool) -> Self {
        if prefers_reduced {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        }
    }
}
