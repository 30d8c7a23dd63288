// Pronto Office pages, one per route

mod contacto;
mod gallery;
mod home;
mod nosotros;
mod not_found;

pub use contacto::ContactoPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use nosotros::NosotrosPage;
pub use not_found::NotFoundPage;
