pub mod redirect_service;
pub mod shortener_service;

pub use redirect_service::RedirectService;
pub use shortener_service::{ShortenOutcome, ShortenerService};
