pub mod sqlite_short_url_repository;

pub use sqlite_short_url_repository::SqliteShortUrlRepository;
