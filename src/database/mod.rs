pub mod pool;
pub mod postgres;
pub mod repository;

pub use postgres::PgTriviaRepository;
pub use repository::TriviaRepository;
