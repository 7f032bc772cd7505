// Adapters layer: HTTP clients for the job boards.

pub mod headhunter;
pub mod http;
pub mod superjob;

pub use headhunter::HeadHunter;
pub use http::build_client;
pub use superjob::SuperJob;
