pub mod headhunter;
pub mod markup;
pub mod superjob;
mod transport;

pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;
