// One unit struct per visual template. Each implements `TemplateGenerator`;
// registration happens in `render::registry`.

pub mod cyber;
pub mod elegant;
pub mod futuristic;
pub mod minimalist;
pub mod modern;
pub mod neobrutalist;
pub mod studio;
pub mod techdoc;

pub use cyber::Cyber;
pub use elegant::Elegant;
pub use futuristic::Futuristic;
pub use minimalist::Minimalist;
pub use modern::Modern;
pub use neobrutalist::Neobrutalist;
pub use studio::Studio;
pub use techdoc::TechDoc;
