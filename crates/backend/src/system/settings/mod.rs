pub mod validation;

pub use validation::SettingsError;
