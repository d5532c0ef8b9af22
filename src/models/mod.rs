pub mod settings;

pub use settings::DailySettings;
