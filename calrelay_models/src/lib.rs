pub mod relay;
pub mod reminder;
pub mod settings;
pub mod song;
