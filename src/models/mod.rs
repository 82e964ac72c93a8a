// Module exports for models

pub mod scope;
pub mod settings;
