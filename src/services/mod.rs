// Service module exports

pub mod header;
pub mod navigation;
pub mod scope;
pub mod settings;
