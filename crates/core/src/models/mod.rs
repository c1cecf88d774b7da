pub mod asset;
pub mod gain;
pub mod hydration;
pub mod portfolio;
pub mod settings;
pub mod theme;
pub mod view;
