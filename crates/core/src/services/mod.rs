pub mod holdings_service;
pub mod onboarding_service;
pub mod theme_service;
