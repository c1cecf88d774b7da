pub mod fixture;
pub mod http;
pub mod traits;
