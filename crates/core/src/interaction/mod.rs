pub mod breakpoint;
pub mod focus;
pub mod signals;
pub mod throttle;
pub mod tooltip;
pub mod touch;
