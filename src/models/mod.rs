pub mod action;
pub mod event;
pub mod shift;
pub mod week;
