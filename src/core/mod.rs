pub mod aggregate;
pub mod backup;
pub mod reconstruct;
pub mod refresh;
pub mod toggle;
