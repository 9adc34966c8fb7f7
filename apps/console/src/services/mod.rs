pub mod browser;
pub mod export;
