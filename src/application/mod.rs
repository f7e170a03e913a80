/// Application layer - Use cases and application services
pub mod dto;
pub mod use_cases;
