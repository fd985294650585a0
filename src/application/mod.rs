/// Application layer - the graph generation use case and its DTOs
pub mod dto;
pub mod use_cases;
