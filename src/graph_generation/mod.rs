/// Domain layer - dependency report model and pure graph transformations
pub mod domain;
pub mod services;
