/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod graph_request;
mod graph_response;

pub use graph_request::GraphRequest;
pub use graph_response::GraphResponse;
