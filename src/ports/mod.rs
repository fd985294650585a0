/// Ports module defining the seams of the graph pipeline
///
/// Inbound ports are what the CLI drives; outbound ports are what the
/// use case needs from config files, npm, PlantUML and the terminal.
pub mod inbound;
pub mod outbound;
