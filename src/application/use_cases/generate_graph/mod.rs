use crate::application::dto::{GraphRequest, GraphResponse};
use crate::config::GraphSettings;
use crate::graph_generation::domain::{DependencyReport, DiagramText, FlatDependencyMap};
use crate::graph_generation::services::{DependencyFlattener, PlantUmlGenerator};
use crate::ports::inbound::GraphGenerationPort;
use crate::ports::outbound::{
    ConfigReader, DependencyFetcher, DiagramRenderer, DiagramWriter, ProgressReporter,
};
use crate::shared::error::DepVizError;
use crate::shared::Result;
use std::path::PathBuf;

/// GenerateGraphUseCase - Core use case for dependency diagram generation
///
/// Runs the pipeline strictly forward: load config, fetch the dependency
/// report, flatten it, write the PlantUML text and render it. Any failure
/// ends the run; nothing is retried.
///
/// # Type Parameters
/// * `CR` - ConfigReader implementation
/// * `DF` - DependencyFetcher implementation
/// * `DW` - DiagramWriter implementation
/// * `DR` - DiagramRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateGraphUseCase<CR, DF, DW, DR, PR> {
    config_reader: CR,
    dependency_fetcher: DF,
    diagram_writer: DW,
    diagram_renderer: DR,
    progress_reporter: PR,
}

impl<CR, DF, DW, DR, PR> GenerateGraphUseCase<CR, DF, DW, DR, PR>
where
    CR: ConfigReader,
    DF: DependencyFetcher,
    DW: DiagramWriter,
    DR: DiagramRenderer,
    PR: ProgressReporter,
{
    /// Creates a new GenerateGraphUseCase with injected dependencies
    pub fn new(
        config_reader: CR,
        dependency_fetcher: DF,
        diagram_writer: DW,
        diagram_renderer: DR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            config_reader,
            dependency_fetcher,
            diagram_writer,
            diagram_renderer,
            progress_reporter,
        }
    }

    /// Executes the dependency graph use case
    ///
    /// # Returns
    /// GraphResponse describing the written diagram and rendered image
    ///
    /// # Errors
    /// Returns the first error raised by any stage. When rendering fails the
    /// diagram text has already been written and is left in place.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Load configuration and resolve required keys
        let settings = self.load_settings(&request)?;

        // Step 2: Fetch the nested dependency report
        let report = self.fetch_report(&settings)?;

        // Step 3: Flatten it into direct edges
        let dependencies = self.flatten_report(&report);

        // Step 4: Generate and persist the diagram text
        let diagram = PlantUmlGenerator::generate(&dependencies);
        self.write_diagram(&settings, &diagram)?;

        // Step 5: Render the image if requested
        let image_path = if request.render {
            Some(self.render_diagram(&settings)?)
        } else {
            self.progress_reporter
                .report_completion("✅ Diagram text written (rendering skipped)");
            None
        };

        Ok(GraphResponse {
            diagram_path: settings.output_file.clone(),
            settings,
            diagram,
            image_path,
            package_count: dependencies.package_count(),
            edge_count: dependencies.edge_count(),
        })
    }

    fn load_settings(&self, request: &GraphRequest) -> Result<GraphSettings> {
        self.progress_reporter.report(&format!(
            "📖 Loading config from: {}",
            request.config_path.display()
        ));

        let config = self.config_reader.read_config(&request.config_path)?;

        for key in config.unknown_field_names() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Unknown config field '{}' will be ignored.",
                key
            ));
        }

        config.into_settings(&request.config_path)
    }

    /// Fetches the report and rejects an empty one
    fn fetch_report(&self, settings: &GraphSettings) -> Result<DependencyReport> {
        self.progress_reporter.start_task(&format!(
            "🔍 Listing dependencies of '{}' (max depth {})...",
            settings.package_name, settings.max_depth
        ));
        let fetched = self
            .dependency_fetcher
            .fetch_dependencies(&settings.package_name, settings.max_depth);
        self.progress_reporter.finish_task();

        let report = fetched?;

        if report.is_empty() {
            return Err(DepVizError::EmptyDependencyReport.into());
        }

        if let Some(name) = report.name.as_deref() {
            if name != settings.package_name {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: npm reported project '{}' but the config names '{}'.",
                    name, settings.package_name
                ));
            }
        }

        Ok(report)
    }

    fn flatten_report(&self, report: &DependencyReport) -> FlatDependencyMap {
        let dependencies = DependencyFlattener::flatten(report);

        self.progress_reporter.report(&format!(
            "📊 Found {} package(s) with {} edge(s)",
            dependencies.package_count(),
            dependencies.edge_count()
        ));

        dependencies
    }

    fn write_diagram(&self, settings: &GraphSettings, diagram: &DiagramText) -> Result<()> {
        self.diagram_writer
            .write_diagram(&settings.output_file, diagram)?;

        self.progress_reporter.report(&format!(
            "💾 PlantUML code saved to: {}",
            settings.output_file.display()
        ));
        Ok(())
    }

    fn render_diagram(&self, settings: &GraphSettings) -> Result<PathBuf> {
        self.progress_reporter.start_task(&format!(
            "🎨 Rendering {} with {}...",
            settings.output_file.display(),
            settings.visualization_program_path.display()
        ));
        let rendered = self
            .diagram_renderer
            .render(&settings.visualization_program_path, &settings.output_file);
        self.progress_reporter.finish_task();

        match rendered {
            Ok(image_path) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Image saved as: {}",
                    image_path.display()
                ));
                Ok(image_path)
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Rendering failed; the diagram text is kept at: {}",
                    settings.output_file.display()
                ));
                Err(e)
            }
        }
    }
}

impl<CR, DF, DW, DR, PR> GraphGenerationPort for GenerateGraphUseCase<CR, DF, DW, DR, PR>
where
    CR: ConfigReader,
    DF: DependencyFetcher,
    DW: DiagramWriter,
    DR: DiagramRenderer,
    PR: ProgressReporter,
{
    fn generate_graph(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.execute(request)
    }
}
