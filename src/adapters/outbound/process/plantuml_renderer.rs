use crate::ports::outbound::{CommandRunner, DiagramRenderer};
use crate::shared::error::DepVizError;
use crate::shared::Result;
use std::io;
use std::path::{Path, PathBuf};

/// Launcher used for `.jar` renderers
pub const JAVA_PROGRAM: &str = "java";

const IMAGE_EXTENSION: &str = "png";

/// PlantUmlRenderer adapter invoking PlantUML on a diagram file
///
/// A `visualization_program_path` ending in `.jar` is started as
/// `java -jar <jar> <diagram>`; anything else is executed directly as
/// `<program> <diagram>` (e.g. a `plantuml` wrapper script).
pub struct PlantUmlRenderer<R> {
    runner: R,
}

impl<R: CommandRunner> PlantUmlRenderer<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn is_jar(program_path: &Path) -> bool {
        program_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
    }

    /// Image path PlantUML produces next to the diagram file
    pub fn image_path_for(diagram_path: &Path) -> PathBuf {
        diagram_path.with_extension(IMAGE_EXTENSION)
    }
}

impl<R: CommandRunner> DiagramRenderer for PlantUmlRenderer<R> {
    fn render(&self, program_path: &Path, diagram_path: &Path) -> Result<PathBuf> {
        let program_display = program_path.to_string_lossy().into_owned();
        let diagram_arg = diagram_path.to_string_lossy().into_owned();

        let (program, args, missing_hint) = if Self::is_jar(program_path) {
            if !program_path.is_file() {
                return Err(DepVizError::RendererNotFound {
                    program: program_display,
                    hint: "Download plantuml.jar from https://plantuml.com/download and point visualization_program_path at it".to_string(),
                }
                .into());
            }
            (
                JAVA_PROGRAM.to_string(),
                vec!["-jar".to_string(), program_display, diagram_arg],
                "Install a Java runtime and make sure `java` is on your PATH",
            )
        } else {
            (
                program_display,
                vec![diagram_arg],
                "Check that visualization_program_path points to an executable",
            )
        };

        let output = match self.runner.run(&program, &args) {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DepVizError::RendererNotFound {
                    program,
                    hint: missing_hint.to_string(),
                }
                .into());
            }
            Err(e) => anyhow::bail!("Failed to run {}: {}", program, e),
        };

        if !output.success() {
            return Err(DepVizError::RenderProcessError {
                diagram: diagram_path.to_path_buf(),
                status: output.status_description(),
                stderr: output.stderr.trim().to_string(),
            }
            .into());
        }

        Ok(Self::image_path_for(diagram_path))
    }
}
