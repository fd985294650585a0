/// Integration tests for the application layer over real filesystem adapters
mod test_utilities;

use npm_depviz::adapters::outbound::process::{JAVA_PROGRAM, NPM_PROGRAM};
use npm_depviz::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;

const NPM_LIST_OUTPUT: &str = r#"{
  "version": "1.0.0",
  "name": "web-app",
  "dependencies": {
    "@babel/core": {
      "version": "7.23.9",
      "overridden": false,
      "dependencies": {
        "@babel/parser": { "version": "7.23.9" },
        "debug": {
          "version": "4.3.4",
          "dependencies": { "ms": { "version": "2.1.2" } }
        }
      }
    },
    "react": {
      "version": "18.2.0",
      "overridden": false,
      "dependencies": {
        "loose-envify": { "version": "1.4.0" }
      }
    },
    "typescript": { "version": "5.3.3", "overridden": false }
  }
}"#;

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write_config(&self, output_file: Option<&Path>, program: &Path) -> PathBuf {
        let mut config = serde_json::json!({
            "package_name": "web-app",
            "max_depth": 2,
            "visualization_program_path": program,
        });
        if let Some(output_file) = output_file {
            config["output_file"] = serde_json::json!(output_file);
        }

        let config_path = self.path("config.json");
        fs::write(&config_path, config.to_string()).unwrap();
        config_path
    }

    fn write_fake_jar(&self) -> PathBuf {
        let jar = self.path("plantuml.jar");
        fs::write(&jar, "PK").unwrap();
        jar
    }
}

fn run_pipeline(
    runner: &MockCommandRunner,
    reporter: &MockProgressReporter,
    config_path: PathBuf,
    render: bool,
) -> Result<GraphResponse> {
    let use_case = GenerateGraphUseCase::new(
        FileSystemReader::new(),
        NpmDependencyFetcher::new(runner.clone()),
        FileSystemWriter::new(),
        PlantUmlRenderer::new(runner.clone()),
        reporter.clone(),
    );
    use_case.execute(GraphRequest::new(config_path, render))
}

#[test]
fn test_generate_graph_happy_path() {
    let project = Project::new();
    let output = project.path("dependencies.puml");
    let jar = project.write_fake_jar();
    let config_path = project.write_config(Some(&output), &jar);

    let runner = MockCommandRunner::new()
        .with_output(NPM_PROGRAM, 0, NPM_LIST_OUTPUT, "")
        .with_output(JAVA_PROGRAM, 0, "", "");
    let reporter = MockProgressReporter::new();

    let response = run_pipeline(&runner, &reporter, config_path, true).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "@startuml\n\
         \x20   \"@babel/core\" --> \"@babel/parser\"\n\
         \x20   \"@babel/core\" --> \"debug\"\n\
         \x20   \"react\" --> \"loose-envify\"\n\
         @enduml"
    );
    assert_eq!(response.package_count, 3);
    assert_eq!(response.edge_count, 3);
    assert_eq!(response.image_path, Some(project.path("dependencies.png")));

    let calls = runner.get_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, vec!["list", "--depth", "2", "--json"]);
    assert_eq!(calls[1].0, JAVA_PROGRAM);
    assert_eq!(
        calls[1].1,
        vec![
            "-jar".to_string(),
            jar.to_string_lossy().into_owned(),
            output.to_string_lossy().into_owned(),
        ]
    );
    assert!(reporter.contains("Image saved as"));
}

#[test]
fn test_grandchildren_are_not_drawn() {
    let project = Project::new();
    let output = project.path("dependencies.puml");
    let config_path = project.write_config(Some(&output), &project.write_fake_jar());

    let runner = MockCommandRunner::new().with_output(NPM_PROGRAM, 0, NPM_LIST_OUTPUT, "");

    run_pipeline(&runner, &MockProgressReporter::new(), config_path, false).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(!written.contains("\"ms\""));
    assert!(!written.contains("\"debug\" -->"));
}

#[test]
fn test_written_diagram_round_trips() {
    let project = Project::new();
    let output = project.path("dependencies.puml");
    let config_path = project.write_config(Some(&output), &project.write_fake_jar());

    let runner = MockCommandRunner::new().with_output(NPM_PROGRAM, 0, NPM_LIST_OUTPUT, "");

    let response = run_pipeline(&runner, &MockProgressReporter::new(), config_path, false).unwrap();

    assert_eq!(fs::read(&output).unwrap(), response.diagram.as_str().as_bytes());
    assert!(runner.programs_called().iter().all(|p| p != JAVA_PROGRAM));
}

#[test]
fn test_missing_output_file_runs_no_process() {
    let project = Project::new();
    let config_path = project.write_config(None, &project.write_fake_jar());

    let runner = MockCommandRunner::new().with_output(NPM_PROGRAM, 0, NPM_LIST_OUTPUT, "");

    let err = run_pipeline(&runner, &MockProgressReporter::new(), config_path, true).unwrap_err();

    assert!(err.to_string().contains("'output_file'"));
    assert!(runner.get_calls().is_empty());
}

#[test]
fn test_missing_config_file() {
    let project = Project::new();
    let runner = MockCommandRunner::new();

    let err = run_pipeline(
        &runner,
        &MockProgressReporter::new(),
        project.path("config.json"),
        true,
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DepVizError>(),
        Some(DepVizError::ConfigNotFound { .. })
    ));
    assert!(runner.get_calls().is_empty());
}

#[test]
fn test_npm_failure_writes_nothing() {
    let project = Project::new();
    let output = project.path("dependencies.puml");
    let config_path = project.write_config(Some(&output), &project.write_fake_jar());

    let runner = MockCommandRunner::new().with_output(
        NPM_PROGRAM,
        1,
        "{}",
        "npm ERR! code ELSPROBLEMS",
    );

    let err = run_pipeline(&runner, &MockProgressReporter::new(), config_path, true).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DepVizError>(),
        Some(DepVizError::FetchProcessError { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_npm_not_installed() {
    let project = Project::new();
    let output = project.path("dependencies.puml");
    let config_path = project.write_config(Some(&output), &project.write_fake_jar());

    let runner = MockCommandRunner::new().with_missing_program(NPM_PROGRAM);

    let err = run_pipeline(&runner, &MockProgressReporter::new(), config_path, true).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DepVizError>(),
        Some(DepVizError::ToolNotFound { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_render_failure_keeps_diagram_file() {
    let project = Project::new();
    let output = project.path("dependencies.puml");
    let config_path = project.write_config(Some(&output), &project.write_fake_jar());

    let runner = MockCommandRunner::new()
        .with_output(NPM_PROGRAM, 0, NPM_LIST_OUTPUT, "")
        .with_output(JAVA_PROGRAM, 1, "", "Error: Unable to access jarfile");
    let reporter = MockProgressReporter::new();

    let err = run_pipeline(&runner, &reporter, config_path, true).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DepVizError>(),
        Some(DepVizError::RenderProcessError { .. })
    ));
    assert!(output.exists());
    assert!(reporter.contains("diagram text is kept at"));
}

#[test]
fn test_missing_jar_keeps_diagram_file() {
    let project = Project::new();
    let output = project.path("dependencies.puml");
    let config_path = project.write_config(Some(&output), &project.path("missing/plantuml.jar"));

    let runner = MockCommandRunner::new().with_output(NPM_PROGRAM, 0, NPM_LIST_OUTPUT, "");

    let err = run_pipeline(&runner, &MockProgressReporter::new(), config_path, true).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DepVizError>(),
        Some(DepVizError::RendererNotFound { .. })
    ));
    assert!(output.exists());
    assert_eq!(runner.programs_called(), vec![NPM_PROGRAM.to_string()]);
}

#[test]
fn test_project_without_dependencies() {
    let project = Project::new();
    let output = project.path("dependencies.puml");
    let config_path = project.write_config(Some(&output), &project.write_fake_jar());

    let runner = MockCommandRunner::new().with_output(
        NPM_PROGRAM,
        0,
        r#"{"name": "web-app", "version": "1.0.0"}"#,
        "",
    );

    run_pipeline(&runner, &MockProgressReporter::new(), config_path, false).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "@startuml\n    ' No dependencies to display\n@enduml"
    );
}
