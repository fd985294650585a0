mod cli;

use cli::Args;
use npm_depviz::prelude::*;
use std::process;

fn main() {
    // clap exits with InvalidArguments (2) on its own
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Create adapters (Dependency Injection)
    let config_reader = FileSystemReader::new();
    let dependency_fetcher = NpmDependencyFetcher::new(SystemCommandRunner::new());
    let diagram_writer = FileSystemWriter::new();
    let diagram_renderer = PlantUmlRenderer::new(SystemCommandRunner::new());
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateGraphUseCase::new(
        config_reader,
        dependency_fetcher,
        diagram_writer,
        diagram_renderer,
        progress_reporter,
    );

    let request = GraphRequest::new(args.config, !args.no_render);
    use_case.generate_graph(request)?;

    Ok(())
}
