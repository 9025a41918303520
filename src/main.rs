use clap::Parser;
use nested_a11y_ids::cli::commands::{cmd_check, cmd_compose, cmd_resolve};
use nested_a11y_ids::cli::config::{Cli, Commands, load_config, resolve_settings, trace_path};
use nested_a11y_ids::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace settings: CLI > config > disabled
    let tracer = TraceLogger::from_path(trace_path(cli.trace.as_deref(), &config));

    match cli.command {
        Commands::Compose { prefix, fragment } => {
            println!("{}", cmd_compose(&prefix, &fragment, cli.verbose));
        }
        Commands::Resolve {
            tree,
            format,
            output,
        } => {
            let settings = resolve_settings(format.as_deref(), output.as_deref(), &config);
            cmd_resolve(
                &tree,
                &settings.format,
                settings.output.as_deref(),
                cli.verbose,
                &tracer,
            )?;
        }
        Commands::Check { tree, expect } => {
            let all_passed = cmd_check(&tree, &expect, cli.verbose, &tracer)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
