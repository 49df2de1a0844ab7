//! stencil's application entry point.
//! Parses arguments, sets up logging and hands the request to the renderer.

use stencil::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    renderer::{render_files, RenderRequest},
    reporter::ConsoleReporter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration location (defaults to the working directory)
/// 2. Lists templates when asked to
/// 3. Renders the named template with the given fields
fn run(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config_location = args.config.clone().unwrap_or_else(|| working_dir.clone());

    if args.list {
        let config = load_config(&config_location)?;
        for name in config.template_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let request = RenderRequest {
        template_name: args.template.clone().unwrap_or_default(),
        fields: args.field_map()?,
    };
    let reporter = ConsoleReporter::new();
    render_files(&request, &config_location, &working_dir, &reporter)?;
    Ok(())
}
