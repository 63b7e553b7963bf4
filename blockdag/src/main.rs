use blockdag::{cli, commands, ui, Command, Config};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Load configuration (use defaults unless config file is provided)
    let mut config = match &args.config_path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                ui::print_status("✗", &format!("Failed to load configuration: {}", e), ui::StatusType::Error);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    // Apply CLI overrides
    config.apply_cli_overrides(&args);

    // Initialize logging
    init_logging(&config.log.level);

    let result = match &args.command {
        Command::Check => commands::run_check(&config).map(|check| {
            if check.is_valid_dag() {
                info!("Graph is a valid DAG");
                ui::print_status("✓", "Graph is a valid DAG", ui::StatusType::Success);
            } else {
                info!("Graph is not a DAG: {:?}", check);
                ui::print_status("!", "Graph contains a cycle", ui::StatusType::Warning);
            }
        }),
        Command::Sets { vertex } => commands::run_sets(&config, vertex).map(|sets| match sets {
            Some(_) => ui::print_status("✓", &format!("Wrote sets of {}", vertex), ui::StatusType::Success),
            None => ui::print_status("i", &format!("Vertex {} not found, nothing written", vertex), ui::StatusType::Info),
        }),
    };

    if let Err(e) = result {
        ui::print_status("✗", &e.to_string(), ui::StatusType::Error);
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
