use budget_insights::{cli::run_cli, config::ConfigManager, init_with};

fn main() {
    let config = match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    init_with(&config.logging);

    if let Err(err) = run_cli(config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
