use expensify::cli::Command;
use expensify::middleware::LoggingMiddleware;
use expensify::state::AppState;
use expensify::store::Store;
use expensify::{commands, database, logger};
use expensify_config::{AppConfig, DatabaseCredentials, Profile};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match logger::init() {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(err) => eprintln!("Warning: logging disabled: {:#}", err),
    }

    log::info!("Starting expensify");

    let result = run().await;

    log::info!("Exiting expensify");

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<String> {
    let command = Command::parse(std::env::args().skip(1))?;

    let profile = Profile::from_env();
    profile.load_env_file();
    log::info!("Profile: {}", profile);

    let config = AppConfig::load(profile);
    let credentials = DatabaseCredentials::from_env();
    let db = database::open_database(&config, &credentials)?;

    // Initialize store with middleware
    let store = Store::new(AppState::default(), db);
    store.add_middleware(LoggingMiddleware::new());

    commands::run(command, &store, &config).await
}
