use crate::error::Result as CliResult;
use crate::{Cli, Commands, logger, render, shell};

use roster_config::Config;
use roster_db::Database;
use roster_store::UserStore;

use std::io::Write;
use std::sync::Arc;

use log::info;
use tokio::io::BufReader;

/// Load configuration, start logging, open the database and run `cli.command`.
pub async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let database_path = match cli.database {
        Some(path) => path,
        None => config.database_path()?,
    };
    let database = Database::open(&database_path).await?;
    let store = UserStore::new(Arc::new(database.clone()));

    let mut stdout = std::io::stdout();
    let result = execute(&store, cli.command, cli.pretty, &mut stdout).await;

    database.close().await;
    result
}

/// Run one command against `store`, writing its output to `out`.
///
/// One-shot commands print the resulting snapshot as JSON.
pub async fn execute<W: Write>(
    store: &UserStore,
    command: Commands,
    pretty: bool,
    out: &mut W,
) -> CliResult<()> {
    match command {
        Commands::Add { name } => {
            store.set_user_name(name);
            match store.create_new_user() {
                Some(intent) => intent.settled().await,
                None => info!("Blank user name, nothing added"),
            }
        }
        Commands::List => store.load_users().settled().await,
        Commands::Drop => store.drop_all().settled().await,
        Commands::Shell => {
            let input = BufReader::new(tokio::io::stdin());
            return shell::run(store, input, out).await;
        }
    }

    writeln!(out, "{}", render::users_json(&store.users(), pretty)?)?;
    Ok(())
}
