use netcalc_bot::bot::Router;
use netcalc_bot::output::render_reply;
use netcalc_bot::roles::RoleStore;
use netcalc_bot::Config;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    log4rs::init_file(&config.log_config, Default::default())?;
    log::info!("#Start main() roles_file={}", config.roles_file.display());

    let roles = RoleStore::open(&config.roles_file, &config.creators)?;
    let router = Router::new(&roles);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(reply) = router.handle(config.user_id, &line) {
            println!("{}", render_reply(&reply));
        }
    }

    log::info!("#End main() input closed");
    Ok(())
}
