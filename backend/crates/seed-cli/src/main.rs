//! demo-seed - populate a Supabase project with synthetic demo accounts
//!
//! # Examples
//!
//! ```bash
//! # Create the default 10 accounts (demo1..demo10@gymovo.com)
//! DEMO_SEED_BACKEND_URL=https://<ref>.supabase.co \
//! DEMO_SEED_SERVICE_ROLE_KEY=<key> demo-seed
//!
//! # Reproducible preview without touching the backend
//! demo-seed --dry-run --seed 42
//! ```

use seed_cli::{Cli, CliResult, LogObserver, OrphanPolicy, Provisioner, dry_run, logger};
use seed_client::SupabaseClient;
use seed_config::Config;
use seed_core::ProfileGenerator;

use std::process::ExitCode;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);

    // A dry run never reaches the backend, so credentials are not required
    if cli.dry_run {
        config.seed.validate()?;
        config.logging.validate()?;
    } else {
        config.validate()?;
    }

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting demo-seed v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let rng = match config.seed.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut generator = ProfileGenerator::new(
        rng,
        config.seed.email_domain.as_str(),
        config.seed.password.as_str(),
    );

    if cli.dry_run {
        dry_run::preview(&mut generator, config.seed.user_count)?;
        return Ok(());
    }

    let client = SupabaseClient::new(
        config.backend.url()?,
        config.backend.service_role_key()?,
        &config.backend.profiles_table,
        config.backend.request_timeout(),
    )?;

    let provisioner = Provisioner::new(
        client,
        LogObserver,
        OrphanPolicy::from_cleanup_flag(config.seed.cleanup_orphans),
    );

    let report = provisioner
        .run(&mut generator, config.seed.user_count)
        .await;
    info!("{}", report);

    Ok(())
}
