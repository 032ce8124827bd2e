use seed_config::Config;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "demo-seed")]
#[command(about = "Populate a Supabase project with synthetic demo accounts")]
#[command(version)]
pub struct Cli {
    /// Number of accounts to create (overrides seed.user_count)
    #[arg(long)]
    pub count: Option<u32>,

    /// RNG seed for a reproducible run (overrides seed.rng_seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delete the auth user again when its profile insert fails
    #[arg(long)]
    pub cleanup_orphans: bool,

    /// Generate and print the accounts without calling the backend
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(count) = self.count {
            config.seed.user_count = count;
        }
        if let Some(seed) = self.seed {
            config.seed.rng_seed = Some(seed);
        }
        if self.cleanup_orphans {
            config.seed.cleanup_orphans = true;
        }
    }
}
