use crate::CliResult;

use log::info;
use rand::Rng;
use seed_core::{DemoAccount, ProfileGenerator};

/// Generate accounts 1..=count and log each profile row instead of sending it
pub fn preview<R: Rng>(
    generator: &mut ProfileGenerator<R>,
    count: u32,
) -> CliResult<Vec<DemoAccount>> {
    let mut accounts = Vec::with_capacity(count as usize);

    for index in 1..=count {
        let account = generator.generate(index);
        info!(
            "🔎 {} {}",
            account.email(),
            serde_json::to_string(&account.profile)?
        );
        accounts.push(account);
    }

    info!("Dry run: generated {} accounts, nothing sent", accounts.len());
    Ok(accounts)
}
