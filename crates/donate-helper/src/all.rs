//! `donate all` — console listing.

use anyhow::Result;

use donate_helper_core::list;
use donate_helper_core::store::Listing;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

pub async fn run_all(config: &Config) -> Result<()> {
    let store = SqliteStore::open(config).await?;

    match list::list_charities(&store).await? {
        Listing::Empty => println!("{}", list::NO_CHARITIES_CONSOLE),
        Listing::Records(records) => {
            for line in list::console_lines(&records) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
