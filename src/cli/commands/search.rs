//! Search the catalog and add the chosen album to the collection.

use tokio::runtime::Runtime;

use super::SearchArgs;
use crate::cli::PromptChooser;
use crate::collection::CollectionStore;
use crate::config::{self, Config};
use crate::lookup::{CoverArtClient, MusicBrainzClient};
use crate::workflow::SearchWorkflow;

/// Run the search workflow against MusicBrainz and the Cover Art Archive
pub fn cmd_search(rt: &Runtime, args: &SearchArgs) -> anyhow::Result<()> {
    let config = config::load();
    rt.block_on(search(&config, args))
}

async fn search(config: &Config, args: &SearchArgs) -> anyhow::Result<()> {
    let catalog = MusicBrainzClient::new(&config.musicbrainz, config.http.timeout())?;
    let artwork = CoverArtClient::new(&config.coverart, config.http.timeout())?;
    let chooser = PromptChooser;
    let workflow = SearchWorkflow::new(
        &catalog,
        &artwork,
        &chooser,
        CollectionStore::default_location(),
    );

    match workflow
        .run(args.artist.as_deref(), args.album.as_deref(), args.wishlist)
        .await
    {
        Ok(summary) => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Err(e) if e.is_user_facing() => {
            println!("{}.", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
