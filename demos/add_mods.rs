//! Example resolving mods from CurseForge and downloading them with their
//! dependencies.
//!
//! ```sh
//! CURSEFORGE_API_KEY=... cargo run --example add_mods -- fabric 1.20.1 306612 238222
//! ```

use color_eyre::eyre::eyre;
use color_eyre::Result;
use modfetch::client::{CurseForgeClient, CurseForgeConfig};
use modfetch::{DownloaderBuilder, ModId, ModIndex, ResolverBuilder, TermPrompt};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let usage = || eyre!("usage: add_mods <mod loader> <game version> <mod id>...");
    let mod_loader = args.next().ok_or_else(usage)?;
    let game_version = args.next().ok_or_else(usage)?;
    let ids = args
        .map(|arg| arg.parse::<u32>().map(ModId))
        .collect::<Result<Vec<_>, _>>()?;

    let directory = PathBuf::from("mods");
    let index_path = directory.join("index.json");
    let mut index = ModIndex::load(&index_path)?;

    let client = CurseForgeClient::new(CurseForgeConfig::from_env()?)?;
    let resolver = ResolverBuilder::new()
        .game_version(game_version)
        .concurrent_fetches(16)
        .build(client);
    let downloader = DownloaderBuilder::new()
        .directory(directory)
        .concurrent_downloads(5)
        .build();

    let summary = resolver
        .add(&mod_loader, &ids, &mut index, &TermPrompt::default(), &downloader)
        .await?;
    index.save(&index_path)?;

    println!("\n({}/{}) mod downloaded", summary.downloaded, summary.total);
    Ok(())
}
