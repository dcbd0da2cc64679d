use anyhow::Result;
use carpatlas_core::{parse_route, MatchPolicy};
use carpatlas_service::ScrapeService;
use carpatlas_storage::traits::StatsStore;

use super::open_storage;

pub(crate) fn run_parse_route(text: &str) -> Result<()> {
    let stops = parse_route(text)?;
    println!("{}", serde_json::to_string_pretty(&stops)?);
    Ok(())
}

pub(crate) async fn run_lookup(name: &str) -> Result<()> {
    let storage = open_storage().await?;
    let service = ScrapeService::new(storage, MatchPolicy::from_env(), 1);
    let found = service.location_service().lookup(name.trim()).await?;
    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

pub(crate) async fn run_stats() -> Result<()> {
    let storage = open_storage().await?;
    let stats = storage.get_stats().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
