//! Batch scrape commands over local source files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use carpatlas_core::{LocationRecord, MatchPolicy, ReportRecord};
use carpatlas_service::{ScrapeService, ScrapeSummary};
use carpatlas_sources::{
    read_geonames, read_jsonl, CatalogEntry, RecordReader, ReportListing, SourceError,
    WikiArticle,
};
use serde_json::json;

use super::{open_storage, resolve_concurrency};

pub(crate) async fn run_scrape_locations(
    geonames: &[PathBuf],
    wiki: &[PathBuf],
    catalog: &[PathBuf],
    records: &[PathBuf],
    concurrency: Option<usize>,
) -> Result<()> {
    if [geonames, wiki, catalog, records].iter().all(|paths| paths.is_empty()) {
        bail!("nothing to scrape: pass --geonames, --wiki, --catalog or --records");
    }
    let mut geonames = open_all(geonames, |p| read_geonames(p))?;
    let mut wiki = open_all(wiki, |p| read_jsonl::<WikiArticle>(p))?;
    let mut catalog = open_all(catalog, |p| read_jsonl::<CatalogEntry>(p))?;
    let mut records = open_all(records, |p| read_jsonl::<LocationRecord>(p))?;

    let storage = open_storage().await?;
    let backend = storage.kind();
    let service = ScrapeService::new(storage, MatchPolicy::from_env(), resolve_concurrency(concurrency));

    let input = geonames
        .iter_mut()
        .flatten()
        .chain(wiki.iter_mut().flatten().map(WikiArticle::into_record))
        .chain(catalog.iter_mut().flatten().map(CatalogEntry::into_record))
        .chain(records.iter_mut().flatten());
    let summary = service.scrape_locations(input).await;

    let malformed = skipped(&geonames) + skipped(&wiki) + skipped(&catalog) + skipped(&records);
    print_summary(backend, &summary, malformed)
}

pub(crate) async fn run_scrape_reports(
    reports: &[PathBuf],
    listings: &[PathBuf],
    concurrency: Option<usize>,
) -> Result<()> {
    if reports.is_empty() && listings.is_empty() {
        bail!("nothing to scrape: pass --reports or --listings");
    }
    let mut reports = open_all(reports, |p| read_jsonl::<ReportRecord>(p))?;
    let mut listings = open_all(listings, |p| read_jsonl::<ReportListing>(p))?;

    let storage = open_storage().await?;
    let backend = storage.kind();
    let service = ScrapeService::new(storage, MatchPolicy::from_env(), resolve_concurrency(concurrency));

    let mut unlabelled = 0_usize;
    let input = reports.iter_mut().flatten().chain(listings.iter_mut().flatten().filter_map(|listing| {
        let (title, url) = (listing.title.clone(), listing.url.clone());
        match listing.into_record() {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(%title, %url, error = %e, "skipping report listing");
                unlabelled += 1;
                None
            },
        }
    }));
    let summary = service.scrape_reports(input).await;

    let malformed = skipped(&reports) + skipped(&listings) + unlabelled;
    print_summary(backend, &summary, malformed)
}

fn open_all<T, F>(paths: &[PathBuf], open: F) -> Result<Vec<RecordReader<T>>>
where
    F: Fn(&Path) -> Result<RecordReader<T>, SourceError>,
{
    paths
        .iter()
        .map(|path| open(path).with_context(|| format!("opening source file {}", path.display())))
        .collect()
}

fn skipped<T>(readers: &[RecordReader<T>]) -> usize {
    readers.iter().map(RecordReader::skipped).sum()
}

fn print_summary(backend: &str, summary: &ScrapeSummary, malformed: usize) -> Result<()> {
    let output = json!({
        "backend": backend,
        "malformed_input": malformed,
        "summary": summary,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
