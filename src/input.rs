//! Loading listings and viewer preferences from files handed to the CLI.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::decision::{ListingSnapshot, ViewerContext};
use crate::error::AppError;

/// Reads listings from CSV with a header row of snake_case field names. Empty cells are absent.
pub fn read_listings_csv<R: Read>(reader: R) -> Result<Vec<ListingSnapshot>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let listings: Result<Vec<ListingSnapshot>, csv::Error> = csv_reader.deserialize().collect();
    listings
}

pub fn load_listings_csv(path: &Path) -> Result<Vec<ListingSnapshot>, AppError> {
    let file = File::open(path)?;
    Ok(read_listings_csv(BufReader::new(file))?)
}

pub fn load_listing(path: &Path) -> Result<ListingSnapshot, AppError> {
    load_json(path)
}

/// Missing path means "no preferences".
pub fn load_context(path: Option<&Path>) -> Result<ViewerContext, AppError> {
    match path {
        Some(path) => load_json(path),
        None => Ok(ViewerContext::default()),
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
