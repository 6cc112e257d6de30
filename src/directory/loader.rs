//! Detail-view data loading: one country by name, plus its border names.

use std::collections::BTreeMap;

use futures::future::try_join_all;
use log::{debug, info};

use crate::core::detail::CountryDetail;
use crate::directory::types::CountryRecord;
use crate::directory::{CountryDirectory, DirectoryError};

/// Fetch the country matching `name` and, when `resolve_borders` is set,
/// the common names of all its neighbours.
///
/// Border lookups run concurrently and join all-or-nothing: one failed
/// lookup fails the whole load.
pub async fn load_detail(
    directory: &dyn CountryDirectory,
    name: &str,
    resolve_borders: bool,
) -> Result<CountryDetail, DirectoryError> {
    let matches = directory.by_name(name).await?;
    let record = pick_match(matches, name).ok_or(DirectoryError::NotFound)?;

    let border_names = if resolve_borders && !record.borders.is_empty() {
        resolve_border_names(directory, &record.borders).await?
    } else {
        BTreeMap::new()
    };

    info!(
        "Loaded detail for '{}' ({} borders resolved)",
        record.name.common,
        border_names.len()
    );
    Ok(CountryDetail::new(record, border_names))
}

/// Resolve each alpha code to its country's common name.
pub async fn resolve_border_names(
    directory: &dyn CountryDirectory,
    codes: &[String],
) -> Result<BTreeMap<String, String>, DirectoryError> {
    debug!("Resolving {} border codes", codes.len());
    let lookups = codes.iter().map(|code| async move {
        directory
            .by_alpha(code)
            .await
            .map(|record| (code.clone(), record.name.common))
    });
    let pairs = try_join_all(lookups).await?;
    Ok(pairs.into_iter().collect())
}

/// Name search is a substring match ("niger" also finds "Nigeria"), so
/// prefer an exact common-name match before falling back to the first hit.
fn pick_match(matches: Vec<CountryRecord>, name: &str) -> Option<CountryRecord> {
    let wanted = name.trim().to_lowercase();
    let exact = matches
        .iter()
        .position(|record| record.name.common.to_lowercase() == wanted);
    let index = exact.unwrap_or(0);
    matches.into_iter().nth(index)
}
