//! PokeAPI client: roster fan-out, detail pipeline stages, artwork

use std::future::Future;
use std::sync::OnceLock;

use serde::Deserialize;
use tokio::task::JoinSet;

use crate::artwork::{self, Artwork};
use crate::state::{EntrySummary, GenderRate, PokemonRecord, SpeciesRecord, StatValue};

const OFFICIAL_ARTWORK_POINTER: &str = "/other/official-artwork/front_default";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed entry: {0}")]
    Malformed(String),
    #[error("artwork decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("{failed} of {total} requests failed; first: {first}")]
    Batch {
        failed: usize,
        total: usize,
        first: Box<FetchError>,
    },
    #[error("fetch task did not complete: {0}")]
    Join(String),
}

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    types: Vec<PokemonTypeSlot>,
    stats: Vec<PokemonStatSlot>,
    abilities: Vec<PokemonAbilitySlot>,
    sprites: serde_json::Value,
    species: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonAbilitySlot {
    ability: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonSpeciesResponse {
    gender_rate: i8,
    egg_groups: Vec<NamedResource>,
    habitat: Option<NamedResource>,
}

/// Fetch one page of the listing, then every entry's record concurrently.
/// All-or-nothing: any failed member fails the whole roster.
pub async fn fetch_roster(url: &str) -> Result<Vec<EntrySummary>, FetchError> {
    let page: ListResponse = fetch_json(url).await?;
    tracing::debug!(count = page.results.len(), "roster page loaded");
    let requests = page
        .results
        .into_iter()
        .map(|entry| async move { fetch_summary(&entry.url).await });
    join_all_or_fail(requests).await
}

pub async fn fetch_summary(url: &str) -> Result<EntrySummary, FetchError> {
    let response: PokemonResponse = fetch_json(url).await?;
    summary_from_response(response)
}

pub async fn fetch_pokemon_record(url: &str) -> Result<PokemonRecord, FetchError> {
    let response: PokemonResponse = fetch_json(url).await?;
    record_from_response(response)
}

pub async fn fetch_species(url: &str) -> Result<SpeciesRecord, FetchError> {
    let response: PokemonSpeciesResponse = fetch_json(url).await?;
    species_from_response(response)
}

pub async fn fetch_artwork(url: &str) -> Result<Artwork, FetchError> {
    let bytes = fetch_bytes(url).await?;
    Ok(artwork::decode(&bytes, artwork::ARTWORK_PIXELS)?)
}

/// Run every future concurrently and wait for all of them to settle.
///
/// Results come back in input order. If any member fails, the whole batch
/// fails with [`FetchError::Batch`] carrying the earliest failure by index.
pub async fn join_all_or_fail<T, F, I>(futures: I) -> Result<Vec<T>, FetchError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, FetchError>> + Send + 'static,
    T: Send + 'static,
{
    let mut join_set = JoinSet::new();
    let mut total = 0;
    for (index, future) in futures.into_iter().enumerate() {
        join_set.spawn(async move { (index, future.await) });
        total += 1;
    }

    let mut slots: Vec<Option<T>> = (0..total).map(|_| None).collect();
    let mut failures: Vec<(usize, FetchError)> = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, Ok(value))) => slots[index] = Some(value),
            Ok((index, Err(error))) => failures.push((index, error)),
            Err(error) => failures.push((usize::MAX, FetchError::Join(error.to_string()))),
        }
    }

    if failures.is_empty() {
        return Ok(slots.into_iter().flatten().collect());
    }
    failures.sort_by_key(|(index, _)| *index);
    let failed = failures.len();
    let (_, first) = failures.swap_remove(0);
    Err(FetchError::Batch {
        failed,
        total,
        first: Box::new(first),
    })
}

fn summary_from_response(response: PokemonResponse) -> Result<EntrySummary, FetchError> {
    let types = type_names(&response)?;
    Ok(EntrySummary {
        id: response.id,
        image_url: pointer_string(&response.sprites, OFFICIAL_ARTWORK_POINTER),
        name: response.name,
        types,
    })
}

fn record_from_response(response: PokemonResponse) -> Result<PokemonRecord, FetchError> {
    let types = type_names(&response)?;
    let image_url = pointer_string(&response.sprites, OFFICIAL_ARTWORK_POINTER);
    Ok(PokemonRecord {
        id: response.id,
        name: response.name,
        types,
        height_dm: response.height,
        weight_hg: response.weight,
        abilities: response
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect(),
        stats: response
            .stats
            .into_iter()
            .map(|slot| StatValue {
                name: slot.stat.name,
                base: slot.base_stat,
            })
            .collect(),
        image_url,
        species_url: response.species.url,
    })
}

fn species_from_response(response: PokemonSpeciesResponse) -> Result<SpeciesRecord, FetchError> {
    let gender_rate = GenderRate::from_raw(response.gender_rate).ok_or_else(|| {
        FetchError::Malformed(format!("gender rate {} out of range", response.gender_rate))
    })?;
    Ok(SpeciesRecord {
        gender_rate,
        egg_groups: response
            .egg_groups
            .into_iter()
            .map(|group| group.name)
            .collect(),
        habitat: response.habitat.map(|habitat| habitat.name),
    })
}

fn type_names(response: &PokemonResponse) -> Result<Vec<String>, FetchError> {
    if response.types.is_empty() {
        return Err(FetchError::Malformed(format!(
            "{} has no types",
            response.name
        )));
    }
    Ok(response
        .types
        .iter()
        .map(|slot| slot.type_info.name.clone())
        .collect())
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let bytes = fetch_bytes(url).await?;
    serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    tracing::debug!(%url, "GET");
    let request_error = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };
    let response = http_client()
        .get(url)
        .send()
        .await
        .map_err(request_error)?;
    let response = response.error_for_status().map_err(request_error)?;
    let bytes = response.bytes().await.map_err(request_error)?;
    Ok(bytes.to_vec())
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}
