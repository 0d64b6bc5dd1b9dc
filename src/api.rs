//! PokeAPI payloads and the HTTP transport

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::state::Pokemon;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Any failure while fetching or decoding a payload.
///
/// Network errors, non-2xx responses and malformed bodies all land here;
/// callers only ever need to know that the fetch did not produce data.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("fetch {url} failed: {message}")]
pub struct FetchError {
    pub url: String,
    pub message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Raw GET access to the API. Implemented over reqwest for the app and
/// over canned responses in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::new(url, err.to_string()))?;
        let response = response
            .error_for_status()
            .map_err(|err| FetchError::new(url, err.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| FetchError::new(url, err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Process-wide transport used by the effect handlers.
pub fn shared_transport() -> Arc<dyn Transport> {
    static TRANSPORT: OnceLock<Arc<HttpTransport>> = OnceLock::new();
    let transport = TRANSPORT.get_or_init(|| Arc::new(HttpTransport::new(reqwest::Client::new())));
    Arc::clone(transport) as Arc<dyn Transport>
}

pub async fn fetch_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &str,
) -> Result<T, FetchError> {
    let bytes = transport.get(url).await?;
    serde_json::from_slice(&bytes).map_err(|err| FetchError::new(url, err.to_string()))
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListResponse {
    pub results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Option<Sprites>,
    pub types: Vec<PokemonTypeSlot>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub type_info: TypeName,
}

// Type references also carry a url; only the name is kept.
#[derive(Clone, Debug, Deserialize)]
pub struct TypeName {
    pub name: String,
}

impl From<PokemonResponse> for Pokemon {
    fn from(response: PokemonResponse) -> Self {
        let artwork_url = response
            .sprites
            .and_then(|sprites| sprites.other)
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default);
        Pokemon {
            id: response.id,
            name: response.name,
            artwork_url,
            types: response
                .types
                .into_iter()
                .map(|slot| slot.type_info.name)
                .collect(),
        }
    }
}

pub fn list_url(api_base: &str, offset: u32, limit: u32) -> String {
    format!(
        "{}/pokemon?offset={offset}&limit={limit}",
        api_base.trim_end_matches('/')
    )
}
