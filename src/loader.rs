//! Page loader: one list request, then every detail request in parallel

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::api::{self, FetchError, ListResponse, PokemonResponse, Transport};
use crate::state::{PageWindow, Pokemon};

/// Load one page of Pokemon in list order.
///
/// Details are fetched concurrently and joined fail-fast: the first detail
/// error (in completion order) is returned as-is and the tasks still in
/// flight are detached, so their results are dropped on the floor. The
/// caller never sees a partial page.
pub async fn load_collection(
    transport: Arc<dyn Transport>,
    api_base: &str,
    window: PageWindow,
) -> Result<Vec<Pokemon>, FetchError> {
    let list_url = api::list_url(api_base, window.offset, window.limit);
    tracing::debug!(url = %list_url, "fetching pokemon list");
    let list: ListResponse = api::fetch_json(transport.as_ref(), &list_url).await?;

    let total = list.results.len();
    let mut join_set = JoinSet::new();
    for (index, entry) in list.results.into_iter().enumerate() {
        let transport = Arc::clone(&transport);
        join_set.spawn(async move {
            tracing::debug!(name = %entry.name, url = %entry.url, "fetching pokemon detail");
            let detail =
                api::fetch_json::<PokemonResponse>(transport.as_ref(), &entry.url).await;
            (index, detail)
        });
    }

    let mut slots: Vec<Option<Pokemon>> = (0..total).map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        let outcome = match joined {
            Ok((index, Ok(detail))) => {
                slots[index] = Some(detail.into());
                continue;
            }
            Ok((_, Err(err))) => err,
            Err(join_err) => FetchError::new(&list_url, join_err.to_string()),
        };
        join_set.detach_all();
        return Err(outcome);
    }

    let pokemon: Vec<Pokemon> = slots.into_iter().flatten().collect();
    tracing::info!(
        offset = window.offset,
        limit = window.limit,
        count = pokemon.len(),
        "loaded pokemon page"
    );
    Ok(pokemon)
}
