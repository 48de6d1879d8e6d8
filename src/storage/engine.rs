use crate::core::{Garment, Outfit, Result, Usage, User, UserId, WardrobeSnapshot};
use async_trait::async_trait;
use tracing::{Level, event};

/// Read contract of the document store the app talks to.
///
/// Every query is scoped to one user and returns owned records; the
/// aggregator never holds on to store state.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a user document
    async fn user(&self, id: &UserId) -> Result<Option<User>>;

    /// All garments owned by `user_id`
    async fn garments(&self, user_id: &UserId) -> Result<Vec<Garment>>;

    /// All outfits owned by `user_id`, in insertion order
    async fn outfits(&self, user_id: &UserId) -> Result<Vec<Outfit>>;

    /// All usage records owned by `user_id`
    async fn usages(&self, user_id: &UserId) -> Result<Vec<Usage>>;
}

/// Fetch everything the aggregator needs for one user.
///
/// The four queries run concurrently; the snapshot is only returned once
/// all of them have resolved, and the first failure aborts the fetch.
pub async fn fetch_snapshot<S>(store: &S, user_id: &UserId) -> Result<WardrobeSnapshot>
where
    S: DocumentStore + ?Sized,
{
    let (user, garments, outfits, usages) = tokio::try_join!(
        store.user(user_id),
        store.garments(user_id),
        store.outfits(user_id),
        store.usages(user_id),
    )?;

    event!(
        Level::DEBUG,
        user = %user_id,
        garments = garments.len(),
        outfits = outfits.len(),
        usages = usages.len(),
        "snapshot fetched"
    );

    Ok(WardrobeSnapshot {
        user,
        garments,
        outfits,
        usages,
    })
}
