use std::future::Future;
use tokio::sync::OnceCell;

/// A lazily populated per-instance cache cell.
///
/// The first access runs the supplied computation and stores its result; every
/// later access on the same cell returns the stored value without running the
/// computation again. Each `Memo` value caches independently, so two owning
/// instances never share state.
///
/// A failed fallible computation stores nothing and the next access retries.
#[derive(Debug, Default)]
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached value if one has been stored, without computing.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub async fn get_or_fetch<F, Fut>(&self, compute: F) -> &T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.cell.get_or_init(compute).await
    }

    pub async fn get_or_try_fetch<E, F, Fut>(&self, compute: F) -> std::result::Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        self.cell.get_or_try_init(compute).await
    }
}
