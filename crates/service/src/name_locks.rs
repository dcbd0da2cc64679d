//! Per-name async locks serializing lookup-then-create sequences.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex as SyncMutex, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = HashMap<String, Arc<Mutex<()>>>;

/// One lock per exact name string.
///
/// Any task that looks a name up and may create a location under it holds the
/// name's lock for the whole sequence. Multiple names are always acquired in
/// sorted order. A name's entry lives only while some task holds or awaits it.
#[derive(Debug, Default)]
pub struct NameLocks {
    locks: Arc<SyncMutex<LockMap>>,
}

/// Held lock on one name. Dropping the last handle for a name forgets it.
#[derive(Debug)]
pub struct NameGuard {
    name: String,
    locks: Arc<SyncMutex<LockMap>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl NameLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, name: &str) -> NameGuard {
        // entries are cloned only under the map lock; pruning in `Drop` relies on it
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(name.to_owned()).or_default())
        };
        NameGuard {
            name: name.to_owned(),
            locks: Arc::clone(&self.locks),
            guard: Some(lock.lock_owned().await),
        }
    }

    pub async fn lock_all<'a, I>(&self, names: I) -> Vec<NameGuard>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ordered: BTreeSet<&str> = names.into_iter().collect();
        let mut guards = Vec::with_capacity(ordered.len());
        for name in ordered {
            guards.push(self.lock(name).await);
        }
        guards
    }

    /// Names currently held or awaited.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Drop for NameGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if locks.get(&self.name).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(&self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn same_name_is_exclusive() {
        let locks = Arc::new(NameLocks::new());
        let guard = locks.lock("Петрос").await;

        let contender = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.lock("Петрос").await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        assert!(tokio::time::timeout(Duration::from_secs(1), contender).await.is_ok());
    }

    #[tokio::test]
    async fn different_names_do_not_block() {
        let locks = NameLocks::new();
        let _a = locks.lock("Петрос").await;
        let acquired = tokio::time::timeout(Duration::from_secs(1), locks.lock("Говерла")).await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn lock_all_deduplicates_names() {
        let locks = NameLocks::new();
        let guards = locks.lock_all(["b", "a", "b"]).await;
        assert_eq!(guards.len(), 2);
        assert_eq!(locks.tracked(), 2);
    }

    #[tokio::test]
    async fn released_names_are_forgotten() {
        let locks = NameLocks::new();
        for i in 0..100 {
            let _guard = locks.lock(&format!("name-{i}")).await;
        }
        drop(locks.lock_all(["a", "b", "c"]).await);
        assert_eq!(locks.tracked(), 0);
    }

    #[tokio::test]
    async fn name_with_a_waiter_survives_release() {
        let locks = Arc::new(NameLocks::new());
        let guard = locks.lock("Петрос").await;

        let waiter = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.lock("Петрос").await;
                tokio::time::sleep(Duration::from_millis(20)).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(guard);
        assert_eq!(locks.tracked(), 1);

        tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
        assert_eq!(locks.tracked(), 0);
    }
}
