//! Visited set for URL deduplication

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Concurrent set of canonical URLs already claimed by a worker
///
/// The only mutating operation is `mark_if_unvisited`, which checks and
/// inserts in one critical section, so exactly one caller wins the right to
/// create a node for any given URL.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.urls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts `url` if absent
    ///
    /// Returns true iff this call performed the insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikipath::search::VisitedSet;
    ///
    /// let visited = VisitedSet::new();
    /// assert!(visited.mark_if_unvisited("https://en.wikipedia.org/wiki/Linux"));
    /// assert!(!visited.mark_if_unvisited("https://en.wikipedia.org/wiki/Linux"));
    /// ```
    pub fn mark_if_unvisited(&self, url: &str) -> bool {
        let mut urls = self.lock();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    /// Returns true if the URL has been claimed
    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    #[test]
    fn test_first_mark_wins() {
        let visited = VisitedSet::new();
        assert!(visited.mark_if_unvisited("https://w.test/wiki/A"));
        assert!(!visited.mark_if_unvisited("https://w.test/wiki/A"));
        assert!(visited.mark_if_unvisited("https://w.test/wiki/B"));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_urls_are_case_sensitive() {
        let visited = VisitedSet::new();
        assert!(visited.mark_if_unvisited("https://w.test/wiki/Linux"));
        assert!(visited.mark_if_unvisited("https://w.test/wiki/linux"));
    }

    #[test]
    fn test_contains() {
        let visited = VisitedSet::new();
        assert!(!visited.contains("https://w.test/wiki/A"));
        visited.mark_if_unvisited("https://w.test/wiki/A");
        assert!(visited.contains("https://w.test/wiki/A"));
    }

    #[test]
    fn test_exactly_one_concurrent_winner() {
        const THREADS: usize = 16;

        for _ in 0..20 {
            let visited = Arc::new(VisitedSet::new());
            let barrier = Arc::new(Barrier::new(THREADS));
            let winners = Arc::new(AtomicUsize::new(0));

            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let visited = visited.clone();
                    let barrier = barrier.clone();
                    let winners = winners.clone();
                    std::thread::spawn(move || {
                        barrier.wait();
                        if visited.mark_if_unvisited("https://w.test/wiki/Contended") {
                            winners.fetch_add(1, Ordering::SeqCst);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(winners.load(Ordering::SeqCst), 1);
        }
    }
}
