// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded worker pool.

use rayon::prelude::*;

/// Applies `f` to every item using at most `jobs` threads.
///
/// Results come back in input order. With one job (or one item) everything
/// runs on the calling thread, as it does if the pool cannot be started.
pub fn map_bounded<I, O, F>(items: &[I], jobs: usize, f: F) -> Vec<O>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Send + Sync,
{
    let workers = jobs.min(items.len());
    if workers <= 1 {
        return items.iter().map(f).collect();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| items.par_iter().map(&f).collect()),
        Err(e) => {
            tracing::warn!("could not start {} workers ({}); running sequentially", workers, e);
            items.iter().map(f).collect()
        }
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
