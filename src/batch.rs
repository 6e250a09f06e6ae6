//! Inspect many files at once. With the `parallel` feature the work is spread over rayon's
//! global pool; results keep input order either way.

use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::report::{inspect_path, Inspection};

/// Result of inspecting one item in a batch.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BatchItem<P> {
    pub path: P,
    pub inspection: Inspection,
}

/// Inspect every path in `paths`, in order.
#[cfg(not(feature = "parallel"))]
pub fn inspect_paths<I, P>(paths: I) -> Vec<BatchItem<P>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|path| {
            let inspection = inspect_path(&path);
            BatchItem { path, inspection }
        })
        .collect()
}

/// Inspect every path in `paths` in parallel; output order matches input order.
#[cfg(feature = "parallel")]
pub fn inspect_paths<I, P>(paths: I) -> Vec<BatchItem<P>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path> + Send,
{
    let paths: Vec<P> = paths.into_iter().collect();
    paths
        .into_par_iter()
        .map(|path| {
            let inspection = inspect_path(&path);
            BatchItem { path, inspection }
        })
        .collect()
}
