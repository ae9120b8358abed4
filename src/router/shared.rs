//! Copy-on-write publication of a route table.
//!
//! The common lifecycle registers every route at bootstrap and never touches the
//! collection again, in which case a plain `RouteCollection` (or an `Arc` of one)
//! is enough. When routes can be added while requests are being matched, readers
//! must never observe a partially appended sequence. [`SharedRouteCollection`]
//! keeps the live table behind an `ArcSwap`: readers take a lock-free snapshot,
//! writers clone, modify and swap in a complete new table.

use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::info;

use super::RouteCollection;
use crate::route::Route;

pub struct SharedRouteCollection<H> {
    inner: ArcSwap<RouteCollection<H>>,
}

impl<H> SharedRouteCollection<H> {
    pub fn new(collection: RouteCollection<H>) -> Self {
        Self {
            inner: ArcSwap::from_pointee(collection),
        }
    }

    /// Consistent snapshot of the current table.
    ///
    /// The snapshot stays valid (and unchanged) even if a writer publishes a new
    /// table while the caller is still matching against it.
    #[must_use]
    pub fn load(&self) -> Arc<RouteCollection<H>> {
        self.inner.load_full()
    }

    /// Replace the whole table.
    pub fn publish(&self, collection: RouteCollection<H>) {
        info!(routes_count = collection.len(), "Routing table published");
        self.inner.store(Arc::new(collection));
    }
}

impl<H: Clone> SharedRouteCollection<H> {
    /// Clone the current table, apply `f`, and publish the result atomically.
    ///
    /// `f` may run more than once if another writer publishes concurrently, so it
    /// should only describe the change.
    pub fn update<F>(&self, f: F)
    where
        F: Fn(&mut RouteCollection<H>),
    {
        let previous = self.inner.rcu(|current| {
            let mut next: RouteCollection<H> = (**current).clone();
            f(&mut next);
            next
        });
        info!(
            previous_routes = previous.len(),
            routes_count = self.inner.load().len(),
            "Routing table updated"
        );
    }

    /// Append one route via [`update`](Self::update).
    pub fn add_route(&self, route: Route<H>) {
        self.update(|collection| {
            collection.push(route.clone());
        });
    }
}

impl<H> From<RouteCollection<H>> for SharedRouteCollection<H> {
    fn from(collection: RouteCollection<H>) -> Self {
        Self::new(collection)
    }
}
