use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::key::{KeyIndexMap, ResourceKey};
use crate::{LoadEvent, LoadPhase, LoadProgress};

/// A resource whose loading is deferred until the carousel is interactive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceDescriptor<K> {
    pub id: K,
    /// Where the loader should fetch the resource from (e.g. a deferred image URL).
    pub source_ref: String,
    pub loaded: bool,
}

impl<K> ResourceDescriptor<K> {
    pub fn new(id: K, source_ref: impl Into<String>) -> Self {
        Self {
            id,
            source_ref: source_ref.into(),
            loaded: false,
        }
    }
}

/// Starts loads on behalf of a [`LazyLoadCoordinator`].
///
/// The loader only kicks a load off. When it finishes, the adapter reports it with
/// [`LazyLoadCoordinator::complete`], at most once per success; duplicates are tolerated.
pub trait ResourceLoader<K> {
    fn load(&mut self, resource: &ResourceDescriptor<K>);
}

impl<K, F: FnMut(&ResourceDescriptor<K>)> ResourceLoader<K> for F {
    fn load(&mut self, resource: &ResourceDescriptor<K>) {
        self(resource)
    }
}

/// The listener registered on a [`LazyLoadCoordinator`].
pub type LoadEventCallback = Arc<dyn Fn(&LoadEvent) + Send + Sync>;

/// What a call to [`LazyLoadCoordinator::complete`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Recorded; other resources are still outstanding.
    Pending(LoadProgress),
    /// Recorded, and it was the last one: `Ready` fired.
    Ready,
    /// Unknown id, duplicate completion, not started, or already complete.
    Ignored,
}

/// Tracks a fixed set of deferred resources and fires [`LoadEvent::Ready`] once all of them
/// have loaded.
///
/// Guarantees:
/// - `Ready` fires exactly once, from the `complete` call that observes the last load.
/// - An empty set never fires.
/// - A resource that never completes leaves the coordinator loading forever; there is no
///   timeout or retry.
#[derive(Clone)]
pub struct LazyLoadCoordinator<K> {
    resources: Vec<ResourceDescriptor<K>>,
    positions: KeyIndexMap<K>,
    loaded: usize,
    phase: LoadPhase,
    on_event: Option<LoadEventCallback>,
}

impl<K: ResourceKey> LazyLoadCoordinator<K> {
    /// Collects the resources to defer.
    ///
    /// Descriptors already marked `loaded` need no deferral and are dropped, as are repeated ids
    /// (the first occurrence wins).
    pub fn new(resources: impl IntoIterator<Item = ResourceDescriptor<K>>) -> Self {
        let mut kept = Vec::new();
        let mut positions = KeyIndexMap::<K>::new();
        for resource in resources {
            if resource.loaded || positions.contains_key(&resource.id) {
                continue;
            }
            positions.insert(resource.id.clone(), kept.len());
            kept.push(resource);
        }
        cdebug!(resources = kept.len(), "LazyLoadCoordinator::new");
        Self {
            resources: kept,
            positions,
            loaded: 0,
            phase: LoadPhase::Idle,
            on_event: None,
        }
    }

    /// Registers the listener for [`LoadEvent`]s, replacing any previous one.
    pub fn set_on_event(&mut self, on_event: Option<impl Fn(&LoadEvent) + Send + Sync + 'static>) {
        self.on_event = on_event.map(|f| Arc::new(f) as _);
    }

    pub fn with_on_event(
        mut self,
        on_event: Option<impl Fn(&LoadEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.set_on_event(on_event);
        self
    }

    fn notify(&self, event: LoadEvent) {
        if let Some(cb) = &self.on_event {
            cb(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resources(&self) -> &[ResourceDescriptor<K>] {
        &self.resources
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn progress(&self) -> LoadProgress {
        LoadProgress {
            loaded: self.loaded,
            total: self.resources.len(),
        }
    }

    /// `true` while loads are outstanding; drives a loading indicator.
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Complete
    }

    /// Triggers a load for every resource.
    ///
    /// An empty set makes the coordinator inert. Calling `start` again is a no-op.
    pub fn start(&mut self, loader: &mut impl ResourceLoader<K>) -> LoadPhase {
        if self.phase != LoadPhase::Idle {
            return self.phase;
        }
        if self.resources.is_empty() {
            cdebug!("LazyLoadCoordinator::start: nothing to load");
            self.phase = LoadPhase::Inert;
            return self.phase;
        }

        self.phase = LoadPhase::Loading;
        self.notify(LoadEvent::Loading {
            pending: self.resources.len(),
        });
        for resource in &self.resources {
            ctrace!(source_ref = resource.source_ref.as_str(), "load");
            loader.load(resource);
        }
        self.phase
    }

    /// Records that the resource `id` finished loading.
    pub fn complete(&mut self, id: &K) -> Completion {
        if self.phase != LoadPhase::Loading {
            cwarn!(phase = ?self.phase, "complete: ignored outside of loading phase");
            return Completion::Ignored;
        }
        let Some(&position) = self.positions.get(id) else {
            cwarn!("complete: unknown resource");
            return Completion::Ignored;
        };
        let resource = &mut self.resources[position];
        if resource.loaded {
            cwarn!(
                source_ref = resource.source_ref.as_str(),
                "complete: duplicate completion"
            );
            return Completion::Ignored;
        }

        resource.loaded = true;
        self.loaded += 1;
        let progress = self.progress();
        ctrace!(loaded = progress.loaded, total = progress.total, "complete");
        if !progress.is_done() {
            return Completion::Pending(progress);
        }

        self.phase = LoadPhase::Complete;
        cdebug!(total = progress.total, "all deferred resources loaded");
        self.notify(LoadEvent::Ready);
        Completion::Ready
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for LazyLoadCoordinator<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LazyLoadCoordinator")
            .field("resources", &self.resources)
            .field("loaded", &self.loaded)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
