//! Application context
//!
//! [`AppContext`] wires one theme store, one OS scheme signal, and one UI
//! tree together for a single root. It owns the subscriptions that
//! connect them and releases them on teardown, so a context can be built
//! and torn down repeatedly (tests do this constantly) without leaking
//! callbacks into the signal.
//!
//! The context is deliberately not a global. Two contexts side by side
//! get two independent stores; nothing here touches process-wide state.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lumo_layout::{Div, ElementRegistry, SharedElementRegistry, UiTree};
use lumo_theme::{
    detect_system_color_scheme, ColorScheme, SchemeMarker, SchemeSignal, SchemeSubscription,
    ThemeListener, ThemePreference, ThemeStore, ThemeStoreConfig,
};

use crate::config::LumoConfig;
use crate::headless_assert::{DiagnosticsElement, DiagnosticsSnapshot};

/// Id the root element must carry for scheme marking to work
pub const ROOT_ELEMENT_ID: &str = "app-root";

/// Class toggled on the root element when the resolved scheme is dark
pub const DARK_CLASS: &str = "dark";

/// View function producing the UI for the current theme state
pub type ViewFn = Arc<dyn Fn(&ThemeStore) -> Div + Send + Sync>;

/// Marker that mirrors the resolved scheme as a `dark` class on the
/// root element
///
/// Styling keys off this single class; light is the unmarked state.
#[derive(Clone)]
pub struct RootClassMarker {
    registry: SharedElementRegistry,
}

impl RootClassMarker {
    pub fn new(registry: SharedElementRegistry) -> Self {
        Self { registry }
    }
}

impl SchemeMarker for RootClassMarker {
    fn apply(&self, scheme: ColorScheme) {
        let changed = self
            .registry
            .set_class(ROOT_ELEMENT_ID, DARK_CLASS, scheme.is_dark());
        if changed {
            tracing::debug!(
                "RootClassMarker::apply - dark class now {}",
                scheme.is_dark()
            );
        }
    }
}

/// One application root: config, theme store, signal, and UI tree
pub struct AppContext {
    config: LumoConfig,
    store: ThemeStore,
    signal: SchemeSignal,
    scheme_subscription: Option<SchemeSubscription>,
    change_listener: Option<ThemeListener>,
    registry: SharedElementRegistry,
    marker: RootClassMarker,
    view: ViewFn,
    tree: UiTree,
    width: f32,
    height: f32,
    needs_rebuild: Arc<AtomicBool>,
}

impl AppContext {
    /// Build a context that follows the real OS color scheme
    pub fn new(config: LumoConfig, view: ViewFn) -> Result<Self> {
        let signal = SchemeSignal::new(detect_system_color_scheme());
        Self::with_signal(config, view, signal)
    }

    /// Build a context around a caller-supplied scheme signal
    ///
    /// Headless runs and tests pass their own signal so OS scheme changes
    /// can be emitted on demand.
    pub fn with_signal(config: LumoConfig, view: ViewFn, signal: SchemeSignal) -> Result<Self> {
        let bundle = config.theme.bundle()?;
        let store = ThemeStore::new(ThemeStoreConfig {
            bundle,
            default_preference: config.theme.default_preference,
            storage: config.theme.storage(),
            system_scheme: signal.current(),
        });
        let scheme_subscription = store.watch(&signal);

        let registry: SharedElementRegistry = Arc::new(ElementRegistry::new());
        let marker = RootClassMarker::new(registry.clone());

        let width = config.window.width as f32;
        let height = config.window.height as f32;

        let ui = view(&store);
        let mut tree = UiTree::from_element(&ui, &registry);
        tree.compute_layout(width, height);

        // Bound after the first build so the root element exists when the
        // marker is first applied.
        store.bind_marker(marker.clone());

        let needs_rebuild = Arc::new(AtomicBool::new(false));
        let rebuild_flag = needs_rebuild.clone();
        let change_listener = store.on_change(move |change| {
            tracing::debug!("AppContext - theme change {:?}, rebuild scheduled", change);
            rebuild_flag.store(true, Ordering::Release);
        });

        Ok(Self {
            config,
            store,
            signal,
            scheme_subscription: Some(scheme_subscription),
            change_listener: Some(change_listener),
            registry,
            marker,
            view,
            tree,
            width,
            height,
            needs_rebuild,
        })
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &LumoConfig {
        &self.config
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    pub fn signal(&self) -> &SchemeSignal {
        &self.signal
    }

    pub fn registry(&self) -> &SharedElementRegistry {
        &self.registry
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current stored intent
    pub fn preference(&self) -> ThemePreference {
        self.store.preference()
    }

    /// Scheme the UI currently renders with
    pub fn resolved_scheme(&self) -> ColorScheme {
        self.store.resolved_scheme()
    }

    /// Whether the root element currently carries the `dark` class
    pub fn has_dark_marker(&self) -> bool {
        self.registry.has_class(ROOT_ELEMENT_ID, DARK_CLASS)
    }

    /// Whether a theme change is waiting for the next frame
    pub fn rebuild_pending(&self) -> bool {
        self.needs_rebuild.load(Ordering::Acquire)
    }

    // ========== Frame loop ==========

    /// Process one frame, rebuilding the tree if a theme change is
    /// pending. Returns true when a rebuild happened.
    pub fn advance_frame(&mut self) -> bool {
        if !self.needs_rebuild.swap(false, Ordering::AcqRel) {
            return false;
        }
        self.rebuild();
        true
    }

    /// Rebuild the UI tree from the view function
    pub fn rebuild(&mut self) {
        let ui = (self.view)(&self.store);
        let mut tree = UiTree::from_element(&ui, &self.registry);
        tree.compute_layout(self.width, self.height);
        self.tree = tree;

        // Builds repopulate the registry from declared classes only, so
        // the scheme class has to be re-asserted.
        self.marker.apply(self.store.resolved_scheme());

        tracing::debug!(
            "AppContext::rebuild - {} elements registered",
            self.registry.len()
        );
    }

    /// Recompute layout for a new viewport size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.tree.compute_layout(width, height);
    }

    // ========== Input and theme actions ==========

    /// Synthesize a click at viewport coordinates
    pub fn click_at(&self, x: f32, y: f32) -> bool {
        self.tree.click(x, y)
    }

    /// Synthesize a click on the element with `id`, aimed at its center
    pub fn click(&self, id: &str) -> bool {
        let Some(node) = self.registry.node_of(id) else {
            tracing::debug!("AppContext::click - unknown element {:?}", id);
            return false;
        };
        let Some(bounds) = self.tree.bounds_of(node) else {
            return false;
        };
        self.click_at(
            bounds.x + bounds.width / 2.0,
            bounds.y + bounds.height / 2.0,
        )
    }

    /// Commit a theme preference
    pub fn set_preference(&self, preference: ThemePreference) {
        self.store.set_preference(preference);
    }

    /// Push an OS scheme change through the signal
    pub fn emit_system_scheme(&self, scheme: ColorScheme) {
        self.signal.emit(scheme);
    }

    // ========== Diagnostics ==========

    /// Capture observable state for assertions
    pub fn capture_snapshot(&self) -> DiagnosticsSnapshot {
        let mut elements = HashMap::new();
        for (id, element) in self.registry.entries() {
            elements.insert(
                id,
                DiagnosticsElement {
                    text: element.text,
                    classes: element.classes,
                },
            );
        }
        DiagnosticsSnapshot {
            elements,
            preference: self.preference(),
            resolved_scheme: self.resolved_scheme(),
            dark_marker: self.has_dark_marker(),
        }
    }

    // ========== Teardown ==========

    /// Release the signal subscription and the change listener
    ///
    /// Safe to call more than once; later calls find nothing to release.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.scheme_subscription.take() {
            subscription.release();
            tracing::debug!("AppContext::teardown - released scheme subscription");
        }
        if let Some(listener) = self.change_listener.take() {
            listener.release();
        }
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.teardown();
    }
}
