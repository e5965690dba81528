//! Scoped theme store
//!
//! [`ThemeStore`] owns the theme state for one UI root: the persisted
//! preference, the latest OS scheme, the resolved scheme, and the active
//! token tables. It is an explicit handle, not a global: construct one per
//! root (or per test) and pass it to whoever needs it. Handles are cheap
//! clones of the same store.
//!
//! Resolution invariant: the resolved scheme equals the preference when
//! the preference is concrete, and equals the latest OS signal when the
//! preference is `System`.

use crate::preference::ThemePreference;
use crate::scheme::ColorScheme;
use crate::signal::{SchemeSignal, SchemeSubscription};
use crate::storage::PreferenceStore;
use crate::theme::ThemeBundle;
use crate::themes::LumoTheme;
use crate::tokens::*;
use lumo_core::{Color, Shadow};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

/// Styling-visible sink for the resolved scheme
///
/// The store re-applies the marker on every resolved change; the app crate
/// implements this over the element registry (`dark` class on the root
/// element).
pub trait SchemeMarker: Send + Sync {
    fn apply(&self, scheme: ColorScheme);
}

/// Payload delivered to change listeners
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub preference: ThemePreference,
    pub resolved: ColorScheme,
}

type ChangeCallback = Arc<dyn Fn(ThemeChange) + Send + Sync>;

/// Construction parameters for a [`ThemeStore`]
pub struct ThemeStoreConfig {
    pub bundle: ThemeBundle,
    /// Used when storage holds nothing usable
    pub default_preference: ThemePreference,
    pub storage: PreferenceStore,
    /// Seed for the OS scheme until a signal is attached
    pub system_scheme: ColorScheme,
}

impl Default for ThemeStoreConfig {
    fn default() -> Self {
        Self {
            bundle: LumoTheme::bundle(),
            default_preference: ThemePreference::System,
            storage: PreferenceStore::disabled(),
            system_scheme: ColorScheme::Light,
        }
    }
}

struct StoreInner {
    bundle: ThemeBundle,
    storage: PreferenceStore,
    preference: RwLock<ThemePreference>,
    system_scheme: RwLock<ColorScheme>,
    resolved: RwLock<ColorScheme>,

    colors: RwLock<ColorTokens>,
    typography: RwLock<TypographyTokens>,
    spacing: RwLock<SpacingTokens>,
    radii: RwLock<RadiusTokens>,
    shadows: RwLock<ShadowTokens>,
    opacities: RwLock<OpacityTokens>,

    marker: Mutex<Option<Arc<dyn SchemeMarker>>>,
    listeners: Mutex<FxHashMap<u64, ChangeCallback>>,
    next_listener_id: AtomicU64,
}

/// Shared handle to one theme store
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    /// Construct a store from config
    ///
    /// The persisted preference is loaded once here; absent or invalid
    /// contents fall back to `default_preference`. Resolution and token
    /// tables reflect the initial preference immediately.
    pub fn new(config: ThemeStoreConfig) -> Self {
        let preference = config
            .storage
            .load()
            .unwrap_or(config.default_preference);
        let resolved = preference.resolve(config.system_scheme);
        let theme = config.bundle.for_scheme(resolved);

        tracing::debug!(
            "ThemeStore::new - preference {:?} resolved {:?} (bundle {:?})",
            preference,
            resolved,
            config.bundle.name()
        );

        Self {
            inner: Arc::new(StoreInner {
                colors: RwLock::new(theme.colors().clone()),
                typography: RwLock::new(theme.typography().clone()),
                spacing: RwLock::new(theme.spacing().clone()),
                radii: RwLock::new(theme.radii().clone()),
                shadows: RwLock::new(theme.shadows().clone()),
                opacities: RwLock::new(OpacityTokens::default()),
                bundle: config.bundle,
                storage: config.storage,
                preference: RwLock::new(preference),
                system_scheme: RwLock::new(config.system_scheme),
                resolved: RwLock::new(resolved),
                marker: Mutex::new(None),
                listeners: Mutex::new(FxHashMap::default()),
                next_listener_id: AtomicU64::new(1),
            }),
        }
    }

    // ========== Preference and resolution ==========

    /// The current stored intent
    pub fn preference(&self) -> ThemePreference {
        *self.inner.preference.read().unwrap()
    }

    /// The concrete scheme styling uses now
    pub fn resolved_scheme(&self) -> ColorScheme {
        *self.inner.resolved.read().unwrap()
    }

    /// The latest OS-reported scheme this store has seen
    pub fn system_scheme(&self) -> ColorScheme {
        *self.inner.system_scheme.read().unwrap()
    }

    /// Name of the installed bundle
    pub fn theme_name(&self) -> String {
        self.inner.bundle.name().to_string()
    }

    /// Change the stored preference
    ///
    /// Setting the current value again is a no-op: nothing is persisted
    /// and no listener fires. Otherwise the new value is persisted
    /// best-effort and the change is published (token tables and marker
    /// on resolved change, listeners always) before this returns.
    pub fn set_preference(&self, next: ThemePreference) {
        {
            let mut preference = self.inner.preference.write().unwrap();
            if *preference == next {
                return;
            }
            tracing::debug!(
                "ThemeStore::set_preference - switching from {:?} to {:?}",
                *preference,
                next
            );
            *preference = next;
        }

        self.inner.storage.save(next);
        self.republish();
    }

    /// Flip to the concrete opposite of the resolved scheme
    ///
    /// Always yields `Light` or `Dark`, never `System`: once the user
    /// toggles, the choice is explicit.
    pub fn toggle_preference(&self) {
        let next = match self.resolved_scheme() {
            ColorScheme::Light => ThemePreference::Dark,
            ColorScheme::Dark => ThemePreference::Light,
        };
        self.set_preference(next);
    }

    /// Record the latest OS scheme
    ///
    /// Under a concrete preference the value is recorded with no further
    /// effect. Under `System` a changed value re-resolves and publishes.
    pub fn set_system_scheme(&self, scheme: ColorScheme) {
        {
            let mut system = self.inner.system_scheme.write().unwrap();
            if *system == scheme {
                return;
            }
            *system = scheme;
        }

        if self.preference().is_system() {
            self.republish();
        }
    }

    /// Follow a scheme signal
    ///
    /// Seeds the store from the signal's current value, then forwards
    /// every emission into [`set_system_scheme`](Self::set_system_scheme).
    /// The returned guard is the single release point for the
    /// registration; the callback holds the store weakly, so a dropped
    /// store degrades to a no-op instead of leaking.
    pub fn watch(&self, signal: &SchemeSignal) -> SchemeSubscription {
        self.set_system_scheme(signal.current());

        let weak = Arc::downgrade(&self.inner);
        signal.subscribe(move |scheme| {
            if let Some(inner) = weak.upgrade() {
                ThemeStore { inner }.set_system_scheme(scheme);
            }
        })
    }

    // ========== Marker and listeners ==========

    /// Install the styling marker sink
    ///
    /// The marker receives the current resolved scheme immediately and is
    /// re-applied on every resolved change. This is the store's only side
    /// effect beyond its own state and storage.
    pub fn bind_marker(&self, marker: impl SchemeMarker + 'static) {
        let marker: Arc<dyn SchemeMarker> = Arc::new(marker);
        *self.inner.marker.lock().unwrap() = Some(marker.clone());
        marker.apply(self.resolved_scheme());
    }

    /// Register a synchronous change listener
    pub fn on_change<F>(&self, callback: F) -> ThemeListener
    where
        F: Fn(ThemeChange) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap()
            .insert(id, Arc::new(callback));
        ThemeListener {
            store: Arc::downgrade(&self.inner),
            id,
            released: AtomicBool::new(false),
        }
    }

    /// Number of live change listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().unwrap().len()
    }

    fn republish(&self) {
        let preference = self.preference();
        let system = self.system_scheme();
        let next_resolved = preference.resolve(system);

        let resolved_changed = {
            let mut resolved = self.inner.resolved.write().unwrap();
            let changed = *resolved != next_resolved;
            *resolved = next_resolved;
            changed
        };

        if resolved_changed {
            self.swap_tables(next_resolved);
            self.apply_marker(next_resolved);
        }
        self.notify(ThemeChange {
            preference,
            resolved: next_resolved,
        });
    }

    fn swap_tables(&self, scheme: ColorScheme) {
        let theme = self.inner.bundle.for_scheme(scheme);
        *self.inner.colors.write().unwrap() = theme.colors().clone();
        *self.inner.typography.write().unwrap() = theme.typography().clone();
        *self.inner.spacing.write().unwrap() = theme.spacing().clone();
        *self.inner.radii.write().unwrap() = theme.radii().clone();
        *self.inner.shadows.write().unwrap() = theme.shadows().clone();
    }

    fn apply_marker(&self, scheme: ColorScheme) {
        let marker = self.inner.marker.lock().unwrap().clone();
        if let Some(marker) = marker {
            marker.apply(scheme);
        }
    }

    fn notify(&self, change: ThemeChange) {
        let snapshot: Vec<ChangeCallback> = self
            .inner
            .listeners
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        for callback in snapshot {
            callback(change);
        }
    }

    // ========== Token access ==========

    /// Get a color from the active table
    pub fn color(&self, token: ColorToken) -> Color {
        self.inner.colors.read().unwrap().get(token)
    }

    /// Snapshot of the active color table
    pub fn colors(&self) -> ColorTokens {
        self.inner.colors.read().unwrap().clone()
    }

    pub fn typography(&self) -> TypographyTokens {
        self.inner.typography.read().unwrap().clone()
    }

    /// Get a font size from the active typography table
    pub fn font_size(&self, token: FontSizeToken) -> f32 {
        self.inner.typography.read().unwrap().size(token)
    }

    pub fn spacing(&self) -> SpacingTokens {
        self.inner.spacing.read().unwrap().clone()
    }

    /// Get a spacing value from the active table
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.inner.spacing.read().unwrap().get(token)
    }

    pub fn radii(&self) -> RadiusTokens {
        self.inner.radii.read().unwrap().clone()
    }

    /// Get a border radius from the active table
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.inner.radii.read().unwrap().get(token)
    }

    pub fn shadows(&self) -> ShadowTokens {
        self.inner.shadows.read().unwrap().clone()
    }

    /// Get a shadow from the active table
    pub fn shadow(&self, token: ShadowToken) -> Shadow {
        *self.inner.shadows.read().unwrap().get(token)
    }

    pub fn opacities(&self) -> OpacityTokens {
        self.inner.opacities.read().unwrap().clone()
    }

    /// Get an opacity level from the active table
    pub fn opacity_value(&self, token: OpacityToken) -> f32 {
        self.inner.opacities.read().unwrap().get(token)
    }

    /// Export the active colors as a flat variable map
    ///
    /// Useful for diagnostics and tooling that wants CSS-style variables.
    /// Opaque colors format as `#rrggbb`, translucent ones as `rgba()`.
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        fn hex(c: Color) -> String {
            c.to_css_string()
        }

        let mut vars = HashMap::with_capacity(29);

        vars.insert("background".into(), hex(self.color(ColorToken::Background)));
        vars.insert("foreground".into(), hex(self.color(ColorToken::Foreground)));
        vars.insert("card".into(), hex(self.color(ColorToken::Card)));
        vars.insert(
            "card-foreground".into(),
            hex(self.color(ColorToken::CardForeground)),
        );
        vars.insert("popover".into(), hex(self.color(ColorToken::Popover)));
        vars.insert(
            "popover-foreground".into(),
            hex(self.color(ColorToken::PopoverForeground)),
        );
        vars.insert("primary".into(), hex(self.color(ColorToken::Primary)));
        vars.insert(
            "primary-foreground".into(),
            hex(self.color(ColorToken::PrimaryForeground)),
        );
        vars.insert(
            "primary-hover".into(),
            hex(self.color(ColorToken::PrimaryHover)),
        );
        vars.insert(
            "primary-active".into(),
            hex(self.color(ColorToken::PrimaryActive)),
        );
        vars.insert("secondary".into(), hex(self.color(ColorToken::Secondary)));
        vars.insert(
            "secondary-foreground".into(),
            hex(self.color(ColorToken::SecondaryForeground)),
        );
        vars.insert(
            "secondary-hover".into(),
            hex(self.color(ColorToken::SecondaryHover)),
        );
        vars.insert(
            "secondary-active".into(),
            hex(self.color(ColorToken::SecondaryActive)),
        );
        vars.insert("muted".into(), hex(self.color(ColorToken::Muted)));
        vars.insert(
            "muted-foreground".into(),
            hex(self.color(ColorToken::MutedForeground)),
        );
        vars.insert("accent".into(), hex(self.color(ColorToken::Accent)));
        vars.insert(
            "accent-foreground".into(),
            hex(self.color(ColorToken::AccentForeground)),
        );
        vars.insert(
            "destructive".into(),
            hex(self.color(ColorToken::Destructive)),
        );
        vars.insert(
            "destructive-foreground".into(),
            hex(self.color(ColorToken::DestructiveForeground)),
        );
        vars.insert("success".into(), hex(self.color(ColorToken::Success)));
        vars.insert("warning".into(), hex(self.color(ColorToken::Warning)));
        vars.insert("border".into(), hex(self.color(ColorToken::Border)));
        vars.insert("input".into(), hex(self.color(ColorToken::Input)));
        vars.insert("ring".into(), hex(self.color(ColorToken::Ring)));
        vars.insert("selection".into(), hex(self.color(ColorToken::Selection)));
        vars.insert(
            "selection-foreground".into(),
            hex(self.color(ColorToken::SelectionForeground)),
        );
        vars.insert(
            "tooltip-bg".into(),
            hex(self.color(ColorToken::TooltipBackground)),
        );
        vars.insert(
            "tooltip-text".into(),
            hex(self.color(ColorToken::TooltipForeground)),
        );

        vars
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeStoreConfig::default())
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preference", &self.preference())
            .field("resolved", &self.resolved_scheme())
            .field("system", &self.system_scheme())
            .finish()
    }
}

/// Guard for one change-listener registration
///
/// Same contract as [`SchemeSubscription`]: released exactly once, via
/// `release()` or drop, and safe after the store is gone.
pub struct ThemeListener {
    store: Weak<StoreInner>,
    id: u64,
    released: AtomicBool,
}

impl ThemeListener {
    /// Deregister the listener; idempotent
    pub fn release(&self) {
        if self.released.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.lock().unwrap().remove(&self.id);
        }
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

impl Drop for ThemeListener {
    fn drop(&mut self) {
        self.release();
    }
}
