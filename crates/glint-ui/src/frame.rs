//! A page of components sharing one viewport.
//!
//! Components are kept in insertion order. That order is the update order,
//! the paint order (later components draw on top) and the focus priority:
//! when several components request focus in the same update, the first one
//! wins.

use glint_core::alloc::OrderedMap;
use glint_core::profiling::profile_function;
use glint_core::time::Stopwatch;
use glint_input::InputProvider;
use glint_render::{Color, RenderBackend, Viewport};

use crate::component::Component;
use crate::context::{RenderContext, UpdateContext};
use crate::UiConfig;

struct Entry {
    component: Box<dyn Component>,
    /// Cached at insertion so arbitration skips non-focusable entries cheaply.
    focusable: bool,
}

pub struct Frame {
    components: OrderedMap<String, Entry>,
    viewport: Viewport,
    background: Color,
    enabled: bool,
    clock: Stopwatch,
    config: UiConfig,
}

impl Frame {
    pub fn new() -> Self {
        Self::with_viewport(Viewport::default())
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            components: OrderedMap::default(),
            viewport,
            background: Color::BLACK,
            enabled: true,
            clock: Stopwatch::new(),
            config: UiConfig::default(),
        }
    }

    pub fn with_config(mut self, config: UiConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a component under `key`. Returns `false` and drops `component` if
    /// the key is already taken.
    pub fn add_component(&mut self, key: impl Into<String>, component: impl Component) -> bool {
        self.add_boxed(key, Box::new(component))
    }

    pub fn add_boxed(&mut self, key: impl Into<String>, component: Box<dyn Component>) -> bool {
        let key = key.into();
        if self.components.contains_key(&key) {
            tracing::debug!(key = %key, "ignoring component with duplicate key");
            return false;
        }
        let focusable = component.is_focusable();
        tracing::debug!(key = %key, focusable, "component added");
        self.components.insert(key, Entry { component, focusable });
        true
    }

    /// Remove and return the component under `key`. The others keep their order.
    pub fn remove_component(&mut self, key: &str) -> Option<Box<dyn Component>> {
        let entry = self.components.shift_remove(key)?;
        tracing::debug!(key, "component removed");
        Some(entry.component)
    }

    pub fn component(&self, key: &str) -> Option<&(dyn Component + 'static)> {
        self.components.get(key).map(|e| e.component.as_ref())
    }

    pub fn component_mut(&mut self, key: &str) -> Option<&mut (dyn Component + 'static)> {
        self.components.get_mut(key).map(|e| e.component.as_mut())
    }

    /// Typed lookup. `None` if the key is absent or holds another type.
    pub fn get<T: Component>(&self, key: &str) -> Option<&T> {
        self.component(key)?.downcast_ref::<T>()
    }

    pub fn get_mut<T: Component>(&mut self, key: &str) -> Option<&mut T> {
        self.component_mut(key)?.downcast_mut::<T>()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Keys in update and paint order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Key of the focused component, if any.
    pub fn focused_key(&self) -> Option<&str> {
        self.components.iter().find_map(|(key, entry)| {
            let focused = entry.component.as_focusable()?.is_focused();
            focused.then_some(key.as_str())
        })
    }

    /// Focus the component under `key`, unfocus every other one and drop
    /// their pending requests.
    /// Returns `false` if there is no focusable component under `key`.
    pub fn force_set_current_focused(&mut self, key: &str) -> bool {
        let Some(target) = self.components.get_index_of(key) else {
            return false;
        };
        if !self.components[target].focusable {
            return false;
        }
        self.focus_exclusively(target);
        true
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: UiConfig) {
        self.config = config;
    }

    /// Advance one frame using the wall time since the previous update.
    pub fn update(&mut self, input: &mut dyn InputProvider) {
        let delta_time = self.clock.lap();
        self.update_with_delta(input, delta_time);
    }

    /// Advance one frame by `delta_time` seconds.
    ///
    /// Enabled components update in order. The first focusable component
    /// found requesting focus is granted it; every other focusable component
    /// is then unfocused and its pending request dropped. Disabled frames do
    /// nothing.
    pub fn update_with_delta(&mut self, input: &mut dyn InputProvider, delta_time: f32) {
        profile_function!();
        if !self.enabled {
            return;
        }
        self.viewport.update();

        let config = self.config;
        let mut ctx = UpdateContext::new(input, delta_time, &config);
        let mut winner = None;

        for (index, entry) in self.components.values_mut().enumerate() {
            if !entry.component.is_enabled() {
                continue;
            }
            entry.component.update(&mut ctx);

            if winner.is_none()
                && entry.focusable
                && let Some(focusable) = entry.component.as_focusable_mut()
                && focusable.has_requested_focus()
            {
                focusable.set_focus_state(true);
                winner = Some(index);
            }
        }

        if let Some(index) = winner {
            if let Some((key, _)) = self.components.get_index(index) {
                tracing::debug!(key = %key, "focus granted");
            }
            self.focus_exclusively(index);
        }
    }

    fn focus_exclusively(&mut self, target: usize) {
        for (index, entry) in self.components.values_mut().enumerate() {
            if !entry.focusable {
                continue;
            }
            if let Some(focusable) = entry.component.as_focusable_mut() {
                if index != target {
                    focusable.cancel_focus_request();
                }
                focusable.set_focus_state(index == target);
            }
        }
    }

    /// Clear to the background colour and draw enabled components in order.
    pub fn render(&self, backend: &mut dyn RenderBackend) {
        profile_function!();
        if !self.enabled {
            return;
        }
        backend.set_viewport(&self.viewport);
        backend.clear(self.background);

        let mut ctx = RenderContext::new(backend, &self.viewport);
        for entry in self.components.values() {
            if entry.component.is_enabled() {
                entry.component.render(&mut ctx);
            }
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .field("viewport", &self.viewport)
            .field("background", &self.background)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
