//! Navigation controller: owns the active view and the history stack,
//! and defers scroll actions until the view layer reports a completed
//! render.

use aura_catalog::Catalog;
use aura_core::StorefrontResult;

use crate::history::HistoryEntry;
use crate::history::HistoryStack;
use crate::view::ViewState;
use crate::view::resolve_view_from_fragment;

/// Height of the fixed header band that anchors must clear.
pub const HEADER_SCROLL_OFFSET: f32 = 85.0;

/// How a scroll movement should be presented by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll, used for forward navigations and anchors.
    Smooth,
    /// Immediate jump, used when restoring a saved offset.
    Instant,
}

/// Seam to the external view layer: scrolling and address mirroring.
///
/// Fragment mirroring can fail in restricted embedding contexts. The
/// controller swallows those failures; its own stack stays authoritative.
pub trait ViewHost {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f32;

    /// Scrolls the document to `offset`.
    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior);

    /// Document offset of the anchor's top edge, if the anchor exists in
    /// the currently rendered view.
    fn anchor_offset(&self, anchor_id: &str) -> Option<f32>;

    /// Mirrors `fragment` into the address display without adding a stop.
    fn replace_fragment(&mut self, fragment: &str) -> StorefrontResult<()>;

    /// Mirrors `fragment` into the address display as a new stop.
    fn push_fragment(&mut self, fragment: &str) -> StorefrontResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
enum DeferredScroll {
    RestoreOffset(f32),
    Anchor(String),
}

/// One-shot scroll action held until `view` has rendered. Dropping it
/// unfired is harmless.
#[derive(Debug, Clone, PartialEq)]
struct PendingScroll {
    view: ViewState,
    action: DeferredScroll,
}

/// Single source of truth for the active view, kept consistent with the
/// fragment history stack.
#[derive(Debug, Clone)]
pub struct NavigationController {
    catalog: Catalog,
    view: ViewState,
    history: HistoryStack,
    pending_scroll: Option<PendingScroll>,
}

impl NavigationController {
    /// Builds a controller for the session's entry fragment (the part
    /// after `#` in the address the storefront was opened with).
    pub fn new(catalog: Catalog, entry_fragment: &str) -> Self {
        let view = resolve_view_from_fragment(&catalog, entry_fragment);

        Self {
            view,
            history: HistoryStack::new(entry_fragment.trim_start_matches('#')),
            catalog,
            pending_scroll: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Fragment of the current history stop.
    pub fn current_fragment(&self) -> &str {
        self.history
            .current()
            .map(|entry| entry.fragment.as_str())
            .unwrap_or_default()
    }

    /// Pure resolution against this controller's catalog.
    pub fn resolve_view_from_fragment(&self, fragment: &str) -> ViewState {
        resolve_view_from_fragment(&self.catalog, fragment)
    }

    /// Forward navigation: saves the departing scroll offset on the
    /// current stop, scrolls to top, switches state, and pushes
    /// `fragment` as the new stop.
    pub fn navigate_to(&mut self, host: &mut dyn ViewHost, target: ViewState, fragment: &str) {
        self.history.record_scroll_offset(host.scroll_offset());
        host.scroll_to(0.0, ScrollBehavior::Smooth);
        self.view = target;
        self.history.push(fragment);
        let _ = host.push_fragment(fragment);
        self.pending_scroll = None;
    }

    /// Back navigation. Falls back to an explicit target when the stack
    /// has no previous stop (detail view entered via direct link).
    pub fn go_back(
        &mut self,
        host: &mut dyn ViewHost,
        fallback_target: ViewState,
        fallback_fragment: &str,
    ) {
        match self.history.pop_to_previous() {
            Some(entry) => self.enter_popped_entry(host, entry),
            None => {
                self.view = fallback_target;
                self.history.push(fallback_fragment);
                let _ = host.push_fragment(fallback_fragment);
            }
        }
    }

    /// Handler for a host-initiated history pop (native back/forward).
    /// Re-derives the view from the popped fragment and queues a
    /// one-shot scroll restore if the entry carried a saved offset.
    pub fn on_history_popped(
        &mut self,
        host: &mut dyn ViewHost,
        popped_fragment: &str,
        saved_scroll_offset: Option<f32>,
    ) {
        self.align_stack_to_pop(popped_fragment);

        let mut entry = HistoryEntry::new(popped_fragment.trim_start_matches('#'));
        entry.scroll_offset = saved_scroll_offset;
        self.enter_popped_entry(host, entry);
    }

    /// Smooth-scrolls to a named section of the current view. An empty
    /// anchor targets the document top; an unknown anchor is ignored.
    pub fn scroll_to_anchor(&mut self, host: &mut dyn ViewHost, anchor_id: &str) {
        if anchor_id.is_empty() {
            host.scroll_to(0.0, ScrollBehavior::Smooth);
            return;
        }

        let Some(anchor_top) = host.anchor_offset(anchor_id) else {
            return;
        };

        self.history.record_scroll_offset(host.scroll_offset());
        host.scroll_to(
            (anchor_top - HEADER_SCROLL_OFFSET).max(0.0),
            ScrollBehavior::Smooth,
        );
        self.history.push(anchor_id);
        let _ = host.push_fragment(anchor_id);
    }

    /// Nav-link handler. Section anchors only exist in the home render
    /// tree, so other views switch home first and scroll once the view
    /// layer reports that home has rendered.
    pub fn navigate_home_then_scroll(&mut self, host: &mut dyn ViewHost, anchor_id: &str) {
        if self.view.is_home() {
            self.scroll_to_anchor(host, anchor_id);
            return;
        }

        self.view = ViewState::Home;
        self.pending_scroll = Some(PendingScroll {
            view: ViewState::Home,
            action: DeferredScroll::Anchor(anchor_id.to_owned()),
        });
    }

    /// Render-complete signal from the view layer. Fires the deferred
    /// scroll action queued for `rendered` at most once; signals for
    /// other states leave the queued action in place.
    pub fn on_render_complete(&mut self, host: &mut dyn ViewHost, rendered: &ViewState) {
        let matches = self
            .pending_scroll
            .as_ref()
            .is_some_and(|pending| pending.view == *rendered);
        if !matches {
            return;
        }

        let Some(pending) = self.pending_scroll.take() else {
            return;
        };

        match pending.action {
            DeferredScroll::RestoreOffset(offset) => {
                host.scroll_to(offset, ScrollBehavior::Instant);
            }
            DeferredScroll::Anchor(anchor_id) => self.scroll_to_anchor(host, &anchor_id),
        }
    }

    fn enter_popped_entry(&mut self, host: &mut dyn ViewHost, entry: HistoryEntry) {
        self.view = resolve_view_from_fragment(&self.catalog, &entry.fragment);
        let _ = host.replace_fragment(&entry.fragment);
        self.pending_scroll = entry.scroll_offset.map(|offset| PendingScroll {
            view: self.view.clone(),
            action: DeferredScroll::RestoreOffset(offset),
        });
    }

    /// Keeps the stack aligned when the pop originated in the host
    /// rather than through `go_back`.
    fn align_stack_to_pop(&mut self, popped_fragment: &str) {
        let fragment = popped_fragment.trim_start_matches('#');
        let below_matches = self
            .history
            .previous()
            .is_some_and(|entry| entry.fragment == fragment);

        if below_matches {
            let _ = self.history.pop_to_previous();
        }
    }
}
