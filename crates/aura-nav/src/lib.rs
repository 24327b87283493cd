//! Navigation contracts: view-state derivation, the explicit history
//! stack, and the controller keeping both in sync with the view layer.

pub mod controller;
pub mod history;
pub mod view;

pub use controller::HEADER_SCROLL_OFFSET;
pub use controller::NavigationController;
pub use controller::ScrollBehavior;
pub use controller::ViewHost;
pub use history::HistoryEntry;
pub use history::HistoryStack;
pub use view::ViewState;
pub use view::resolve_view_from_fragment;
