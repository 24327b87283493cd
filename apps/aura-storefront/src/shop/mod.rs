use aura_cart::CartStore;
use aura_catalog::JournalArticle;
use aura_catalog::Product;
use aura_concierge::ChatRole;
use aura_concierge::ChatTurn;
use aura_concierge::Concierge;
use aura_concierge::GeminiTransport;
use aura_concierge::UNREACHABLE_APOLOGY;
use aura_core::StorefrontResult;
use aura_nav::NavigationController;
use aura_nav::ScrollBehavior;
use aura_nav::ViewHost;
use aura_nav::ViewState;
use eframe::egui;
use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

include!("constants.rs");
include!("types.rs");

mod assistant;
mod scroll;
mod startup;
mod ui;

pub(crate) use startup::run;
