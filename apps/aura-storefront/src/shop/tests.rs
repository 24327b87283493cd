#[cfg(test)]
mod tests {
    use super::{
        ScrollModel, StorefrontApp, UiAction, format_price_usd, format_subtotal_usd,
        HOME_SECTION_PRODUCTS,
    };
    use aura_catalog::Catalog;
    use aura_nav::NavigationController;
    use aura_nav::ScrollBehavior;
    use aura_nav::ViewHost;
    use aura_nav::ViewState;

    fn sample_product(id: &str) -> aura_catalog::Product {
        Catalog::builtin()
            .product_by_id(id)
            .cloned()
            .unwrap_or_else(|| panic!("builtin catalog is missing `{id}`"))
    }

    #[test]
    fn prices_render_as_whole_dollars() {
        assert_eq!(format_price_usd(129), "$129");
        assert_eq!(format_subtotal_usd(378), "$378");
    }

    #[test]
    fn smooth_scrolling_approaches_and_snaps_to_the_target() {
        let mut scroll = ScrollModel::default();
        scroll.scroll_to(100.0, ScrollBehavior::Smooth);

        let first = scroll.step(1.0 / 60.0);
        assert!(first.is_some_and(|offset| offset > 0.0 && offset < 100.0));

        for _ in 0..600 {
            if scroll.step(1.0 / 60.0).is_none() && !scroll.is_animating() {
                break;
            }
        }
        assert!(!scroll.is_animating());
        assert_eq!(scroll.scroll_offset(), 100.0);
    }

    #[test]
    fn instant_scrolling_jumps_in_one_frame() {
        let mut scroll = ScrollModel::default();
        scroll.scroll_to(420.0, ScrollBehavior::Instant);

        assert_eq!(scroll.step(1.0 / 60.0), Some(420.0));
        assert!(!scroll.is_animating());
    }

    #[test]
    fn settle_only_adopts_shopper_scrolling_when_idle() {
        let mut scroll = ScrollModel::default();
        scroll.settle(250.0);
        assert_eq!(scroll.scroll_offset(), 250.0);

        scroll.scroll_to(0.0, ScrollBehavior::Smooth);
        scroll.settle(999.0);
        assert_eq!(scroll.scroll_offset(), 250.0);
    }

    #[test]
    fn anchors_are_forgotten_when_cleared() {
        let mut scroll = ScrollModel::default();
        scroll.record_anchor(HOME_SECTION_PRODUCTS, 640.0);
        assert_eq!(scroll.anchor_offset(HOME_SECTION_PRODUCTS), Some(640.0));

        scroll.clear_anchors();
        assert_eq!(scroll.anchor_offset(HOME_SECTION_PRODUCTS), None);
    }

    #[test]
    fn fragment_mirroring_updates_the_address_display() {
        let mut scroll = ScrollModel::default();
        assert!(scroll.push_fragment("checkout").is_ok());
        assert_eq!(scroll.address_fragment(), "checkout");

        assert!(scroll.replace_fragment("products").is_ok());
        assert_eq!(scroll.address_fragment(), "products");
    }

    #[test]
    fn adding_to_the_cart_opens_the_drawer() {
        let mut app = StorefrontApp::default();
        assert!(!app.cart_open);

        app.apply(UiAction::AddToCart(sample_product("halo-lamp")));
        assert!(app.cart_open);
        assert_eq!(app.cart.count(), 1);
    }

    #[test]
    fn checkout_closes_the_drawer_and_switches_view() {
        let mut app = StorefrontApp::default();
        app.apply(UiAction::AddToCart(sample_product("halo-lamp")));
        app.apply(UiAction::BeginCheckout);

        assert!(!app.cart_open);
        assert_eq!(app.nav.view(), &ViewState::Checkout);
        assert_eq!(app.nav.current_fragment(), "checkout");
    }

    #[test]
    fn opening_a_product_round_trips_through_the_fragment() {
        let mut app = StorefrontApp::default();
        let product = sample_product("drift-speaker");
        app.apply(UiAction::OpenProduct(product.clone()));

        assert_eq!(app.nav.current_fragment(), "product-drift-speaker");
        assert_eq!(
            app.nav.resolve_view_from_fragment(app.nav.current_fragment()),
            ViewState::Product(product)
        );
    }

    #[test]
    fn back_from_a_direct_product_link_falls_back_to_the_grid() {
        let mut app = StorefrontApp::default();
        app.nav = NavigationController::new(Catalog::builtin(), "product-halo-lamp");

        app.apply(UiAction::Back);
        assert_eq!(app.nav.view(), &ViewState::Home);
        assert_eq!(app.nav.current_fragment(), "products");
    }

    #[test]
    fn stale_cart_indices_never_panic() {
        let mut app = StorefrontApp::default();
        app.apply(UiAction::RemoveCartItem(7));
        assert!(app.cart.is_empty());
    }

    #[test]
    fn chat_submission_is_ignored_while_a_reply_is_pending() {
        let mut app = StorefrontApp::default();
        app.assistant.inflight_request_id = Some(1);
        app.assistant.input = "Is the lamp dimmable?".to_owned();
        let turns_before = app.assistant.transcript.len();

        app.send_chat_message();
        assert_eq!(app.assistant.transcript.len(), turns_before);
        assert_eq!(app.assistant.input, "Is the lamp dimmable?");
    }

    #[test]
    fn blank_chat_drafts_are_not_submitted() {
        let mut app = StorefrontApp::default();
        app.assistant.input = "   ".to_owned();
        let turns_before = app.assistant.transcript.len();

        app.send_chat_message();
        assert_eq!(app.assistant.transcript.len(), turns_before);
        assert!(app.assistant.inflight_request_id.is_none());
    }
}
