use super::*;

const BRAND_INK: egui::Color32 = egui::Color32::from_rgb(44, 42, 38);
const BRAND_PARCHMENT: egui::Color32 = egui::Color32::from_rgb(245, 242, 235);
const BRAND_CLAY: egui::Color32 = egui::Color32::from_rgb(176, 138, 104);
const BRAND_MOSS: egui::Color32 = egui::Color32::from_rgb(110, 120, 94);

impl Default for StorefrontApp {
    fn default() -> Self {
        Self {
            nav: NavigationController::new(aura_catalog::Catalog::builtin(), ENTRY_FRAGMENT),
            cart: CartStore::new(),
            cart_open: false,
            scroll: ScrollModel::default(),
            assistant: AssistantPanel::new(),
        }
    }
}

fn format_price_usd(price: u32) -> String {
    format!("${price}")
}

fn format_subtotal_usd(subtotal: u64) -> String {
    format!("${subtotal}")
}

impl StorefrontApp {
    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::NavSection(anchor) => {
                self.nav.navigate_home_then_scroll(&mut self.scroll, anchor);
            }
            UiAction::HistoryBack => {
                self.nav.go_back(&mut self.scroll, ViewState::Home, ENTRY_FRAGMENT);
            }
            UiAction::OpenProduct(product) => {
                let target = ViewState::Product(product);
                let fragment = target.fragment();
                self.nav.navigate_to(&mut self.scroll, target, &fragment);
            }
            UiAction::OpenArticle(article) => {
                let target = ViewState::Journal(article);
                let fragment = target.fragment();
                self.nav.navigate_to(&mut self.scroll, target, &fragment);
            }
            UiAction::Back => self.back_from_current_view(),
            UiAction::AddToCart(product) => {
                // Adding always opens the drawer so the shopper sees it land.
                self.cart.add(product);
                self.cart_open = true;
            }
            UiAction::RemoveCartItem(index) => {
                let _ = self.cart.remove_at(index);
            }
            UiAction::OpenCart => self.cart_open = true,
            UiAction::CloseCart => self.cart_open = false,
            UiAction::BeginCheckout => {
                self.cart_open = false;
                let target = ViewState::Checkout;
                let fragment = target.fragment();
                self.nav.navigate_to(&mut self.scroll, target, &fragment);
            }
            UiAction::ToggleAssistant => self.assistant.open = !self.assistant.open,
            UiAction::SendChatMessage => self.send_chat_message(),
        }
    }

    fn back_from_current_view(&mut self) {
        let (fallback, fallback_fragment) = match self.nav.view() {
            ViewState::Product(_) => (ViewState::Home, PRODUCT_BACK_FALLBACK_FRAGMENT),
            ViewState::Journal(_) => (ViewState::Home, JOURNAL_BACK_FALLBACK_FRAGMENT),
            ViewState::Checkout => (ViewState::Home, CHECKOUT_BACK_FALLBACK_FRAGMENT),
            ViewState::Home => return,
        };
        self.nav.go_back(&mut self.scroll, fallback, fallback_fragment);
    }

    fn render_navbar(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    self.nav.history().can_go_back(),
                    egui::Button::new("\u{2190}"),
                )
                .clicked()
            {
                actions.push(UiAction::HistoryBack);
            }

            if ui
                .button(egui::RichText::new("Aura").size(22.0).strong().color(BRAND_INK))
                .clicked()
            {
                actions.push(UiAction::NavSection(""));
            }

            ui.separator();
            if ui.button("Shop").clicked() {
                actions.push(UiAction::NavSection(HOME_SECTION_PRODUCTS));
            }
            if ui.button("About").clicked() {
                actions.push(UiAction::NavSection(HOME_SECTION_ABOUT));
            }
            if ui.button("Journal").clicked() {
                actions.push(UiAction::NavSection(HOME_SECTION_JOURNAL));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let cart_label = if self.cart.is_empty() {
                    "Cart".to_owned()
                } else {
                    format!("Cart ({})", self.cart.count())
                };
                if ui.button(cart_label).clicked() {
                    actions.push(UiAction::OpenCart);
                }
                if ui.button("Concierge").clicked() {
                    actions.push(UiAction::ToggleAssistant);
                }

                ui.separator();
                let fragment = self.scroll.address_fragment();
                ui.weak(format!("#{fragment}"));
            });
        });
    }

    fn render_active_view(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let view = self.nav.view().clone();
        match view {
            ViewState::Home => self.render_home(ui, actions),
            ViewState::Product(product) => render_product_detail(ui, &product, actions),
            ViewState::Journal(article) => render_journal_detail(ui, &article, actions),
            ViewState::Checkout => self.render_checkout(ui, actions),
        }
    }

    fn render_home(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let content_top = ui.min_rect().top();
        self.scroll.clear_anchors();

        // Hero band.
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Technology with a warmer grain")
                    .size(34.0)
                    .strong()
                    .color(BRAND_INK),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(
                    "Objects for the home that earn their place slowly: oak, wool, \
                     stone, and light that keeps the hour of the day.",
                )
                .size(16.0),
            );
            ui.add_space(16.0);
            if ui.button("Browse the collection").clicked() {
                actions.push(UiAction::NavSection(HOME_SECTION_PRODUCTS));
            }
        });
        ui.add_space(48.0);
        ui.separator();

        // Product grid.
        self.scroll
            .record_anchor(HOME_SECTION_PRODUCTS, ui.cursor().top() - content_top);
        ui.add_space(12.0);
        ui.heading(egui::RichText::new("The Collection").color(BRAND_INK));
        ui.add_space(12.0);

        let products = self.nav.catalog().products().to_vec();
        for row in products.chunks(PRODUCT_GRID_COLUMNS) {
            ui.columns(PRODUCT_GRID_COLUMNS, |columns| {
                for (column, product) in columns.iter_mut().zip(row) {
                    render_product_card(column, product, actions);
                }
            });
            ui.add_space(16.0);
        }
        ui.separator();

        // About band.
        self.scroll
            .record_anchor(HOME_SECTION_ABOUT, ui.cursor().top() - content_top);
        ui.add_space(12.0);
        ui.heading(egui::RichText::new("About Aura").color(BRAND_INK));
        ui.add_space(8.0);
        ui.label(
            "Aura began with a question: why does technology have to look like \
             technology? We make connected objects from materials that age well, \
             tuned to disappear into the rhythm of a home. Every product is built \
             in small batches with workshops we name, from materials we trace.",
        );
        ui.add_space(24.0);
        ui.separator();

        // Journal band.
        self.scroll
            .record_anchor(HOME_SECTION_JOURNAL, ui.cursor().top() - content_top);
        ui.add_space(12.0);
        ui.heading(egui::RichText::new("From the Journal").color(BRAND_INK));
        ui.add_space(12.0);

        let articles = self.nav.catalog().articles().to_vec();
        for article in &articles {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&article.title)
                        .size(18.0)
                        .strong()
                        .color(BRAND_INK),
                );
                ui.weak(&article.date);
                ui.label(&article.excerpt);
                if ui.button("Read").clicked() {
                    actions.push(UiAction::OpenArticle(article.clone()));
                }
            });
            ui.add_space(12.0);
        }
        ui.add_space(48.0);
    }

    fn render_checkout(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.add_space(24.0);
        if ui.button("\u{2190} Continue shopping").clicked() {
            actions.push(UiAction::Back);
        }
        ui.add_space(12.0);
        ui.heading(egui::RichText::new("Checkout").color(BRAND_INK));
        ui.add_space(12.0);

        if self.cart.is_empty() {
            ui.label("Your cart is empty. The collection is a click away.");
            return;
        }

        for product in self.cart.items() {
            ui.horizontal(|ui| {
                ui.label(&product.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format_price_usd(product.price));
                });
            });
            ui.separator();
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Subtotal").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format_subtotal_usd(self.cart.subtotal_usd())).strong(),
                );
            });
        });
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new(
                "Payment is handled at the counter of your nearest stockist; this \
                 storefront does not process orders.",
            )
            .color(BRAND_MOSS),
        );
    }

    fn render_cart_drawer(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::SidePanel::right("cart_drawer_panel")
            .resizable(false)
            .default_width(CART_DRAWER_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.heading("Your Cart");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            actions.push(UiAction::CloseCart);
                        }
                    });
                });
                ui.separator();

                if self.cart.is_empty() {
                    ui.label("Nothing here yet.");
                    return;
                }

                egui::ScrollArea::vertical()
                    .id_salt("cart_items_scroll")
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        for (index, product) in self.cart.items().iter().enumerate() {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(egui::RichText::new(&product.name).strong());
                                    ui.weak(format_price_usd(product.price));
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.button("Remove").clicked() {
                                            actions.push(UiAction::RemoveCartItem(index));
                                        }
                                    },
                                );
                            });
                            ui.separator();
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Subtotal");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format_subtotal_usd(self.cart.subtotal_usd()))
                                .strong(),
                        );
                    });
                });
                ui.add_space(8.0);
                if ui.button("Checkout").clicked() {
                    actions.push(UiAction::BeginCheckout);
                }
            });
    }

    fn render_assistant(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if !self.assistant.open {
            return;
        }

        egui::Window::new("Aura Concierge")
            .id(egui::Id::new("concierge_window"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .default_size([360.0, 440.0])
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("concierge_transcript_scroll")
                    .auto_shrink([false, false])
                    .max_height(320.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for turn in &self.assistant.transcript {
                            let (speaker, color) = match turn.role {
                                ChatRole::User => ("You", BRAND_CLAY),
                                ChatRole::Assistant => ("Concierge", BRAND_MOSS),
                            };
                            ui.label(egui::RichText::new(speaker).small().color(color));
                            ui.label(&turn.text);
                            ui.add_space(8.0);
                        }

                        if self.assistant.is_pending() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.weak("The concierge is thinking");
                            });
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    let response = ui.add_sized(
                        [ui.available_width() - 70.0, 24.0],
                        egui::TextEdit::singleline(&mut self.assistant.input)
                            .hint_text("Ask about the collection"),
                    );
                    let pressed_enter = response.lost_focus()
                        && ui.input(|input| input.key_pressed(egui::Key::Enter));

                    let can_send = !self.assistant.is_pending()
                        && !self.assistant.input.trim().is_empty();
                    let clicked_send = ui
                        .add_enabled(can_send, egui::Button::new("Send"))
                        .clicked();

                    if can_send && (pressed_enter || clicked_send) {
                        actions.push(UiAction::SendChatMessage);
                    }
                });
            });
    }
}

fn render_product_card(ui: &mut egui::Ui, product: &Product, actions: &mut Vec<UiAction>) {
    egui::Frame::group(ui.style())
        .fill(BRAND_PARCHMENT)
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&product.name)
                    .size(17.0)
                    .strong()
                    .color(BRAND_INK),
            );
            ui.weak(&product.tagline);
            ui.label(egui::RichText::new(format_price_usd(product.price)).color(BRAND_CLAY));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("View").clicked() {
                    actions.push(UiAction::OpenProduct(product.clone()));
                }
                if ui.button("Add to cart").clicked() {
                    actions.push(UiAction::AddToCart(product.clone()));
                }
            });
        });
}

fn render_product_detail(ui: &mut egui::Ui, product: &Product, actions: &mut Vec<UiAction>) {
    ui.add_space(24.0);
    if ui.button("\u{2190} Back").clicked() {
        actions.push(UiAction::Back);
    }
    ui.add_space(12.0);
    ui.heading(
        egui::RichText::new(&product.name)
            .size(28.0)
            .color(BRAND_INK),
    );
    ui.weak(&product.tagline);
    ui.label(
        egui::RichText::new(format_price_usd(product.price))
            .size(20.0)
            .color(BRAND_CLAY),
    );
    ui.add_space(12.0);
    ui.label(&product.description);
    ui.add_space(12.0);

    ui.label(egui::RichText::new("Details").strong());
    for feature in &product.features {
        ui.label(format!("\u{2022} {feature}"));
    }

    ui.add_space(16.0);
    if ui.button("Add to cart").clicked() {
        actions.push(UiAction::AddToCart(product.clone()));
    }
}

fn render_journal_detail(ui: &mut egui::Ui, article: &JournalArticle, actions: &mut Vec<UiAction>) {
    ui.add_space(24.0);
    if ui.button("\u{2190} Back").clicked() {
        actions.push(UiAction::Back);
    }
    ui.add_space(12.0);
    ui.heading(
        egui::RichText::new(&article.title)
            .size(28.0)
            .color(BRAND_INK),
    );
    ui.weak(&article.date);
    ui.add_space(12.0);
    ui.label(&article.body);
    ui.add_space(48.0);
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_assistant();

        let mut actions = Vec::new();
        let dt = ctx.input(|input| input.stable_dt);

        if !matches!(self.nav.view(), ViewState::Checkout) {
            egui::TopBottomPanel::top("navbar_panel").show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_navbar(ui, &mut actions);
                ui.add_space(4.0);
            });
        }

        if self.cart_open {
            self.render_cart_drawer(ctx, &mut actions);
        }

        self.render_assistant(ctx, &mut actions);

        egui::CentralPanel::default().show(ctx, |ui| {
            let forced_offset = self.scroll.step(dt);
            let mut area = egui::ScrollArea::vertical()
                .id_salt("storefront_scroll")
                .auto_shrink([false, false]);
            if let Some(offset) = forced_offset {
                area = area.vertical_scroll_offset(offset);
            }

            let rendered_view = self.nav.view().clone();
            let output = area.show(ui, |ui| {
                self.render_active_view(ui, &mut actions);
            });
            self.scroll.settle(output.state.offset.y);

            // The render-then-scroll two-step: deferred actions fire only
            // once the view they were queued for has actually rendered.
            self.nav.on_render_complete(&mut self.scroll, &rendered_view);
        });

        for action in actions {
            self.apply(action);
        }

        if self.scroll.is_animating() || self.assistant.is_pending() {
            ctx.request_repaint_after(ANIMATION_FRAME_INTERVAL);
        }
    }
}

#[cfg(test)]
include!("tests.rs");
