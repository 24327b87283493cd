const APP_TITLE: &str = "Aura Living";
const ENTRY_FRAGMENT: &str = "";

const HOME_SECTION_PRODUCTS: &str = "products";
const HOME_SECTION_ABOUT: &str = "about";
const HOME_SECTION_JOURNAL: &str = "journal";

const PRODUCT_BACK_FALLBACK_FRAGMENT: &str = "products";
const JOURNAL_BACK_FALLBACK_FRAGMENT: &str = "journal";
const CHECKOUT_BACK_FALLBACK_FRAGMENT: &str = "";

const SMOOTH_SCROLL_RATE: f32 = 10.0;
const SCROLL_SNAP_EPSILON: f32 = 0.5;
const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

const CART_DRAWER_WIDTH: f32 = 320.0;
const PRODUCT_GRID_COLUMNS: usize = 3;

const ASSISTANT_GREETING: &str =
    "Welcome to Aura. Ask me anything about the collection, or about how we make it.";
const ASSISTANT_THREAD_STACK_SIZE: usize = 2 * 1024 * 1024;
