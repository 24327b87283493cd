/// Mirror of the browser-side scroll and address state, implementing
/// the navigation controller's `ViewHost` seam.
#[derive(Debug, Default)]
struct ScrollModel {
    offset: f32,
    target: Option<(f32, ScrollBehavior)>,
    anchors: HashMap<String, f32>,
    address_fragment: String,
}

/// UI intents collected while rendering and applied after the frame.
#[derive(Debug, Clone)]
enum UiAction {
    NavSection(&'static str),
    HistoryBack,
    OpenProduct(Product),
    OpenArticle(JournalArticle),
    Back,
    AddToCart(Product),
    RemoveCartItem(usize),
    OpenCart,
    CloseCart,
    BeginCheckout,
    ToggleAssistant,
    SendChatMessage,
}

#[derive(Debug)]
struct AssistantReply {
    request_id: u64,
    text: String,
}

struct AssistantPanel {
    open: bool,
    input: String,
    transcript: Vec<ChatTurn>,
    next_request_id: u64,
    inflight_request_id: Option<u64>,
    reply_receiver: Option<mpsc::Receiver<AssistantReply>>,
}

struct StorefrontApp {
    nav: NavigationController,
    cart: CartStore,
    cart_open: bool,
    scroll: ScrollModel,
    assistant: AssistantPanel,
}
