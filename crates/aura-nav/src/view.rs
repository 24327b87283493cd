//! View-state derivation from URL fragments.

use aura_catalog::Catalog;
use aura_catalog::JournalArticle;
use aura_catalog::Product;

const PRODUCT_FRAGMENT_PREFIX: &str = "product-";
const JOURNAL_FRAGMENT_PREFIX: &str = "journal-";
const CHECKOUT_FRAGMENT: &str = "checkout";

/// The single value deciding which top-level screen is rendered.
///
/// Exactly one variant is active at a time. Home section anchors
/// (`products`, `about`, `journal`) are scroll targets within `Home`,
/// not separate states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Home,
    Product(Product),
    Journal(JournalArticle),
    Checkout,
}

impl ViewState {
    /// Canonical fragment for this state, as pushed into history.
    pub fn fragment(&self) -> String {
        match self {
            Self::Home => String::new(),
            Self::Product(product) => format!("{PRODUCT_FRAGMENT_PREFIX}{}", product.id),
            Self::Journal(article) => format!("{JOURNAL_FRAGMENT_PREFIX}{}", article.id),
            Self::Checkout => CHECKOUT_FRAGMENT.to_owned(),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }
}

/// Derives the view for a URL fragment.
///
/// Unknown or malformed fragments fall back to `Home` rather than
/// erroring; a leading `#` is tolerated.
pub fn resolve_view_from_fragment(catalog: &Catalog, fragment: &str) -> ViewState {
    let fragment = fragment.trim_start_matches('#');

    if let Some(id) = fragment.strip_prefix(PRODUCT_FRAGMENT_PREFIX)
        && let Some(product) = catalog.product_by_id(id)
    {
        return ViewState::Product(product.clone());
    }

    if let Some(raw_id) = fragment.strip_prefix(JOURNAL_FRAGMENT_PREFIX)
        && let Ok(id) = raw_id.parse::<u32>()
        && let Some(article) = catalog.article_by_id(id)
    {
        return ViewState::Journal(article.clone());
    }

    if fragment == CHECKOUT_FRAGMENT {
        return ViewState::Checkout;
    }

    ViewState::Home
}

#[cfg(test)]
mod tests {
    use super::ViewState;
    use super::resolve_view_from_fragment;
    use aura_catalog::Catalog;

    #[test]
    fn resolves_known_product_fragments() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            let resolved = resolve_view_from_fragment(&catalog, &format!("product-{}", product.id));
            assert_eq!(resolved, ViewState::Product(product.clone()));
        }
    }

    #[test]
    fn unknown_product_id_falls_back_to_home() {
        let catalog = Catalog::builtin();
        let resolved = resolve_view_from_fragment(&catalog, "product-missing-thing");
        assert_eq!(resolved, ViewState::Home);
    }

    #[test]
    fn resolves_known_journal_fragments() {
        let catalog = Catalog::builtin();
        for article in catalog.articles() {
            let resolved = resolve_view_from_fragment(&catalog, &format!("journal-{}", article.id));
            assert_eq!(resolved, ViewState::Journal(article.clone()));
        }
    }

    #[test]
    fn non_numeric_journal_id_falls_back_to_home() {
        let catalog = Catalog::builtin();
        assert_eq!(
            resolve_view_from_fragment(&catalog, "journal-latest"),
            ViewState::Home
        );
        assert_eq!(
            resolve_view_from_fragment(&catalog, "journal-999"),
            ViewState::Home
        );
    }

    #[test]
    fn resolves_checkout_fragment() {
        let catalog = Catalog::builtin();
        assert_eq!(
            resolve_view_from_fragment(&catalog, "checkout"),
            ViewState::Checkout
        );
    }

    #[test]
    fn empty_and_unrecognized_fragments_resolve_to_home() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve_view_from_fragment(&catalog, ""), ViewState::Home);
        assert_eq!(resolve_view_from_fragment(&catalog, "#"), ViewState::Home);
        assert_eq!(
            resolve_view_from_fragment(&catalog, "products"),
            ViewState::Home
        );
        assert_eq!(
            resolve_view_from_fragment(&catalog, "no-such-section"),
            ViewState::Home
        );
    }

    #[test]
    fn tolerates_leading_hash() {
        let catalog = Catalog::builtin();
        assert_eq!(
            resolve_view_from_fragment(&catalog, "#checkout"),
            ViewState::Checkout
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let catalog = Catalog::builtin();
        for fragment in ["product-halo-lamp", "journal-1", "checkout", "", "garbage"] {
            let first = resolve_view_from_fragment(&catalog, fragment);
            let second = resolve_view_from_fragment(&catalog, fragment);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn canonical_fragment_round_trips_through_resolution() {
        let catalog = Catalog::builtin();
        let views = [
            ViewState::Home,
            ViewState::Checkout,
            resolve_view_from_fragment(&catalog, "product-drift-speaker"),
            resolve_view_from_fragment(&catalog, "journal-2"),
        ];
        for view in views {
            let resolved = resolve_view_from_fragment(&catalog, &view.fragment());
            assert_eq!(resolved, view);
        }
    }
}
