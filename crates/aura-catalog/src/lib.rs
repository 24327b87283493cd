//! Static product and journal catalog consumed by the storefront.

/// A single catalog product. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub tagline: String,
    /// Price in whole US dollars.
    pub price: u32,
    pub description: String,
    pub features: Vec<String>,
}

/// An editorial journal entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalArticle {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub body: String,
}

/// Read-only catalog queried by id from the navigation and concierge layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    articles: Vec<JournalArticle>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, articles: Vec<JournalArticle>) -> Self {
        Self { products, articles }
    }

    /// The built-in Aura collection shipped with the storefront.
    pub fn builtin() -> Self {
        Self::new(builtin_products(), builtin_articles())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn articles(&self) -> &[JournalArticle] {
        &self.articles
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn article_by_id(&self, id: u32) -> Option<&JournalArticle> {
        self.articles.iter().find(|article| article.id == id)
    }
}

fn product(
    id: &str,
    name: &str,
    tagline: &str,
    price: u32,
    description: &str,
    features: &[&str],
) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        tagline: tagline.to_owned(),
        price,
        description: description.to_owned(),
        features: features.iter().map(|feature| (*feature).to_owned()).collect(),
    }
}

fn article(id: u32, title: &str, date: &str, excerpt: &str, body: &str) -> JournalArticle {
    JournalArticle {
        id,
        title: title.to_owned(),
        date: date.to_owned(),
        excerpt: excerpt.to_owned(),
        body: body.to_owned(),
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        product(
            "halo-lamp",
            "Halo Ambient Lamp",
            "Light that follows the day",
            129,
            "A sculpted oak lamp with a hand-stitched linen shade that shifts \
             from bright daylight warmth to a candlelit glow as evening settles in.",
            &[
                "Hand-finished oak base",
                "Circadian dimming from 2700K to 1800K",
                "Brass touch ring for brightness",
                "Woven linen diffuser shade",
            ],
        ),
        product(
            "drift-speaker",
            "Drift Speaker",
            "Sound with texture",
            249,
            "A room-filling speaker wrapped in natural wool weave, tuned for \
             warmth over sparkle so music sits in the room instead of on top of it.",
            &[
                "Acoustic wool weave enclosure",
                "Warm-tuned 3.5 inch full-range driver",
                "Seamless multi-room pairing",
                "Walnut control dial",
            ],
        ),
        product(
            "terra-tray",
            "Terra Charging Tray",
            "A resting place for the day",
            89,
            "A glazed stoneware valet tray with wireless charging beneath the \
             surface, so the nightly ritual of emptying pockets also tops up your phone.",
            &[
                "Hand-glazed stoneware in sand and clay tones",
                "15W wireless charging coil",
                "Cork underside, gentle on wood",
                "Fits keys, cards, and a watch alongside",
            ],
        ),
        product(
            "oasis-diffuser",
            "Oasis Stone Diffuser",
            "Scent carved from stone",
            119,
            "An ultrasonic diffuser carved from a single piece of travertine, \
             pairing cool mineral texture with a soft, steady ribbon of mist.",
            &[
                "Solid travertine body",
                "Whisper-quiet ultrasonic mist",
                "Eight-hour natural cycle",
                "Includes a cedar and fig starter oil",
            ],
        ),
        product(
            "ember-kettle",
            "Ember Pour-Over Kettle",
            "Patience, held at temperature",
            159,
            "A matte ceramic-coated kettle with a counterweighted gooseneck \
             spout and a dial that holds water at the exact warmth your brew asks for.",
            &[
                "Precision gooseneck pour",
                "Hold mode from 40C to 100C",
                "Matte ceramic over steel",
                "Oak dial with haptic detents",
            ],
        ),
        product(
            "stratus-clock",
            "Stratus Dawn Clock",
            "Wake with the sky",
            139,
            "A bedside clock that wakes you with thirty minutes of simulated \
             sunrise and soft field recordings instead of an alarm tone.",
            &[
                "Sunrise simulation over thirty minutes",
                "Field-recording soundscapes",
                "Linen-wrapped frame",
                "Automatic night dimming",
            ],
        ),
    ]
}

fn builtin_articles() -> Vec<JournalArticle> {
    vec![
        article(
            1,
            "The Texture of Quiet Technology",
            "March 2024",
            "Why the objects closest to us should whisper, not blink.",
            "Most technology announces itself. It blinks, chimes, and glows in \
             colors that belong to no room. We build in the opposite direction: \
             oak that darkens with handling, wool that softens sound, light that \
             keeps the hour of the day. The measure of a good object is how \
             rarely you notice it working, and how much you would miss it if it \
             stopped. A lamp should know the evening has arrived before you do. \
             A speaker should be furniture first and electronics a distant \
             second. This is not nostalgia; it is a belief that attention is the \
             scarcest material in the home, and the things we make should spend \
             as little of yours as possible.",
        ),
        article(
            2,
            "Slow Mornings: A Ritual in Three Objects",
            "April 2024",
            "A kettle, a clock, and twenty unhurried minutes.",
            "The morning sets the grain of the day, and a rushed one leaves \
             splinters. We arrange ours around three things. The Stratus clock \
             begins before we wake, easing the room from night into a borrowed \
             dawn. The Ember kettle holds its temperature without being watched, \
             which turns the first pour into a gesture instead of a task. And \
             the Halo lamp, still in its amber register, keeps the kitchen \
             closer to candlelight than to noon. None of this is about \
             efficiency. It is about letting warmth arrive in stages, so that by \
             the time the day asks for your attention you have already had some \
             time that was entirely yours.",
        ),
        article(
            3,
            "Inside the Workshop: Oak, Wool, and Stone",
            "May 2024",
            "Three materials, three workshops, one shelf.",
            "Every Aura product starts as a material, not a sketch. The oak for \
             our lamp bases is milled in a family workshop that has cut the same \
             forest's timber for three generations, and each base keeps the \
             grain of the board it came from. The wool weave on the Drift \
             speaker is loomed to a density we arrived at after a year of \
             listening tests, tight enough to protect the driver, open enough to \
             let the low end breathe. The travertine for the Oasis diffuser is \
             offcut stone from architectural quarrying that would otherwise be \
             crushed. We publish where each material comes from because the \
             story of an object is part of its texture, and because knowing a \
             shelf's provenance changes how long you keep what sits on it.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::Catalog;

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert!(!catalog.products().is_empty());
        assert!(!catalog.articles().is_empty());
    }

    #[test]
    fn product_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<&str> = catalog
            .products()
            .iter()
            .map(|product| product.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn article_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<u32> = catalog.articles().iter().map(|article| article.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.articles().len());
    }

    #[test]
    fn looks_up_product_by_id() {
        let catalog = Catalog::builtin();
        let lamp = catalog.product_by_id("halo-lamp");
        assert!(lamp.is_some_and(|product| product.name == "Halo Ambient Lamp"));
        assert!(catalog.product_by_id("does-not-exist").is_none());
    }

    #[test]
    fn looks_up_article_by_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.article_by_id(1).is_some());
        assert!(catalog.article_by_id(999).is_none());
    }
}
