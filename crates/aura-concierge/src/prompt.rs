//! System-instruction assembly for the concierge.

use aura_catalog::Catalog;

/// Builds the fixed brand-voice instruction with the full product
/// catalog embedded, one line per product.
pub fn system_instruction(catalog: &Catalog) -> String {
    let product_context = catalog
        .products()
        .iter()
        .map(|product| {
            format!(
                "- {} (${}): {}. Features: {}",
                product.name,
                product.price,
                product.description,
                product.features.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are the AI Concierge for \"Aura\", a warm, organic lifestyle tech brand.\n\
         Your tone is calm, inviting, grounded, and sophisticated. Avoid overly \"techy\" \
         jargon; prefer words like \"natural\", \"seamless\", \"warm\", and \"texture\".\n\
         \n\
         Here is our current product catalog:\n\
         {product_context}\n\
         \n\
         Answer customer questions about specifications, recommendations, and brand \
         philosophy. Keep answers concise (under 3 sentences usually) to fit the chat UI. \
         If asked about products not in the list, gently steer them back to Aura products."
    )
}

#[cfg(test)]
mod tests {
    use super::system_instruction;
    use aura_catalog::Catalog;

    #[test]
    fn instruction_embeds_every_product() {
        let catalog = Catalog::builtin();
        let instruction = system_instruction(&catalog);

        for product in catalog.products() {
            assert!(instruction.contains(&product.name));
            assert!(instruction.contains(&format!("(${})", product.price)));
        }
    }

    #[test]
    fn instruction_carries_the_brand_voice() {
        let instruction = system_instruction(&Catalog::builtin());
        assert!(instruction.contains("AI Concierge"));
        assert!(instruction.contains("Aura"));
        assert!(instruction.contains("concise"));
    }
}
