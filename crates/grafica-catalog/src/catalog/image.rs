//! Product image references.

/// Image used when no rule matches.
pub const FALLBACK_IMAGE: &str = "/images/product-example.png";

/// Name patterns (lowercase) and their image, checked in order.
///
/// Two-sided ("frente e verso") patterns precede their one-sided prefix.
const IMAGE_RULES: &[(&str, &str)] = &[
    ("panfleto 80g frente e verso", "/images/panfleto-80g-frente-verso.png"),
    ("panfleto 80g frente", "/images/panfleto-80g-frente.png"),
    ("panfleto 115g frente e verso", "/images/panfleto-115g-frente-verso.png"),
    ("panfleto 115g frente", "/images/panfleto-115g-frente.png"),
    ("cartão de visita frente e verso", "/images/cartao-visita-frente-verso.png"),
    ("cartão de visita frente", "/images/cartao-visita-frente.png"),
    ("camisa branca poliester xgg", "/images/camisa-branca-xgg.webp"),
    ("camisa branca poliester p ao gg", "/images/camisa-branca-p-gg.webp"),
    ("camisa colorida poliester", "/images/camisa-branca-p-gg.webp"),
    ("lona uv", "/images/lona-uv.png"),
    ("lona normal", "/images/lona-normal.png"),
];

/// Resolve the image reference for a product name.
pub fn image_for(name: &str) -> &'static str {
    let name = name.to_lowercase();
    IMAGE_RULES
        .iter()
        .find(|(pattern, _)| name.contains(pattern))
        .map(|(_, image)| *image)
        .unwrap_or(FALLBACK_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sided_checked_first() {
        assert_eq!(
            image_for("Panfleto 80g frente e verso"),
            "/images/panfleto-80g-frente-verso.png"
        );
        assert_eq!(image_for("Panfleto 80g frente"), "/images/panfleto-80g-frente.png");
        assert_eq!(
            image_for("Cartão de visita frente e verso"),
            "/images/cartao-visita-frente-verso.png"
        );
    }

    #[test]
    fn test_colored_shirts_share_image() {
        assert_eq!(
            image_for("Camisa Colorida Poliester XGG"),
            "/images/camisa-branca-p-gg.webp"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(image_for("Banner Personalizado"), FALLBACK_IMAGE);
        assert_eq!(image_for("Lona Personalizada"), FALLBACK_IMAGE);
    }
}
