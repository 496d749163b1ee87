/// Storefront products and the image file each one is expected to ship with.
const PRODUCT_IMAGES: &[(&str, &str)] = &[
    ("language-learning-poster-set", "language-posters-REAL.jpg"),
    ("ispeak-alphabet-flashcards", "alphabet-flashcards-REAL.jpg"),
    ("african-tales-paji-storybook", "african-tales-storybook-REAL.jpg"),
    ("kiswahili-phrases-kids", "kiswahili-phrases-book-REAL.jpg"),
    ("ispeak-tshirt-adult", "ispeak-tshirt-adult.jpg"),
    ("paji-tshirt-kids", "paji-tshirt-kids.jpg"),
    ("ispeak-kids-tshirt", "ispeak-kids-tshirt.jpg"),
    ("ispeak-navy-hoodie", "ispeak-hoodie.jpg"),
    ("ispeak-cap", "ispeak-cap.jpg"),
    ("teacher-coffee-mug", "teacher-coffee-mug-REAL.jpg"),
    ("ispeak-tote-bag", "ispeak-tote-bag.jpg"),
    ("paji-mascot-backpack", "ispeak-backpack.jpg"),
    ("paji-water-bottle", "water-bottle.jpg"),
    ("african-heritage-notebook", "african-patterns-notebook-REAL.jpg"),
    ("paji-sticker-sheet", "paji-sticker-sheet.jpg"),
    ("paji-plush-toy", "paji-plush-toy-REAL.jpg"),
    ("paji-squishy-toy", "paji-squishy-toy.jpg"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub product_id: String,
    pub filename: String,
}

impl CatalogEntry {
    pub fn new(product_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            filename: filename.into(),
        }
    }
}

pub fn default_catalog() -> Vec<CatalogEntry> {
    PRODUCT_IMAGES
        .iter()
        .map(|(product_id, filename)| CatalogEntry::new(*product_id, *filename))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_catalog_keeps_table_order_and_unique_ids() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 17);
        assert_eq!(catalog[0].product_id, "language-learning-poster-set");
        assert_eq!(catalog[16].filename, "paji-squishy-toy.jpg");

        let ids: HashSet<_> = catalog.iter().map(|entry| entry.product_id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }
}
