use serde::Deserialize;

const EMBEDDED: &str = include_str!("../assets/content.json");

pub const ALL_CATEGORIES: &str = "All";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub url: String,
    pub title: String,
    pub category: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContactInfo {
    pub instagram_handle: String,
    pub email: String,
    #[serde(default)]
    pub whatsapp_number: String,
    pub form_url: String,
}

impl ContactInfo {
    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram_handle)
    }

    /// Profile link that pre-fills a message about `product_name`.
    pub fn instagram_message_url(&self, product_name: &str) -> String {
        let message = format!("Hi! I'm interested in ordering: {}", product_name);
        format!(
            "https://www.instagram.com/{}/?message={}",
            self.instagram_handle,
            urlencoding::encode(&message)
        )
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn whatsapp_url(&self) -> String {
        let greeting = format!("Hi {}! I'd like to ask about a custom order.", crate::config::BRAND_NAME);
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            urlencoding::encode(&greeting)
        )
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub gallery: Vec<GalleryImage>,
    pub contact: ContactInfo,
}

impl Catalog {
    pub fn parse(json: &str) -> Result<Catalog, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog shipped with the site. A broken file leaves the page
    /// empty rather than failing to start.
    pub fn embedded() -> Catalog {
        match Catalog::parse(EMBEDDED) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("failed to parse embedded content: {}", err);
                Catalog::default()
            }
        }
    }

    /// "All" followed by each product category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    pub fn products_in<'a>(&'a self, category: &str) -> Vec<&'a Product> {
        self.products
            .iter()
            .filter(|product| category == ALL_CATEGORIES || product.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let catalog = Catalog::parse(EMBEDDED).unwrap();
        assert_eq!(catalog.products.len(), 8);
        assert_eq!(catalog.gallery.len(), 12);
        assert_eq!(catalog.contact.instagram_handle, "spark_soul.24");
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(Catalog::parse("{\"products\": 3}").is_err());
    }

    #[test]
    fn categories_start_with_all_and_have_no_duplicates() {
        let catalog = Catalog::embedded();
        let categories = catalog.categories();
        assert_eq!(
            categories,
            vec!["All", "Accessories", "Bracelets", "Customized Hampers", "Rings"]
        );
    }

    #[test]
    fn every_category_filter_is_non_empty_and_consistent() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.products_in(ALL_CATEGORIES).len(), catalog.products.len());
        for category in catalog.categories().iter().skip(1) {
            let products = catalog.products_in(category);
            assert!(!products.is_empty(), "{}", category);
            assert!(products.iter().all(|p| &p.category == category));
        }
        assert!(catalog.products_in("Candles").is_empty());
    }

    #[test]
    fn instagram_message_is_url_encoded() {
        let contact = Catalog::embedded().contact;
        assert_eq!(
            contact.instagram_message_url("Hair Clip"),
            "https://www.instagram.com/spark_soul.24/?message=Hi%21%20I%27m%20interested%20in%20ordering%3A%20Hair%20Clip"
        );
    }
}
