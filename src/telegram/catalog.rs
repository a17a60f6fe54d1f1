//! Static product and service catalogs.
//!
//! Keys are the suffixes of `buy_*` / `service_*` action codes; content
//! is fixed at compile time.

/// A purchasable digital product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub key: &'static str,
    pub name: &'static str,
    pub price: f64,
}

/// A service offered on inquiry (custom pricing, no list price).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub key: &'static str,
    pub name: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        key: "software",
        name: "Premium Software License",
        price: 29.99,
    },
    Product {
        key: "courses",
        name: "Digital Course Bundle",
        price: 49.99,
    },
    Product {
        key: "vip",
        name: "VIP Membership",
        price: 99.99,
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        key: "twitter",
        name: "Twitter Services",
    },
    Service {
        key: "chatgpt",
        name: "ChatGPT Services",
    },
    Service {
        key: "youtube",
        name: "YouTube Services",
    },
];

/// Look up a product by action-code suffix.
pub fn product(key: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.key == key)
}

/// Look up a service display name. Unknown keys fall back to the generic
/// "Service" label: inquiries are never dropped, unlike purchases.
pub fn service_name(key: &str) -> &'static str {
    SERVICES
        .iter()
        .find(|s| s.key == key)
        .map(|s| s.name)
        .unwrap_or("Service")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_product_lookup() {
        let vip = product("vip").expect("vip product exists");
        assert_eq!(vip.name, "VIP Membership");
        assert_eq!(vip.price, 99.99);
        assert!(product("gold").is_none());
    }

    #[test]
    fn service_lookup_falls_back_to_generic_label() {
        assert_eq!(service_name("twitter"), "Twitter Services");
        assert_eq!(service_name("carrier-pigeon"), "Service");
    }
}
