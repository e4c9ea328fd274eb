//! Built-in catalog
//!
//! Seeded into an empty store and reconciled against the persisted catalog
//! on every start (see [`super::storage::reconcile`]).

use shared::models::{Category, PricingUnit, Product, ProductVariant};

fn variant(unit: PricingUnit, price: i64, min_qty: u32, is_wholesale: bool) -> ProductVariant {
    ProductVariant {
        unit,
        price,
        min_qty,
        is_wholesale,
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: Category,
    image: &str,
    description: &str,
    is_popular: bool,
    variants: Vec<ProductVariant>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        image: image.to_string(),
        description: description.to_string(),
        in_stock: true,
        is_popular,
        variants,
    }
}

const IMG: &str = "https://images.unsplash.com/";
const IMG_PARAMS: &str = "?q=80&w=800&auto=format&fit=crop";

fn image(photo: &str) -> String {
    format!("{IMG}{photo}{IMG_PARAMS}")
}

/// The fixed catalog, `p1`..`p12`
pub fn initial_products() -> Vec<Product> {
    use Category::*;
    use PricingUnit::*;

    vec![
        product(
            "p1",
            "Alphonso Mango (Ratnagiri)",
            Seasonal,
            &image("photo-1601493700631-2b16ec4b4716"),
            "Premium quality Ratnagiri Alphonso mangoes. Sweet and aromatic.",
            true,
            // Box of 4 dozen
            vec![variant(Dozen, 1200, 1, false), variant(Box, 3500, 1, true)],
        ),
        product(
            "p2",
            "Kashmir Apple",
            Regular,
            &image("photo-1560806887-1e4cd0b6cbd6"),
            "Fresh crisp apples directly from Kashmir valleys.",
            true,
            // 20kg crate
            vec![variant(Kg, 220, 1, false), variant(Crate, 4000, 1, true)],
        ),
        product(
            "p3",
            "Robusta Banana",
            Regular,
            &image("photo-1571771896612-618db687000d"),
            "Yellow Robusta bananas, perfect for daily consumption.",
            false,
            vec![variant(Dozen, 60, 1, false), variant(Crate, 800, 1, true)],
        ),
        product(
            "p4",
            "Dragon Fruit (White Flesh)",
            Exotic,
            &image("photo-1527324688151-0e627063f2b1"),
            "Rich in antioxidants, fresh imported Dragon fruit.",
            true,
            vec![variant(Kg, 180, 1, false), variant(Box, 1500, 1, true)],
        ),
        product(
            "p5",
            "Nagpur Oranges",
            Seasonal,
            &image("photo-1611080626919-7cf5a9dbab5b"),
            "Juicy and sweet Nagpur oranges.",
            false,
            vec![variant(Kg, 80, 1, false), variant(Crate, 1800, 1, true)],
        ),
        product(
            "p6",
            "Pomegranate (Kabul)",
            Regular,
            &image("photo-1615485499978-50dca04829d7"),
            "Deep red seeds, sweet taste. High quality Kabul variety.",
            true,
            // 10kg box
            vec![variant(Kg, 240, 1, false), variant(Box, 2200, 1, true)],
        ),
        product(
            "p7",
            "Premium Almonds (Badam)",
            DryFruits,
            &image("photo-1623315024748-0c6a56c07147"),
            "Crunchy and nutritious premium California almonds.",
            true,
            vec![variant(Kg, 850, 1, false), variant(Box, 8200, 1, true)],
        ),
        product(
            "p8",
            "Whole Cashews (Kaju)",
            DryFruits,
            &image("photo-1598282766327-0205f4260a22"),
            "W320 grade whole white cashews. Great for cooking and snacking.",
            false,
            vec![variant(Kg, 900, 1, false), variant(Box, 8800, 1, true)],
        ),
        product(
            "p9",
            "Golden Raisins (Kismis)",
            DryFruits,
            &image("photo-1595413628479-7dd2e14652c7"),
            "Sweet golden raisins, perfect for desserts.",
            false,
            vec![variant(Kg, 350, 1, false), variant(Box, 3200, 1, true)],
        ),
        product(
            "p10",
            "Dates (Khajoor)",
            DryFruits,
            &image("photo-1550528409-e85d99787e68"),
            "Premium soft Lion dates. High energy source.",
            false,
            vec![variant(Kg, 400, 1, false), variant(Box, 3800, 1, true)],
        ),
        product(
            "p11",
            "Watermelon (Kiran)",
            Seasonal,
            &image("photo-1587049352846-4a222e784d38"),
            "Sweet red Kiran watermelon. Hydrating and refreshing.",
            false,
            vec![variant(Piece, 50, 1, false), variant(Kg, 15, 10, true)],
        ),
        product(
            "p12",
            "Kiwi (Green)",
            Exotic,
            &image("photo-1518495973542-4542c06a5843"),
            "Tangy and sweet green kiwis. Vitamin C rich.",
            false,
            // Box of 30
            vec![variant(Piece, 40, 1, false), variant(Box, 1000, 1, true)],
        ),
    ]
}
