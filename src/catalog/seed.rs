//! Fixed sample catalog used by the one-time `/api/init-data` bootstrap

use crate::core::{Product, ProductCreate};

const SAMPLE_PRODUCTS: [(&str, &str, f64, &str, &str); 8] = [
    (
        "Chicken Biryani",
        "Aromatic basmati rice cooked with tender chicken pieces and traditional spices",
        12.99,
        "biryani",
        "https://images.unsplash.com/photo-1701579231305-d84d8af9a3fd?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHwxfHxiaXJ5YW5pfGVufDB8fHx8MTc1MzUyNDQ1Mnww&ixlib=rb-4.1.0&q=85",
    ),
    (
        "Mutton Biryani",
        "Premium mutton biryani with fragrant spices and long grain basmati rice",
        15.99,
        "biryani",
        "https://images.unsplash.com/photo-1589302168068-964664d93dc0?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHwzfHxiaXJ5YW5pfGVufDB8fHx8MTc1MzUyNDQ1Mnww&ixlib=rb-4.1.0&q=85",
    ),
    (
        "Margherita Pizza",
        "Classic pizza with fresh tomatoes, mozzarella cheese, and basil",
        8.99,
        "pizza",
        "https://images.unsplash.com/photo-1700513971573-4f941ab7d282?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzR8MHwxfHNlYXJjaHwxfHxwaXp6YSUyMGJ1cmdlcnxlbnwwfHx8b3JhbmdlfDE3NTM1MjQwNjZ8MA&ixlib=rb-4.1.0&q=85",
    ),
    (
        "Pepperoni Pizza",
        "Delicious pizza topped with pepperoni and melted cheese",
        10.99,
        "pizza",
        "https://images.unsplash.com/photo-1700513971573-4f941ab7d282?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzR8MHwxfHNlYXJjaHwxfHxwaXp6YSUyMGJ1cmdlcnxlbnwwfHx8b3JhbmdlfDE3NTM1MjQwNjZ8MA&ixlib=rb-4.1.0&q=85",
    ),
    (
        "Classic Burger",
        "Juicy beef patty with lettuce, tomato, onion, and special sauce",
        6.99,
        "burger",
        "https://images.unsplash.com/photo-1648580852350-3098af89f110?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzR8MHwxfHNlYXJjaHwyfHxwaXp6YSUyMGJ1cmdlcnxlbnwwfHx8b3JhbmdlfDE3NTM1MjQwNjZ8MA&ixlib=rb-4.1.0&q=85",
    ),
    (
        "Cheese Burger",
        "Classic burger with extra melted cheese and crispy vegetables",
        7.99,
        "burger",
        "https://images.unsplash.com/photo-1648580852350-3098af89f110?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzR8MHwxfHNlYXJjaHwyfHxwaXp6YSUyMGJ1cmdlcnxlbnwwfHx8b3JhbmdlfDE3NTM1MjQwNjZ8MA&ixlib=rb-4.1.0&q=85",
    ),
    (
        "Potato Chips",
        "Crispy golden potato chips with sea salt",
        2.99,
        "snacks",
        "https://images.pexels.com/photos/8858693/pexels-photo-8858693.jpeg",
    ),
    (
        "Fresh Bananas",
        "Ripe yellow bananas, perfect for a healthy snack",
        1.99,
        "groceries",
        "https://images.pexels.com/photos/1343537/pexels-photo-1343537.jpeg",
    ),
];

/// Build the seed set: 8 products across the storefront categories,
/// with fresh ids and timestamps.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .into_iter()
        .map(|(name, description, price, category, image_url)| {
            Product::new(ProductCreate {
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                image_url: image_url.to_string(),
                in_stock: true,
            })
        })
        .collect()
}
