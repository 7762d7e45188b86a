//! Built-in coffee shop list

use crate::types::{CoffeeShop, ShapeVariant, ShopTag};

pub static COFFEE_SHOPS: [CoffeeShop; 5] = [
    CoffeeShop {
        id: "1",
        rank: "01",
        name: "Bonanza Roastery",
        address: "Adalbertstraße 70",
        specialty: "Espresso",
        tags: &[ShopTag::LaptopFriendly, ShopTag::Patio],
        rating: 9.8,
        shape: ShapeVariant::Star,
    },
    CoffeeShop {
        id: "2",
        rank: "02",
        name: "Five Elephant",
        address: "Reichenberger Str.",
        specialty: "Cheesecake",
        tags: &[ShopTag::Bakery, ShopTag::Busy],
        rating: 9.5,
        shape: ShapeVariant::Blob2,
    },
    CoffeeShop {
        id: "3",
        rank: "03",
        name: "Distrikt Coffee",
        address: "Bergstraße 68",
        specialty: "Brunch",
        tags: &[ShopTag::Food, ShopTag::Queue],
        rating: 9.2,
        shape: ShapeVariant::Blob,
    },
    CoffeeShop {
        id: "4",
        rank: "04",
        name: "The Barn",
        address: "Auguststraße 58",
        specialty: "Filter",
        tags: &[ShopTag::NoLaptops, ShopTag::Strict],
        rating: 8.9,
        shape: ShapeVariant::Circle,
    },
    CoffeeShop {
        id: "5",
        rank: "05",
        name: "Silo Coffee",
        address: "Gabriel-Max-Str. 4",
        specialty: "Aussie",
        tags: &[ShopTag::Aussie],
        rating: 8.7,
        shape: ShapeVariant::Circle,
    },
];
