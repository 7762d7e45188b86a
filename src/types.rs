//! Common types and data structures

/// Tag vocabulary shown as chips on a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopTag {
    LaptopFriendly,
    Patio,
    Bakery,
    Busy,
    Food,
    Queue,
    NoLaptops,
    Strict,
    Aussie,
}

impl ShopTag {
    pub fn label(self) -> &'static str {
        match self {
            ShopTag::LaptopFriendly => "Laptop Friendly",
            ShopTag::Patio => "Patio",
            ShopTag::Bakery => "Bakery",
            ShopTag::Busy => "Busy",
            ShopTag::Food => "Food",
            ShopTag::Queue => "Queue",
            ShopTag::NoLaptops => "No Laptops",
            ShopTag::Strict => "Strict",
            ShopTag::Aussie => "Aussie",
        }
    }
}

/// Decorative glyph behind the score badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeVariant {
    Star,
    Blob2,
    Blob,
    #[default]
    Circle,
}

impl ShapeVariant {
    /// Resolve a shape by name. Unknown names use the default circle.
    pub fn from_name(name: &str) -> Self {
        match name {
            "star" => ShapeVariant::Star,
            "blob2" => ShapeVariant::Blob2,
            "blob" => ShapeVariant::Blob,
            _ => ShapeVariant::default(),
        }
    }

    /// Whether the badge glyph spins continuously
    pub fn spins(self) -> bool {
        matches!(self, ShapeVariant::Star)
    }
}

/// A ranked coffee shop
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeShop {
    pub id: &'static str,
    pub rank: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub specialty: &'static str,
    pub tags: &'static [ShopTag],
    pub rating: f32,
    pub shape: ShapeVariant,
}

/// Bottom navigation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    List,
    Map,
    Saved,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::List, Tab::Map, Tab::Saved];

    pub fn label(self) -> &'static str {
        match self {
            Tab::List => "List",
            Tab::Map => "Map",
            Tab::Saved => "Saved",
        }
    }
}

/// Safe-area padding of the device
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

/// Source of safe-area insets, queried once per frame
pub trait SafeAreaProvider {
    fn insets(&self) -> Insets;
}

impl SafeAreaProvider for Insets {
    fn insets(&self) -> Insets {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_shape_name_falls_back_to_circle() {
        assert_eq!(ShapeVariant::from_name("star"), ShapeVariant::Star);
        assert_eq!(ShapeVariant::from_name("blob2"), ShapeVariant::Blob2);
        assert_eq!(ShapeVariant::from_name("blob"), ShapeVariant::Blob);
        assert_eq!(ShapeVariant::from_name("circle"), ShapeVariant::Circle);
        assert_eq!(ShapeVariant::from_name("hexagon"), ShapeVariant::Circle);
        assert_eq!(ShapeVariant::from_name(""), ShapeVariant::Circle);
    }

    #[test]
    fn only_star_spins() {
        assert!(ShapeVariant::Star.spins());
        assert!(!ShapeVariant::Blob2.spins());
        assert!(!ShapeVariant::Blob.spins());
        assert!(!ShapeVariant::Circle.spins());
    }

    #[test]
    fn default_tab_is_list() {
        assert_eq!(Tab::default(), Tab::List);
        assert_eq!(Tab::ALL.map(Tab::label), ["List", "Map", "Saved"]);
    }
}
