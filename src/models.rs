//! Frontend Models
//!
//! Menu catalog and promotion data structures.

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BestSeller,
    Food,
    Drink,
    Dessert,
}

impl Category {
    /// Category buttons in display order
    pub const ALL: [Category; 4] = [
        Category::BestSeller,
        Category::Food,
        Category::Drink,
        Category::Dessert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::BestSeller => "ขายดี",
            Category::Food => "อาหาร",
            Category::Drink => "เครื่องดื่ม",
            Category::Dessert => "ของหวาน",
        }
    }

    /// Whether an item of `item_category` is listed under this category.
    /// Best sellers also list every food item.
    pub fn shows(&self, item_category: Category) -> bool {
        match self {
            Category::BestSeller => matches!(item_category, Category::BestSeller | Category::Food),
            other => *other == item_category,
        }
    }
}

/// Menu item (read-only catalog entry)
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub price: f64,
    pub image: &'static str,
}

/// Radio (one value) or checkbox (any number of values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Single,
    Multiple,
}

/// One selectable customization option
#[derive(Debug, Clone, PartialEq)]
pub struct CustomOption {
    pub value: &'static str,
    /// Extra cost when selected, 0 when none is declared
    pub surcharge: f64,
}

/// A group of options stored under one customization attribute
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup {
    pub attribute: &'static str,
    pub label: &'static str,
    pub kind: GroupKind,
    pub options: &'static [CustomOption],
}

impl OptionGroup {
    pub fn option(&self, value: &str) -> Option<&'static CustomOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Promotional carousel slide
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}
