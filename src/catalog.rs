//! Menu Catalog
//!
//! Static menu data, customization option groups and menu filtering.

use crate::models::{Category, CustomOption, GroupKind, MenuItem, OptionGroup, Slide};

/// Recorded for a single-choice group the customer left untouched
pub const UNSPECIFIED: &str = "ไม่ระบุ";

/// Customization attribute of the free-text note
pub const NOTE_ATTRIBUTE: &str = "note";

static MENU: &[MenuItem] = &[
    MenuItem {
        id: "pad-thai",
        title: "ผัดไทยกุ้งสด",
        description: "เส้นจันท์เหนียวนุ่ม กุ้งตัวโต",
        category: Category::BestSeller,
        price: 60.0,
        image: "images/pad-thai.jpg",
    },
    MenuItem {
        id: "tom-yum-kung",
        title: "ต้มยำกุ้งน้ำข้น",
        description: "รสจัดจ้าน หอมสมุนไพรไทย",
        category: Category::BestSeller,
        price: 120.0,
        image: "images/tom-yum-kung.jpg",
    },
    MenuItem {
        id: "kaprao-moo",
        title: "ข้าวกะเพราหมูสับ",
        description: "ผัดใบกะเพราแท้ ไฟแรง หอมกลิ่นกระทะ",
        category: Category::Food,
        price: 50.0,
        image: "images/kaprao-moo.jpg",
    },
    MenuItem {
        id: "khao-pad-poo",
        title: "ข้าวผัดปู",
        description: "เนื้อปูแน่น ผัดกับไข่และต้นหอม",
        category: Category::Food,
        price: 70.0,
        image: "images/khao-pad-poo.jpg",
    },
    MenuItem {
        id: "som-tum",
        title: "ส้มตำไทย",
        description: "มะละกอกรอบ ถั่วลิสงคั่ว กุ้งแห้ง",
        category: Category::Food,
        price: 45.0,
        image: "images/som-tum.jpg",
    },
    MenuItem {
        id: "cha-yen",
        title: "ชาเย็น",
        description: "ชาไทยเข้มข้น หอมมัน",
        category: Category::Drink,
        price: 35.0,
        image: "images/cha-yen.jpg",
    },
    MenuItem {
        id: "cocoa",
        title: "โกโก้",
        description: "โกโก้แท้ เข้มข้น หวานมัน",
        category: Category::Drink,
        price: 40.0,
        image: "images/cocoa.jpg",
    },
    MenuItem {
        id: "lemon-soda",
        title: "โซดามะนาว",
        description: "มะนาวสด ซ่าสดชื่น",
        category: Category::Drink,
        price: 30.0,
        image: "images/lemon-soda.jpg",
    },
    MenuItem {
        id: "mango-sticky-rice",
        title: "ข้าวเหนียวมะม่วง",
        description: "มะม่วงน้ำดอกไม้ ราดกะทิสด",
        category: Category::Dessert,
        price: 80.0,
        image: "images/mango-sticky-rice.jpg",
    },
    MenuItem {
        id: "bua-loy",
        title: "บัวลอยไข่หวาน",
        description: "แป้งนุ่ม น้ำกะทิหอมใบเตย",
        category: Category::Dessert,
        price: 40.0,
        image: "images/bua-loy.jpg",
    },
];

static FOOD_GROUPS: &[OptionGroup] = &[
    OptionGroup {
        attribute: "spiciness",
        label: "ระดับความเผ็ด",
        kind: GroupKind::Single,
        options: &[
            CustomOption { value: "ไม่เผ็ด", surcharge: 0.0 },
            CustomOption { value: "เผ็ดน้อย", surcharge: 0.0 },
            CustomOption { value: "เผ็ดกลาง", surcharge: 0.0 },
            CustomOption { value: "เผ็ดมาก", surcharge: 0.0 },
        ],
    },
    OptionGroup {
        attribute: "addon",
        label: "เพิ่มเติม",
        kind: GroupKind::Multiple,
        options: &[
            CustomOption { value: "ไข่ดาว", surcharge: 10.0 },
            CustomOption { value: "ไข่เจียว", surcharge: 10.0 },
            CustomOption { value: "เพิ่มกุ้ง", surcharge: 20.0 },
        ],
    },
];

static DRINK_GROUPS: &[OptionGroup] = &[
    OptionGroup {
        attribute: "sweetness",
        label: "ระดับความหวาน",
        kind: GroupKind::Single,
        options: &[
            CustomOption { value: "หวานน้อย", surcharge: 0.0 },
            CustomOption { value: "หวานปกติ", surcharge: 0.0 },
            CustomOption { value: "หวานมาก", surcharge: 0.0 },
        ],
    },
    OptionGroup {
        attribute: "temp",
        label: "อุณหภูมิ",
        kind: GroupKind::Single,
        options: &[
            CustomOption { value: "เย็น", surcharge: 0.0 },
            CustomOption { value: "ร้อน", surcharge: 0.0 },
            CustomOption { value: "ปั่น", surcharge: 5.0 },
        ],
    },
    OptionGroup {
        attribute: "topping",
        label: "ท็อปปิ้ง",
        kind: GroupKind::Multiple,
        options: &[
            CustomOption { value: "ไข่มุก", surcharge: 10.0 },
            CustomOption { value: "วุ้นมะพร้าว", surcharge: 5.0 },
            CustomOption { value: "วิปครีม", surcharge: 10.0 },
        ],
    },
];

static SLIDES: &[Slide] = &[
    Slide {
        title: "โปรโมชั่น 10% OFF",
        text: "ลดทันทีเมื่อสั่งอาหารครบ 300 บาท",
        image: "images/promo-tom-yum.jpg",
    },
    Slide {
        title: "เมนูใหม่: ผัดไทยกุ้ง",
        text: "ห้ามพลาด! เส้นจันท์เหนียวนุ่ม กุ้งตัวโต",
        image: "images/promo-pad-thai.jpg",
    },
    Slide {
        title: "อร่อยซ่ากับเครื่องดื่ม",
        text: "ซื้อ 2 แถม 1 เฉพาะชาเย็นและโกโก้",
        image: "images/promo-drinks.jpg",
    },
];

pub fn menu() -> &'static [MenuItem] {
    MENU
}

pub fn slides() -> &'static [Slide] {
    SLIDES
}

/// Look up a menu item by id
pub fn find(id: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.id == id)
}

/// Customization groups offered for a category
pub fn option_groups(category: Category) -> &'static [OptionGroup] {
    match category {
        Category::BestSeller | Category::Food => FOOD_GROUPS,
        Category::Drink => DRINK_GROUPS,
        Category::Dessert => &[],
    }
}

pub fn filter_by_category(category: Category) -> Vec<&'static MenuItem> {
    MENU.iter().filter(|item| category.shows(item.category)).collect()
}

/// Case-insensitive match on title or description; blank matches all
pub fn search(term: &str) -> Vec<&'static MenuItem> {
    let term = term.trim().to_lowercase();
    MENU.iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
        })
        .collect()
}

/// Items shown on the menu. A non-blank search overrides the category.
pub fn visible_items(category: Category, term: &str) -> Vec<&'static MenuItem> {
    if term.trim().is_empty() {
        filter_by_category(category)
    } else {
        search(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&MenuItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_best_seller_includes_food() {
        let items = filter_by_category(Category::BestSeller);
        let ids = ids(&items);
        assert!(ids.contains(&"pad-thai"));
        assert!(ids.contains(&"kaprao-moo"));
        assert!(!ids.contains(&"cha-yen"));
        assert!(!ids.contains(&"bua-loy"));
    }

    #[test]
    fn test_other_categories_match_exactly() {
        let drinks = filter_by_category(Category::Drink);
        assert_eq!(ids(&drinks), vec!["cha-yen", "cocoa", "lemon-soda"]);

        let food = filter_by_category(Category::Food);
        assert!(food.iter().all(|i| i.category == Category::Food));
    }

    #[test]
    fn test_search_title_and_description() {
        assert_eq!(ids(&search("ชาเย็น")), vec!["cha-yen"]);
        // "กะทิ" only appears in dessert descriptions
        assert_eq!(ids(&search("กะทิ")), vec!["mango-sticky-rice", "bua-loy"]);
        assert!(search("pizza").is_empty());
    }

    #[test]
    fn test_search_overrides_category() {
        let items = visible_items(Category::Dessert, "โกโก้");
        assert_eq!(ids(&items), vec!["cocoa"]);

        let items = visible_items(Category::Dessert, "   ");
        assert_eq!(ids(&items), vec!["mango-sticky-rice", "bua-loy"]);
    }

    #[test]
    fn test_option_groups_per_category() {
        let food: Vec<_> = option_groups(Category::Food).iter().map(|g| g.attribute).collect();
        assert_eq!(food, vec!["spiciness", "addon"]);
        assert_eq!(option_groups(Category::BestSeller), option_groups(Category::Food));

        let drink: Vec<_> = option_groups(Category::Drink).iter().map(|g| g.attribute).collect();
        assert_eq!(drink, vec!["sweetness", "temp", "topping"]);

        assert!(option_groups(Category::Dessert).is_empty());
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("som-tum").map(|i| i.price), Some(45.0));
        assert!(find("missing").is_none());
    }
}
