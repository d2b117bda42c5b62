//! Static category taxonomy used to build the navigation menu.
//!
//! Two levels only: category -> ordered subcategories. Declaration order is
//! the display order. The taxonomy does not filter the product grid.

/// One top-level category and its subcategories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
}

pub static CATEGORIES: &[Category] = &[
    Category {
        name: "Living Room",
        subcategories: &[
            "Sofas & Couches",
            "Sectionals",
            "Coffee Tables",
            "End Tables",
            "TV Stands & Media Consoles",
            "Recliners",
            "Accent Chairs",
            "Bookshelves",
            "Ottomans & Poufs",
        ],
    },
    Category {
        name: "Bedroom",
        subcategories: &[
            "Beds",
            "Nightstands",
            "Dressers & Chests",
            "Wardrobes & Armoires",
            "Bedside Tables",
            "Headboards",
            "Vanity Tables",
            "Mattresses",
        ],
    },
    Category {
        name: "Dining Room",
        subcategories: &[
            "Dining Tables",
            "Dining Chairs",
            "Bar Stools",
            "Buffets & Sideboards",
            "China Cabinets",
            "Benches",
        ],
    },
    Category {
        name: "Office",
        subcategories: &[
            "Desks",
            "Office Chairs",
            "Bookcases",
            "Filing Cabinets",
            "Conference Tables",
            "Shelving Units",
        ],
    },
    Category {
        name: "Outdoor",
        subcategories: &[
            "Patio Tables",
            "Outdoor Chairs",
            "Lounge Chairs",
            "Hammocks",
            "Outdoor Sofas",
            "Gazebos & Pergolas",
            "Fire Pits",
        ],
    },
    Category {
        name: "Storage",
        subcategories: &[
            "Cabinets & Cupboards",
            "Shoe Racks",
            "Coat Racks & Hall Trees",
            "Storage Bins & Baskets",
            "Floating Shelves",
        ],
    },
    Category {
        name: "Kids & Nursery",
        subcategories: &[
            "Cribs & Bassinets",
            "Kids' Beds & Bunk Beds",
            "Changing Tables",
            "Toy Storage",
            "Kids' Desks & Chairs",
        ],
    },
    Category {
        name: "Accent & Decor",
        subcategories: &[
            "Console Tables",
            "Accent Cabinets",
            "Mirrors",
            "Room Dividers",
        ],
    },
];

/// All categories in declaration order.
pub fn categories() -> impl Iterator<Item = &'static Category> {
    CATEGORIES.iter()
}

pub fn find_category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_order() {
        let names: Vec<_> = categories().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Living Room",
                "Bedroom",
                "Dining Room",
                "Office",
                "Outdoor",
                "Storage",
                "Kids & Nursery",
                "Accent & Decor",
            ]
        );
    }

    #[test]
    fn test_subcategories_distinct_within_category() {
        for category in categories() {
            let unique: HashSet<_> = category.subcategories.iter().collect();
            assert_eq!(unique.len(), category.subcategories.len(), "{}", category.name);
            assert!(!category.subcategories.is_empty());
        }
    }

    #[test]
    fn test_find_category() {
        let office = find_category("Office").unwrap();
        assert_eq!(office.subcategories.first(), Some(&"Desks"));
        assert_eq!(office.subcategories.last(), Some(&"Shelving Units"));
        assert!(find_category("Garage").is_none());
    }
}
