//! Static catalog data: the three-restaurant fixture set currently served
//! by the API, the flat cuisine catalog, and the five-restaurant seed list
//! loaded by the `seed_restaurants` binary.

use chrono::{TimeZone, Utc};

use crate::models::{Address, Cuisine, MenuItem, Restaurant, Review, ReviewAuthor};

fn address(street: &str, city: &str, state: &str, zip_code: &str) -> Option<Address> {
    Some(Address {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
    })
}

fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    vegetarian: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: None,
        category: category.to_string(),
        vegetarian,
        vegan: false,
        spicy_level: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    rating: u8,
    comment: &str,
    author: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Review {
    Review {
        id: id.to_string(),
        rating,
        comment: comment.to_string(),
        user: ReviewAuthor {
            name: author.to_string(),
        },
        created_at: Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap(),
    }
}

/// The three restaurants the read-only API serves today.
pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "1".to_string(),
            name: "Pizza Palace".to_string(),
            cuisine: "Italian".to_string(),
            rating: Some(4.5),
            reviews: vec![review(
                "101",
                4,
                "Great pizza, fast delivery!",
                "John Doe",
                2023,
                9,
                15,
                14,
                30,
            )],
            menu_items: vec![
                menu_item(
                    "201",
                    "Margherita Pizza",
                    "Classic pizza with tomato sauce, mozzarella, and basil",
                    12.99,
                    "pizza",
                    true,
                ),
                menu_item(
                    "202",
                    "Pepperoni Pizza",
                    "Pizza with tomato sauce, mozzarella, and pepperoni",
                    14.99,
                    "pizza",
                    false,
                ),
            ],
            description: "Authentic Italian pizzeria serving traditional wood-fired pizzas."
                .to_string(),
            price_level: None,
            delivery_time: 30,
            delivery_fee: None,
            address: address("123 Main St", "Anytown", "CA", "12345"),
            phone: "555-123-4567".to_string(),
            image: "https://images.unsplash.com/photo-1513104890138-7c749659a591".to_string(),
        },
        Restaurant {
            id: "2".to_string(),
            name: "Burger Joint".to_string(),
            cuisine: "American".to_string(),
            rating: Some(4.2),
            reviews: vec![review(
                "102",
                5,
                "Best burgers in town!",
                "Jane Smith",
                2023,
                10,
                5,
                18,
                15,
            )],
            menu_items: vec![
                menu_item(
                    "203",
                    "Classic Burger",
                    "Beef patty with lettuce, tomato, and special sauce",
                    9.99,
                    "burgers",
                    false,
                ),
                menu_item(
                    "204",
                    "Veggie Burger",
                    "Plant-based patty with avocado and vegan aioli",
                    11.99,
                    "burgers",
                    true,
                ),
            ],
            description: "Gourmet burgers made with locally sourced ingredients.".to_string(),
            price_level: None,
            delivery_time: 25,
            delivery_fee: None,
            address: address("456 Oak Ave", "Somewhere", "NY", "67890"),
            phone: "555-987-6543".to_string(),
            image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd".to_string(),
        },
        Restaurant {
            id: "3".to_string(),
            name: "Sushi Spot".to_string(),
            cuisine: "Japanese".to_string(),
            rating: Some(4.7),
            reviews: vec![review(
                "103",
                4,
                "Fresh fish and great service!",
                "Mike Johnson",
                2023,
                11,
                10,
                20,
                45,
            )],
            menu_items: vec![
                menu_item(
                    "205",
                    "California Roll",
                    "Crab, avocado, and cucumber roll",
                    8.99,
                    "rolls",
                    false,
                ),
                menu_item(
                    "206",
                    "Vegetable Tempura",
                    "Assorted vegetables in a light batter, deep-fried",
                    7.99,
                    "appetizers",
                    true,
                ),
            ],
            description: "Premium sushi restaurant with the freshest seafood.".to_string(),
            price_level: None,
            delivery_time: 35,
            delivery_fee: None,
            address: address("789 Pine Rd", "Nowhere", "TX", "54321"),
            phone: "555-789-0123".to_string(),
            image: "https://images.unsplash.com/photo-1579871494447-9811cf80d66c".to_string(),
        },
    ]
}

/// The flat cuisine catalog. Deliberately independent of which cuisines
/// the restaurant records actually reference.
pub fn sample_cuisines() -> Vec<Cuisine> {
    ["Italian", "American", "Japanese", "Chinese", "Mexican", "Indian"]
        .into_iter()
        .map(|name| Cuisine {
            name: name.to_string(),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn seed_item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    image: &str,
    category: &str,
    vegetarian: bool,
    vegan: bool,
    spicy_level: u8,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: Some(format!("https://images.unsplash.com/{}", image)),
        category: category.to_string(),
        vegetarian,
        vegan,
        spicy_level: Some(spicy_level),
    }
}

/// The full seed list for the document store. Destructively loaded by the
/// `seed_restaurants` binary.
pub fn seed_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "1".to_string(),
            name: "Pizza Palace".to_string(),
            cuisine: "Italian".to_string(),
            rating: Some(4.7),
            reviews: vec![],
            menu_items: vec![
                seed_item(
                    "101",
                    "Margherita Pizza",
                    "Classic pizza with tomato sauce, mozzarella, and basil",
                    12.99,
                    "photo-1585238342028-96639bbee53b",
                    "main",
                    true,
                    false,
                    0,
                ),
                seed_item(
                    "102",
                    "Pepperoni Pizza",
                    "Pizza topped with pepperoni, mozzarella, and tomato sauce",
                    14.99,
                    "photo-1601924638867-3ec6a032c2b1",
                    "main",
                    false,
                    false,
                    1,
                ),
                seed_item(
                    "103",
                    "Tiramisu",
                    "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone",
                    6.99,
                    "photo-1613145993481-9921e290529f",
                    "dessert",
                    true,
                    false,
                    0,
                ),
            ],
            description: "Authentic Italian pizzas made with fresh ingredients. Our wood-fired oven gives our pizzas that perfect crispy crust.".to_string(),
            price_level: Some(2),
            delivery_time: 30,
            delivery_fee: Some(2.99),
            address: address("123 Main Street", "Foodville", "NY", "10001"),
            phone: "555-123-4567".to_string(),
            image: "https://images.unsplash.com/photo-1601924582975-7d7bd1d6fdb5".to_string(),
        },
        Restaurant {
            id: "2".to_string(),
            name: "Taco Town".to_string(),
            cuisine: "Mexican".to_string(),
            rating: Some(4.5),
            reviews: vec![],
            menu_items: vec![
                seed_item(
                    "201",
                    "Carne Asada Tacos",
                    "Grilled steak tacos with onion, cilantro, and lime",
                    8.99,
                    "photo-1601924638867-3ec6a032c2b1",
                    "main",
                    false,
                    false,
                    2,
                ),
                seed_item(
                    "202",
                    "Guacamole & Chips",
                    "Fresh guacamole made with avocados, tomatoes, onions, and cilantro",
                    5.99,
                    "photo-1606788075761-974f8299b785",
                    "appetizer",
                    true,
                    true,
                    1,
                ),
                seed_item(
                    "203",
                    "Horchata",
                    "Sweet rice milk drink with cinnamon",
                    2.99,
                    "photo-1626073606857-0d5a8e4a385d",
                    "beverage",
                    true,
                    true,
                    0,
                ),
            ],
            description: "Authentic Mexican street food. Our tacos are made with fresh ingredients and house-made tortillas.".to_string(),
            price_level: Some(1),
            delivery_time: 25,
            delivery_fee: Some(1.99),
            address: address("456 Taco Blvd", "Foodville", "NY", "10002"),
            phone: "555-234-5678".to_string(),
            image: "https://images.unsplash.com/photo-1600891964599-f61ba0e24092".to_string(),
        },
        Restaurant {
            id: "3".to_string(),
            name: "Sushi Sensation".to_string(),
            cuisine: "Japanese".to_string(),
            rating: Some(4.8),
            reviews: vec![],
            menu_items: vec![
                seed_item(
                    "301",
                    "California Roll",
                    "Crab, avocado, and cucumber roll with tobiko",
                    7.99,
                    "photo-1612197521842-96a3e4e92b98",
                    "main",
                    false,
                    false,
                    0,
                ),
                seed_item(
                    "302",
                    "Spicy Tuna Roll",
                    "Fresh tuna with spicy mayo and cucumber",
                    9.99,
                    "photo-1626082892832-4f2ac90f99d6",
                    "main",
                    false,
                    false,
                    2,
                ),
                seed_item(
                    "303",
                    "Miso Soup",
                    "Traditional Japanese soup with tofu, seaweed, and green onions",
                    3.99,
                    "photo-1606788075761-974f8299b785",
                    "appetizer",
                    true,
                    false,
                    0,
                ),
            ],
            description: "Premium sushi restaurant offering the freshest fish and traditional Japanese dishes.".to_string(),
            price_level: Some(3),
            delivery_time: 40,
            delivery_fee: Some(3.99),
            address: address("789 Ocean Drive", "Foodville", "NY", "10003"),
            phone: "555-345-6789".to_string(),
            image: "https://images.unsplash.com/photo-1587397845856-cf1fe2828c9b".to_string(),
        },
        Restaurant {
            id: "4".to_string(),
            name: "Burger Bistro".to_string(),
            cuisine: "American".to_string(),
            rating: Some(4.6),
            reviews: vec![],
            menu_items: vec![
                seed_item(
                    "401",
                    "Classic Cheeseburger",
                    "Angus beef patty with cheddar, lettuce, tomato, and special sauce",
                    10.99,
                    "photo-1603052875674-b4e7f31225be",
                    "main",
                    false,
                    false,
                    0,
                ),
                seed_item(
                    "402",
                    "Truffle Fries",
                    "Crispy fries tossed in truffle oil and parmesan",
                    5.99,
                    "photo-1579762672311-12b9c24f84e7",
                    "appetizer",
                    true,
                    false,
                    0,
                ),
                seed_item(
                    "403",
                    "Milkshake",
                    "Hand-spun vanilla milkshake topped with whipped cream",
                    4.99,
                    "photo-1586201375761-83865001e17d",
                    "beverage",
                    true,
                    false,
                    0,
                ),
            ],
            description: "Gourmet burgers made with locally-sourced ingredients and house-made sauces.".to_string(),
            price_level: Some(2),
            delivery_time: 35,
            delivery_fee: Some(2.49),
            address: address("321 Patty Place", "Foodville", "NY", "10004"),
            phone: "555-456-7890".to_string(),
            image: "https://images.unsplash.com/photo-1601050690129-1748633f0f19".to_string(),
        },
        Restaurant {
            id: "5".to_string(),
            name: "Thai Delight".to_string(),
            cuisine: "Thai".to_string(),
            rating: Some(4.4),
            reviews: vec![],
            menu_items: vec![
                seed_item(
                    "501",
                    "Pad Thai",
                    "Stir-fried rice noodles with eggs, tofu, bean sprouts, and peanuts",
                    12.99,
                    "photo-1604908177225-e38731b48f29",
                    "main",
                    true,
                    false,
                    1,
                ),
                seed_item(
                    "502",
                    "Green Curry",
                    "Spicy curry with bamboo shoots, eggplant, and basil in coconut milk",
                    13.99,
                    "photo-1627308595229-7830a5c91f9f",
                    "main",
                    false,
                    false,
                    3,
                ),
                seed_item(
                    "503",
                    "Spring Rolls",
                    "Crispy vegetable spring rolls with sweet chili sauce",
                    6.99,
                    "photo-1585238342028-96639bbee53b",
                    "appetizer",
                    true,
                    true,
                    0,
                ),
            ],
            description: "Authentic Thai cuisine with bold flavors and fresh ingredients.".to_string(),
            price_level: Some(2),
            delivery_time: 45,
            delivery_fee: Some(2.99),
            address: address("567 Spice Avenue", "Foodville", "NY", "10005"),
            phone: "555-567-8901".to_string(),
            image: "https://images.unsplash.com/photo-1635341436952-03db9c7f20cc".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_and_seed_record_passes_validation() {
        for r in sample_restaurants().iter().chain(seed_restaurants().iter()) {
            r.validate().unwrap_or_else(|e| panic!("{}: {}", r.name, e));
        }
    }

    #[test]
    fn fixture_set_matches_the_served_catalog() {
        let all = sample_restaurants();
        let names: Vec<_> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza Palace", "Burger Joint", "Sushi Spot"]);
        assert_eq!(sample_cuisines().len(), 6);
        assert_eq!(seed_restaurants().len(), 5);
    }
}
