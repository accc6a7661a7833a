// Domain model for the restaurant catalog.
//
// Wire names follow the public JSON surface: camelCase fields and `_id`
// identifiers, with restaurants embedding their reviews and menu items
// the way the document store lays them out.

pub mod restaurant;
pub mod user;

pub use restaurant::{Address, Cuisine, MenuItem, Restaurant, Review, ReviewAuthor};
pub use user::{Role, User, UserAddress};
