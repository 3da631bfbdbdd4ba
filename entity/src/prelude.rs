pub use super::account::Entity as Account;
pub use super::category::Entity as Category;
pub use super::favorite_product::Entity as FavoriteProduct;
pub use super::favorite_store::Entity as FavoriteStore;
pub use super::kiosk_survey::Entity as KioskSurvey;
pub use super::product::Entity as Product;
pub use super::product_category::Entity as ProductCategory;
pub use super::revoked_token::Entity as RevokedToken;
pub use super::review::Entity as Review;
pub use super::sector::Entity as Sector;
pub use super::shopper::Entity as Shopper;
pub use super::shopper_category::Entity as ShopperCategory;
pub use super::store::Entity as Store;
pub use super::store_category::Entity as StoreCategory;
pub use super::store_owner::Entity as StoreOwner;
pub use super::user_action::Entity as UserAction;
