pub mod app_config;
pub mod category;
pub mod config;
pub mod offer;
pub mod store;

pub use app_config::{AppConfig, Environment};
pub use category::{
    categories_with_offer_count, count_offers_by_category, Category, CategoryOfferCount,
};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use offer::{is_offer_active, sort_offers, DiscountType, Offer, OfferFilter, SortKey};
pub use store::{Address, Coordinates, Store};
