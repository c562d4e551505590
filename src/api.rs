mod client;
pub mod precios;
mod provider;
pub mod snapshot;

pub use self::provider::PriceProvider;
