pub mod config;
pub mod memory;
pub mod portal;

pub use config::WalletAdapterConfig;
pub use memory::InMemoryProvider;
pub use portal::PasskeyPortalAdapter;
