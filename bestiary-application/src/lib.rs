pub mod beast;
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod context;
pub mod dto;
pub mod error;
pub mod in_process_query_bus;
pub mod inmemory_command_bus;
pub mod query;
pub mod query_bus;
pub mod query_handler;

pub use beast::BeastServices;
pub use in_process_query_bus::InProcessQueryBus;
pub use inmemory_command_bus::InMemoryCommandBus;
