mod server;

pub use server::OrderServiceImpl;
