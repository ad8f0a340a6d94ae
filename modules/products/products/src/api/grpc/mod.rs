mod server;

pub use server::ProductServiceImpl;
