mod server;

pub use server::AddressServiceImpl;
