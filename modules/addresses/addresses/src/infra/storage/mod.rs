mod memory;

pub use memory::InMemoryAddressesRepository;
