mod memory;

pub use memory::InMemoryOrdersRepository;
