mod memory;

pub use memory::InMemoryProductsRepository;
