mod address;

pub use address::AddressNamespace;
