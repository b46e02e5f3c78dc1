pub mod emitters;
pub mod filters;
pub mod generator;
pub mod type_mapper;

pub use generator::SpringServerGenerator;
