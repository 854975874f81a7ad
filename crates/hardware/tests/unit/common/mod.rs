/// Word address arithmetic and wrapping.
pub mod address_arithmetic;

/// Trap and load error formatting.
pub mod error;

/// Register file indexing and the zero register.
pub mod register_indexing;
