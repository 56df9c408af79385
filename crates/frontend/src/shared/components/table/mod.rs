pub mod number_format;

pub use number_format::{format_number_int, format_peso};
