pub mod number_format;

pub use number_format::{
    NumberDisplayMode, NumberFormat, decimal_precision, format_compact_integer, format_values,
    group_thousands, strip_trailing_zeroes,
};
