/// Boolean/numeric encoding helpers.
///
/// Every operator function shares the signature `fn(f64, f64) -> f64`, so
/// booleans travel through the operator table encoded as `1.0` and `0.0`.
/// These helpers perform that encoding and decoding.
pub mod num;
/// Text normalization.
///
/// The tokenizer expects expression text with all whitespace removed; this
/// module provides that normalization step.
pub mod text;
