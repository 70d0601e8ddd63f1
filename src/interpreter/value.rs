/// Core runtime value types.
///
/// Declares the `Value` enum with all supported variants, the hash entry
/// type, the function value, and methods for type names, truthiness, key
/// derivation, and display.
pub mod core;
/// Hash-key derivation.
///
/// Reduces the hashable value types (integers, booleans, strings) to one
/// uniform `(type tag, u64)` key so the hash container can index them all.
pub mod hash_key;
