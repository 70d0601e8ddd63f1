use std::hash::Hasher;

use fnv::FnvHasher;

/// Discriminates which value type produced a [`HashKey`].
///
/// Two keys are only equal when their tags match, so the integer `1` and the
/// boolean `true` never collide even though both reduce to the same `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Key produced by an integer value.
    Integer,
    /// Key produced by a boolean value.
    Boolean,
    /// Key produced by a string value.
    String,
}

/// A hash-table key derived from a hashable runtime value.
///
/// Every hashable value reduces to a `(type tag, u64)` pair: integers
/// contribute their bits, booleans 0 or 1, and strings a stable 64-bit FNV
/// hash of their bytes. This gives the hash container one uniform key type
/// for all three.
///
/// ## Example
/// ```
/// use hilt::interpreter::value::hash_key::HashKey;
///
/// assert_eq!(HashKey::of_str("name"), HashKey::of_str("name"));
/// assert_ne!(HashKey::of_integer(1), HashKey::of_bool(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// The value type this key was derived from.
    pub key_type: KeyType,
    /// The reduced key bits.
    pub value:    u64,
}

impl HashKey {
    /// Derives the key for an integer value.
    #[must_use]
    pub const fn of_integer(value: i64) -> Self {
        Self { key_type: KeyType::Integer,
               value:    value.cast_unsigned(), }
    }

    /// Derives the key for a boolean value.
    #[must_use]
    pub const fn of_bool(value: bool) -> Self {
        Self { key_type: KeyType::Boolean,
               value:    value as u64, }
    }

    /// Derives the key for a string value by hashing its bytes with FNV.
    ///
    /// The hash is deterministic across runs, so equal strings always map to
    /// the same slot.
    #[must_use]
    pub fn of_str(value: &str) -> Self {
        let mut hasher = FnvHasher::default();
        hasher.write(value.as_bytes());

        Self { key_type: KeyType::String,
               value:    hasher.finish(), }
    }
}
