//! Serialization round trips for `ndconvert`; see `tests/serialize.rs`.
