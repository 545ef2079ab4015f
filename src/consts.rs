// src/consts.rs
//! Shared constants: alphabet, moduli and padding defaults

/// Standard 26-letter alphabet, A=0 .. Z=25
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Modulus of every letter-position calculation
pub const ALPHABET_LEN: i64 = 26;

/// Letter used to pad incomplete blocks and split doubled Playfair letters
pub const FILLER: char = 'X';

/// Playfair alphabet; I and J share a cell, so J is absent
pub const PLAYFAIR_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Side length of the Playfair matrix
pub const PLAYFAIR_SIZE: usize = 5;

/// Rail Fence needs at least two rails to zig-zag
pub const MIN_RAILS: i64 = 2;

/// Accepted Hill key lengths (2x2 and 3x3 matrices)
pub const HILL_KEY_LENGTHS: [usize; 2] = [4, 9];

/// Version tag written into JSON trace exports
pub const EXPORT_FORMAT: &str = "cipher-trace-v1";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "CIPHER_TRACE_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "cipher-trace.toml";
