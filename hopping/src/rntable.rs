//! RNTABLE pseudo-random table (3GPP TS 05.02, section 6.2.3)

/// Number of entries in RNTABLE
pub const RNTABLE_LEN: usize = 114;

/// Pseudo-random values in [0, 127] indexed by the hopping generator
pub static RNTABLE: [u8; RNTABLE_LEN] = [
    48, 98, 63, 1, 36, 95, 78, 102, 94, 73,
    0, 64, 25, 81, 76, 59, 124, 23, 104, 100,
    101, 47, 118, 85, 18, 56, 96, 86, 54, 2,
    80, 34, 127, 13, 6, 89, 57, 103, 12, 74,
    55, 111, 75, 38, 109, 71, 112, 29, 11, 88,
    87, 19, 3, 68, 110, 26, 33, 31, 8, 45,
    82, 58, 40, 107, 32, 5, 106, 92, 62, 67,
    77, 108, 122, 37, 60, 66, 121, 42, 51, 126,
    117, 114, 4, 90, 43, 52, 53, 113, 120, 72,
    16, 49, 7, 79, 119, 61, 22, 84, 9, 97,
    91, 15, 21, 24, 46, 39, 93, 105, 65, 70,
    125, 99, 17, 123,
];

/// Look up an entry, `None` past the end of the table
pub fn lookup(index: u8) -> Option<u8> {
    RNTABLE.get(index as usize).copied()
}
