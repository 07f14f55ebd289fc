//! Output gain compensation for the DSF oscillator, in Q15.
//!
//! Indexed by the shape parameter quantized to 100 buckets. Each entry is the
//! reciprocal of the largest fixed-point peak reachable inside its bucket, so
//! a normalized sample never leaves the unit range.

// Based on code by rabbiabe (dsf-oscillator-pico)

pub const LUT_NORMALIZE_SIZE: usize = 100;

pub const LUT_NORMALIZE: [i32; LUT_NORMALIZE_SIZE] = [
    32120, 31484, 30859, 30248, 29646, 29056, 28481, 27913, 27356, 26810,
    26274, 25745, 25228, 24720, 24219, 23729, 23245, 22770, 22304, 21845,
    21393, 20950, 20513, 20083, 19661, 19244, 18834, 18430, 18035, 17643,
    17258, 16879, 16507, 16138, 15777, 15420, 15067, 14722, 14379, 14042,
    13711, 13383, 13060, 12743, 12428, 12119, 11814, 11513, 11215, 10923,
    10633, 10348, 10065, 9787, 9512, 9240, 8974, 8709, 8448, 8191,
    7937, 7684, 7437, 7192, 6949, 6710, 6473, 6240, 6010, 5781,
    5555, 5333, 5113, 4895, 4680, 4466, 4256, 4047, 3843, 3638,
    3436, 3238, 3042, 2846, 2654, 2463, 2274, 2090, 1903, 1720,
    1539, 1359, 1182, 1009, 830, 659, 486, 317, 136, 136,
];
