//! Floating-point source tables for one full sine and cosine cycle.
//!
//! These are only read when the fixed-point tables are built, never while
//! rendering.

pub const LUT_SINE_BITS: u32 = 8;
pub const LUT_SINE_SIZE: usize = 1 << LUT_SINE_BITS;

pub const LUT_SINE_F: [f32; LUT_SINE_SIZE] = [
    0.0, 0.024541229, 0.0490676761, 0.0735645667, 0.0980171412, 0.122410677, 0.146730468, 0.170961887,
    0.195090324, 0.219101235, 0.242980182, 0.266712755, 0.290284663, 0.313681751, 0.336889863, 0.359895051,
    0.382683426, 0.405241311, 0.427555084, 0.449611336, 0.471396744, 0.492898196, 0.514102757, 0.534997642,
    0.555570245, 0.575808167, 0.59569931, 0.615231574, 0.634393275, 0.653172851, 0.671558976, 0.689540565,
    0.707106769, 0.724247098, 0.740951121, 0.757208824, 0.773010433, 0.78834641, 0.803207517, 0.817584813,
    0.831469595, 0.84485358, 0.857728601, 0.870086968, 0.881921291, 0.893224299, 0.903989315, 0.914209783,
    0.923879504, 0.932992816, 0.941544056, 0.949528158, 0.956940353, 0.963776052, 0.970031261, 0.975702107,
    0.980785251, 0.985277653, 0.989176512, 0.992479563, 0.99518472, 0.997290432, 0.99879545, 0.999698818,
    1.0, 0.999698818, 0.99879545, 0.997290432, 0.99518472, 0.992479563, 0.989176512, 0.985277653,
    0.980785251, 0.975702107, 0.970031261, 0.963776052, 0.956940353, 0.949528158, 0.941544056, 0.932992816,
    0.923879504, 0.914209783, 0.903989315, 0.893224299, 0.881921291, 0.870086968, 0.857728601, 0.84485358,
    0.831469595, 0.817584813, 0.803207517, 0.78834641, 0.773010433, 0.757208824, 0.740951121, 0.724247098,
    0.707106769, 0.689540565, 0.671558976, 0.653172851, 0.634393275, 0.615231574, 0.59569931, 0.575808167,
    0.555570245, 0.534997642, 0.514102757, 0.492898196, 0.471396744, 0.449611336, 0.427555084, 0.405241311,
    0.382683426, 0.359895051, 0.336889863, 0.313681751, 0.290284663, 0.266712755, 0.242980182, 0.219101235,
    0.195090324, 0.170961887, 0.146730468, 0.122410677, 0.0980171412, 0.0735645667, 0.0490676761, 0.024541229,
    0.0, -0.024541229, -0.0490676761, -0.0735645667, -0.0980171412, -0.122410677, -0.146730468, -0.170961887,
    -0.195090324, -0.219101235, -0.242980182, -0.266712755, -0.290284663, -0.313681751, -0.336889863, -0.359895051,
    -0.382683426, -0.405241311, -0.427555084, -0.449611336, -0.471396744, -0.492898196, -0.514102757, -0.534997642,
    -0.555570245, -0.575808167, -0.59569931, -0.615231574, -0.634393275, -0.653172851, -0.671558976, -0.689540565,
    -0.707106769, -0.724247098, -0.740951121, -0.757208824, -0.773010433, -0.78834641, -0.803207517, -0.817584813,
    -0.831469595, -0.84485358, -0.857728601, -0.870086968, -0.881921291, -0.893224299, -0.903989315, -0.914209783,
    -0.923879504, -0.932992816, -0.941544056, -0.949528158, -0.956940353, -0.963776052, -0.970031261, -0.975702107,
    -0.980785251, -0.985277653, -0.989176512, -0.992479563, -0.99518472, -0.997290432, -0.99879545, -0.999698818,
    -1.0, -0.999698818, -0.99879545, -0.997290432, -0.99518472, -0.992479563, -0.989176512, -0.985277653,
    -0.980785251, -0.975702107, -0.970031261, -0.963776052, -0.956940353, -0.949528158, -0.941544056, -0.932992816,
    -0.923879504, -0.914209783, -0.903989315, -0.893224299, -0.881921291, -0.870086968, -0.857728601, -0.84485358,
    -0.831469595, -0.817584813, -0.803207517, -0.78834641, -0.773010433, -0.757208824, -0.740951121, -0.724247098,
    -0.707106769, -0.689540565, -0.671558976, -0.653172851, -0.634393275, -0.615231574, -0.59569931, -0.575808167,
    -0.555570245, -0.534997642, -0.514102757, -0.492898196, -0.471396744, -0.449611336, -0.427555084, -0.405241311,
    -0.382683426, -0.359895051, -0.336889863, -0.313681751, -0.290284663, -0.266712755, -0.242980182, -0.219101235,
    -0.195090324, -0.170961887, -0.146730468, -0.122410677, -0.0980171412, -0.0735645667, -0.0490676761, -0.024541229,
];

pub const LUT_COSINE_F: [f32; LUT_SINE_SIZE] = [
    1.0, 0.999698818, 0.99879545, 0.997290432, 0.99518472, 0.992479563, 0.989176512, 0.985277653,
    0.980785251, 0.975702107, 0.970031261, 0.963776052, 0.956940353, 0.949528158, 0.941544056, 0.932992816,
    0.923879504, 0.914209783, 0.903989315, 0.893224299, 0.881921291, 0.870086968, 0.857728601, 0.84485358,
    0.831469595, 0.817584813, 0.803207517, 0.78834641, 0.773010433, 0.757208824, 0.740951121, 0.724247098,
    0.707106769, 0.689540565, 0.671558976, 0.653172851, 0.634393275, 0.615231574, 0.59569931, 0.575808167,
    0.555570245, 0.534997642, 0.514102757, 0.492898196, 0.471396744, 0.449611336, 0.427555084, 0.405241311,
    0.382683426, 0.359895051, 0.336889863, 0.313681751, 0.290284663, 0.266712755, 0.242980182, 0.219101235,
    0.195090324, 0.170961887, 0.146730468, 0.122410677, 0.0980171412, 0.0735645667, 0.0490676761, 0.024541229,
    0.0, -0.024541229, -0.0490676761, -0.0735645667, -0.0980171412, -0.122410677, -0.146730468, -0.170961887,
    -0.195090324, -0.219101235, -0.242980182, -0.266712755, -0.290284663, -0.313681751, -0.336889863, -0.359895051,
    -0.382683426, -0.405241311, -0.427555084, -0.449611336, -0.471396744, -0.492898196, -0.514102757, -0.534997642,
    -0.555570245, -0.575808167, -0.59569931, -0.615231574, -0.634393275, -0.653172851, -0.671558976, -0.689540565,
    -0.707106769, -0.724247098, -0.740951121, -0.757208824, -0.773010433, -0.78834641, -0.803207517, -0.817584813,
    -0.831469595, -0.84485358, -0.857728601, -0.870086968, -0.881921291, -0.893224299, -0.903989315, -0.914209783,
    -0.923879504, -0.932992816, -0.941544056, -0.949528158, -0.956940353, -0.963776052, -0.970031261, -0.975702107,
    -0.980785251, -0.985277653, -0.989176512, -0.992479563, -0.99518472, -0.997290432, -0.99879545, -0.999698818,
    -1.0, -0.999698818, -0.99879545, -0.997290432, -0.99518472, -0.992479563, -0.989176512, -0.985277653,
    -0.980785251, -0.975702107, -0.970031261, -0.963776052, -0.956940353, -0.949528158, -0.941544056, -0.932992816,
    -0.923879504, -0.914209783, -0.903989315, -0.893224299, -0.881921291, -0.870086968, -0.857728601, -0.84485358,
    -0.831469595, -0.817584813, -0.803207517, -0.78834641, -0.773010433, -0.757208824, -0.740951121, -0.724247098,
    -0.707106769, -0.689540565, -0.671558976, -0.653172851, -0.634393275, -0.615231574, -0.59569931, -0.575808167,
    -0.555570245, -0.534997642, -0.514102757, -0.492898196, -0.471396744, -0.449611336, -0.427555084, -0.405241311,
    -0.382683426, -0.359895051, -0.336889863, -0.313681751, -0.290284663, -0.266712755, -0.242980182, -0.219101235,
    -0.195090324, -0.170961887, -0.146730468, -0.122410677, -0.0980171412, -0.0735645667, -0.0490676761, -0.024541229,
    0.0, 0.024541229, 0.0490676761, 0.0735645667, 0.0980171412, 0.122410677, 0.146730468, 0.170961887,
    0.195090324, 0.219101235, 0.242980182, 0.266712755, 0.290284663, 0.313681751, 0.336889863, 0.359895051,
    0.382683426, 0.405241311, 0.427555084, 0.449611336, 0.471396744, 0.492898196, 0.514102757, 0.534997642,
    0.555570245, 0.575808167, 0.59569931, 0.615231574, 0.634393275, 0.653172851, 0.671558976, 0.689540565,
    0.707106769, 0.724247098, 0.740951121, 0.757208824, 0.773010433, 0.78834641, 0.803207517, 0.817584813,
    0.831469595, 0.84485358, 0.857728601, 0.870086968, 0.881921291, 0.893224299, 0.903989315, 0.914209783,
    0.923879504, 0.932992816, 0.941544056, 0.949528158, 0.956940353, 0.963776052, 0.970031261, 0.975702107,
    0.980785251, 0.985277653, 0.989176512, 0.992479563, 0.99518472, 0.997290432, 0.99879545, 0.999698818,
];
