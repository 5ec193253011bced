//! Activation lookup tables
//!
//! 257 samples over [-8, 8] in steps of 1/16, stored with 14 fractional bits.

pub(crate) const TABLE_LEN: usize = 257;

/// sigmoid(x) sampled at x = -8 + i/16, 14 fractional bits.
pub(crate) const SIGMOID_TABLE: [i16; TABLE_LEN] = [
    5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11,
    12, 12, 13, 14, 15, 16, 17, 18, 19, 20, 22, 23,
    25, 26, 28, 30, 32, 34, 36, 38, 41, 43, 46, 49,
    52, 55, 59, 63, 67, 71, 76, 80, 86, 91, 97, 103,
    110, 117, 124, 132, 141, 150, 159, 169, 180, 191, 204, 217,
    230, 245, 261, 277, 295, 313, 333, 354, 376, 400, 425, 452,
    480, 510, 542, 576, 612, 649, 690, 732, 777, 825, 875, 928,
    984, 1044, 1107, 1173, 1243, 1317, 1394, 1476, 1562, 1653, 1748, 1848,
    1953, 2063, 2178, 2299, 2426, 2558, 2695, 2839, 2989, 3145, 3307, 3475,
    3649, 3829, 4015, 4208, 4406, 4611, 4820, 5036, 5256, 5482, 5712, 5947,
    6186, 6428, 6674, 6922, 7173, 7426, 7681, 7936, 8192, 8448, 8703, 8958,
    9211, 9462, 9710, 9956, 10198, 10437, 10672, 10902, 11128, 11348, 11564, 11773,
    11978, 12176, 12369, 12555, 12735, 12909, 13077, 13239, 13395, 13545, 13689, 13826,
    13958, 14085, 14206, 14321, 14431, 14536, 14636, 14731, 14822, 14908, 14990, 15067,
    15141, 15211, 15277, 15340, 15400, 15456, 15509, 15559, 15607, 15652, 15694, 15735,
    15772, 15808, 15842, 15874, 15904, 15932, 15959, 15984, 16008, 16030, 16051, 16071,
    16089, 16107, 16123, 16139, 16154, 16167, 16180, 16193, 16204, 16215, 16225, 16234,
    16243, 16252, 16260, 16267, 16274, 16281, 16287, 16293, 16298, 16304, 16308, 16313,
    16317, 16321, 16325, 16329, 16332, 16335, 16338, 16341, 16343, 16346, 16348, 16350,
    16352, 16354, 16356, 16358, 16359, 16361, 16362, 16364, 16365, 16366, 16367, 16368,
    16369, 16370, 16371, 16372, 16372, 16373, 16374, 16374, 16375, 16375, 16376, 16376,
    16377, 16377, 16378, 16378, 16379,
];

/// tanh(x) sampled at x = -8 + i/16, 14 fractional bits.
pub(crate) const TANH_TABLE: [i16; TABLE_LEN] = [
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383,
    -16383, -16382, -16382, -16382, -16382, -16381, -16381, -16380, -16380, -16379, -16379, -16378,
    -16377, -16376, -16375, -16374, -16373, -16372, -16370, -16368, -16366, -16363, -16361, -16358,
    -16354, -16350, -16346, -16341, -16335, -16328, -16321, -16312, -16303, -16292, -16280, -16266,
    -16251, -16233, -16213, -16190, -16165, -16136, -16103, -16066, -16024, -15977, -15923, -15863,
    -15795, -15718, -15631, -15533, -15423, -15300, -15161, -15005, -14830, -14634, -14415, -14171,
    -13898, -13595, -13260, -12888, -12478, -12027, -11533, -10993, -10406, -9771, -9087, -8353,
    -7571, -6743, -5871, -4960, -4013, -3036, -2037, -1023, 0, 1023, 2037, 3036,
    4013, 4960, 5871, 6743, 7571, 8353, 9087, 9771, 10406, 10993, 11533, 12027,
    12478, 12888, 13260, 13595, 13898, 14171, 14415, 14634, 14830, 15005, 15161, 15300,
    15423, 15533, 15631, 15718, 15795, 15863, 15923, 15977, 16024, 16066, 16103, 16136,
    16165, 16190, 16213, 16233, 16251, 16266, 16280, 16292, 16303, 16312, 16321, 16328,
    16335, 16341, 16346, 16350, 16354, 16358, 16361, 16363, 16366, 16368, 16370, 16372,
    16373, 16374, 16375, 16376, 16377, 16378, 16379, 16379, 16380, 16380, 16381, 16381,
    16382, 16382, 16382, 16382, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383,
    16383, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384,
];
