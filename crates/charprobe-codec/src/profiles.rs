//! Ranked character-order profiles.
//!
//! Each array lists distribution orders from most to least frequent; the
//! position of an order in its array is its frequency rank. Only the
//! leading [`charprobe_dsa::FREQUENT_RANK_LIMIT`] ranks carry weight, so the
//! lists stop there.

/// Japanese (JIS X 0208 row/cell order), shared by EUC-JP and Shift_JIS.
pub const JIS_RANKED: [u16; 512] = [
    327, 324, 328, 363, 312, 293, 320, 319, 321, 304, 285, 356, 1, 2, 53, 54,
    292, 323, 347, 357, 354, 316, 306, 300, 283, 287, 343, 355, 296, 322, 364, 298,
    294, 353, 302, 310, 314, 358, 308, 291, 360, 313, 289, 317, 458, 27, 400, 450,
    415, 379, 449, 448, 390, 406, 398, 377, 451, 430, 416, 386, 452, 413, 440, 394,
    437, 399, 428, 410, 385, 429, 388, 391, 423, 438, 3569, 1485, 2336, 1678, 2864, 3586,
    3172, 2660, 3560, 4007, 3265, 3314, 2679, 2459, 3494, 2537, 2928, 2529, 2548, 2307, 2587, 2172,
    2145, 3865, 1915, 2230, 3023, 4058, 2937, 4325, 2223, 3680, 1839, 3149, 2794, 3843, 3459, 2589,
    3445, 3242, 2326, 2495, 2013, 3543, 3081, 3946, 2488, 3363, 2352, 1680, 2842, 2801, 2039, 1496,
    2042, 3571, 3017, 4238, 1702, 2611, 3891, 4276, 1747, 4109, 2321, 3170, 4073, 2571, 1566, 1841,
    2139, 2493, 3493, 1973, 3027, 4101, 3788, 2992, 2115, 3333, 1707, 2388, 2193, 2508, 2190, 4228,
    3309, 3147, 1626, 3419, 3469, 3677, 4350, 4124, 2608, 3175, 1625, 2620, 1462, 3948, 3811, 4207,
    2427, 2926, 3393, 4190, 4184, 2922, 2540, 3440, 4060, 1988, 1883, 2739, 2560, 2927, 1877, 2249,
    2536, 4119, 305, 349, 346, 329, 344, 326, 301, 340, 331, 338, 307, 299, 297, 335,
    332, 348, 352, 350, 295, 341, 334, 337, 345, 311, 309, 303, 325, 330, 336, 342,
    333, 339, 282, 284, 286, 288, 290, 359, 361, 362, 315, 318, 5, 41, 42, 9,
    8, 55, 56, 35, 57, 58, 24, 26, 414, 439, 396, 417, 424, 407, 426, 378,
    411, 442, 418, 444, 383, 446, 422, 404, 395, 389, 402, 392, 381, 434, 443, 408,
    435, 432, 433, 393, 427, 425, 436, 387, 401, 420, 421, 441, 445, 447, 431, 454,
    397, 403, 405, 419, 382, 376, 384, 380, 459, 409, 412, 457, 460, 461, 453, 455,
    456, 1981, 2609, 3435, 4357, 3476, 1451, 1880, 3884, 3084, 1632, 2462, 2498, 1637, 4358, 2917,
    2622, 2045, 4275, 3132, 2170, 3120, 2861, 2934, 1443, 2976, 3914, 1691, 2903, 1892, 1504, 2718,
    2704, 3991, 2226, 2499, 2163, 2839, 1697, 2500, 3173, 2469, 2142, 3779, 3612, 3415, 1994, 3936,
    2398, 2712, 3819, 1763, 2183, 2985, 1979, 3509, 1679, 4071, 2243, 2524, 4164, 2991, 2255, 2410,
    2375, 2726, 4085, 1458, 2335, 2086, 3877, 3696, 2182, 2668, 2038, 2986, 2300, 3694, 3578, 1669,
    1695, 2461, 3639, 4223, 3047, 3241, 1447, 3504, 2833, 2435, 2655, 2412, 2146, 3231, 3897, 3863,
    3107, 3575, 1499, 2483, 1944, 2705, 2538, 2888, 3695, 3801, 2431, 4355, 2122, 2507, 1802, 3100,
    2091, 1807, 3512, 2805, 3457, 2545, 3902, 3140, 3238, 1865, 2511, 1729, 2490, 3454, 3319, 4259,
    3300, 1746, 1630, 2553, 1737, 3129, 3372, 1534, 2641, 1962, 1641, 2943, 2923, 2187, 3171, 2268,
    4173, 3771, 1597, 1576, 3420, 2397, 2658, 3079, 3239, 3600, 4062, 2387, 1453, 3249, 1860, 2850,
    4243, 1733, 4148, 1910, 2254, 1662, 2014, 2740, 3945, 2952, 2162, 3480, 3303, 2804, 2282, 4262,
    3185, 2408, 2810, 2264, 2157, 2237, 1948, 1539, 2058, 2825, 2783, 3441, 4166, 1941, 2506, 3094,
    1574, 1974, 1633, 4123, 2284, 4099, 1759, 3878, 2859, 3746, 3812, 2503, 2971, 4154, 2979, 3413,
];

/// Simplified Chinese, GB2312 level-one hanzi order.
pub const GB2312_RANKED: [u16; 512] = [
    505, 3222, 2482, 214, 1640, 3441, 2298, 3337, 2869, 2628, 3543, 837, 1824, 3619, 1523, 2396,
    458, 2829, 984, 935, 525, 498, 3247, 2558, 2460, 3205, 1360, 367, 1098, 1450, 3213, 1946,
    615, 2439, 1939, 651, 3716, 1918, 504, 3347, 3702, 2947, 3717, 3585, 1953, 938, 659, 1022,
    3752, 1582, 3324, 501, 3055, 2626, 2282, 1177, 3625, 2477, 322, 686, 627, 1328, 1805, 2260,
    665, 3108, 2326, 591, 2737, 2967, 486, 1812, 578, 1855, 2147, 1429, 571, 2707, 711, 1058,
    1309, 974, 3008, 218, 2135, 3016, 3658, 3190, 1580, 3043, 2630, 123, 2177, 1419, 480, 3277,
    3598, 426, 2988, 2464, 2308, 1407, 3540, 3261, 2881, 1603, 2629, 3364, 285, 48, 1123, 2457,
    1866, 527, 856, 418, 3244, 849, 2468, 2234, 1872, 3059, 3581, 2266, 2348, 3343, 901, 536,
    3570, 3216, 2791, 1232, 1626, 814, 1195, 3330, 2861, 999, 3743, 3627, 189, 2898, 2497, 3295,
    3506, 2995, 2748, 2855, 2700, 3571, 1817, 2977, 1218, 120, 1594, 2461, 657, 509, 277, 1115,
    3041, 1153, 3609, 2426, 936, 1178, 2906, 2562, 3417, 1049, 986, 1089, 2687, 465, 1937, 3044,
    170, 1048, 1550, 839, 2475, 2846, 421, 603, 1822, 2301, 284, 2953, 942, 2733, 1265, 652,
    3396, 574, 2438, 2696, 1599, 1143, 133, 3400, 1287, 2551, 1876, 3547, 1750, 381, 3728, 3264,
    838, 2330, 1151, 1467, 2302, 2716, 2096, 2934, 2155, 2697, 1111, 654, 843, 173, 457, 1987,
    161, 2573, 2430, 3725, 985, 540, 2536, 17, 2406, 101, 224, 1286, 677, 2503, 1910, 2642,
    1628, 3440, 799, 1229, 2900, 3751, 1272, 149, 282, 1221, 1165, 905, 2125, 2491, 3588, 503,
    3707, 1877, 2378, 1301, 3595, 1452, 3084, 2744, 2249, 96, 3604, 614, 3053, 2420, 160, 1462,
    1401, 3617, 3502, 1768, 1447, 2567, 2888, 1122, 3160, 2516, 696, 3465, 2724, 54, 2275, 1292,
    454, 911, 694, 2192, 1147, 2994, 1928, 2211, 2263, 2565, 2810, 2996, 2799, 2421, 2472, 2360,
    1714, 1166, 1926, 2090, 3666, 821, 1567, 2244, 1376, 325, 110, 156, 2569, 3514, 786, 1248,
    915, 2807, 2256, 1516, 832, 2816, 1400, 2528, 1673, 863, 2278, 386, 2449, 904, 2230, 1302,
    2209, 3409, 2290, 2465, 1021, 463, 497, 3566, 3426, 3013, 698, 728, 216, 787, 2496, 840,
    792, 3459, 3153, 1607, 335, 3738, 1816, 1162, 302, 2216, 1138, 1651, 751, 1485, 75, 3268,
    2814, 3393, 3291, 2474, 3575, 1313, 2450, 3675, 739, 1675, 3693, 215, 2471, 3468, 1935, 445,
    2839, 3405, 1269, 2639, 474, 3305, 1378, 1753, 3719, 13, 1120, 1684, 117, 181, 1609, 556,
    2427, 2393, 2604, 3613, 2762, 1142, 56, 3079, 1186, 1041, 488, 1043, 320, 2458, 1149, 3568,
    765, 1578, 1495, 3140, 2236, 1155, 1169, 3411, 2473, 771, 188, 2915, 1346, 2976, 2575, 902,
    1113, 610, 1326, 1781, 3578, 2494, 3004, 3412, 2154, 2316, 3530, 3082, 1352, 3469, 3149, 3027,
    319, 2150, 42, 851, 1771, 91, 2079, 2466, 2834, 1024, 260, 2226, 3250, 3454, 3471, 374,
    1982, 3527, 3681, 912, 2965, 40, 1, 1581, 167, 2655, 333, 2753, 1957, 1686, 3288, 1593,
    2498, 3224, 1369, 2752, 3673, 706, 976, 1316, 1674, 3631, 1268, 3667, 3368, 1307, 1437, 1759,
    2225, 2607, 3102, 1645, 2887, 1015, 2989, 2605, 2763, 2481, 233, 2916, 882, 3629, 870, 688,
];

/// Korean, KS X 1001 hangul/hanja order.
pub const EUCKR_RANKED: [u16; 260] = [
    1547, 432, 409, 1542, 1410, 76, 2208, 1530, 0, 1683, 2210, 1140, 703, 159, 490, 1104,
    757, 1529, 1561, 765, 291, 1557, 1256, 450, 1393, 1213, 1549, 1353, 148, 44, 1601, 51,
    646, 1418, 2217, 985, 1595, 1651, 542, 1594, 1116, 1177, 824, 775, 1603, 1485, 1527, 89,
    1550, 1572, 963, 1153, 118, 500, 117, 1477, 856, 1020, 1510, 1454, 69, 1258, 171, 422,
    308, 672, 1685, 1497, 2268, 773, 859, 1660, 2209, 2211, 1403, 508, 1155, 2224, 1126, 1421,
    1619, 1441, 1880, 36, 18, 1247, 831, 474, 1593, 87, 2279, 570, 1355, 1260, 861, 347,
    889, 915, 987, 1144, 91, 1532, 509, 446, 1813, 112, 1484, 891, 1562, 908, 778, 2048,
    2225, 15, 1469, 602, 1262, 296, 64, 938, 906, 540, 2342, 2, 71, 828, 539, 205,
    1146, 435, 1487, 1778, 1257, 154, 12, 2247, 1555, 2103, 1107, 900, 1378, 918, 1402, 966,
    1430, 1178, 954, 1141, 1379, 691, 2270, 2258, 2253, 299, 2177, 2273, 1827, 1519, 832, 1598,
    986, 2106, 2271, 1574, 705, 1839, 904, 933, 356, 1684, 38, 1434, 165, 903, 2291, 515,
    1707, 650, 1, 1419, 60, 1518, 1682, 7, 2269, 1848, 2280, 1653, 1456, 722, 1783, 2250,
    1491, 2203, 416, 690, 1217, 1354, 959, 1451, 1690, 1882, 1620, 931, 802, 654, 386, 1180,
    1398, 121, 837, 152, 1790, 1569, 1186, 401, 1915, 2188, 2018, 342, 2317, 2156, 1807, 917,
    163, 902, 410, 568, 228, 2175, 1118, 1386, 968, 758, 59, 1488, 1886, 346, 912, 304,
    1444, 1804, 774, 2213, 2260, 935, 1286, 79, 8, 1806, 1034, 776, 788, 323, 1696, 2082,
    2216, 278, 1596, 1937,
];

/// Traditional Chinese, Big5 level-one order; CNS 11643 plane 1 shares the sequence.
pub const BIG5_RANKED: [u16; 512] = [
    1030, 0, 1271, 65, 6, 348, 8, 395, 591, 169, 2402, 1526, 1519, 66, 741, 23,
    42, 1334, 798, 2020, 347, 766, 165, 3674, 1673, 1459, 2526, 181, 3043, 198, 29, 472,
    3438, 264, 1853, 427, 44, 716, 2088, 930, 2790, 21, 435, 69, 376, 3309, 2716, 1226,
    471, 3246, 265, 3301, 446, 897, 2682, 1603, 3572, 728, 384, 134, 354, 3179, 3755, 197,
    985, 4183, 362, 2420, 330, 2257, 3122, 647, 1988, 1492, 1915, 1379, 840, 111, 94, 4672,
    2867, 360, 48, 2418, 758, 729, 161, 3873, 2256, 125, 361, 246, 1136, 2887, 469, 343,
    210, 2090, 3000, 3433, 135, 1469, 1048, 2997, 2681, 15, 225, 3627, 1092, 599, 4231, 17,
    252, 2296, 91, 401, 55, 53, 737, 2104, 937, 889, 1034, 313, 20, 19, 5015, 4719,
    250, 3045, 219, 2055, 756, 1956, 2889, 268, 2007, 1221, 2461, 1486, 725, 1015, 128, 4477,
    4196, 336, 4421, 131, 5316, 1262, 1410, 1377, 693, 2372, 488, 78, 7, 2736, 2263, 893,
    3034, 54, 768, 703, 949, 184, 448, 2595, 137, 3262, 338, 344, 1746, 171, 88, 1107,
    1081, 100, 425, 2756, 157, 452, 400, 1216, 1093, 303, 2073, 312, 1724, 2404, 2151, 754,
    1551, 948, 4599, 2577, 282, 108, 143, 1566, 3251, 146, 337, 1780, 4042, 2357, 701, 3189,
    335, 10, 2536, 38, 3670, 2191, 232, 680, 1712, 4871, 1319, 3540, 616, 486, 239, 43,
    5303, 217, 1800, 4585, 459, 3346, 3868, 369, 116, 2505, 62, 2749, 109, 782, 275, 113,
    2875, 315, 2999, 1217, 1986, 1967, 2124, 237, 2502, 302, 1461, 3578, 2607, 230, 1033, 3823,
    3276, 803, 51, 1091, 1253, 481, 2383, 2306, 1993, 1114, 436, 2892, 579, 1036, 1110, 1041,
    641, 996, 1611, 1954, 1394, 206, 75, 2028, 2280, 1681, 1103, 1139, 5248, 272, 1146, 1359,
    3303, 309, 928, 2083, 496, 3378, 5017, 159, 5235, 1229, 155, 2834, 558, 2384, 377, 442,
    3286, 1899, 1145, 1161, 453, 512, 5023, 632, 4202, 2728, 188, 4997, 402, 2082, 3253, 289,
    2378, 3161, 780, 899, 1702, 2173, 5103, 2369, 3739, 314, 3945, 2927, 1624, 5365, 2211, 83,
    95, 1944, 5336, 4978, 1527, 2074, 4185, 1011, 3299, 1815, 1499, 1498, 630, 612, 388, 1690,
    2989, 2412, 695, 4601, 1250, 2313, 631, 4515, 704, 4344, 3050, 954, 943, 587, 4377, 5105,
    872, 86, 1443, 40, 4979, 1085, 221, 4836, 112, 172, 3084, 231, 829, 1232, 800, 365,
    247, 3696, 208, 213, 2487, 3822, 757, 4954, 364, 3001, 4485, 1313, 2455, 483, 2406, 4040,
    2230, 1997, 3582, 4059, 3405, 2904, 418, 3734, 3762, 1069, 5136, 2787, 1177, 278, 1826, 4211,
    865, 4859, 990, 730, 4035, 595, 3731, 1407, 279, 2543, 1765, 1639, 679, 3978, 468, 841,
    147, 4741, 3591, 3517, 130, 2819, 1720, 2848, 4169, 1607, 3096, 2911, 5, 3791, 1385, 3807,
    3573, 307, 11, 185, 2948, 186, 151, 211, 822, 164, 1292, 3693, 933, 389, 2605, 1949,
    3298, 601, 3245, 3819, 5310, 504, 1096, 618, 3878, 4032, 339, 3406, 879, 89, 124, 4234,
    1501, 4841, 562, 1398, 2054, 2841, 3227, 3557, 209, 801, 3293, 974, 3668, 2928, 426, 3210,
    1102, 4404, 4380, 317, 968, 1403, 5201, 4701, 2135, 2941, 1995, 571, 199, 2279, 3489, 895,
];
