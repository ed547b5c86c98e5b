//! # Seeded Coherent Noise
//!
//! 2D simplex-style noise behind the cell classifier and variant selection.
//!
//! ## Determinism Guarantee
//!
//! Given the same `MapSeed`, this implementation produces **exactly** the
//! same values on any platform, any time. The seeded permutation table
//! makes the whole map reproducible across runs, not just within one.

/// Map seed for deterministic generation.
///
/// All noise sampling (classification and variant selection) derives from
/// this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapSeed(u64);

impl MapSeed {
    /// Creates a new map seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Default for MapSeed {
    fn default() -> Self {
        Self(0x07E5_5E4A_07E5_5E4A)
    }
}

/// Gradient vectors for 2D sampling: axes and diagonals.
const GRADIENTS: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

/// Top of the half-open [0, 1) range returned by `sample01`.
const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON;

/// Seeded 2D coherent noise field.
///
/// Neighbouring grid cells fed through [`NoiseField::sample01`] vary
/// smoothly, which is what gives the map contiguous water, dirt, and stone
/// regions rather than static.
pub struct NoiseField {
    /// 512-entry permutation table (256 entries, doubled so corner lookups
    /// never wrap mid-expression).
    perm: [u8; 512],
}

impl NoiseField {
    /// Skewing factor for the 2D simplex grid: (sqrt(3) - 1) / 2.
    const F2: f64 = 0.366_025_403_784_439;
    /// Unskewing factor for the 2D simplex grid: (3 - sqrt(3)) / 6.
    const G2: f64 = 0.211_324_865_405_187;

    /// Creates a new noise field from a seed.
    #[must_use]
    pub fn new(seed: MapSeed) -> Self {
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates shuffle driven by xorshift64 so the table is a pure
        // function of the seed.
        let mut state = seed.value() | 1;
        for i in (1..256).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state as usize) % (i + 1);
            perm.swap(i, j);
        }

        for i in 0..256 {
            perm[256 + i] = perm[i];
        }

        Self { perm }
    }

    /// Samples raw noise at continuous coordinates.
    ///
    /// Returns a value in roughly [-1, 1].
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew input coordinates onto the simplex grid.
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        // Unskew back to get the first corner.
        let unskew = f64::from(i + j) * Self::G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Upper or lower triangle of the simplex cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let g0 = self.perm_at(ii + self.perm_at(jj));
        let g1 = self.perm_at(ii + i1 as usize + self.perm_at(jj + j1 as usize));
        let g2 = self.perm_at(ii + 1 + self.perm_at(jj + 1));

        let n0 = corner_contribution(x0, y0, g0);
        let n1 = corner_contribution(x1, y1, g1);
        let n2 = corner_contribution(x2, y2, g2);

        // 70.0 normalizes the corner sum into the unit range.
        70.0 * (n0 + n1 + n2)
    }

    /// Samples noise for the grid cell at `(x, y)`, mapped to [0, 1).
    ///
    /// Coordinates are divided by `scale` before sampling so neighbouring
    /// cells vary smoothly; larger scales give larger terrain features.
    ///
    /// Precondition: `scale > 0` (validated by `MapConfig::validate`).
    #[must_use]
    pub fn sample01(&self, x: i32, y: i32, scale: f64) -> f64 {
        let raw = self.sample(f64::from(x) / scale, f64::from(y) / scale);
        (0.5 * (raw + 1.0)).clamp(0.0, MAX_BELOW_ONE)
    }

    /// Derives a variant index in [0, count) for the cell at `(x, y)`.
    ///
    /// This is the deterministic `floor(noise * count)` selection used for
    /// visual dispatch: the same seed, coordinates, and scale always pick
    /// the same variant.
    ///
    /// Precondition: `count > 0`.
    #[must_use]
    pub fn variant_index(&self, x: i32, y: i32, scale: f64, count: usize) -> usize {
        let scaled = self.sample01(x, y, scale) * count as f64;
        (scaled as usize).min(count - 1)
    }

    #[inline]
    fn perm_at(&self, index: usize) -> usize {
        self.perm[index & 511] as usize
    }
}

/// Contribution of one simplex corner.
#[inline]
fn corner_contribution(x: f64, y: f64, hash: usize) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let grad = GRADIENTS[hash % GRADIENTS.len()];
        let t2 = t * t;
        t2 * t2 * (x * grad[0] + y * grad[1])
    }
}

/// Floor to i32 without the `f64::floor` call overhead.
#[inline]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi - 1
    } else {
        xi
    }
}
