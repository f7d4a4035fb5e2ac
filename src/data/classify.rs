use std::fmt;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Bucket – ordinal emission category
// ---------------------------------------------------------------------------

/// Emission magnitude category, in kilotons/year.
///
/// The nine ordinal variants cover `[-inf, +inf)` with half-open intervals;
/// `Undefined` is reserved for missing values so that "no data" is never
/// confused with "near-zero emissions".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Below100Kt,
    Below200Kt,
    From200To300Kt,
    From300To500Kt,
    From500KtTo1Mt,
    From1To2Mt,
    From2To4Mt,
    From4To5Mt,
    Above5Mt,
    Undefined,
}

impl Bucket {
    /// The ordinal buckets, low to high. This is the legend/slider order.
    pub const ORDERED: [Bucket; 9] = [
        Bucket::Below100Kt,
        Bucket::Below200Kt,
        Bucket::From200To300Kt,
        Bucket::From300To500Kt,
        Bucket::From500KtTo1Mt,
        Bucket::From1To2Mt,
        Bucket::From2To4Mt,
        Bucket::From4To5Mt,
        Bucket::Above5Mt,
    ];

    /// Display label shown in the legend.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Below100Kt => "< 100 kt / an",
            Bucket::Below200Kt => "< 200 kt / an",
            Bucket::From200To300Kt => "200-300 kt / an",
            Bucket::From300To500Kt => "300-500 kt / an",
            Bucket::From500KtTo1Mt => "500 kt - 1 Mt / an",
            Bucket::From1To2Mt => "1 Mt - 2 Mt / an",
            Bucket::From2To4Mt => "2 Mt - 4 Mt / an",
            Bucket::From4To5Mt => "4 Mt - 5 Mt / an",
            Bucket::Above5Mt => "> 5 Mt / an",
            Bucket::Undefined => "undefined",
        }
    }

    /// Position in [`Bucket::ORDERED`]; `None` for `Undefined`.
    pub fn rank(self) -> Option<usize> {
        Self::ORDERED.iter().position(|&b| b == self)
    }

    pub fn is_defined(self) -> bool {
        self != Bucket::Undefined
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Exclusive upper bound of each ordinal bucket except the last.
const UPPER_BOUNDS: [(f64, Bucket); 8] = [
    (100_000.0, Bucket::Below100Kt),
    (200_000.0, Bucket::Below200Kt),
    (300_000.0, Bucket::From200To300Kt),
    (500_000.0, Bucket::From300To500Kt),
    (1_000_000.0, Bucket::From500KtTo1Mt),
    (2_000_000.0, Bucket::From1To2Mt),
    (4_000_000.0, Bucket::From2To4Mt),
    (5_000_000.0, Bucket::From4To5Mt),
];

/// Map an emission value to its bucket. Missing and NaN map to `Undefined`.
pub fn classify(value: Option<f64>) -> Bucket {
    let Some(v) = value.filter(|v| !v.is_nan()) else {
        return Bucket::Undefined;
    };
    UPPER_BOUNDS
        .iter()
        .find(|(hi, _)| v < *hi)
        .map(|&(_, bucket)| bucket)
        .unwrap_or(Bucket::Above5Mt)
}
