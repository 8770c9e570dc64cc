use serde::{Deserialize, Serialize};

/// A book for a reader younger than this is a children's book.
pub const YOUNG_ADULT_AGE_CUTOFF: i32 = 14;

/// A book for a reader this age or older is an adult book.
pub const ADULT_AGE_CUTOFF: i32 = 18;

/// "All ages" means all ages with reading ability.
pub const ALL_AGES_AGE_CUTOFF: i32 = 8;

/// Intended readership of a work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Audience {
    #[serde(rename = "Children")]
    Children,
    #[serde(rename = "Young Adult")]
    YoungAdult,
    #[serde(rename = "Adult")]
    Adult,
    #[serde(rename = "Adults Only")]
    AdultsOnly,
    #[serde(rename = "All Ages")]
    AllAges,
    #[serde(rename = "Research")]
    Research,
}

impl Audience {
    pub const ALL: [Audience; 6] = [
        Self::Children,
        Self::YoungAdult,
        Self::Adult,
        Self::AdultsOnly,
        Self::AllAges,
        Self::Research,
    ];

    /// Audiences that are not meant for children
    pub const ADULT_CLASS: [Audience; 4] =
        [Self::Adult, Self::AdultsOnly, Self::AllAges, Self::Research];

    #[must_use]
    pub fn is_juvenile(self) -> bool {
        matches!(self, Self::Children | Self::YoungAdult)
    }

    #[must_use]
    pub fn is_adult_class(self) -> bool {
        Self::ADULT_CLASS.contains(&self)
    }

    /// Parse the display form ("Young Adult") or a snake_case form ("young_adult")
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace(['_', '-'], " ");
        match key.as_str() {
            "children" => Some(Self::Children),
            "young adult" => Some(Self::YoungAdult),
            "adult" => Some(Self::Adult),
            "adults only" => Some(Self::AdultsOnly),
            "all ages" => Some(Self::AllAges),
            "research" => Some(Self::Research),
            _ => None,
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Children => write!(f, "Children"),
            Self::YoungAdult => write!(f, "Young Adult"),
            Self::Adult => write!(f, "Adult"),
            Self::AdultsOnly => write!(f, "Adults Only"),
            Self::AllAges => write!(f, "All Ages"),
            Self::Research => write!(f, "Research"),
        }
    }
}

/// URI prefix of staff-assigned genre subjects
pub const SIMPLIFIED_GENRE_URI: &str = "http://librarysimplified.org/terms/genres/Simplified/";

/// URI prefix of staff-assigned fiction status subjects
pub const SIMPLIFIED_FICTION_STATUS_URI: &str = "http://librarysimplified.org/terms/fiction/";

/// Classification vocabulary a subject belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Ddc,
    Lcc,
    Bisac,
    Lcsh,
    Fast,
    Overdrive,
    Rbdigital,
    RbdigitalAudience,
    #[serde(rename = "axis_360_audience")]
    Axis360Audience,
    Tag,
    AgeRange,
    GradeLevel,
    InterestLevel,
    FreeformAudience,
    SimplifiedGenre,
    SimplifiedFictionStatus,
    GutenbergBookshelf,
    LexileScore,
    AtosScore,
}

impl Scheme {
    /// Parse a scheme from its short name or the label/URI used by data sources
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let scheme = match s.trim() {
            SIMPLIFIED_GENRE_URI => Self::SimplifiedGenre,
            SIMPLIFIED_FICTION_STATUS_URI => Self::SimplifiedFictionStatus,
            "schema:typicalAgeRange" => Self::AgeRange,
            "freeform_audience" => Self::FreeformAudience,
            "gutenberg:bookshelf" => Self::GutenbergBookshelf,
            other => match other.to_lowercase().replace(['-', ' '], "_").as_str() {
                "ddc" => Self::Ddc,
                "lcc" => Self::Lcc,
                "bisac" => Self::Bisac,
                "lcsh" => Self::Lcsh,
                "fast" => Self::Fast,
                "overdrive" => Self::Overdrive,
                "rbdigital" => Self::Rbdigital,
                "rbdigital_audience" => Self::RbdigitalAudience,
                "axis_360_audience" => Self::Axis360Audience,
                "tag" => Self::Tag,
                "age_range" => Self::AgeRange,
                "grade_level" => Self::GradeLevel,
                "interest_level" => Self::InterestLevel,
                "simplified_genre" => Self::SimplifiedGenre,
                "simplified_fiction_status" => Self::SimplifiedFictionStatus,
                "gutenberg_bookshelf" => Self::GutenbergBookshelf,
                "lexile_score" | "lexile" => Self::LexileScore,
                "atos_score" | "atos" => Self::AtosScore,
                _ => return None,
            },
        };
        Some(scheme)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Ddc => "DDC",
            Self::Lcc => "LCC",
            Self::Bisac => "BISAC",
            Self::Lcsh => "LCSH",
            Self::Fast => "FAST",
            Self::Overdrive => "Overdrive",
            Self::Rbdigital => "RBdigital",
            Self::RbdigitalAudience => "RBdigital Audience",
            Self::Axis360Audience => "Axis 360 Audience",
            Self::Tag => "tag",
            Self::AgeRange => "schema:typicalAgeRange",
            Self::GradeLevel => "Grade level",
            Self::InterestLevel => "Interest Level",
            Self::FreeformAudience => "freeform_audience",
            Self::SimplifiedGenre => "Simplified genre",
            Self::SimplifiedFictionStatus => "Simplified fiction status",
            Self::GutenbergBookshelf => "gutenberg:bookshelf",
            Self::LexileScore => "Lexile",
            Self::AtosScore => "ATOS",
        };
        write!(f, "{label}")
    }
}

/// Inclusive target age range; either bound may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AgeRange {
    pub lower: Option<i32>,
    pub upper: Option<i32>,
}

impl AgeRange {
    pub const UNKNOWN: AgeRange = AgeRange {
        lower: None,
        upper: None,
    };

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.lower, self.upper) {
            (None, None) => write!(f, "unknown"),
            (Some(lower), None) => write!(f, "{lower}+"),
            (None, Some(upper)) => write!(f, "up to {upper}"),
            (Some(lower), Some(upper)) if lower == upper => write!(f, "{lower}"),
            (Some(lower), Some(upper)) => write!(f, "{lower}-{upper}"),
        }
    }
}

/// Build an age range, swapping the bounds if they arrive reversed
#[must_use]
pub fn range_tuple(lower: Option<i32>, upper: Option<i32>) -> AgeRange {
    match (lower, upper) {
        (Some(l), Some(u)) if l > u => AgeRange {
            lower: Some(u),
            upper: Some(l),
        },
        _ => AgeRange { lower, upper },
    }
}

/// Target age implied by an audience when nothing more specific is known
#[must_use]
pub fn default_target_age_for_audience(audience: Option<Audience>) -> AgeRange {
    match audience {
        Some(Audience::YoungAdult) => range_tuple(Some(14), Some(17)),
        Some(Audience::Adult | Audience::AdultsOnly) => range_tuple(Some(ADULT_AGE_CUTOFF), None),
        _ => AgeRange::UNKNOWN,
    }
}

/// Audience implied by a target age range
#[must_use]
pub fn default_audience_for_target_age(range: AgeRange) -> Option<Audience> {
    // Zero bounds count as missing data, not as "from birth".
    let lower = range.lower.filter(|&l| l != 0);
    let upper = range.upper.filter(|&u| u != 0);

    let Some(lower) = lower else {
        let upper = upper?;
        return Some(if upper >= ADULT_AGE_CUTOFF {
            Audience::Adult
        } else if upper > YOUNG_ADULT_AGE_CUTOFF {
            Audience::YoungAdult
        } else {
            Audience::Children
        });
    };

    if lower >= ADULT_AGE_CUTOFF {
        Some(Audience::Adult)
    } else if lower >= YOUNG_ADULT_AGE_CUTOFF {
        Some(Audience::YoungAdult)
    } else if lower <= ALL_AGES_AGE_CUTOFF && upper.is_some_and(|u| u >= ADULT_AGE_CUTOFF) {
        Some(Audience::AllAges)
    } else if lower >= 12 && upper.map_or(true, |u| u >= YOUNG_ADULT_AGE_CUTOFF) {
        // Outside sources often start YA at 12, overlapping our 12-13 children span.
        Some(Audience::YoungAdult)
    } else {
        Some(Audience::Children)
    }
}

/// Upper bound for an open-ended "N and up" / "N+" age expression
///
/// Returns `None` unless `keyword` actually ends with an open-ended marker.
#[must_use]
pub fn and_up(young: Option<i32>, keyword: &str) -> Option<i32> {
    let young = young?;
    let keyword = keyword.trim_end();
    if !["and up", "and up.", "+", "+."]
        .iter()
        .any(|marker| keyword.ends_with(marker))
    {
        return None;
    }

    let old = if young >= ADULT_AGE_CUTOFF {
        young
    } else if young >= 12 {
        // "12 and up", "14 and up" cover the whole YA span.
        17
    } else if young >= 8 {
        young + 4
    } else {
        young + 2
    };
    Some(old)
}
