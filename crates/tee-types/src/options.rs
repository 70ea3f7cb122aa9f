//! Option sets: the small fixed enumerations behind every select control.
//!
//! Each set is a closed list of known keys plus an `Other` catch-all. Keys
//! travel as camelCase strings on the wire. A key this build does not know is
//! kept verbatim instead of failing deserialization, so a configuration
//! written by a newer UI still renders (every lookup falls back on a miss).

/// Behaviour shared by every option set.
pub trait OptionSet: Clone + PartialEq + Sized + 'static {
    /// Every known value, in declaration order.
    fn known() -> &'static [Self];

    /// Parse a wire key. Unknown keys become the catch-all, never an error.
    fn from_key(key: &str) -> Self;

    /// The wire key.
    fn key(&self) -> &str;

    /// Human-readable label. The catch-all reports its raw key.
    fn label(&self) -> &str;

    /// Whether this value belongs to the declared option list.
    fn is_known(&self) -> bool;
}

/// Declare an option set enum with its keys and labels.
///
/// Generates the enum (with an `Other(String)` catch-all), an [`OptionSet`]
/// impl, string conversions used by serde, `FromStr` and `Display`.
#[macro_export]
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($key:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A key this build does not recognize, kept verbatim.
            Other(String),
        }

        impl $crate::OptionSet for $name {
            fn known() -> &'static [Self] {
                static KNOWN: &[$name] = &[$($name::$variant),+];
                KNOWN
            }

            fn from_key(key: &str) -> Self {
                match key {
                    $( $key => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }

            fn key(&self) -> &str {
                match self {
                    $( $name::$variant => $key, )+
                    $name::Other(key) => key.as_str(),
                }
            }

            fn label(&self) -> &str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Other(key) => key.as_str(),
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                <$name as $crate::OptionSet>::from_key(&key)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Other(key) => key,
                    known => $crate::OptionSet::key(&known).to_string(),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(key: &str) -> Result<Self, Self::Err> {
                Ok(<$name as $crate::OptionSet>::from_key(key))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::OptionSet::key(self))
            }
        }
    };
}

option_set! {
    /// Base textile.
    Fabric {
        OrganicCotton => ("organicCotton", "Organic Cotton"),
        PimaCotton => ("pimaCotton", "Pima Cotton"),
        HeavyweightJersey => ("heavyweightJersey", "Heavyweight Jersey"),
        BambooModal => ("bambooModal", "Bamboo Modal"),
        MerinoBlend => ("merinoBlend", "Merino Blend"),
        TechnicalMesh => ("technicalMesh", "Technical Mesh"),
        RecycledPoly => ("recycledPoly", "Recycled Poly"),
        HempBlend => ("hempBlend", "Hemp Blend"),
    }
}

option_set! {
    /// Silhouette ease.
    Fit {
        Slim => ("slim", "Slim"),
        Tailored => ("tailored", "Tailored"),
        Regular => ("regular", "Regular"),
        Relaxed => ("relaxed", "Relaxed"),
        Oversized => ("oversized", "Oversized"),
        Boxy => ("boxy", "Boxy"),
    }
}

option_set! {
    Size {
        Xs => ("xs", "XS"),
        S => ("s", "S"),
        M => ("m", "M"),
        L => ("l", "L"),
        Xl => ("xl", "XL"),
        Xxl => ("xxl", "XXL"),
    }
}

option_set! {
    Neckline {
        Crew => ("crew", "Crew"),
        SculptedV => ("sculptedV", "Sculpted V"),
        Mock => ("mock", "Mock Neck"),
        OffShoulder => ("offShoulder", "Off Shoulder"),
        Asymmetric => ("asymmetric", "Asymmetric"),
    }
}

option_set! {
    Sleeve {
        Cap => ("cap", "Cap"),
        ClassicShort => ("classicShort", "Classic Short"),
        ExtendedDrop => ("extendedDrop", "Extended Drop"),
        Elbow => ("elbow", "Elbow"),
        Detachable => ("detachable", "Detachable"),
        Asymmetric => ("asymmetric", "Asymmetric"),
    }
}

option_set! {
    /// Body length.
    Length {
        MicroCrop => ("microCrop", "Micro Crop"),
        MidCrop => ("midCrop", "Mid Crop"),
        Classic => ("classic", "Classic"),
        Longline => ("longline", "Longline"),
        Tunic => ("tunic", "Tunic"),
    }
}

option_set! {
    Hem {
        Straight => ("straight", "Straight"),
        Rounded => ("rounded", "Rounded"),
        Split => ("split", "Split Side"),
        HighLow => ("highLow", "High-Low"),
        Raw => ("raw", "Raw Edge"),
    }
}

option_set! {
    /// Surface pattern expression.
    Pattern {
        Solid => ("solid", "Solid"),
        Gradient => ("gradient", "Gradient"),
        Colorblock => ("colorblock", "Colorblock"),
        MicroPattern => ("microPattern", "Micro Pattern"),
        ArtPrint => ("artPrint", "Art Print"),
    }
}

option_set! {
    MaterialFinish {
        Matte => ("matte", "Matte"),
        Gloss => ("gloss", "Gloss"),
        Sheen => ("sheen", "Sheen"),
        Brushed => ("brushed", "Brushed"),
        Tech => ("tech", "Tech Coat"),
    }
}

option_set! {
    /// Stitch story.
    Stitch {
        Tonal => ("tonal", "Tonal"),
        Contrast => ("contrast", "Contrast"),
        Flatlock => ("flatlock", "Flatlock"),
        Coverstitch => ("coverstitch", "Coverstitch"),
        Exposed => ("exposed", "Exposed"),
    }
}

option_set! {
    Layering {
        Single => ("single", "Single"),
        Double => ("double", "Double"),
        Perforated => ("perforated", "Perforated"),
    }
}

option_set! {
    /// Where the personalization text sits.
    PersonalizationPlacement {
        Chest => ("chest", "Chest"),
        Back => ("back", "Back"),
        Sleeve => ("sleeve", "Sleeve"),
        Hem => ("hem", "Hem"),
        Nape => ("nape", "Nape"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_round_trip_through_from_key() {
        for neckline in Neckline::known() {
            assert_eq!(&Neckline::from_key(neckline.key()), neckline);
            assert!(neckline.is_known());
        }
    }

    #[test]
    fn unknown_key_is_preserved() {
        let sleeve = Sleeve::from_key("raglan");
        assert_eq!(sleeve, Sleeve::Other("raglan".to_string()));
        assert!(!sleeve.is_known());
        assert_eq!(sleeve.key(), "raglan");
        assert_eq!(sleeve.label(), "raglan");
    }

    #[test]
    fn display_writes_the_wire_key() {
        assert_eq!(Fabric::TechnicalMesh.to_string(), "technicalMesh");
        assert_eq!(Hem::HighLow.label(), "High-Low");
    }

    #[test]
    fn sleeve_and_neckline_asymmetric_share_a_key() {
        assert_eq!(Sleeve::Asymmetric.key(), Neckline::Asymmetric.key());
    }
}
