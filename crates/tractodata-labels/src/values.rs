//! Known values of the filename labels.

use crate::error::LabelError;
use derive_more::Display;
use std::str::FromStr;

macro_rules! label_values {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
        pub enum $name {
            $( $(#[$vmeta])* #[display($value)] $variant, )+
        }

        impl $name {
            /// All values, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Value as it appears in filenames.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = LabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(LabelError::UnknownValue {
                        label: $label,
                        provided: s.to_string(),
                    }),
                }
            }
        }
    };
}

label_values! {
    /// Bundle endpoint.
    Endpoint, "endpoint" {
        /// Head of the bundle
        Head => "head",
        /// Tail of the bundle
        Tail => "tail",
    }
}

label_values! {
    /// Brain hemisphere.
    Hemisphere, "hemisphere" {
        /// Left hemisphere
        Left => "L",
        /// Right hemisphere
        Right => "R",
    }
}

label_values! {
    /// Tissue class of a segmentation or partial volume map.
    Tissue, "tissue" {
        /// Cerebrospinal fluid
        Csf => "CSF",
        /// Gray matter
        Gm => "GM",
        /// White matter
        Wm => "WM",
    }
}

label_values! {
    /// Diffusion tensor derived map.
    DtiMap, "DTI map" {
        /// Fractional anisotropy
        Fa => "FA",
        /// Mean diffusivity
        Md => "MD",
        /// Axial diffusivity
        Ad => "AD",
        /// Radial diffusivity
        Rd => "RD",
    }
}

label_values! {
    /// Tracking exclusion/inclusion maps.
    ExcludeIncludeMap, "exclude/include map" {
        /// Exclusion map
        Exclude => "exclude",
        /// Inclusion map
        Include => "include",
        /// Gray/white matter interface
        Interface => "interface",
    }
}

label_values! {
    /// Cortical surface type.
    Surface, "surface" {
        /// Gray matter/pial matter border
        Pial => "pial",
        /// White matter surface
        Wm => "wm",
    }
}
