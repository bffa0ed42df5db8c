use std::fmt::{Display, Formatter};

/// Font used when neither the store nor the default theme names one.
pub const FALLBACK_FONT_ID: &str = "inter";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Inter,
    Roboto,
    OpenSans,
    Lato,
    Montserrat,
    Poppins,
    PlayfairDisplay,
    Merriweather,
}

impl FontFamily {
    /// Stable id stored in themes.
    pub fn id(self) -> &'static str {
        match self {
            Self::Inter => "inter",
            Self::Roboto => "roboto",
            Self::OpenSans => "open-sans",
            Self::Lato => "lato",
            Self::Montserrat => "montserrat",
            Self::Poppins => "poppins",
            Self::PlayfairDisplay => "playfair-display",
            Self::Merriweather => "merriweather",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::Roboto => "Roboto",
            Self::OpenSans => "Open Sans",
            Self::Lato => "Lato",
            Self::Montserrat => "Montserrat",
            Self::Poppins => "Poppins",
            Self::PlayfairDisplay => "Playfair Display",
            Self::Merriweather => "Merriweather",
        }
    }

    /// `font-family` value with generic fallbacks.
    pub fn css_stack(self) -> &'static str {
        match self {
            Self::Inter => "\"Inter\", ui-sans-serif, system-ui, sans-serif",
            Self::Roboto => "\"Roboto\", ui-sans-serif, system-ui, sans-serif",
            Self::OpenSans => "\"Open Sans\", ui-sans-serif, system-ui, sans-serif",
            Self::Lato => "\"Lato\", ui-sans-serif, system-ui, sans-serif",
            Self::Montserrat => "\"Montserrat\", ui-sans-serif, system-ui, sans-serif",
            Self::Poppins => "\"Poppins\", ui-sans-serif, system-ui, sans-serif",
            Self::PlayfairDisplay => "\"Playfair Display\", ui-serif, Georgia, serif",
            Self::Merriweather => "\"Merriweather\", ui-serif, Georgia, serif",
        }
    }

    pub fn all() -> &'static [FontFamily] {
        const FONTS: [FontFamily; 8] = [
            FontFamily::Inter,
            FontFamily::Roboto,
            FontFamily::OpenSans,
            FontFamily::Lato,
            FontFamily::Montserrat,
            FontFamily::Poppins,
            FontFamily::PlayfairDisplay,
            FontFamily::Merriweather,
        ];
        &FONTS
    }

    pub fn from_id(id: &str) -> Option<FontFamily> {
        let id = id.trim();
        Self::all()
            .iter()
            .copied()
            .find(|font| font.id().eq_ignore_ascii_case(id))
    }

    /// Resolve an id, falling back to [`FALLBACK_FONT_ID`] for unknown ids.
    pub fn resolve(id: &str) -> FontFamily {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::debug!(font_id = id, "unknown font id; using fallback font");
            FontFamily::Inter
        })
    }
}

impl Display for FontFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
