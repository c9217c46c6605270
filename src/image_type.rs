/// The DICOM `ImageType` multi-value decomposed into its four conventional
/// slots: pixels (slot 0), exam (slot 1), flavor (slot 2, when non-empty),
/// extras (slot 3+, when non-empty). Missing leading slots become empty
/// strings; missing trailing slots become `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageType {
    pub pixels: String,
    pub exam: String,
    pub flavor: Option<String>,
    pub extras: Option<Vec<String>>,
}

impl ImageType {
    pub fn new(pixels: impl Into<String>, exam: impl Into<String>) -> Self {
        ImageType {
            pixels: pixels.into(),
            exam: exam.into(),
            flavor: None,
            extras: None,
        }
    }

    pub fn with_flavor_and_extras(
        pixels: impl Into<String>,
        exam: impl Into<String>,
        flavor: impl Into<String>,
        extras: Vec<String>,
    ) -> Self {
        ImageType {
            pixels: pixels.into(),
            exam: exam.into(),
            flavor: Some(flavor.into()),
            extras: if extras.is_empty() { None } else { Some(extras) },
        }
    }

    /// Parses the already-split DICOM `ImageType` multi-value. An empty
    /// slice yields an all-default (invalid) `ImageType`.
    pub(crate) fn from_slots(slots: &[String]) -> Self {
        let pixels = slots.first().cloned().unwrap_or_default();
        let exam = slots.get(1).cloned().unwrap_or_default();
        let flavor = slots.get(2).filter(|s| !s.is_empty()).cloned();
        let extras = if slots.len() > 3 {
            let rest: Vec<String> = slots[3..].to_vec();
            if rest.is_empty() { None } else { Some(rest) }
        } else {
            None
        };
        ImageType {
            pixels,
            exam,
            flavor,
            extras,
        }
    }

    /// True iff any slot (pixels, exam, flavor, or any extra) equals `tok`
    /// exactly.
    pub fn contains(&self, tok: &str) -> bool {
        self.pixels == tok
            || self.exam == tok
            || self.flavor.as_deref() == Some(tok)
            || self
                .extras
                .as_ref()
                .map(|e| e.iter().any(|x| x == tok))
                .unwrap_or(false)
    }

    pub fn is_valid(&self) -> bool {
        !self.pixels.is_empty() && !self.exam.is_empty()
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\\{}", self.pixels, self.exam)?;
        if let Some(flavor) = &self.flavor {
            write!(f, "\\{flavor}")?;
        }
        if let Some(extras) = &self.extras {
            for extra in extras {
                write!(f, "\\{extra}")?;
            }
        }
        Ok(())
    }
}
