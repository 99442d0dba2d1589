use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::brand::{NewBrand, UpdateBrand};
use crate::domain::category::{NewCategory, UpdateCategory};
use crate::domain::color::{NewColor, UpdateColor};
use crate::domain::size::{NewSize, UpdateSize};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a catalog record name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the catalog form helpers.
pub type CatalogFormResult<T> = Result<T, CatalogFormError>;

/// Errors that can occur while processing brand, color, size and category forms.
#[derive(Debug, Error)]
pub enum CatalogFormError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("name cannot be empty")]
    EmptyName,
    /// Swatches must look like `#rrggbb`.
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
}

fn sanitize_name(raw: &str) -> CatalogFormResult<String> {
    let name = sanitize_inline_text(raw);
    if name.is_empty() {
        return Err(CatalogFormError::EmptyName);
    }
    Ok(name)
}

fn sanitize_hex(raw: &str) -> CatalogFormResult<Option<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(CatalogFormError::InvalidHex(trimmed.to_string()));
    }

    Ok(Some(format!("#{}", digits.to_ascii_lowercase())))
}

/// Payload used to create or rename a brand.
#[derive(Debug, Deserialize, Validate)]
pub struct BrandForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
}

impl BrandForm {
    pub fn into_new_brand(self) -> CatalogFormResult<NewBrand> {
        self.validate()?;
        Ok(NewBrand::new(sanitize_name(&self.name)?))
    }

    pub fn into_update_brand(self) -> CatalogFormResult<UpdateBrand> {
        self.validate()?;
        Ok(UpdateBrand::new(sanitize_name(&self.name)?))
    }
}

/// Payload used to create or edit a color.
#[derive(Debug, Deserialize, Validate)]
pub struct ColorForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional `#rrggbb` swatch; blank clears it.
    pub hex: Option<String>,
}

impl ColorForm {
    pub fn into_new_color(self) -> CatalogFormResult<NewColor> {
        self.validate()?;

        let mut color = NewColor::new(sanitize_name(&self.name)?);
        if let Some(hex) = self.hex.as_deref().map(sanitize_hex).transpose()?.flatten() {
            color = color.with_hex(hex);
        }
        Ok(color)
    }

    pub fn into_update_color(self) -> CatalogFormResult<UpdateColor> {
        self.validate()?;

        let hex = self.hex.as_deref().map(sanitize_hex).transpose()?.flatten();
        Ok(UpdateColor::new(sanitize_name(&self.name)?, hex))
    }
}

/// Payload used to create or rename a size.
#[derive(Debug, Deserialize, Validate)]
pub struct SizeForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
}

impl SizeForm {
    pub fn into_new_size(self) -> CatalogFormResult<NewSize> {
        self.validate()?;
        Ok(NewSize::new(sanitize_name(&self.name)?))
    }

    pub fn into_update_size(self) -> CatalogFormResult<UpdateSize> {
        self.validate()?;
        Ok(UpdateSize::new(sanitize_name(&self.name)?))
    }
}

/// Payload used to create or edit a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    pub description: Option<String>,
}

impl CategoryForm {
    fn sanitized_description(&self) -> Option<String> {
        self.description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
    }

    pub fn into_new_category(self) -> CatalogFormResult<NewCategory> {
        self.validate()?;

        let mut category = NewCategory::new(sanitize_name(&self.name)?);
        if let Some(description) = self.sanitized_description() {
            category = category.with_description(description);
        }
        Ok(category)
    }

    pub fn into_update_category(self) -> CatalogFormResult<UpdateCategory> {
        self.validate()?;

        let description = self.sanitized_description();
        Ok(UpdateCategory::new(sanitize_name(&self.name)?, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_form_sanitizes_name() {
        let form = BrandForm {
            name: "  Lingerie \n Co ".to_string(),
        };

        let brand = form.into_new_brand().expect("brand");

        assert_eq!(brand.name, "Lingerie Co");
    }

    #[test]
    fn brand_form_rejects_whitespace_name() {
        let form = BrandForm {
            name: "   ".to_string(),
        };

        assert!(matches!(
            form.into_update_brand(),
            Err(CatalogFormError::EmptyName)
        ));
    }

    #[test]
    fn color_form_normalizes_hex() {
        let form = ColorForm {
            name: "Navy".to_string(),
            hex: Some(" 1F2A44 ".to_string()),
        };

        let color = form.into_new_color().expect("color");

        assert_eq!(color.hex.as_deref(), Some("#1f2a44"));
    }

    #[test]
    fn color_form_rejects_bad_hex() {
        let form = ColorForm {
            name: "Navy".to_string(),
            hex: Some("#12345".to_string()),
        };

        assert!(matches!(
            form.into_new_color(),
            Err(CatalogFormError::InvalidHex(_))
        ));
    }

    #[test]
    fn color_form_blank_hex_clears_swatch() {
        let form = ColorForm {
            name: "Navy".to_string(),
            hex: Some(" ".to_string()),
        };

        let update = form.into_update_color().expect("update");

        assert_eq!(update.hex, None);
    }

    #[test]
    fn category_form_drops_blank_description() {
        let form = CategoryForm {
            name: "Tops".to_string(),
            description: Some("\n \n".to_string()),
        };

        let category = form.into_new_category().expect("category");

        assert_eq!(category.name, "Tops");
        assert_eq!(category.description, None);
    }
}
