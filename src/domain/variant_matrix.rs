//! Expansion of a product's colors and sizes into concrete variants.

use chrono::Local;

use crate::domain::product::Product;
use crate::domain::product_variant::{NewProductVariant, VariantStatus};

/// Values every generated variant inherits from its product.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantTemplate {
    pub sku: Option<String>,
    pub stock: i32,
    /// Final (discounted) product price.
    pub price: f64,
    pub images: Vec<String>,
}

impl From<&Product> for VariantTemplate {
    fn from(product: &Product) -> Self {
        Self {
            sku: product.sku().map(str::to_string),
            stock: product.stock(),
            price: product.final_price(),
            images: product.images().to_vec(),
        }
    }
}

/// Build the full variant set for a product.
///
/// * colors and sizes: one variant per pair, color-major then size-minor;
/// * only sizes: one variant per size;
/// * only colors: one variant per color;
/// * neither: a single default variant.
///
/// Every color is crossed with every size; partial matrices are not supported.
pub fn build_variants(
    product_id: i32,
    color_ids: &[i32],
    size_ids: &[i32],
    template: &VariantTemplate,
) -> Vec<NewProductVariant> {
    let axes: Vec<(Option<i32>, Option<i32>)> = match (color_ids.is_empty(), size_ids.is_empty()) {
        (false, false) => color_ids
            .iter()
            .flat_map(|color| size_ids.iter().map(move |size| (Some(*color), Some(*size))))
            .collect(),
        (true, false) => size_ids.iter().map(|size| (None, Some(*size))).collect(),
        (false, true) => color_ids.iter().map(|color| (Some(*color), None)).collect(),
        (true, true) => vec![(None, None)],
    };

    let now = Local::now().naive_utc();
    axes.into_iter()
        .map(|(color_id, size_id)| NewProductVariant {
            product_id,
            color_id,
            size_id,
            sku: template.sku.clone(),
            stock: template.stock,
            price: template.price,
            images: template.images.clone(),
            status: VariantStatus::Active,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn template() -> VariantTemplate {
        VariantTemplate {
            sku: Some("SKU-1".to_string()),
            stock: 4,
            price: 180.0,
            images: vec!["front.jpg".to_string()],
        }
    }

    #[test]
    fn crosses_every_color_with_every_size() {
        let colors = [1, 2, 3];
        let sizes = [10, 20];

        let variants = build_variants(7, &colors, &sizes, &template());

        assert_eq!(variants.len(), 6);
        let pairs: Vec<(Option<i32>, Option<i32>)> = variants
            .iter()
            .map(|variant| (variant.color_id, variant.size_id))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Some(1), Some(10)),
                (Some(1), Some(20)),
                (Some(2), Some(10)),
                (Some(2), Some(20)),
                (Some(3), Some(10)),
                (Some(3), Some(20)),
            ]
        );
        let unique: HashSet<_> = pairs.into_iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn matrix_size_is_product_of_axes() {
        for colors in 1..=4 {
            for sizes in 1..=4 {
                let color_ids: Vec<i32> = (1..=colors).collect();
                let size_ids: Vec<i32> = (100..100 + sizes).collect();

                let variants = build_variants(1, &color_ids, &size_ids, &template());

                assert_eq!(variants.len(), (colors * sizes) as usize);
            }
        }
    }

    #[test]
    fn sizes_only_leave_color_unset() {
        let variants = build_variants(7, &[], &[10, 20, 30], &template());

        assert_eq!(variants.len(), 3);
        assert!(variants.iter().all(|variant| variant.color_id.is_none()));
        assert_eq!(
            variants.iter().map(|v| v.size_id).collect::<Vec<_>>(),
            vec![Some(10), Some(20), Some(30)]
        );
    }

    #[test]
    fn colors_only_leave_size_unset() {
        let variants = build_variants(7, &[1, 2], &[], &template());

        assert_eq!(variants.len(), 2);
        assert!(variants.iter().all(|variant| variant.size_id.is_none()));
    }

    #[test]
    fn no_axes_yield_one_default_variant() {
        let variants = build_variants(7, &[], &[], &template());

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].color_id, None);
        assert_eq!(variants[0].size_id, None);
    }

    #[test]
    fn variants_inherit_template_values() {
        let variants = build_variants(7, &[1], &[2], &template());
        let variant = &variants[0];

        assert_eq!(variant.product_id, 7);
        assert_eq!(variant.price, 180.0);
        assert_eq!(variant.stock, 4);
        assert_eq!(variant.sku.as_deref(), Some("SKU-1"));
        assert_eq!(variant.images, vec!["front.jpg".to_string()]);
        assert_eq!(variant.status, VariantStatus::Active);
    }
}
