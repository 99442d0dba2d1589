use crate::domain::product_variant::ProductVariant;
use crate::forms::variants::EditVariantForm;
use crate::repository::{ProductVariantReader, ProductVariantWriter};
use crate::services::{ServiceError, ServiceResult};

/// Updates a single variant's stock, sku, price, images or status.
///
/// Repository failures are logged and reported as a generic update failure.
pub fn update_variant<R>(
    repo: &R,
    variant_id: i32,
    form: EditVariantForm,
) -> ServiceResult<ProductVariant>
where
    R: ProductVariantReader + ProductVariantWriter + ?Sized,
{
    apply_variant_update(repo, variant_id, form).map_err(|err| match err {
        ServiceError::Repository(err) => {
            log::error!("Failed to update variant {variant_id}: {err}");
            ServiceError::UpdateFailed("variant")
        }
        other => other,
    })
}

fn apply_variant_update<R>(
    repo: &R,
    variant_id: i32,
    form: EditVariantForm,
) -> ServiceResult<ProductVariant>
where
    R: ProductVariantReader + ProductVariantWriter + ?Sized,
{
    repo.get_variant_by_id(variant_id)?
        .ok_or_else(|| ServiceError::not_found("Variant", variant_id))?;

    let update = form
        .into_update_variant()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    Ok(repo.update_variant(variant_id, &update)?)
}
