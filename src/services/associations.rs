//! Referential checks for the colors, sizes and categories attached to a product.
//!
//! Every id is checked in order and the first failure wins: a non-positive id
//! is a validation error, a repeated id is a duplicate, and an id that does
//! not resolve is reported as missing. Duplicates are caught before the
//! lookup, so a repeated id is only fetched once.

use std::collections::HashSet;

use crate::domain::category::Category;
use crate::domain::color::Color;
use crate::domain::size::Size;
use crate::repository::{CategoryReader, ColorReader, RepositoryResult, SizeReader};
use crate::services::{Axis, ServiceError, ServiceResult};

/// Resolve every color id, returning the colors in input order.
pub fn validate_colors<R>(repo: &R, ids: &[i32]) -> ServiceResult<Vec<Color>>
where
    R: ColorReader + ?Sized,
{
    validate_references(Axis::Color, ids, |id| repo.get_color_by_id(id))
}

/// Resolve every size id, returning the sizes in input order.
pub fn validate_sizes<R>(repo: &R, ids: &[i32]) -> ServiceResult<Vec<Size>>
where
    R: SizeReader + ?Sized,
{
    validate_references(Axis::Size, ids, |id| repo.get_size_by_id(id))
}

/// Resolve every category id, returning the categories in input order.
pub fn validate_categories<R>(repo: &R, ids: &[i32]) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    validate_references(Axis::Category, ids, |id| repo.get_category_by_id(id))
}

fn validate_references<T, F>(axis: Axis, ids: &[i32], mut lookup: F) -> ServiceResult<Vec<T>>
where
    F: FnMut(i32) -> RepositoryResult<Option<T>>,
{
    let mut seen = HashSet::with_capacity(ids.len());
    let mut resolved = Vec::with_capacity(ids.len());

    for &id in ids {
        if id <= 0 {
            return Err(ServiceError::Form(format!("invalid {axis} id: {id}")));
        }
        if !seen.insert(id) {
            return Err(ServiceError::Duplicate { axis, id });
        }
        match lookup(id)? {
            Some(entity) => resolved.push(entity),
            None => return Err(ServiceError::not_found(axis.title(), id)),
        }
    }

    Ok(resolved)
}
