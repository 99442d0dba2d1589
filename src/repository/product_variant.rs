use diesel::prelude::*;

use crate::domain::product_variant::{
    NewProductVariant as DomainNewProductVariant, ProductVariant as DomainProductVariant,
    UpdateProductVariant as DomainUpdateProductVariant,
};
use crate::models::product_variant::{
    NewProductVariant as DbNewProductVariant, ProductVariant as DbProductVariant,
    UpdateProductVariant as DbUpdateProductVariant,
};
use crate::repository::{
    DieselRepository, ProductVariantReader, ProductVariantWriter, RepositoryError,
    RepositoryResult,
};

impl ProductVariantReader for DieselRepository {
    fn get_variant_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProductVariant>> {
        use crate::schema::product_variants;

        let mut conn = self.conn()?;
        let variant = product_variants::table
            .filter(product_variants::id.eq(id))
            .first::<DbProductVariant>(&mut conn)
            .optional()?;

        variant.map(DomainProductVariant::try_from).transpose()
    }

    fn list_variants(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductVariant>> {
        use crate::schema::product_variants;

        let mut conn = self.conn()?;
        product_variants::table
            .filter(product_variants::product_id.eq(product_id))
            .order(product_variants::id.asc())
            .load::<DbProductVariant>(&mut conn)?
            .into_iter()
            .map(DomainProductVariant::try_from)
            .collect()
    }
}

impl ProductVariantWriter for DieselRepository {
    fn create_variant(
        &self,
        new_variant: &DomainNewProductVariant,
    ) -> RepositoryResult<DomainProductVariant> {
        use crate::schema::product_variants;

        let mut conn = self.conn()?;
        let db_new = DbNewProductVariant::try_from(new_variant)?;

        let created = diesel::insert_into(product_variants::table)
            .values(&db_new)
            .get_result::<DbProductVariant>(&mut conn)?;

        created.try_into()
    }

    fn update_variant(
        &self,
        variant_id: i32,
        updates: &DomainUpdateProductVariant,
    ) -> RepositoryResult<DomainProductVariant> {
        use crate::schema::product_variants;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProductVariant::try_from(updates)?;

        let updated = diesel::update(
            product_variants::table.filter(product_variants::id.eq(variant_id)),
        )
        .set(&db_updates)
        .get_result::<DbProductVariant>(&mut conn)
        .optional()?
        .ok_or(RepositoryError::NotFound)?;

        updated.try_into()
    }
}
