use diesel::prelude::*;

use crate::domain::brand::{
    Brand as DomainBrand, NewBrand as DomainNewBrand, UpdateBrand as DomainUpdateBrand,
};
use crate::domain::listing::ListQuery;
use crate::models::brand::{Brand as DbBrand, NewBrand as DbNewBrand, UpdateBrand as DbUpdateBrand};
use crate::repository::{BrandReader, BrandWriter, DieselRepository, RepositoryError, RepositoryResult};

impl BrandReader for DieselRepository {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let brand = brands::table
            .filter(brands::id.eq(id))
            .first::<DbBrand>(&mut conn)
            .optional()?;

        Ok(brand.map(DomainBrand::from))
    }

    fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let brand = brands::table
            .filter(brands::name.eq(name))
            .first::<DbBrand>(&mut conn)
            .optional()?;

        Ok(brand.map(DomainBrand::from))
    }

    fn list_brands(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<DomainBrand>)> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let mut count_query = brands::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(search) = query.search.as_ref() {
            count_query = count_query.filter(brands::name.like(format!("%{search}%")));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = brands::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(search) = query.search.as_ref() {
            items_query = items_query.filter(brands::name.like(format!("%{search}%")));
        }
        items_query = items_query.order(brands::name.asc());

        if let Some(pagination) = &query.pagination {
            items_query = items_query
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let brands = items_query
            .load::<DbBrand>(&mut conn)?
            .into_iter()
            .map(DomainBrand::from)
            .collect();

        Ok((total, brands))
    }
}

impl BrandWriter for DieselRepository {
    fn create_brand(&self, new_brand: &DomainNewBrand) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(brands::table)
            .values(&DbNewBrand::from(new_brand))
            .get_result::<DbBrand>(&mut conn)?;

        Ok(created.into())
    }

    fn update_brand(
        &self,
        brand_id: i32,
        updates: &DomainUpdateBrand,
    ) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let updated = diesel::update(brands::table.filter(brands::id.eq(brand_id)))
            .set(&DbUpdateBrand::from(updates))
            .get_result::<DbBrand>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(brands::table.filter(brands::id.eq(brand_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
