use diesel::prelude::*;

use crate::domain::product_size::{
    NewProductSize as DomainNewProductSize, ProductSize as DomainProductSize,
};
use crate::models::product_size::{NewProductSize as DbNewProductSize, ProductSize as DbProductSize};
use crate::repository::{
    DieselRepository, ProductSizeReader, ProductSizeWriter, RepositoryResult,
};

impl ProductSizeReader for DieselRepository {
    fn list_product_sizes(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductSize>> {
        use crate::schema::product_sizes;

        let mut conn = self.conn()?;
        let rows = product_sizes::table
            .filter(product_sizes::product_id.eq(product_id))
            .order(product_sizes::id.asc())
            .load::<DbProductSize>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductSize::from).collect())
    }

    fn list_size_products(&self, size_id: i32) -> RepositoryResult<Vec<DomainProductSize>> {
        use crate::schema::product_sizes;

        let mut conn = self.conn()?;
        let rows = product_sizes::table
            .filter(product_sizes::size_id.eq(size_id))
            .order(product_sizes::id.asc())
            .load::<DbProductSize>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductSize::from).collect())
    }
}

impl ProductSizeWriter for DieselRepository {
    fn create_product_size(
        &self,
        new_link: &DomainNewProductSize,
    ) -> RepositoryResult<DomainProductSize> {
        use crate::schema::product_sizes;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(product_sizes::table)
            .values(&DbNewProductSize::from(new_link))
            .get_result::<DbProductSize>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_product_sizes(&self, product_id: i32) -> RepositoryResult<usize> {
        use crate::schema::product_sizes;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(product_sizes::table.filter(product_sizes::product_id.eq(product_id)))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
