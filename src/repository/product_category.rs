use diesel::prelude::*;

use crate::domain::product_category::{
    NewProductCategory as DomainNewProductCategory, ProductCategory as DomainProductCategory,
};
use crate::models::product_category::{NewProductCategory as DbNewProductCategory, ProductCategory as DbProductCategory};
use crate::repository::{
    DieselRepository, ProductCategoryReader, ProductCategoryWriter, RepositoryResult,
};

impl ProductCategoryReader for DieselRepository {
    fn list_product_categories(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductCategory>> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;
        let rows = product_categories::table
            .filter(product_categories::product_id.eq(product_id))
            .order(product_categories::id.asc())
            .load::<DbProductCategory>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductCategory::from).collect())
    }

    fn list_category_products(&self, category_id: i32) -> RepositoryResult<Vec<DomainProductCategory>> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;
        let rows = product_categories::table
            .filter(product_categories::category_id.eq(category_id))
            .order(product_categories::id.asc())
            .load::<DbProductCategory>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductCategory::from).collect())
    }
}

impl ProductCategoryWriter for DieselRepository {
    fn create_product_category(
        &self,
        new_link: &DomainNewProductCategory,
    ) -> RepositoryResult<DomainProductCategory> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(product_categories::table)
            .values(&DbNewProductCategory::from(new_link))
            .get_result::<DbProductCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_product_categories(&self, product_id: i32) -> RepositoryResult<usize> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(product_categories::table.filter(product_categories::product_id.eq(product_id)))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
