use diesel::prelude::*;

use crate::domain::product_color::{
    NewProductColor as DomainNewProductColor, ProductColor as DomainProductColor,
};
use crate::models::product_color::{NewProductColor as DbNewProductColor, ProductColor as DbProductColor};
use crate::repository::{
    DieselRepository, ProductColorReader, ProductColorWriter, RepositoryResult,
};

impl ProductColorReader for DieselRepository {
    fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductColor>> {
        use crate::schema::product_colors;

        let mut conn = self.conn()?;
        let rows = product_colors::table
            .filter(product_colors::product_id.eq(product_id))
            .order(product_colors::id.asc())
            .load::<DbProductColor>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductColor::from).collect())
    }

    fn list_color_products(&self, color_id: i32) -> RepositoryResult<Vec<DomainProductColor>> {
        use crate::schema::product_colors;

        let mut conn = self.conn()?;
        let rows = product_colors::table
            .filter(product_colors::color_id.eq(color_id))
            .order(product_colors::id.asc())
            .load::<DbProductColor>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductColor::from).collect())
    }
}

impl ProductColorWriter for DieselRepository {
    fn create_product_color(
        &self,
        new_link: &DomainNewProductColor,
    ) -> RepositoryResult<DomainProductColor> {
        use crate::schema::product_colors;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(product_colors::table)
            .values(&DbNewProductColor::from(new_link))
            .get_result::<DbProductColor>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_product_colors(&self, product_id: i32) -> RepositoryResult<usize> {
        use crate::schema::product_colors;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(product_colors::table.filter(product_colors::product_id.eq(product_id)))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
