use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::{
    domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery},
    models::product::{NewProduct as DbNewProduct, Product as DbProduct, SaveProduct},
    repository::{DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult},
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(DomainProduct::try_from).transpose()
    }

    fn get_product_by_name(&self, name: &str) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::name.eq(name))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(DomainProduct::try_from).transpose()
    }

    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::slug.eq(slug))
            .order(products::id.asc())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(DomainProduct::try_from).transpose()
    }

    fn product_name_exists(&self, name: &str, exclude_id: Option<i32>) -> RepositoryResult<bool> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let found = match exclude_id {
            Some(product_id) => select(exists(
                products::table
                    .filter(products::name.eq(name))
                    .filter(products::id.ne(product_id)),
            ))
            .get_result::<bool>(&mut conn)?,
            None => select(exists(products::table.filter(products::name.eq(name))))
                .get_result::<bool>(&mut conn)?,
        };

        Ok(found)
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut count_query = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            count_query = count_query.filter(
                products::name
                    .like(pattern.clone())
                    .or(products::description.like(pattern)),
            );
        }

        if let Some(brand_id) = query.brand_id {
            count_query = count_query.filter(products::brand_id.eq(brand_id));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items = items.filter(
                products::name
                    .like(pattern.clone())
                    .or(products::description.like(pattern)),
            );
        }

        if let Some(brand_id) = query.brand_id {
            items = items.filter(products::brand_id.eq(brand_id));
        }

        items = items.order((products::created_at.desc(), products::id.desc()));

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let products = items
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(DomainProduct::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, products))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::try_from(new_product)?;

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        created.try_into()
    }

    fn save_product(&self, product: &DomainProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes = SaveProduct::try_from(product)?;

        let saved = diesel::update(products::table.filter(products::id.eq(product.id())))
            .set(&changes)
            .get_result::<DbProduct>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        saved.try_into()
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::{
            product_categories, product_colors, product_sizes, product_variants, products,
        };

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(
                product_variants::table.filter(product_variants::product_id.eq(product_id)),
            )
            .execute(conn)?;
            diesel::delete(product_colors::table.filter(product_colors::product_id.eq(product_id)))
                .execute(conn)?;
            diesel::delete(product_sizes::table.filter(product_sizes::product_id.eq(product_id)))
                .execute(conn)?;
            diesel::delete(
                product_categories::table.filter(product_categories::product_id.eq(product_id)),
            )
            .execute(conn)?;

            let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
                .execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
