use diesel::prelude::*;

use crate::domain::listing::ListQuery;
use crate::domain::size::{
    NewSize as DomainNewSize, Size as DomainSize, UpdateSize as DomainUpdateSize,
};
use crate::models::size::{NewSize as DbNewSize, Size as DbSize, UpdateSize as DbUpdateSize};
use crate::repository::{DieselRepository, RepositoryError, RepositoryResult, SizeReader, SizeWriter};

impl SizeReader for DieselRepository {
    fn get_size_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSize>> {
        use crate::schema::sizes;

        let mut conn = self.conn()?;
        let size = sizes::table
            .filter(sizes::id.eq(id))
            .first::<DbSize>(&mut conn)
            .optional()?;

        Ok(size.map(DomainSize::from))
    }

    fn get_size_by_name(&self, name: &str) -> RepositoryResult<Option<DomainSize>> {
        use crate::schema::sizes;

        let mut conn = self.conn()?;
        let size = sizes::table
            .filter(sizes::name.eq(name))
            .first::<DbSize>(&mut conn)
            .optional()?;

        Ok(size.map(DomainSize::from))
    }

    fn list_sizes(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<DomainSize>)> {
        use crate::schema::sizes;

        let mut conn = self.conn()?;

        let mut count_query = sizes::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(search) = query.search.as_ref() {
            count_query = count_query.filter(sizes::name.like(format!("%{search}%")));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        // Sizes keep insertion order (S, M, L...) rather than alphabetical order.
        let mut items_query = sizes::table
            .order(sizes::id.asc())
            .into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(search) = query.search.as_ref() {
            items_query = items_query.filter(sizes::name.like(format!("%{search}%")));
        }

        if let Some(pagination) = &query.pagination {
            items_query = items_query
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let sizes = items_query
            .load::<DbSize>(&mut conn)?
            .into_iter()
            .map(DomainSize::from)
            .collect();

        Ok((total, sizes))
    }
}

impl SizeWriter for DieselRepository {
    fn create_size(&self, new_size: &DomainNewSize) -> RepositoryResult<DomainSize> {
        use crate::schema::sizes;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(sizes::table)
            .values(&DbNewSize::from(new_size))
            .get_result::<DbSize>(&mut conn)?;

        Ok(created.into())
    }

    fn update_size(&self, size_id: i32, updates: &DomainUpdateSize) -> RepositoryResult<DomainSize> {
        use crate::schema::sizes;

        let mut conn = self.conn()?;
        let updated = diesel::update(sizes::table.filter(sizes::id.eq(size_id)))
            .set(&DbUpdateSize::from(updates))
            .get_result::<DbSize>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_size(&self, size_id: i32) -> RepositoryResult<()> {
        use crate::schema::sizes;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(sizes::table.filter(sizes::id.eq(size_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
