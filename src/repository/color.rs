use diesel::prelude::*;

use crate::domain::color::{
    Color as DomainColor, NewColor as DomainNewColor, UpdateColor as DomainUpdateColor,
};
use crate::domain::listing::ListQuery;
use crate::models::color::{Color as DbColor, NewColor as DbNewColor, UpdateColor as DbUpdateColor};
use crate::repository::{ColorReader, ColorWriter, DieselRepository, RepositoryError, RepositoryResult};

impl ColorReader for DieselRepository {
    fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<DomainColor>> {
        use crate::schema::colors;

        let mut conn = self.conn()?;
        let color = colors::table
            .filter(colors::id.eq(id))
            .first::<DbColor>(&mut conn)
            .optional()?;

        Ok(color.map(DomainColor::from))
    }

    fn get_color_by_name(&self, name: &str) -> RepositoryResult<Option<DomainColor>> {
        use crate::schema::colors;

        let mut conn = self.conn()?;
        let color = colors::table
            .filter(colors::name.eq(name))
            .first::<DbColor>(&mut conn)
            .optional()?;

        Ok(color.map(DomainColor::from))
    }

    fn list_colors(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<DomainColor>)> {
        use crate::schema::colors;

        let mut conn = self.conn()?;

        let mut count_query = colors::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(search) = query.search.as_ref() {
            count_query = count_query.filter(colors::name.like(format!("%{search}%")));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = colors::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(search) = query.search.as_ref() {
            items_query = items_query.filter(colors::name.like(format!("%{search}%")));
        }
        items_query = items_query.order(colors::name.asc());

        if let Some(pagination) = &query.pagination {
            items_query = items_query
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let colors = items_query
            .load::<DbColor>(&mut conn)?
            .into_iter()
            .map(DomainColor::from)
            .collect();

        Ok((total, colors))
    }
}

impl ColorWriter for DieselRepository {
    fn create_color(&self, new_color: &DomainNewColor) -> RepositoryResult<DomainColor> {
        use crate::schema::colors;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(colors::table)
            .values(&DbNewColor::from(new_color))
            .get_result::<DbColor>(&mut conn)?;

        Ok(created.into())
    }

    fn update_color(
        &self,
        color_id: i32,
        updates: &DomainUpdateColor,
    ) -> RepositoryResult<DomainColor> {
        use crate::schema::colors;

        let mut conn = self.conn()?;
        let updated = diesel::update(colors::table.filter(colors::id.eq(color_id)))
            .set(&DbUpdateColor::from(updates))
            .get_result::<DbColor>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_color(&self, color_id: i32) -> RepositoryResult<()> {
        use crate::schema::colors;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(colors::table.filter(colors::id.eq(color_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
