use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use crate::entities::movie::{self, Entity as Movie};
use crate::pagination::PageWindow;

/// Read-only access to the movie table.
pub struct MovieCatalog<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieCatalog<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Total number of movies in the catalog.
    pub async fn count(&self) -> Result<u64, DbErr> {
        Movie::find().count(self.db).await
    }

    /// The rows inside `window`, ordered by id so consecutive pages neither
    /// skip nor repeat rows.
    pub async fn fetch_page(&self, window: PageWindow) -> Result<Vec<movie::Model>, DbErr> {
        Movie::find()
            .order_by_asc(movie::Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .all(self.db)
            .await
    }

    pub async fn fetch_by_id(&self, id: i32) -> Result<Option<movie::Model>, DbErr> {
        Movie::find_by_id(id).one(self.db).await
    }
}
