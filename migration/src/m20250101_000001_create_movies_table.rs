use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Movies)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movie::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movie::Name).string().not_null())
                    .col(ColumnDef::new(Movie::Date).date().not_null())
                    .col(ColumnDef::new(Movie::Score).double().not_null())
                    .col(ColumnDef::new(Movie::Genre).string().not_null())
                    .col(ColumnDef::new(Movie::Overview).text().not_null())
                    .col(ColumnDef::new(Movie::Crew).text().not_null())
                    .col(ColumnDef::new(Movie::OrigTitle).string().not_null())
                    .col(ColumnDef::new(Movie::Status).string().not_null())
                    .col(ColumnDef::new(Movie::OrigLang).string().not_null())
                    .col(
                        ColumnDef::new(Movie::Budget)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Movie::Revenue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Movie::Country).string().not_null())
                    .to_owned(),
            )
            .await?;

        // A title can be re-released, but not twice on the same day.
        manager
            .create_index(
                Index::create()
                    .name("uq_movies_name_date")
                    .table(Movie::Movies)
                    .col(Movie::Name)
                    .col(Movie::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movie::Movies).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Movie {
    Movies,
    Id,
    Name,
    Date,
    Score,
    Genre,
    Overview,
    Crew,
    OrigTitle,
    Status,
    OrigLang,
    Budget,
    Revenue,
    Country,
}
