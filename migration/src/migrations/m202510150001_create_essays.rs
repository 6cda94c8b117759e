use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Essays {
    Table,
    Id,
    Essay,
    Feedback,
    Clarity,
    Argument,
    Evidence,
    Organization,
    Grammar,
    Style,
    SubmittedAt,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510150001_create_essays"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Essays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Essays::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Essays::Essay).text().not_null())
                    .col(ColumnDef::new(Essays::Feedback).text().not_null())
                    .col(ColumnDef::new(Essays::Clarity).integer().not_null())
                    .col(ColumnDef::new(Essays::Argument).integer().not_null())
                    .col(ColumnDef::new(Essays::Evidence).integer().not_null())
                    .col(ColumnDef::new(Essays::Organization).integer().not_null())
                    .col(ColumnDef::new(Essays::Grammar).integer().not_null())
                    .col(ColumnDef::new(Essays::Style).integer().not_null())
                    .col(
                        ColumnDef::new(Essays::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_essays_submitted_at")
                    .table(Essays::Table)
                    .col(Essays::SubmittedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Essays::Table).to_owned())
            .await
    }
}
