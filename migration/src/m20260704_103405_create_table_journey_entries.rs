use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JourneyEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JourneyEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(JourneyEntries::Company).string_len(150))
                    .col(ColumnDef::new(JourneyEntries::PeriodLabel).string_len(80))
                    .col(ColumnDef::new(JourneyEntries::Description).text().not_null())
                    // "work" | "education"
                    .col(ColumnDef::new(JourneyEntries::Kind).string_len(20).not_null())
                    .col(
                        ColumnDef::new(JourneyEntries::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JourneyEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_journey_entries_display_order
                ON journey_entries (display_order ASC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_journey_entries_updated_at
                BEFORE UPDATE ON journey_entries
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_journey_entries_updated_at ON journey_entries",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_journey_entries_display_order")
            .await?;

        manager
            .drop_table(Table::drop().table(JourneyEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JourneyEntries {
    Table,
    Id,
    Title,
    Company,
    PeriodLabel,
    Description,
    Kind,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
