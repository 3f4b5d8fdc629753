use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Competencies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Competencies::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Competencies::Subtitle).string_len(200))
                    .col(ColumnDef::new(Competencies::Icon).string_len(80).not_null())
                    // Ordered list of bullet strings, stored as JSONB
                    .col(ColumnDef::new(Competencies::Items).json_binary().not_null())
                    .col(
                        ColumnDef::new(Competencies::ColorTheme)
                            .string_len(20)
                            .not_null()
                            .default("indigo"),
                    )
                    .col(
                        ColumnDef::new(Competencies::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Competencies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Competencies::UpdatedAt)
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
                CREATE INDEX idx_competencies_display_order
                ON competencies (display_order ASC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_competencies_updated_at
                BEFORE UPDATE ON competencies
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
                "DROP TRIGGER IF EXISTS update_competencies_updated_at ON competencies",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_competencies_display_order")
            .await?;

        manager
            .drop_table(Table::drop().table(Competencies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Competencies {
    Table,
    Id,
    Title,
    Subtitle,
    Icon,
    Items,
    ColorTheme,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
