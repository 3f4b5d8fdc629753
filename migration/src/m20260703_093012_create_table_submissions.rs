use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Submissions::RequesterName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::RequesterEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::RequesterPhone)
                            .string_len(40)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::IsWhatsapp)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // Free-form answer map keyed by form field id
                    .col(ColumnDef::new(Submissions::Answers).json_binary().not_null())
                    .col(
                        ColumnDef::new(Submissions::Status)
                            .string_len(30)
                            .not_null()
                            .default("not_started"),
                    )
                    .col(
                        ColumnDef::new(Submissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Submissions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Dashboard lists newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_submissions_created_at
                ON submissions (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_submissions_status
                ON submissions (status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_submissions_updated_at
                BEFORE UPDATE ON submissions
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
                "DROP TRIGGER IF EXISTS update_submissions_updated_at ON submissions",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_submissions_created_at;
                DROP INDEX IF EXISTS idx_submissions_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Id,
    RequesterName,
    RequesterEmail,
    RequesterPhone,
    IsWhatsapp,
    Answers,
    Status,
    CreatedAt,
    UpdatedAt,
}
