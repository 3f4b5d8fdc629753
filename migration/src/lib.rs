pub use sea_orm_migration::prelude::*;

mod m20260703_091245_create_admins_table;
mod m20260703_093012_create_table_submissions;
mod m20260703_094130_create_table_projects;
mod m20260704_101502_create_table_services;
mod m20260704_102217_create_table_competencies;
mod m20260704_103405_create_table_journey_entries;
mod m20260705_110121_create_table_profile;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260703_091245_create_admins_table::Migration),
            Box::new(m20260703_093012_create_table_submissions::Migration),
            Box::new(m20260703_094130_create_table_projects::Migration),
            Box::new(m20260704_101502_create_table_services::Migration),
            Box::new(m20260704_102217_create_table_competencies::Migration),
            Box::new(m20260704_103405_create_table_journey_entries::Migration),
            Box::new(m20260705_110121_create_table_profile::Migration),
        ]
    }
}
