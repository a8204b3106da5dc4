use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Worker::Table)
                    .if_not_exists()
                    .col(uuid(Worker::Id).primary_key())
                    .col(string_len(Worker::Name, 100).not_null())
                    .col(string_len(Worker::Phone, 32).not_null())
                    .col(string_len(Worker::Email, 255).not_null())
                    .col(string_len(Worker::Service, 32).not_null())
                    .col(string_len(Worker::Location, 255).not_null())
                    .col(text(Worker::FullAddress).not_null())
                    .col(string_len(Worker::Pincode, 6).not_null())
                    .col(string_len_null(Worker::Experience, 255))
                    .col(double(Worker::PerDayCharges).not_null())
                    .col(text_null(Worker::Description))
                    .col(string_len(Worker::Status, 16).not_null())
                    .col(timestamp_with_time_zone(Worker::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_worker_service_pincode")
                    .table(Worker::Table)
                    .col(Worker::Service)
                    .col(Worker::Pincode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Worker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Worker {
    Table,
    Id,
    Name,
    Phone,
    Email,
    Service,
    Location,
    FullAddress,
    Pincode,
    Experience,
    PerDayCharges,
    Description,
    Status,
    CreatedAt,
}
