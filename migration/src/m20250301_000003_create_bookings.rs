use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users::User;
use super::m20250301_000002_create_workers::Worker;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::WorkerId).not_null())
                    .col(string_len(Booking::WorkerName, 100).not_null())
                    .col(string_len(Booking::WorkerPhone, 32).not_null())
                    .col(string_len(Booking::Service, 32).not_null())
                    .col(uuid(Booking::UserId).not_null())
                    .col(string_len(Booking::UserName, 100).not_null())
                    .col(string_len(Booking::UserEmail, 255).not_null())
                    .col(date(Booking::StartDate).not_null())
                    .col(date(Booking::EndDate).not_null())
                    .col(string_len(Booking::TimeSlot, 5).not_null())
                    .col(double(Booking::PerDayCharges).not_null())
                    .col(integer(Booking::DayCount).not_null())
                    .col(double(Booking::TotalPrice).not_null())
                    .col(string_len(Booking::Status, 16).not_null())
                    .col(timestamp_with_time_zone(Booking::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_worker")
                            .from(Booking::Table, Booking::WorkerId)
                            .to(Worker::Table, Worker::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user_created_at")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .col(Booking::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    WorkerId,
    WorkerName,
    WorkerPhone,
    Service,
    UserId,
    UserName,
    UserEmail,
    StartDate,
    EndDate,
    TimeSlot,
    PerDayCharges,
    DayCount,
    TotalPrice,
    Status,
    CreatedAt,
}
