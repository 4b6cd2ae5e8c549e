//! Unique channel indexes on `contact`.
//!
//! Uniqueness is scoped per client; NULL channels never conflict, so two
//! contacts without an email can coexist. The database constraint is the
//! authoritative duplicate check, the service pre-check only supplies the
//! friendlier error message.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Contact: composite unique (client_id, email)
        manager
            .create_index(
                Index::create()
                    .name("uniq_contact_client_email")
                    .table(Contact::Table)
                    .col(Contact::ClientId)
                    .col(Contact::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Contact: composite unique (client_id, phone)
        manager
            .create_index(
                Index::create()
                    .name("uniq_contact_client_phone")
                    .table(Contact::Table)
                    .col(Contact::ClientId)
                    .col(Contact::Phone)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Contact: index on client_id for the per-client listings
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_client")
                    .table(Contact::Table)
                    .col(Contact::ClientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contact_client").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_contact_client_phone").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_contact_client_email").table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, ClientId, Email, Phone }
