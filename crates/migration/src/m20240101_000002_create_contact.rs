//! Create `contact` table with FK to `client`.
//!
//! Email and phone are nullable; a contact carries at least one of them,
//! which the service layer enforces.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(uuid(Contact::Id).primary_key())
                    .col(uuid(Contact::ClientId).not_null())
                    .col(string_len(Contact::Type, 64).not_null())
                    // Explicitly nullable: NULL means "channel absent"
                    .col(ColumnDef::new(Contact::Email).string_len(255).null())
                    .col(ColumnDef::new(Contact::Phone).string_len(32).null())
                    .col(timestamp_with_time_zone(Contact::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_client")
                            .from(Contact::Table, Contact::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, Id, ClientId, Type, Email, Phone, CreatedAt }

#[derive(DeriveIden)]
enum Client { Table, Id }
