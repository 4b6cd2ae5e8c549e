use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, LoaderTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contact,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Contact => Entity::has_many(contact::Entity).into() }
    }
}

impl Related<contact::Entity> for Entity {
    fn to() -> RelationDef { Relation::Contact.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        date: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All clients with their contacts, both in creation order.
/// Clients and contacts are fetched separately: `find_with_related` sorts
/// by the parent primary key first, which would scramble the client order.
pub async fn list_with_contacts(
    db: &DatabaseConnection,
) -> Result<Vec<(Model, Vec<contact::Model>)>, errors::ModelError> {
    let clients = Entity::find()
        .order_by_asc(Column::Date)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    let contacts = clients
        .load_many(
            contact::Entity::find().order_by_asc(contact::Column::CreatedAt),
            db,
        )
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(clients.into_iter().zip(contacts).collect())
}
