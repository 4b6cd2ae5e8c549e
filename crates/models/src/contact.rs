use chrono::Utc;
use sea_orm::{entity::prelude::*, Condition, DatabaseConnection, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: Uuid,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Client,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Client => Entity::belongs_to(client::Entity).from(Column::ClientId).to(client::Column::Id).into() }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    client_id: Uuid,
    kind: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        client_id: Set(client_id),
        kind: Set(kind.to_string()),
        email: Set(email.map(str::to_string)),
        phone: Set(phone.map(str::to_string)),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        // The unique channel indexes are the authoritative duplicate check
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            errors::ModelError::Conflict("contact channel already registered".into())
        }
        _ => errors::ModelError::Db(e.to_string()),
    })
}

pub async fn find_for_client(
    db: &DatabaseConnection,
    client_id: Uuid,
    id: Uuid,
) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .filter(Column::ClientId.eq(client_id))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// A client's contacts in creation order.
pub async fn list_for_client(
    db: &DatabaseConnection,
    client_id: Uuid,
) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::ClientId.eq(client_id))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Does any of the client's contacts already use one of the proposed
/// channels? NULL channels never count as a match.
pub async fn find_channel_conflict(
    db: &DatabaseConnection,
    client_id: Uuid,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<Option<Model>, errors::ModelError> {
    if email.is_none() && phone.is_none() {
        return Ok(None);
    }
    let mut cond = Condition::any();
    if let Some(e) = email {
        cond = cond.add(Column::Email.eq(e));
    }
    if let Some(p) = phone {
        cond = cond.add(Column::Phone.eq(p));
    }
    Entity::find()
        .filter(Column::ClientId.eq(client_id))
        .filter(cond)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
