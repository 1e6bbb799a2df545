use chrono::Utc;
use contracts::domain::a001_category::{Category, CategoryId};
use contracts::domain::common::BaseAggregate;
use contracts::enums::ContentType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::row;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub content_type: String,
    pub is_active: bool,
    pub description: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        let metadata = row::metadata(m.created_at, m.updated_at, m.is_deleted, m.version);
        Category {
            base: BaseAggregate::with_metadata(
                CategoryId(row::uuid("a001_category", &m.id)),
                m.name,
                metadata,
            ),
            content_type: row::content_type("a001_category", &m.content_type),
            is_active: m.is_active,
            description: m.description,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Неудалённые категории, опционально одного типа контента и только активные
pub async fn list(
    content_type: Option<ContentType>,
    active_only: bool,
) -> anyhow::Result<Vec<Category>> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(ct) = content_type {
        query = query.filter(Column::ContentType.eq(ct.code()));
    }
    if active_only {
        query = query.filter(Column::IsActive.eq(true));
    }
    let items = query
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Category>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

fn to_active(aggregate: &Category) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        name: Set(aggregate.base.name.clone()),
        content_type: Set(aggregate.content_type.code().to_string()),
        is_active: Set(aggregate.is_active),
        description: Set(aggregate.description.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn insert(aggregate: &Category) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Category) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
