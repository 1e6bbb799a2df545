use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::a005_course::{Course, CourseId};
use contracts::domain::common::BaseAggregate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::domain::content::{ContentStore, SectionColumns};
use crate::shared::data::db::get_connection;
use crate::shared::data::row;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_hours: i32,
    pub is_active: bool,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub category_ids: String,
    pub sub_category_ids: String,
    pub language_ids: String,
    pub validity_ids: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Course {
    fn from(m: Model) -> Self {
        let metadata = row::metadata(m.created_at, m.updated_at, m.is_deleted, m.version);
        let sections = SectionColumns {
            price: m.price,
            discount_price: m.discount_price,
            category_ids: m.category_ids,
            sub_category_ids: m.sub_category_ids,
            language_ids: m.language_ids,
            validity_ids: m.validity_ids,
        };
        Course {
            base: BaseAggregate::with_metadata(
                CourseId(row::uuid("a005_course", &m.id)),
                m.name,
                metadata,
            ),
            description: m.description,
            duration_hours: m.duration_hours.max(0) as u32,
            is_active: m.is_active,
            pricing: sections.pricing(),
            classification: sections.classification(),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Course) -> ActiveModel {
    let sections = SectionColumns::from_item(aggregate);
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        name: Set(aggregate.base.name.clone()),
        description: Set(aggregate.description.clone()),
        duration_hours: Set(aggregate.duration_hours as i32),
        is_active: Set(aggregate.is_active),
        price: Set(sections.price),
        discount_price: Set(sections.discount_price),
        category_ids: Set(sections.category_ids),
        sub_category_ids: Set(sections.sub_category_ids),
        language_ids: Set(sections.language_ids),
        validity_ids: Set(sections.validity_ids),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

#[async_trait]
impl ContentStore for Course {
    async fn list_all() -> anyhow::Result<Vec<Course>> {
        let items = Entity::find()
            .filter(Column::IsDeleted.eq(false))
            .order_by_asc(Column::Name)
            .all(conn())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(items)
    }

    async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Course>> {
        let result = Entity::find_by_id(id.to_string())
            .filter(Column::IsDeleted.eq(false))
            .one(conn())
            .await?;
        Ok(result.map(Into::into))
    }

    async fn insert(item: &Course) -> anyhow::Result<Uuid> {
        to_active(item).insert(conn()).await?;
        Ok(item.base.id.value())
    }

    async fn update(item: &Course) -> anyhow::Result<()> {
        let mut active = to_active(item);
        active.created_at = sea_orm::ActiveValue::NotSet;
        active.update(conn()).await?;
        Ok(())
    }

    async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
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
}
