use anyhow::Context;
use chrono::{DateTime, Utc};
use contracts::domain::a003_number_pack::aggregate::{NumberPack, NumberPackId};
use contracts::domain::common::EntityMetadata;
use contracts::enums::pack_status::PackStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;
use crate::shared::pagination::{index_hint, PageCursor};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_number_pack")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// JSON-encoded list of digit strings
    pub numbers: String,
    pub price: i64,
    pub status: String,
    pub category_slug: Option<String>,
    pub comment: Option<String>,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for NumberPack {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at,
            updated_at: m.updated_at,
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let status = PackStatus::from_code(&m.status).unwrap_or(PackStatus::Available);
        let numbers: Vec<String> = serde_json::from_str(&m.numbers).unwrap_or_default();

        NumberPack {
            id: NumberPackId::new(uuid),
            name: m.name,
            numbers,
            price: m.price,
            status,
            category_slug: m.category_slug,
            comment: m.comment,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

#[derive(Debug, Default, Clone)]
pub struct NumberPackQuery {
    pub status: Option<PackStatus>,
    pub category_slug: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

pub async fn list_page(
    filters: &NumberPackQuery,
    cursor: Option<&PageCursor>,
    limit: u64,
) -> anyhow::Result<Vec<NumberPack>> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));

    let mut hint_columns: Vec<&str> = Vec::new();
    if let Some(status) = filters.status {
        query = query.filter(Column::Status.eq(status.code()));
        hint_columns.push("status");
    }
    if let Some(slug) = &filters.category_slug {
        query = query.filter(Column::CategorySlug.eq(slug.clone()));
        hint_columns.push("category_slug");
    }
    if let Some(from) = filters.created_from {
        query = query.filter(Column::CreatedAt.gte(from));
    }
    if let Some(to) = filters.created_to {
        query = query.filter(Column::CreatedAt.lte(to));
    }

    query = query
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id);

    if let Some(cursor) = cursor {
        query = query.filter(
            Condition::any()
                .add(Column::CreatedAt.lt(cursor.created_at))
                .add(
                    Condition::all()
                        .add(Column::CreatedAt.eq(cursor.created_at))
                        .add(Column::Id.lt(cursor.id.clone())),
                ),
        );
    }

    let items = query
        .limit(limit)
        .all(conn())
        .await
        .with_context(|| index_hint("a003_number_pack", &hint_columns))?;

    Ok(items.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<NumberPack>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &NumberPack) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        numbers: Set(serde_json::to_string(&aggregate.numbers)?),
        price: Set(aggregate.price),
        status: Set(aggregate.status.code().to_string()),
        category_slug: Set(aggregate.category_slug.clone()),
        comment: Set(aggregate.comment.clone()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &NumberPack) -> anyhow::Result<()> {
    let id = aggregate.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        name: Set(aggregate.name.clone()),
        numbers: Set(serde_json::to_string(&aggregate.numbers)?),
        price: Set(aggregate.price),
        status: Set(aggregate.status.code().to_string()),
        category_slug: Set(aggregate.category_slug.clone()),
        comment: Set(aggregate.comment.clone()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        updated_at: Set(aggregate.metadata.updated_at),
        version: Set(aggregate.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
