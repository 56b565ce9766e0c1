use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum length of `name`, in characters.
pub const NAME_MAX_LEN: usize = 100;
/// Maximum length of `description`, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 255;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique, column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub description: Option<String>,
    pub price: f64,
    #[sea_orm(default_value = true)]
    pub is_available: bool,
    #[sea_orm(default_value = 0)]
    pub stock_quantity: i32,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc, // filled in by the database on insert
    pub updated_at: Option<DateTimeUtc>, // null until the first update
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            self.created_at = NotSet;
            self.updated_at = Set(None);
        } else {
            self.updated_at = Set(Some(chrono::Utc::now()));
        }
        Ok(self)
    }
}
