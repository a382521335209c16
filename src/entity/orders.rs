use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub user_address: String,
    /// Serialized JSON; cart lines from checkout, bare ids from the legacy route.
    #[sea_orm(column_type = "Text")]
    pub products: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
