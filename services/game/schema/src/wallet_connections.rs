use sea_orm::entity::prelude::*;

/// A wallet address linked to a user account, with the moderated
/// removal-request state folded into the row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wallet_connections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    /// Stored lowercase; unique across all users.
    #[sea_orm(unique)]
    pub wallet_address: String,
    pub chain_id: String,
    pub connected_at: chrono::DateTime<chrono::Utc>,
    pub last_used: chrono::DateTime<chrono::Utc>,
    /// One of: none, pending, approved, rejected.
    pub removal_status: String,
    pub removal_reason: String,
    pub removal_email: String,
    pub admin_notes: String,
    pub processed_by: String,
    pub processed_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
