use async_trait::async_trait;
use chrono::Utc;
use frontend_settings_sdk::models::{DataSourceAccess, DataSourceRecord, OrgId};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::domain::repo::DataSourceRepository;

use super::entity::{self, Entity as DataSourceEntity};

/// Data for provisioning a new data source.
#[derive(Debug, Clone)]
pub struct NewDataSource {
    pub org_id: OrgId,
    pub name: String,
    pub ds_type: String,
    pub access: DataSourceAccess,
    pub url: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub basic_auth: bool,
    pub basic_auth_user: String,
    pub basic_auth_password: String,
    pub with_credentials: bool,
    pub is_default: bool,
    pub json_data: Option<serde_json::Value>,
}

impl NewDataSource {
    /// A proxied data source with every optional field left empty.
    #[must_use]
    pub fn new(
        org_id: OrgId,
        name: impl Into<String>,
        ds_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            org_id,
            name: name.into(),
            ds_type: ds_type.into(),
            access: DataSourceAccess::Proxy,
            url: url.into(),
            user: String::new(),
            password: String::new(),
            database: String::new(),
            basic_auth: false,
            basic_auth_user: String::new(),
            basic_auth_password: String::new(),
            with_credentials: false,
            is_default: false,
            json_data: None,
        }
    }
}

pub struct SeaOrmDataSourceRepository {
    db: DatabaseConnection,
}

impl SeaOrmDataSourceRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Errors
    ///
    /// Returns an error if the row cannot be inserted, e.g. when the name is
    /// already taken within the organization.
    pub async fn insert(&self, new: NewDataSource) -> anyhow::Result<DataSourceRecord> {
        let now = Utc::now();
        let active_model = entity::ActiveModel {
            id: ActiveValue::NotSet,
            org_id: ActiveValue::Set(new.org_id.0),
            version: ActiveValue::Set(1),
            ds_type: ActiveValue::Set(new.ds_type),
            name: ActiveValue::Set(new.name),
            access: ActiveValue::Set(new.access.as_str().to_owned()),
            url: ActiveValue::Set(new.url),
            password: ActiveValue::Set(new.password),
            user: ActiveValue::Set(new.user),
            database: ActiveValue::Set(new.database),
            basic_auth: ActiveValue::Set(new.basic_auth),
            basic_auth_user: ActiveValue::Set(new.basic_auth_user),
            basic_auth_password: ActiveValue::Set(new.basic_auth_password),
            with_credentials: ActiveValue::Set(new.with_credentials),
            is_default: ActiveValue::Set(new.is_default),
            json_data: ActiveValue::Set(new.json_data),
            created: ActiveValue::Set(now),
            updated: ActiveValue::Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(model.into())
    }
}

#[async_trait]
impl DataSourceRepository for SeaOrmDataSourceRepository {
    async fn list_by_org(&self, org_id: OrgId) -> anyhow::Result<Vec<DataSourceRecord>> {
        let rows = DataSourceEntity::find()
            .filter(entity::Column::OrgId.eq(org_id.0))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
