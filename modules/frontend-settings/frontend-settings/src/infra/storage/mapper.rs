use frontend_settings_sdk::models::{DataSourceAccess, DataSourceRecord, OrgId};

use super::entity;

impl From<entity::Model> for DataSourceRecord {
    fn from(entity: entity::Model) -> Self {
        let access = DataSourceAccess::parse(&entity.access).unwrap_or_else(|| {
            tracing::warn!(
                data_source = %entity.name,
                access = %entity.access,
                "Unknown access mode, treating data source as proxied"
            );
            DataSourceAccess::Proxy
        });

        Self {
            id: entity.id,
            org_id: OrgId(entity.org_id),
            version: entity.version,
            name: entity.name,
            ds_type: entity.ds_type,
            access,
            url: entity.url,
            user: entity.user,
            password: entity.password,
            database: entity.database,
            basic_auth: entity.basic_auth,
            basic_auth_user: entity.basic_auth_user,
            basic_auth_password: entity.basic_auth_password,
            with_credentials: entity.with_credentials,
            is_default: entity.is_default,
            json_data: entity.json_data,
            created: entity.created,
            updated: entity.updated,
        }
    }
}
