#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::Utc;
    use frontend_settings_sdk::models::{DataSourceAccess, DataSourceRecord, OrgId};
    use serde_json::json;

    fn entity_model(access: &str) -> entity::Model {
        entity::Model {
            id: 3,
            org_id: 2,
            version: 4,
            ds_type: "influxdb".to_owned(),
            name: "influx".to_owned(),
            access: access.to_owned(),
            url: "http://influx:8086".to_owned(),
            password: "pw".to_owned(),
            user: "usr".to_owned(),
            database: "metrics".to_owned(),
            basic_auth: true,
            basic_auth_user: "ba".to_owned(),
            basic_auth_password: "bp".to_owned(),
            with_credentials: true,
            is_default: true,
            json_data: Some(json!({"timeInterval": "10s"})),
            created: Utc::now(),
            updated: Utc::now(),
        }
    }

    #[test]
    fn test_entity_to_record_conversion() {
        let record: DataSourceRecord = entity_model("direct").into();

        assert_eq!(record.id, 3);
        assert_eq!(record.org_id, OrgId(2));
        assert_eq!(record.version, 4);
        assert_eq!(record.ds_type, "influxdb");
        assert_eq!(record.name, "influx");
        assert_eq!(record.access, DataSourceAccess::Direct);
        assert_eq!(record.user, "usr");
        assert_eq!(record.password, "pw");
        assert_eq!(record.database, "metrics");
        assert!(record.basic_auth);
        assert_eq!(record.basic_auth_user, "ba");
        assert_eq!(record.basic_auth_password, "bp");
        assert!(record.with_credentials);
        assert!(record.is_default);
        assert_eq!(record.json_data, Some(json!({"timeInterval": "10s"})));
    }

    #[test]
    fn test_unknown_access_falls_back_to_proxy() {
        let record: DataSourceRecord = entity_model("browser").into();

        assert_eq!(record.access, DataSourceAccess::Proxy);
    }
}
