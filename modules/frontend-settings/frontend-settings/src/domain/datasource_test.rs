#[cfg(test)]
mod tests {
    use super::super::datasource::{
        basic_auth_header, build_descriptor, effective_url, grafana_descriptor, mixed_descriptor,
    };
    use super::super::*;
    use chrono::Utc;
    use frontend_settings_sdk::models::{
        DataSourceAccess, DataSourcePluginMeta, DataSourceRecord, OrgId,
    };
    use serde_json::json;

    fn record(ds_type: &str, access: DataSourceAccess) -> DataSourceRecord {
        DataSourceRecord {
            id: 42,
            org_id: OrgId(1),
            version: 1,
            name: "metrics".to_owned(),
            ds_type: ds_type.to_owned(),
            access,
            url: "http://backend:8086".to_owned(),
            user: "reader".to_owned(),
            password: "s3cret".to_owned(),
            database: "site".to_owned(),
            basic_auth: false,
            basic_auth_user: String::new(),
            basic_auth_password: String::new(),
            with_credentials: false,
            is_default: false,
            json_data: None,
            created: Utc::now(),
            updated: Utc::now(),
        }
    }

    fn meta(id: &str) -> DataSourcePluginMeta {
        DataSourcePluginMeta {
            id: id.to_owned(),
            name: id.to_owned(),
            enabled: true,
            ..DataSourcePluginMeta::default()
        }
    }

    #[test]
    fn test_proxy_access_rewrites_url_to_proxy_route() {
        let mut rec = record("graphite", DataSourceAccess::Proxy);
        rec.url = "http://ignored.example".to_owned();

        assert_eq!(effective_url(&rec), "/api/datasources/proxy/42");

        let ds = build_descriptor(&rec, meta("graphite"));
        assert_eq!(ds.url.as_deref(), Some("/api/datasources/proxy/42"));
        assert_eq!(ds.name.as_deref(), Some("metrics"));
        assert_eq!(ds.ds_type, "graphite");
        assert_eq!(ds.meta.id, "graphite");
    }

    #[test]
    fn test_direct_access_keeps_stored_url() {
        let rec = record("graphite", DataSourceAccess::Direct);
        let ds = build_descriptor(&rec, meta("graphite"));

        assert_eq!(ds.url.as_deref(), Some("http://backend:8086"));
        assert!(ds.basic_auth.is_none());
        assert!(ds.with_credentials.is_none());
        assert!(ds.username.is_none());
        assert!(ds.password.is_none());
    }

    #[test]
    fn test_basic_auth_header_is_standard_encoding() {
        assert_eq!(basic_auth_header("user", "pass"), "Basic dXNlcjpwYXNz");
        assert_eq!(basic_auth_header("", ""), "Basic Og==");
    }

    #[test]
    fn test_direct_basic_auth_and_credentials_are_attached() {
        let mut rec = record("graphite", DataSourceAccess::Direct);
        rec.basic_auth = true;
        rec.basic_auth_user = "admin".to_owned();
        rec.basic_auth_password = "admin".to_owned();
        rec.with_credentials = true;

        let ds = build_descriptor(&rec, meta("graphite"));

        assert_eq!(ds.basic_auth.as_deref(), Some("Basic YWRtaW46YWRtaW4="));
        assert_eq!(ds.with_credentials, Some(true));
    }

    #[test]
    fn test_proxy_access_never_exposes_basic_auth() {
        let mut rec = record("graphite", DataSourceAccess::Proxy);
        rec.basic_auth = true;
        rec.basic_auth_user = "admin".to_owned();
        rec.basic_auth_password = "admin".to_owned();
        rec.with_credentials = true;

        let ds = build_descriptor(&rec, meta("graphite"));

        assert!(ds.basic_auth.is_none());
        assert!(ds.with_credentials.is_none());
    }

    #[test]
    fn test_legacy_influx_direct_appends_database_path() {
        let rec = record("influxdb_08", DataSourceAccess::Direct);
        let ds = build_descriptor(&rec, meta("influxdb_08"));

        assert_eq!(ds.url.as_deref(), Some("http://backend:8086/db/site"));
        assert_eq!(ds.username.as_deref(), Some("reader"));
        assert_eq!(ds.password.as_deref(), Some("s3cret"));
        assert!(ds.database.is_none());
    }

    #[test]
    fn test_legacy_influx_proxy_gets_no_credentials() {
        let rec = record("influxdb_08", DataSourceAccess::Proxy);
        let ds = build_descriptor(&rec, meta("influxdb_08"));

        assert_eq!(ds.url.as_deref(), Some("/api/datasources/proxy/42"));
        assert!(ds.username.is_none());
        assert!(ds.password.is_none());
    }

    #[test]
    fn test_influx_direct_has_credentials_and_database_without_path_append() {
        let rec = record("influxdb", DataSourceAccess::Direct);
        let ds = build_descriptor(&rec, meta("influxdb"));

        assert_eq!(ds.url.as_deref(), Some("http://backend:8086"));
        assert_eq!(ds.username.as_deref(), Some("reader"));
        assert_eq!(ds.password.as_deref(), Some("s3cret"));
        assert_eq!(ds.database.as_deref(), Some("site"));
    }

    #[test]
    fn test_influx_proxy_still_has_database() {
        let rec = record("influxdb", DataSourceAccess::Proxy);
        let ds = build_descriptor(&rec, meta("influxdb"));

        assert_eq!(ds.database.as_deref(), Some("site"));
        assert!(ds.username.is_none());
        assert!(ds.password.is_none());
        assert_eq!(ds.url.as_deref(), Some("/api/datasources/proxy/42"));
    }

    #[test]
    fn test_elasticsearch_gets_index_in_any_access_mode() {
        for access in [DataSourceAccess::Proxy, DataSourceAccess::Direct] {
            let mut rec = record("elasticsearch", access);
            rec.database = "[logs-]YYYY.MM.DD".to_owned();

            let ds = build_descriptor(&rec, meta("elasticsearch"));

            assert_eq!(ds.index.as_deref(), Some("[logs-]YYYY.MM.DD"));
            assert!(ds.database.is_none());
        }
    }

    #[test]
    fn test_prometheus_exposes_unproxied_url() {
        let mut rec = record("prometheus", DataSourceAccess::Proxy);
        rec.url = "http://prometheus:9090".to_owned();

        let ds = build_descriptor(&rec, meta("prometheus"));

        assert_eq!(ds.url.as_deref(), Some("/api/datasources/proxy/42"));
        assert_eq!(ds.direct_url.as_deref(), Some("http://prometheus:9090"));
    }

    #[test]
    fn test_json_data_attached_only_when_non_empty() {
        let mut rec = record("graphite", DataSourceAccess::Proxy);

        rec.json_data = Some(json!({"graphiteVersion": "1.1"}));
        let ds = build_descriptor(&rec, meta("graphite"));
        assert_eq!(ds.json_data, Some(json!({"graphiteVersion": "1.1"})));

        rec.json_data = Some(json!({}));
        assert!(build_descriptor(&rec, meta("graphite")).json_data.is_none());

        rec.json_data = Some(serde_json::Value::Null);
        assert!(build_descriptor(&rec, meta("graphite")).json_data.is_none());

        rec.json_data = None;
        assert!(build_descriptor(&rec, meta("graphite")).json_data.is_none());
    }

    #[test]
    fn test_synthetic_descriptors() {
        let grafana = grafana_descriptor(meta("grafana"));
        assert_eq!(grafana.ds_type, "grafana");
        assert_eq!(grafana.name.as_deref(), Some("-- Grafana --"));
        assert!(grafana.url.is_none());

        let mixed = mixed_descriptor(meta("mixed"));
        assert_eq!(mixed.ds_type, "mixed");
        assert!(mixed.name.is_none());
        assert_eq!(mixed.meta.id, "mixed");
    }
}
