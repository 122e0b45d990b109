//! Per-datasource descriptor rules.
//!
//! Each rule sets its fields only when it applies; everything else stays
//! `None` and is left out of the serialized document.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use frontend_settings_sdk::models::{
    DataSourceAccess, DataSourceDescriptor, DataSourcePluginMeta, DataSourceRecord,
    DataSourceTypes,
};

/// Key and display name of the built-in backend pseudo data source.
pub const GRAFANA_DATASOURCE_NAME: &str = "-- Grafana --";
/// Key of the mixed pseudo data source.
pub const MIXED_DATASOURCE_NAME: &str = "-- Mixed --";

const PROXY_PATH_PREFIX: &str = "/api/datasources/proxy/";

/// URL the browser should use: the proxy route for proxied sources, the stored URL otherwise.
#[must_use]
pub fn effective_url(record: &DataSourceRecord) -> String {
    match record.access {
        DataSourceAccess::Proxy => format!("{PROXY_PATH_PREFIX}{}", record.id),
        DataSourceAccess::Direct => record.url.clone(),
    }
}

/// Value of an HTTP `Authorization` header for Basic authentication.
#[must_use]
pub fn basic_auth_header(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

fn has_json_data(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

/// Build the descriptor of one persisted data source.
///
/// `meta` is the registry entry for the record's type; the caller decides what
/// happens to records whose type has none.
#[must_use]
pub fn build_descriptor(record: &DataSourceRecord, meta: DataSourcePluginMeta) -> DataSourceDescriptor {
    let url = effective_url(record);
    let ds_type = record.ds_type.as_str();

    let mut ds = DataSourceDescriptor {
        ds_type: record.ds_type.clone(),
        name: Some(record.name.clone()),
        url: Some(url.clone()),
        meta,
        ..DataSourceDescriptor::default()
    };

    if let Some(json_data) = record.json_data.as_ref().filter(|v| has_json_data(v)) {
        ds.json_data = Some(json_data.clone());
    }

    if record.access == DataSourceAccess::Direct {
        if record.basic_auth {
            ds.basic_auth = Some(basic_auth_header(
                &record.basic_auth_user,
                &record.basic_auth_password,
            ));
        }
        if record.with_credentials {
            ds.with_credentials = Some(true);
        }

        if ds_type == DataSourceTypes::INFLUXDB_08 {
            ds.username = Some(record.user.clone());
            ds.password = Some(record.password.clone());
            ds.url = Some(format!("{url}/db/{}", record.database));
        }

        if ds_type == DataSourceTypes::INFLUXDB {
            ds.username = Some(record.user.clone());
            ds.password = Some(record.password.clone());
            ds.database = Some(record.database.clone());
        }
    }

    if ds_type == DataSourceTypes::ELASTICSEARCH {
        ds.index = Some(record.database.clone());
    }

    if ds_type == DataSourceTypes::INFLUXDB {
        ds.database = Some(record.database.clone());
    }

    if ds_type == DataSourceTypes::PROMETHEUS {
        // unproxied address, for links to the native web UI
        ds.direct_url = Some(record.url.clone());
    }

    ds
}

/// Entry for the built-in backend data source.
#[must_use]
pub fn grafana_descriptor(meta: DataSourcePluginMeta) -> DataSourceDescriptor {
    DataSourceDescriptor {
        ds_type: DataSourceTypes::GRAFANA.to_owned(),
        name: Some(GRAFANA_DATASOURCE_NAME.to_owned()),
        meta,
        ..DataSourceDescriptor::default()
    }
}

/// Entry for the mixed data source. Carries no `name`.
#[must_use]
pub fn mixed_descriptor(meta: DataSourcePluginMeta) -> DataSourceDescriptor {
    DataSourceDescriptor {
        ds_type: DataSourceTypes::MIXED.to_owned(),
        meta,
        ..DataSourceDescriptor::default()
    }
}
