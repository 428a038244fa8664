use serde_json::{Map, Value};

use crate::core::client::constants::ENDPOINT_SOURCES;
use crate::core::params::{validate_category, validate_country, validate_language};
use crate::core::{NewsClient, NewsError};
use crate::sources::{
    model::{Source, SourceFields, SourcesInfo},
    wire,
};

pub(super) fn fetch_raw(
    client: &NewsClient,
    category: &str,
    language: &str,
    country: &str,
) -> Result<Vec<Map<String, Value>>, NewsError> {
    validate_category(category)?;
    validate_language(language)?;
    validate_country(country)?;

    let body = client.request(
        ENDPOINT_SOURCES,
        [
            ("category", Some(category)),
            ("language", Some(language)),
            ("country", Some(country)),
        ],
    )?;

    let envelope: wire::SourcesEnvelope = serde_json::from_value(body)?;
    envelope
        .sources
        .ok_or_else(|| NewsError::Data("response has no 'sources' field".into()))
}

pub(super) fn fetch(
    client: &NewsClient,
    category: &str,
    language: &str,
    country: &str,
) -> Result<Vec<Source>, NewsError> {
    fetch_raw(client, category, language, country)?
        .into_iter()
        .map(|record| serde_json::from_value(Value::Object(record)).map_err(NewsError::Json))
        .collect()
}

fn lookup(record: &Map<String, Value>, field: &str) -> Result<Value, NewsError> {
    record
        .get(field)
        .cloned()
        .ok_or_else(|| NewsError::MissingField {
            field: field.to_string(),
        })
}

pub(crate) fn project(
    records: &[Map<String, Value>],
    fields: &SourceFields,
) -> Result<SourcesInfo, NewsError> {
    match fields {
        SourceFields::One(field) => records
            .iter()
            .map(|r| lookup(r, field))
            .collect::<Result<Vec<_>, _>>()
            .map(SourcesInfo::Values),
        SourceFields::Many(wanted) => records
            .iter()
            .map(|r| {
                wanted
                    .iter()
                    .map(|f| lookup(r, f).map(|v| (f.clone(), v)))
                    .collect::<Result<Map<_, _>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(SourcesInfo::Records),
    }
}
