use crate::utils::validation::InvalidDate;
use chrono::{NaiveDate, SecondsFormat, Utc};
use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};

/// Renders a stored document as plain JSON: object ids become hex strings
/// and BSON dates become ISO 8601 strings with milliseconds.
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

pub fn documents_to_json(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(document_to_json).collect())
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(dt) => match chrono::DateTime::from_timestamp_millis(dt.timestamp_millis()) {
            Some(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Plain JSON into BSON. Keys are taken literally (no extended-JSON `$`
/// handling); integers that fit are stored as 32-bit.
pub fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).map_or(Bson::Int64(i), Bson::Int32),
            None => Bson::Double(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(
            map.into_iter()
                .map(|(key, value)| (key, json_to_bson(value)))
                .collect(),
        ),
    }
}

pub fn to_bson_date(dt: chrono::DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_date(raw: &str) -> Option<bson::DateTime> {
    let raw = raw.trim();
    let parsed = match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?
            .and_utc(),
    };
    Some(to_bson_date(parsed))
}

/// Replaces string values at the dotted `paths` with BSON dates. Missing
/// keys and non-string values are left alone.
pub fn convert_dates(document: &mut Document, paths: &[&'static str]) -> Result<(), InvalidDate> {
    for &field in paths {
        convert_date_at(document, field, field)?;
    }
    Ok(())
}

fn convert_date_at(
    document: &mut Document,
    path: &str,
    field: &'static str,
) -> Result<(), InvalidDate> {
    if let Some((head, rest)) = path.split_once('.') {
        return match document.get_mut(head) {
            Some(Bson::Document(inner)) => convert_date_at(inner, rest, field),
            _ => Ok(()),
        };
    }

    if let Some(value) = document.get_mut(path) {
        if let Bson::String(raw) = value {
            let date = parse_date(raw).ok_or(InvalidDate { field })?;
            *value = Bson::DateTime(date);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, doc, oid::ObjectId};
    use serde_json::{Number, json};

    #[test]
    fn ids_and_dates_become_strings() {
        let id = ObjectId::new();
        let movie = ObjectId::new();
        let document = doc! {
            "_id": id,
            "movie_id": movie,
            "date": DateTime::from_millis(0),
            "name": "Ann",
        };

        let rendered = document_to_json(document);
        assert_eq!(rendered["_id"], json!(id.to_hex()));
        assert_eq!(rendered["movie_id"], json!(movie.to_hex()));
        assert_eq!(rendered["name"], "Ann");

        assert_eq!(rendered["date"], "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn nested_values_are_converted() {
        let document = doc! {
            "imdb": { "rating": 8.5, "votes": 1200, "id": 78748 },
            "genres": ["Horror", "Sci-Fi"],
            "tomatoes": { "lastUpdated": DateTime::from_millis(1_000) },
        };

        let rendered = document_to_json(document);
        assert_eq!(
            rendered["imdb"],
            json!({ "rating": 8.5, "votes": 1200, "id": 78748 })
        );
        assert_eq!(rendered["genres"], json!(["Horror", "Sci-Fi"]));
        assert!(rendered["tomatoes"]["lastUpdated"].is_string());
    }

    #[test]
    fn json_numbers_keep_their_kind() {
        assert_eq!(json_to_bson(json!(80)), Bson::Int32(80));
        assert_eq!(json_to_bson(json!(5_000_000_000i64)), Bson::Int64(5_000_000_000));
        assert_eq!(json_to_bson(json!(7.1)), Bson::Double(7.1));
        assert_eq!(
            json_to_bson(Value::Number(Number::from(u64::MAX))),
            Bson::Double(u64::MAX as f64)
        );
    }

    #[test]
    fn dollar_keys_stay_plain() {
        let converted = json_to_bson(json!({ "$date": "2020-01-01" }));
        let document = converted.as_document().unwrap();
        assert_eq!(document.get_str("$date").unwrap(), "2020-01-01");
    }

    #[test]
    fn dates_accept_timestamps_and_bare_days() {
        let day = parse_date("1893-05-09").unwrap();
        let stamp = parse_date("1893-05-09T00:00:00.000Z").unwrap();
        assert_eq!(day, stamp);
        assert_eq!(
            parse_date("2015-08-13T02:27:59.177+02:00").unwrap(),
            parse_date("2015-08-13T00:27:59.177Z").unwrap()
        );
        assert!(parse_date("May 9th").is_none());
        assert!(parse_date("1893-13-40").is_none());
    }

    #[test]
    fn dates_are_converted_at_nested_paths() {
        let mut document = doc! {
            "released": "1893-05-09",
            "tomatoes": { "lastUpdated": "2015-06-28T18:34:09Z" },
            "lastupdated": Bson::Null,
        };
        convert_dates(&mut document, &["released", "lastupdated", "tomatoes.lastUpdated"])
            .unwrap();

        assert!(document.get_datetime("released").is_ok());
        assert!(
            document
                .get_document("tomatoes")
                .unwrap()
                .get_datetime("lastUpdated")
                .is_ok()
        );
        assert_eq!(document.get("lastupdated"), Some(&Bson::Null));

        let rendered = document_to_json(document);
        assert_eq!(rendered["released"], "1893-05-09T00:00:00.000Z");
        assert_eq!(rendered["tomatoes"]["lastUpdated"], "2015-06-28T18:34:09.000Z");
    }

    #[test]
    fn unparseable_date_names_its_field() {
        let mut document = doc! { "tomatoes": { "lastUpdated": "yesterday" } };
        let err = convert_dates(&mut document, &["tomatoes.lastUpdated"]).unwrap_err();
        assert_eq!(err.field, "tomatoes.lastUpdated");
    }
}
