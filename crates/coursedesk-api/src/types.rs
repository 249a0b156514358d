// Wire types for the course/discipline API.
//
// Identifiers arrive as `_id`. Dates arrive either as a bare
// `YYYY-MM-DD` or as a full RFC 3339 timestamp and are always sent
// back as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

// ── Responses ────────────────────────────────────────────────────────

/// A course as returned by `GET /courses`, disciplines embedded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "de_workload")]
    pub workload: u32,
    #[serde(default, deserialize_with = "de_start_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub disciplines: Vec<DisciplineResponse>,
}

/// A discipline embedded in a course.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisciplineResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
}

// ── Request bodies ───────────────────────────────────────────────────

/// Body for `POST /courses` and `PUT /courses/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseBody {
    pub name: String,
    pub workload: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// Body for discipline create and rename.
///
/// On create `id` is the owning course's id; on rename it is the
/// discipline's own id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisciplineBody {
    pub id: String,
    pub name: String,
}

// ── Parsing helpers ──────────────────────────────────────────────────

/// Parse a date the way the server emits it.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date as written is
/// kept, no timezone shift), and offset-less `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Floor a numeric workload into the `u32` range. NaN and negatives map to 0.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn floor_workload(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value.floor() as u32
    }
}

fn de_workload<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(n) => u32::try_from(n).unwrap_or(u32::MAX),
        Raw::Float(f) => floor_workload(f),
        Raw::Text(s) => s.trim().parse::<f64>().map_or(0, floor_workload),
        Raw::Null => 0,
    })
}

/// `null` decodes like a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn de_start_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_api_date))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_plain_date() {
        assert_eq!(
            parse_api_date("2024-03-01"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn parse_rfc3339_keeps_written_date() {
        assert_eq!(
            parse_api_date("2024-03-01T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            parse_api_date("2024-03-01T23:30:00-03:00"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_api_date(""), None);
        assert_eq!(parse_api_date("yesterday"), None);
        assert_eq!(parse_api_date("2024-13-40"), None);
    }

    #[test]
    fn floor_workload_clamps() {
        assert_eq!(floor_workload(40.9), 40);
        assert_eq!(floor_workload(-3.0), 0);
        assert_eq!(floor_workload(f64::NAN), 0);
        assert_eq!(floor_workload(1e12), u32::MAX);
    }

    #[test]
    fn course_response_tolerates_loose_fields() {
        let course: CourseResponse = serde_json::from_value(json!({
            "_id": "c1",
            "name": "Rust",
            "workload": "60.5",
            "startDate": "2024-02-10T00:00:00.000Z",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(course.id, "c1");
        assert_eq!(course.workload, 60);
        assert_eq!(course.start_date, NaiveDate::from_ymd_opt(2024, 2, 10));
        assert!(course.disciplines.is_empty());
    }

    #[test]
    fn course_response_null_fields_default() {
        let course: CourseResponse = serde_json::from_value(json!({
            "_id": "c2",
            "name": "Go",
            "workload": null,
            "startDate": null,
            "disciplines": [{ "_id": "d1", "name": "Intro" }]
        }))
        .unwrap();

        assert_eq!(course.workload, 0);
        assert_eq!(course.start_date, None);
        assert_eq!(course.disciplines.len(), 1);
        assert_eq!(course.disciplines[0].name, "Intro");
    }

    #[test]
    fn null_name_and_disciplines_keep_the_list_decodable() {
        let courses: Vec<CourseResponse> = serde_json::from_value(json!([
            {
                "_id": "c1",
                "name": "Rust",
                "workload": 40,
                "disciplines": null
            },
            {
                "_id": "c2",
                "name": null,
                "disciplines": [{ "_id": "d1", "name": null }]
            }
        ]))
        .unwrap();

        assert_eq!(courses.len(), 2);
        assert!(courses[0].disciplines.is_empty());
        assert_eq!(courses[1].name, "");
        assert_eq!(courses[1].disciplines[0].id, "d1");
        assert_eq!(courses[1].disciplines[0].name, "");
    }

    #[test]
    fn course_body_serializes_camel_case_date() {
        let body = CourseBody {
            name: "Rust".into(),
            workload: 40,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 6),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "name": "Rust", "workload": 40, "startDate": "2024-05-06" })
        );
    }
}
