use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::event::{event::CreateEvent, Event};
use kernel::model::id::{EventId, UserId};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(custom(non_negative))]
    #[serde(deserialize_with = "coerce_price")]
    pub price: f64,
    #[garde(skip)]
    pub creator: UserId,
}

fn non_negative(value: &f64, _ctx: &()) -> Result<(), garde::Error> {
    if *value < 0.0 {
        return Err(garde::Error::new("price must not be negative"));
    }
    Ok(())
}

// price は JSON の数値と文字列表記の両方を受け付ける。数値に読めない文字列は拒否する。
fn coerce_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceInput {
        Number(f64),
        Text(String),
    }

    match PriceInput::deserialize(deserializer)? {
        PriceInput::Number(price) => Ok(price),
        PriceInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("price is not a number: {text}"))),
    }
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(value: CreateEventRequest) -> Self {
        let CreateEventRequest {
            title,
            description,
            price,
            creator,
        } = value;
        CreateEvent {
            title,
            description,
            price,
            created_by: creator,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub creator: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            id,
            title,
            description,
            price,
            created_by,
            created_at,
        } = value;
        Self {
            id,
            title,
            description,
            price,
            creator: created_by,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_json(price: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "title": "Talk",
            "description": "D",
            "price": price,
            "creator": UserId::new(),
        })
    }

    #[test]
    fn price_accepts_a_number() {
        let req: CreateEventRequest =
            serde_json::from_value(request_json(serde_json::json!(12.5))).unwrap();
        assert_eq!(req.price, 12.5);
    }

    #[test]
    fn price_coerces_its_text_form() {
        let req: CreateEventRequest =
            serde_json::from_value(request_json(serde_json::json!("12.5"))).unwrap();
        assert_eq!(req.price, 12.5);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let res = serde_json::from_value::<CreateEventRequest>(request_json(
            serde_json::json!("twelve"),
        ));
        assert!(res.is_err());
    }

    #[test]
    fn negative_price_fails_validation() {
        let req: CreateEventRequest =
            serde_json::from_value(request_json(serde_json::json!(-1.0))).unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut value = request_json(serde_json::json!(10.0));
        value["title"] = serde_json::json!("");
        let req: CreateEventRequest = serde_json::from_value(value).unwrap();
        assert!(req.validate(&()).is_err());
    }
}
