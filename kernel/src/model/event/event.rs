use derive_new::new;

use crate::model::id::UserId;

#[derive(Debug, new)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub created_by: UserId,
}
