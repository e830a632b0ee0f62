use chrono::Utc;
use uuid::Uuid;

fn short_hex() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// `req_<12 hex>_<unix secs>`
pub fn correlation_id() -> String {
    format!("req_{}_{}", short_hex(), Utc::now().timestamp())
}

pub fn session_id() -> String {
    format!("session_{}", short_hex())
}

pub fn memory_id() -> String {
    format!("mem_{}", Uuid::new_v4().simple())
}

pub fn review_id() -> String {
    format!("review_{}", short_hex())
}
