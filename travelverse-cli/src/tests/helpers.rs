//! Test helpers for writing CLI request files into scratch directories.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, creating nothing else.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test input");
}

/// Create a scratch directory and return it with its UTF-8 root.
pub(super) fn scratch_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Write `value` as JSON to `root/name` and return the path.
pub(super) fn write_json_file(root: &Utf8Path, name: &str, value: &Value) -> Utf8PathBuf {
    let path = root.join(name);
    let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
    write_utf8(&path, &payload);
    path
}

fn destination(id: &str, name: &str, activities: &[&str], min_cost: u32, spots: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "country": "Testland",
        "coordinates": { "lat": 27.1751, "lng": 78.0421 },
        "activities": activities,
        "culture": {
            "language": "Hindi",
            "currency": "INR",
            "traditions": ["Classical dance", "Festival of lights"],
            "festivals": []
        },
        "history": "Built over centuries.",
        "travelInfo": {
            "averageCostRange": { "min": min_cost, "max": min_cost + 100 },
            "bestTimeToVisit": "October to March"
        },
        "accommodation": [{ "type": "hotel", "rating": 4.5 }],
        "photoSpotCount": spots
    })
}

/// A recommend request with a cultural traveler and three destinations.
pub(super) fn recommend_request() -> Value {
    json!({
        "profile": {
            "interests": ["culture", "photography"],
            "budgetRange": "moderate",
            "travelStyle": "cultural",
            "personality": { "cultural": 0.9, "adventurous": 0.3 }
        },
        "destinations": [
            destination("1", "Agra", &["Tours"], 50, 3),
            destination("2", "Queenstown", &["Hiking", "Bungee Jumping"], 150, 1),
            destination("3", "Kyoto", &["Temples"], 80, 5)
        ]
    })
}

/// A guide list mixing scenic, food and architectural guides.
pub(super) fn guide_list() -> Value {
    json!([
        { "id": "g1", "destinationId": "1", "category": "food", "difficulty": "expert", "imageCount": 1 },
        { "id": "g2", "destinationId": "1", "category": "sunset", "difficulty": "easy", "imageCount": 8 },
        { "id": "g3", "destinationId": "2", "category": "architectural", "difficulty": "easy", "imageCount": 2 }
    ])
}

/// An optimisation request for a group of three.
pub(super) fn optimize_request() -> Value {
    json!({
        "destinationId": "1",
        "participants": [
            { "lat": 27.1738, "lng": 78.0421 },
            { "lat": 27.1745, "lng": 78.0430 },
            { "lat": 27.1760, "lng": 78.0410 }
        ]
    })
}
