//! Sample backend payloads

use serde_json::{json, Value};

pub const MEMBER_TOKEN: &str = "member-token-123";
pub const TRAINER_TOKEN: &str = "trainer-token-456";
pub const ADMIN_TOKEN: &str = "admin-token-789";

pub fn member_login_response() -> Value {
    json!({
        "message": "Login successful",
        "token": MEMBER_TOKEN,
        "user": {"id": 7, "name": "Jordan Lee", "email": "jordan@apex.fit"}
    })
}

pub fn trainer_login_response() -> Value {
    json!({
        "token": TRAINER_TOKEN,
        "trainer": {"id": 16, "name": "Sam Carter"}
    })
}

pub fn member_dashboard() -> Value {
    json!({
        "message": "Dashboard fetched",
        "data": {
            "name": "Jordan Lee",
            "plan": {"name": "Gold", "type": "monthly", "expiry_date": "2026-12-01"}
        }
    })
}

pub fn assigned_trainer() -> Value {
    json!({
        "message": "Trainer fetched",
        "data": {
            "id": 16,
            "name": "Sam Carter",
            "trainer_profile": {"specialization": "Strength", "experience_years": 7}
        }
    })
}

pub fn no_trainer() -> Value {
    json!({"message": "No trainer assigned", "data": null})
}

pub fn workout_plan() -> Value {
    json!({
        "data": {
            "name": "Push Pull Legs",
            "days": {"monday": "Chest & Triceps", "tuesday": "Back & Biceps"}
        }
    })
}

pub fn trainer_dashboard() -> Value {
    json!({"totalMembers": 12, "activeSessions": 3, "upcomingSessions": 5, "performance": 92.5})
}

pub fn trainer_members() -> Value {
    json!([
        {"id": 1, "name": "Alex Kim", "email": "alex@apex.fit"},
        {"id": 2, "name": "Riley Park", "email": "riley@apex.fit"}
    ])
}
